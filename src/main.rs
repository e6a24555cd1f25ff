//! `wings` asset host: serves the static directory the orbit controls
//! demo page lives in.

use std::path::PathBuf;

use wings::options::Options;
use wings::server::AssetHost;
use wings::WingsError;

/// Command line; flags override values from `--config`.
#[derive(clap::Parser)]
#[clap(name = "wings", about = "Serve the static asset directory")]
struct Cli {
    /// TOML options file.
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// Interface to bind.
    #[clap(long)]
    host: Option<String>,
    /// Port to listen on.
    #[clap(short, long)]
    port: Option<u16>,
    /// Directory to serve.
    #[clap(short, long)]
    root: Option<PathBuf>,
}

impl Cli {
    fn options(self) -> Result<Options, WingsError> {
        let mut options = match &self.config {
            Some(path) => Options::load(path)?,
            None => Options::default(),
        };
        if let Some(host) = self.host {
            options.server.host = host;
        }
        if let Some(port) = self.port {
            options.server.port = port;
        }
        if let Some(root) = self.root {
            options.server.root = root;
        }
        Ok(options)
    }
}

fn run(cli: Cli) -> Result<(), WingsError> {
    let options = cli.options()?;
    let host = AssetHost::bind(&options.server)?;
    log::info!("serving {}", options.server.root.display());
    host.serve();
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let cli = <Cli as clap::Parser>::parse();
    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
