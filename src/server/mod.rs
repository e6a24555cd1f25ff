//! Minimal static asset host.
//!
//! Binds one listener and serves files beneath a root directory by request
//! path. HTTP parsing and framing come from `tiny_http`; MIME types from
//! `mime_guess`. There are no routes beyond the file tree.

mod files;

use std::net::SocketAddr;
use std::sync::Arc;
use std::thread::JoinHandle;

pub use files::{content_type, Resolved, StaticFiles};
use tiny_http::{Header, Method, Request, Response, ResponseBox, Server};

use crate::error::WingsError;
use crate::options::ServerOptions;

/// A bound static file server.
pub struct AssetHost {
    server: Arc<Server>,
    files: StaticFiles,
}

impl AssetHost {
    /// Bind the listener described by `options`.
    ///
    /// # Errors
    ///
    /// Returns [`WingsError::Bind`] if the address cannot be bound.
    pub fn bind(options: &ServerOptions) -> Result<Self, WingsError> {
        log::info!("Starting listening on port {}", options.port);
        let server = Server::http(options.address())
            .map_err(|e| WingsError::Bind(e.to_string()))?;
        log::info!("Server started!");

        Ok(Self {
            server: Arc::new(server),
            files: StaticFiles::new(&options.root),
        })
    }

    /// Address actually bound (useful with port 0).
    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serve requests on the calling thread until the server is unblocked.
    pub fn serve(&self) {
        for request in self.server.incoming_requests() {
            self.handle(request);
        }
    }

    /// Serve requests on a background thread.
    ///
    /// # Errors
    ///
    /// Returns [`WingsError::Io`] if the thread fails to spawn.
    pub fn spawn(self) -> Result<RunningHost, WingsError> {
        let server = Arc::clone(&self.server);
        let addr = self.local_addr();
        let thread = std::thread::Builder::new()
            .name("asset-host".into())
            .spawn(move || self.serve())?;

        Ok(RunningHost {
            server,
            addr,
            thread: Some(thread),
        })
    }

    fn handle(&self, request: Request) {
        let method = request.method().clone();
        let url = request.url().to_owned();
        let response = self.respond_to(&method, &url);
        log::debug!("{method} {url} -> {}", response.status_code().0);

        if let Err(e) = request.respond(response) {
            log::warn!("failed to answer {method} {url}: {e}");
        }
    }

    fn respond_to(&self, method: &Method, url: &str) -> ResponseBox {
        if !matches!(method, Method::Get | Method::Head) {
            return not_found(method, url);
        }

        match self.files.resolve(url) {
            Resolved::File(path) => match std::fs::File::open(&path) {
                Ok(file) => with_header(
                    Response::from_file(file).boxed(),
                    "Content-Type",
                    &content_type(&path),
                ),
                Err(e) => {
                    log::warn!("failed to open {}: {e}", path.display());
                    not_found(method, url)
                }
            },
            Resolved::Redirect(location) => {
                with_header(Response::empty(301_u16).boxed(), "Location", &location)
            }
            Resolved::NotFound => not_found(method, url),
        }
    }
}

fn with_header(response: ResponseBox, name: &str, value: &str) -> ResponseBox {
    match Header::from_bytes(name.as_bytes(), value.as_bytes()) {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}

fn not_found(method: &Method, url: &str) -> ResponseBox {
    let body = format!("Cannot {method} {url}");
    with_header(
        Response::from_string(body).with_status_code(404_u16).boxed(),
        "Content-Type",
        "text/plain; charset=utf-8",
    )
}

/// Handle to an [`AssetHost`] serving on a background thread. Dropping it
/// stops the server.
pub struct RunningHost {
    server: Arc<Server>,
    addr: Option<SocketAddr>,
    thread: Option<JoinHandle<()>>,
}

impl RunningHost {
    /// Address the host is listening on.
    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.addr
    }

    /// Stop accepting requests and wait for the serving thread.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.thread.take() {
            self.server.unblock();
            let _ = handle.join();
        }
    }
}

impl Drop for RunningHost {
    fn drop(&mut self) {
        self.shutdown();
    }
}
