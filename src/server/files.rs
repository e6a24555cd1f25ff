use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

/// File served for a directory request.
const INDEX_FILE: &str = "index.html";

/// Outcome of mapping a request URL onto the static root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// Serve this file.
    File(PathBuf),
    /// The URL names a directory without a trailing slash; redirect to
    /// this location.
    Redirect(String),
    /// Nothing servable at this URL.
    NotFound,
}

/// Maps request paths to files beneath a fixed root directory.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    /// Serve files beneath `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory being served.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a request URL (path plus optional query) to a file.
    ///
    /// Query strings are ignored and `%XX` escapes decoded. `..` segments,
    /// dotfiles and anything that fails to decode resolve to
    /// [`Resolved::NotFound`].
    #[must_use]
    pub fn resolve(&self, url: &str) -> Resolved {
        let path = url.split(['?', '#']).next().unwrap_or_default();
        let Ok(decoded) = percent_decode_str(path).decode_utf8() else {
            return Resolved::NotFound;
        };

        let mut file = self.root.clone();
        for segment in decoded.split('/') {
            match segment {
                "" | "." => {}
                ".." => return Resolved::NotFound,
                s if s.starts_with('.') || s.contains(['\\', '\0']) => {
                    return Resolved::NotFound;
                }
                s => file.push(s),
            }
        }

        if file.is_dir() {
            if !decoded.ends_with('/') {
                return Resolved::Redirect(format!("{path}/"));
            }
            file.push(INDEX_FILE);
        }

        if file.is_file() {
            Resolved::File(file)
        } else {
            Resolved::NotFound
        }
    }
}

/// MIME type for a served file, `application/octet-stream` when unknown.
#[must_use]
pub fn content_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}
