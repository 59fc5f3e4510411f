//! src/prerender.rs
//!
//! Static pre-rendering: splice the rendered app markup into the built
//! template's root container, in place. String-level on purpose; the
//! template is our own build output, not arbitrary input.
use std::fs;
use std::path::{Path, PathBuf};

/// The empty root container the client bundle would normally mount into.
pub const ROOT_MARKER: &str = r#"<div id="root"></div>"#;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to read the document at {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write the document at {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Replace the first occurrence of [`ROOT_MARKER`] with the same element
/// wrapping `app_markup`. The markup flows through verbatim: no escaping and
/// no validation. A template without the marker comes back unchanged.
pub fn splice(template: &str, app_markup: &str) -> String {
    let filled = format!(r#"<div id="root">{app_markup}</div>"#);
    template.replacen(ROOT_MARKER, &filled, 1)
}

/// Read the template at `document`, splice in the markup produced by
/// `render`, and write the result back to the same path.
pub fn run<F>(document: &Path, render: F) -> Result<(), Error>
where
    F: FnOnce() -> String,
{
    let app_markup = render();
    run_with(document, |template| splice(template, &app_markup))
}

/// Rewrite the document at `document` through an arbitrary transformation of
/// its full text, for callers that stack further passes (such as metadata
/// synchronization) onto the splice within the one read and write.
pub fn run_with<F>(document: &Path, rewrite: F) -> Result<(), Error>
where
    F: FnOnce(&str) -> String,
{
    let template = fs::read_to_string(document).map_err(|source| Error::Read {
        path: document.to_path_buf(),
        source,
    })?;
    let page = rewrite(&template);
    fs::write(document, page).map_err(|source| Error::Write {
        path: document.to_path_buf(),
        source,
    })?;
    Ok(())
}
