//! Turning a file reference into a location it can be fetched from.
//!
//! The hosted API serves files over HTTPS under
//! `{root}/file/{mode}{token}[/test]/{file_path}`. A self-hosted local server
//! returns absolute filesystem paths instead; those become `file://` URLs on
//! the API host.

use crate::context::DeploymentContext;
use crate::error::{Error, Result};
use crate::telegram::Telegram;
use crate::types::FileDescriptor;
use url::Url;

/// A file to resolve: an opaque id, or a descriptor from an earlier call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRef {
    Id(String),
    Descriptor(FileDescriptor),
}

impl From<&str> for FileRef {
    fn from(id: &str) -> Self {
        Self::Id(id.to_owned())
    }
}

impl From<String> for FileRef {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl From<FileDescriptor> for FileRef {
    fn from(file: FileDescriptor) -> Self {
        Self::Descriptor(file)
    }
}

/// Builds the download location of a descriptor that carries a path.
pub fn download_location(file: &FileDescriptor, context: &DeploymentContext) -> Result<Url> {
    let resolution = |reason: &str| Error::Resolution {
        file_id: file.file_id.clone(),
        reason: reason.to_string(),
    };
    let path = file
        .path()
        .ok_or_else(|| resolution("the API returned no file_path"))?;

    if path.starts_with('/') {
        // Only the host survives: credentials, port and the root's own path
        // have no meaning on a filesystem.
        let host = context
            .api_root
            .host_str()
            .ok_or_else(|| resolution("the API root has no host"))?;
        let base = format!("file://{host}/");
        let mut url = Url::parse(&base).map_err(|source| Error::InvalidUrl { url: base, source })?;
        url.set_path(path);
        return Ok(url);
    }

    let relative = format!("./file/{}/{path}", context.credentials_segment());
    context
        .api_root
        .join(&relative)
        .map_err(|source| Error::InvalidUrl {
            url: format!("{}{relative}", context.api_root),
            source,
        })
}

impl Telegram {
    /// Resolves a file to its download location.
    ///
    /// Ids and descriptors without a path are looked up with `getFile` first;
    /// nothing is cached, so every call performs its own lookup.
    pub async fn get_file_link(&self, file: impl Into<FileRef>) -> Result<Url> {
        let descriptor = match file.into() {
            FileRef::Descriptor(file) if file.path().is_some() => file,
            FileRef::Descriptor(file) => self.get_file(&file.file_id).await?,
            FileRef::Id(id) => self.get_file(&id).await?,
        };
        download_location(&descriptor, self.context())
    }
}
