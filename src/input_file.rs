use crate::request::{Attach, Request};
use serde_json::Value;
use std::path::PathBuf;
use url::Url;

/// File content that has to be uploaded with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalFile {
    Path(PathBuf),
    Memory { data: Vec<u8>, file_name: String },
}

impl LocalFile {
    /// Name reported in the multipart part.
    pub fn file_name(&self) -> String {
        match self {
            Self::Path(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "file".to_string()),
            Self::Memory { file_name, .. } => file_name.clone(),
        }
    }
}

/// Any way of handing a file to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFile {
    /// A file already stored on the Telegram servers.
    FileId(String),
    /// A URL the API server fetches itself.
    Url(Url),
    Upload(LocalFile),
}

impl InputFile {
    pub fn file_id(id: impl Into<String>) -> Self {
        Self::FileId(id.into())
    }

    pub fn url(url: Url) -> Self {
        Self::Url(url)
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Upload(LocalFile::Path(path.into()))
    }

    pub fn memory(data: impl Into<Vec<u8>>, file_name: impl Into<String>) -> Self {
        Self::Upload(LocalFile::Memory {
            data: data.into(),
            file_name: file_name.into(),
        })
    }
}

impl Attach for InputFile {
    fn attach(self, request: &mut Request) -> Value {
        match self {
            Self::FileId(id) => Value::String(id),
            Self::Url(url) => Value::String(url.into()),
            Self::Upload(local) => Value::String(request.attach_upload(local)),
        }
    }
}

/// Video notes can't be sent by URL, so this type has no URL variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoNoteFile {
    FileId(String),
    Upload(LocalFile),
}

impl VideoNoteFile {
    pub fn file_id(id: impl Into<String>) -> Self {
        Self::FileId(id.into())
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Upload(LocalFile::Path(path.into()))
    }

    pub fn memory(data: impl Into<Vec<u8>>, file_name: impl Into<String>) -> Self {
        Self::Upload(LocalFile::Memory {
            data: data.into(),
            file_name: file_name.into(),
        })
    }
}

impl From<VideoNoteFile> for InputFile {
    fn from(file: VideoNoteFile) -> Self {
        match file {
            VideoNoteFile::FileId(id) => Self::FileId(id),
            VideoNoteFile::Upload(local) => Self::Upload(local),
        }
    }
}
