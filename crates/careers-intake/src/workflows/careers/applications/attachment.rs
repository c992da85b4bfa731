use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use mime::Mime;

/// Value for the file input's `accept` attribute.
pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.doc,.docx";
/// Hint rendered under the upload control.
pub const ADVISORY_LIMIT_LABEL: &str = "PDF, DOC, or DOCX (Max 5MB)";
pub const DEFAULT_MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;

const MSWORD: &str = "application/msword";
const WORD_OPENXML: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Document formats accepted at file selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Doc,
    Docx,
}

impl DocumentKind {
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, extension) = name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "doc" => Some(Self::Doc),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    pub fn mime(self) -> Mime {
        match self {
            Self::Pdf => mime::APPLICATION_PDF,
            Self::Doc => MSWORD.parse().unwrap_or(mime::APPLICATION_OCTET_STREAM),
            Self::Docx => WORD_OPENXML.parse().unwrap_or(mime::APPLICATION_OCTET_STREAM),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AttachmentError {
    #[error("'{name}' is not a PDF, DOC, or DOCX document")]
    UnsupportedType { name: String },
    #[error("'{}' has no file name", path.display())]
    MissingFileName { path: PathBuf },
    #[error("unable to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A user-selected document plus the label shown in the upload control.
#[derive(Clone, PartialEq, Eq)]
pub struct FileAttachment {
    name: String,
    kind: DocumentKind,
    content_type: Mime,
    bytes: Arc<[u8]>,
}

impl FileAttachment {
    /// Accept a selected document. Only the extension class is checked here;
    /// size is left to form validation.
    pub fn new(
        name: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Result<Self, AttachmentError> {
        let name = name.into();
        let kind = DocumentKind::from_file_name(&name)
            .ok_or_else(|| AttachmentError::UnsupportedType { name: name.clone() })?;

        Ok(Self {
            name,
            kind,
            content_type: kind.mime(),
            bytes: bytes.into(),
        })
    }

    /// Read a document from disk, as the CLI's file picker does.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, AttachmentError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| AttachmentError::MissingFileName {
                path: path.to_path_buf(),
            })?
            .to_string();

        if DocumentKind::from_file_name(&name).is_none() {
            return Err(AttachmentError::UnsupportedType { name });
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| AttachmentError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Self::new(name, bytes)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn content_type(&self) -> &Mime {
        &self.content_type
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for FileAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileAttachment")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Holds at most one selected document. Selecting again replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentPicker {
    current: Option<FileAttachment>,
}

impl AttachmentPicker {
    pub fn select(&mut self, file: FileAttachment) {
        tracing::debug!(file = %file.name(), size = file.size(), "attachment selected");
        self.current = Some(file);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&FileAttachment> {
        self.current.as_ref()
    }

    pub fn display_name(&self) -> &str {
        self.current.as_ref().map(FileAttachment::name).unwrap_or("")
    }

    pub fn has_file(&self) -> bool {
        self.current.is_some()
    }
}

/// Size ceiling for attachments. Advisory unless `enforced` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentLimit {
    pub max_bytes: u64,
    pub enforced: bool,
}

impl AttachmentLimit {
    pub fn advisory(max_bytes: u64) -> Self {
        Self {
            max_bytes,
            enforced: false,
        }
    }

    pub fn enforced(max_bytes: u64) -> Self {
        Self {
            max_bytes,
            enforced: true,
        }
    }

    pub fn exceeded_by(&self, file: &FileAttachment) -> bool {
        self.enforced && file.size() > self.max_bytes
    }
}

impl Default for AttachmentLimit {
    fn default() -> Self {
        Self::advisory(DEFAULT_MAX_ATTACHMENT_BYTES)
    }
}
