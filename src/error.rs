use std::fmt;
use std::path::PathBuf;

/// Categorized failures that abort a comparison run.
///
/// Every variant is fatal: the pipeline never retries or skips a file. The
/// errors travel inside `anyhow::Error`, so callers that need the category
/// can `downcast_ref::<CompareError>()`.
#[derive(Debug)]
pub enum CompareError {
    /// A root directory does not exist
    PathNotFound(PathBuf),
    /// A root or one of its subdirectories could not be listed
    NotReadable {
        /// Directory that failed to list
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },
    /// An indexed file could not be read or decoded as UTF-8 text
    FileRead {
        /// File that failed to read
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },
    /// The diffs output area is missing or a diff file could not be written
    OutputWrite {
        /// Target of the failed write
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },
    /// The configuration file holds an unusable value
    InvalidConfig(String),
}

impl CompareError {
    /// Get a short description of the error type
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::PathNotFound(_) => "Path Not Found",
            Self::NotReadable { .. } => "Not Readable",
            Self::FileRead { .. } => "File Read Error",
            Self::OutputWrite { .. } => "Output Write Error",
            Self::InvalidConfig(_) => "Invalid Configuration",
        }
    }

    /// Path the error refers to, if any
    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::PathNotFound(path)
            | Self::NotReadable { path, .. }
            | Self::FileRead { path, .. }
            | Self::OutputWrite { path, .. } => Some(path),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathNotFound(path) => {
                write!(f, "{}: {} does not exist", self.error_type(), path.display())
            }
            Self::NotReadable { path, reason }
            | Self::FileRead { path, reason }
            | Self::OutputWrite { path, reason } => {
                write!(f, "{}: {} ({reason})", self.error_type(), path.display())
            }
            Self::InvalidConfig(reason) => write!(f, "{}: {reason}", self.error_type()),
        }
    }
}

impl std::error::Error for CompareError {}
