use serde::Serialize;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Stable, user-facing classification of every error prism surfaces.
///
/// Callers map these codes to their own messages; the set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ThemeNotFound,
    ThemeNameTaken,
    ThemeReadonly,
    ValidationError,
    PermissionError,
    ResourceExhausted,
    Conflict,
    CorruptedState,
    IoError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThemeNotFound => "THEME_NOT_FOUND",
            Self::ThemeNameTaken => "THEME_NAME_TAKEN",
            Self::ThemeReadonly => "THEME_READONLY",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::PermissionError => "PERMISSION_ERROR",
            Self::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Self::Conflict => "CONFLICT",
            Self::CorruptedState => "CORRUPTED_STATE",
            Self::IoError => "IO_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A palette or theme definition that cannot be compiled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing color slot `{0}`")]
    MissingSlot(String),

    #[error("color slot `{slot}` has unrecognized value {value:?}")]
    InvalidColor { slot: &'static str, value: String },

    #[error("invalid theme name {0:?}: use 1-64 lowercase letters, digits, '-' or '_'")]
    InvalidName(String),

    #[error("malformed theme definition: {0}")]
    Malformed(String),
}

impl ValidationError {
    /// The palette slot this error points at, if it is about a single slot.
    pub fn slot(&self) -> Option<&str> {
        match self {
            Self::MissingSlot(slot) => Some(slot),
            Self::InvalidColor { slot, .. } => Some(slot),
            Self::InvalidName(_) | Self::Malformed(_) => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("theme '{0}' not found")]
    NotFound(String),

    #[error("a theme named '{0}' already exists")]
    NameTaken(String),

    #[error("theme '{0}' is bundled and cannot be modified")]
    ReadOnly(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("permission denied at {}: {source}", path.display())]
    Permission {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("out of space or quota writing {}: {source}", path.display())]
    ResourceExhausted {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("conflicting filesystem object at {}: {reason}", path.display())]
    Conflict { path: PathBuf, reason: String },

    #[error("corrupted state file {}: {reason}", path.display())]
    CorruptedState { path: PathBuf, reason: String },

    #[error("i/o error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ThemeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound(_) => ErrorCode::ThemeNotFound,
            Self::NameTaken(_) => ErrorCode::ThemeNameTaken,
            Self::ReadOnly(_) => ErrorCode::ThemeReadonly,
            Self::Validation(_) => ErrorCode::ValidationError,
            Self::Permission { .. } => ErrorCode::PermissionError,
            Self::ResourceExhausted { .. } => ErrorCode::ResourceExhausted,
            Self::Conflict { .. } => ErrorCode::Conflict,
            Self::CorruptedState { .. } => ErrorCode::CorruptedState,
            Self::Io { .. } => ErrorCode::IoError,
        }
    }

    /// The filesystem path involved, for errors that have one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Permission { path, .. }
            | Self::ResourceExhausted { path, .. }
            | Self::Conflict { path, .. }
            | Self::CorruptedState { path, .. }
            | Self::Io { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Classify an OS error raised while operating on `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
                Self::Permission { path, source }
            }
            io::ErrorKind::StorageFull
            | io::ErrorKind::QuotaExceeded
            | io::ErrorKind::FileTooLarge
            | io::ErrorKind::OutOfMemory => Self::ResourceExhausted { path, source },
            // EXDEV: the layout blocks the link.
            io::ErrorKind::AlreadyExists
            | io::ErrorKind::IsADirectory
            | io::ErrorKind::NotADirectory
            | io::ErrorKind::DirectoryNotEmpty
            | io::ErrorKind::CrossesDevices
            | io::ErrorKind::ResourceBusy => Self::Conflict {
                path,
                reason: source.to_string(),
            },
            _ if is_quota_error(&source) => Self::ResourceExhausted { path, source },
            _ => Self::Io { path, source },
        }
    }
}

#[cfg(target_os = "linux")]
fn is_quota_error(err: &io::Error) -> bool {
    // EDQUOT
    err.raw_os_error() == Some(122)
}

#[cfg(target_os = "macos")]
fn is_quota_error(err: &io::Error) -> bool {
    err.raw_os_error() == Some(69)
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn is_quota_error(_err: &io::Error) -> bool {
    false
}

/// Extension for attaching a path to `io::Result`s and classifying them.
pub trait IoResultExt<T> {
    fn at_path(self, path: impl Into<PathBuf>) -> Result<T, ThemeError>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn at_path(self, path: impl Into<PathBuf>) -> Result<T, ThemeError> {
        self.map_err(|e| ThemeError::from_io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err = ValidationError::MissingSlot("brightRed".into());
        assert_eq!(err.to_string(), "missing color slot `brightRed`");

        let err = ValidationError::InvalidColor {
            slot: "cursor",
            value: "#zzz".into(),
        };
        assert_eq!(
            err.to_string(),
            "color slot `cursor` has unrecognized value \"#zzz\""
        );
    }

    #[test]
    fn validation_error_reports_slot() {
        assert_eq!(
            ValidationError::MissingSlot("accent".into()).slot(),
            Some("accent")
        );
        assert_eq!(ValidationError::InvalidName("A B".into()).slot(), None);
    }

    #[test]
    fn theme_error_codes() {
        assert_eq!(
            ThemeError::NotFound("x".into()).code(),
            ErrorCode::ThemeNotFound
        );
        assert_eq!(
            ThemeError::NameTaken("x".into()).code(),
            ErrorCode::ThemeNameTaken
        );
        assert_eq!(
            ThemeError::ReadOnly("x".into()).code(),
            ErrorCode::ThemeReadonly
        );
        let err: ThemeError = ValidationError::Malformed("bad".into()).into();
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }

    #[test]
    fn from_io_classifies_permission_denied() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        let err = ThemeError::from_io("/tmp/prism/current", io_err);
        assert_eq!(err.code(), ErrorCode::PermissionError);
        assert_eq!(
            err.path(),
            Some(std::path::Path::new("/tmp/prism/current"))
        );
        assert!(err.to_string().contains("/tmp/prism/current"));
    }

    #[test]
    fn from_io_classifies_storage_full() {
        let io_err = io::Error::new(io::ErrorKind::StorageFull, "disk full");
        let err = ThemeError::from_io("/tmp/x", io_err);
        assert_eq!(err.code(), ErrorCode::ResourceExhausted);
    }

    #[test]
    fn from_io_classifies_conflicts() {
        for kind in [io::ErrorKind::AlreadyExists, io::ErrorKind::IsADirectory] {
            let err = ThemeError::from_io("/tmp/x", io::Error::new(kind, "in the way"));
            assert_eq!(err.code(), ErrorCode::Conflict);
        }
    }

    #[test]
    fn from_io_classifies_cross_device_link_as_conflict() {
        let io_err = io::Error::new(io::ErrorKind::CrossesDevices, "invalid cross-device link");
        let err = ThemeError::from_io("/tmp/prism/current", io_err);
        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(
            err.path(),
            Some(std::path::Path::new("/tmp/prism/current"))
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn from_io_classifies_raw_exdev_and_edquot() {
        // EXDEV, EDQUOT
        let err = ThemeError::from_io("/tmp/x", io::Error::from_raw_os_error(18));
        assert_eq!(err.code(), ErrorCode::Conflict);
        let err = ThemeError::from_io("/tmp/x", io::Error::from_raw_os_error(122));
        assert_eq!(err.code(), ErrorCode::ResourceExhausted);
    }

    #[test]
    fn from_io_falls_back_to_io_error() {
        let err = ThemeError::from_io("/tmp/x", io::Error::other("weird"));
        assert_eq!(err.code(), ErrorCode::IoError);
    }

    #[test]
    fn at_path_attaches_path() {
        let res: io::Result<()> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = res.at_path("/tmp/missing").unwrap_err();
        assert_eq!(err.path(), Some(std::path::Path::new("/tmp/missing")));
    }

    #[test]
    fn error_code_serializes_screaming_snake() {
        let json = serde_json::to_string(&ErrorCode::ThemeNameTaken).unwrap();
        assert_eq!(json, "\"THEME_NAME_TAKEN\"");
        assert_eq!(ErrorCode::CorruptedState.to_string(), "CORRUPTED_STATE");
    }
}
