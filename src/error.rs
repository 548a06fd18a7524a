use thiserror::Error;
use tracing::{error, warn};

/// Error severity for UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,     // Blue - informational
    Warning,  // Yellow - recoverable
    Error,    // Red - operation failed
}

/// Domain-specific errors for Button Kit
#[derive(Error, Debug)]
pub enum UiKitError {
    #[error("Theme loading failed for '{path}': {source}")]
    ThemeLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Theme parsing failed for '{path}': {source}")]
    ThemeParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Window operation failed: {0}")]
    Window(String),
}

impl UiKitError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ThemeLoad { .. } => ErrorSeverity::Warning,
            Self::ThemeParse { .. } => ErrorSeverity::Warning,
            Self::Config(_) => ErrorSeverity::Warning,
            Self::Window(_) => ErrorSeverity::Error,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ThemeLoad { path, .. } => format!("Could not load theme from {}", path),
            Self::ThemeParse { path, .. } => format!("Could not parse theme at {}", path),
            Self::Config(msg) => format!("Configuration issue: {}", msg),
            Self::Window(msg) => msg.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, UiKitError>;

/// Extension trait for ergonomic error logging
pub trait NotifyResultExt<T> {
    fn log_err(self) -> Option<T>;
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> NotifyResultExt<T> for std::result::Result<T, E> {
    fn log_err(self) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                error!(error = ?e, "Operation failed");
                None
            }
        }
    }

    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(error = ?e, "Operation warning");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        let err = UiKitError::Config("missing field".into());
        assert_eq!(err.severity(), ErrorSeverity::Warning);

        let err = UiKitError::Window("open failed".into());
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_user_message_includes_path() {
        let err = UiKitError::ThemeLoad {
            path: "/tmp/theme.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.user_message().contains("/tmp/theme.json"));
    }

    #[test]
    fn test_log_err_maps_to_option() {
        let ok: std::result::Result<u32, String> = Ok(7);
        assert_eq!(ok.log_err(), Some(7));

        let err: std::result::Result<u32, String> = Err("boom".into());
        assert_eq!(err.log_err(), None);
    }
}
