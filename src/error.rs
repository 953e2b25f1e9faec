//! Error types for hyvadump
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! Only conditions that abort the run live here; broken component manifests
//! are reported as warnings and never become errors.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for hyvadump operations
#[derive(Error, Diagnostic, Debug)]
pub enum DumpError {
    #[error("app/etc/config.php not found (searched upward from {start})")]
    #[diagnostic(
        code(hyvadump::project::root_not_found),
        help("Run from within a Magento project directory, or pass --root <DIR>")
    )]
    RootNotFound { start: String },

    #[error("Failed to read module registry: {path}")]
    #[diagnostic(code(hyvadump::registry::read_failed))]
    RegistryReadFailed { path: String, reason: String },

    #[error("Failed to parse module registry {path}: {reason}")]
    #[diagnostic(
        code(hyvadump::registry::parse_failed),
        help("app/etc/config.php is generated by Magento; regenerate it with 'bin/magento setup:upgrade'")
    )]
    RegistryParseFailed { path: String, reason: String },

    #[error("Failed to render merged components: {reason}")]
    #[diagnostic(code(hyvadump::emit::render_failed))]
    EmitFailed { reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(hyvadump::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DumpError {
    fn from(err: std::io::Error) -> Self {
        DumpError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DumpError>;
