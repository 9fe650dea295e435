//! Unified error types surfaced by the runtime API.
//!
//! Wraps scan and repository failures so hosts can bubble them up with
//! consistent context. None of these are fatal; the worst outcome is an empty
//! tracker until the next successful scan.
use thiserror::Error;
use tracker_core::{ErrorSeverity, ScanError, TrackerError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("tracker requires an announcer to be configured before building")]
    MissingAnnouncer,

    #[error("tracker requires a pathfinder to be configured before building")]
    MissingPathfinder,

    #[error("radar is enabled but no cue sink was configured")]
    MissingCueSink,

    #[error("location scan failed")]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl TrackerError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingAnnouncer | Self::MissingPathfinder | Self::MissingCueSink => {
                ErrorSeverity::Validation
            }
            Self::Scan(err) => err.severity(),
            Self::Repository(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingAnnouncer => "RUNTIME_MISSING_ANNOUNCER",
            Self::MissingPathfinder => "RUNTIME_MISSING_PATHFINDER",
            Self::MissingCueSink => "RUNTIME_MISSING_CUE_SINK",
            Self::Scan(err) => err.error_code(),
            Self::Repository(_) => "RUNTIME_REPOSITORY",
        }
    }
}
