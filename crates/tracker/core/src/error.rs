//! Common error infrastructure for tracker-core.
//!
//! Domain errors (`ScanError`, `SelectionError`, `CategorizeError`) live next to
//! the operations that raise them. This module only provides the shared
//! classification used by the runtime to decide how loudly to report them.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Nothing in the tracker is fatal to the host; the worst case is an empty
/// tracking list until the next successful scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Expected during normal use, e.g. cycling past the end of a list.
    ///
    /// Surfaced to the user as an announcement, never logged as a failure.
    Recoverable,

    /// Invalid input or stale pointer, e.g. a category that vanished.
    Validation,

    /// Unexpected failure inside a collaborator, e.g. the categorizer.
    ///
    /// These indicate bugs in the host integration and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is expected during normal use.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or broken collaborator.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all tracker-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait TrackerError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and test assertions.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
