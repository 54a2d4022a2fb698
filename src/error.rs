//! Error types for the Shift Scheduling & Compensation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the engine and at the
//! persistence boundary.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Shift Scheduling & Compensation Engine.
///
/// Nothing in the scheduling or pay computations raises one of these:
/// malformed inputs are recovered with documented defaults and
/// unsatisfiable constraints become [`Conflict`](crate::models::Conflict)
/// records. Errors come only from configuration loading and from the
/// persistence boundary.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/scheduling.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/scheduling.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift assignment contained inconsistent data.
    #[error("Invalid shift for staff '{staff_id}': {message}")]
    InvalidShift {
        /// The staff member the shift belongs to.
        staff_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// The persistence collaborator rejected a save.
    #[error("Save rejected by store: {message}")]
    SaveRejected {
        /// The reason reported by the persistence collaborator.
        message: String,
    },

    /// A shift id was not found in the store.
    #[error("Shift not found: {shift_id}")]
    ShiftNotFound {
        /// The id that was not found.
        shift_id: Uuid,
    },

    /// An unknown store id was passed to the store.
    #[error("Store not found: {store_id}")]
    StoreNotFound {
        /// The store id that was not found.
        store_id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
