//! Error types returned by fallible simulator operations.
//!
//! Only lookups and text parsing can fail recoverably. Malformed unitaries or
//! out-of-range qubit indices are programming errors and panic instead.

use thiserror::Error;

/// Errors produced while dispatching gates or parsing Pauli strings.
#[derive(Debug, Error)]
pub enum VecSimError {
    /// The requested gate name has no entry in the gate catalog.
    #[error("gate not found: {0:?}")]
    GateNotFound(String),

    /// A Pauli string contained a character other than a sign or `IXYZ_.`.
    #[error("invalid Pauli string {string:?}: unexpected {ch:?} at position {pos}")]
    PauliParse {
        /// The full input.
        string: String,
        /// The offending character.
        ch: char,
        /// Character position of `ch` in `string`.
        pos: usize,
    },
}

/// Result type for simulator operations.
pub type VecSimResult<T> = Result<T, VecSimError>;
