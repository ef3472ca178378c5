//! Error handling for Moodlet
//!
//! The editor core itself never fails: pointer handlers and panel edits
//! degrade to no-ops. Errors only appear where outside data enters the
//! editor: text typed into panel fields and restored snapshots. File I/O is
//! reported by the callers that own the files.

use thiserror::Error;

/// Floorplan error type
///
/// Represents rejected input at the edges of the editor: text typed into a
/// numeric panel field, or a snapshot whose entities do not line up.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FloorplanError {
    /// A length typed into a panel field could not be used
    #[error("Invalid length '{input}': {reason}")]
    InvalidLength {
        /// The raw text that was entered.
        input: String,
        /// Why the text was rejected.
        reason: String,
    },

    /// Two entities in a snapshot share an id
    #[error("Duplicate entity id {id}")]
    DuplicateId {
        /// The repeated id.
        id: u64,
    },

    /// Snapshot content is unusable
    #[error("Invalid snapshot: {reason}")]
    InvalidSnapshot {
        /// What is wrong with the snapshot.
        reason: String,
    },
}
