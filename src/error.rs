//! Crate-wide error taxonomy.
//!
//! Per §7 of the design: programmer errors are fatal and are surfaced to the
//! host as `Err` rather than panicking, transient no-ops (non-positive `dt`,
//! a disabled run flag) are intentional behavior and never produce an
//! `EngineError`, and boundary rules (out-of-bounds tiles behaving as
//! `FULL`) are silent by design.

/// Errors the engine can report. Every variant here corresponds to a
/// programmer error per §7 — invalid input that the engine cannot recover
/// from within the current call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// `World::add` was called with a category outside `1..=5`.
    #[error("invalid category: {category}")]
    InvalidCategory {
        /// The raw, out-of-range category value the caller supplied.
        category: u8,
    },

    /// A hitscan was issued with a `scanType` index outside `1..=5` (§4.4 —
    /// every [`crate::entity::Category`] is a valid scan type; this exists
    /// for callers driving `scanType` from outside the type system, e.g. a
    /// deserialized wire index, the same way [`EngineError::InvalidCategory`]
    /// guards `World::add`).
    #[error("invalid hitscan scan type: {index}")]
    InvalidScanType {
        /// The raw, out-of-range scan type index the caller supplied.
        index: u8,
    },
}

/// Convenience alias used throughout the crate.
pub type EngineResult<T> = Result<T, EngineError>;
