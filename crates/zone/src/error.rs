//! Error types for the kairos-zone crate.

/// Error type for rule-table construction.
///
/// Queries against a built table never fail with an error; a table without
/// usable data for a period simply answers `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZoneError {
    /// Returned when a rule table is given an empty zone name.
    #[error("timezone rules need a non-empty name")]
    EmptyName,

    /// Returned when a transition is not strictly later than the previous one.
    #[error("transition at {at} is not after the previous transition at {prev}")]
    UnorderedTransition {
        /// Epoch second of the offending transition.
        at: i64,
        /// Epoch second of the transition preceding it in the table.
        prev: i64,
    },
}
