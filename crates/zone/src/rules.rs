//! Rule tables, transitions, and offset queries.

use crate::error::ZoneError;

/// A single offset change in a rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Epoch second at which the new offset takes effect.
    pub at: i64,
    /// UTC offset in seconds in force from `at` on, DST included.
    pub offset: i32,
    /// Whether daylight-saving time is active from `at` on.
    pub is_dst: bool,
}

/// The offset information in force at a queried epoch second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetInfo {
    /// UTC offset in seconds, DST included.
    pub offset: i32,
    /// Whether daylight-saving time is active.
    pub is_dst: bool,
    /// Epoch second of the transition that began this period, or `None`
    /// when the period precedes every transition in the table.
    pub since: Option<i64>,
}

/// A named timezone's rule data: an optional base offset and a
/// time-ordered transition list.
///
/// Built by callers from already-resolved data; nothing here parses or
/// loads a timezone database. Tables are cheap to share read-only (the
/// wall-clock layer wraps them in an `Arc`).
///
/// # Example
///
/// ```
/// use kairos_zone::TzRules;
///
/// let rules = TzRules::new("America/New_York").unwrap()
///     .with_base(-18000, false)
///     .with_transition(1678604400, -14400, true).unwrap();
///
/// assert_eq!(rules.offset_info(0).unwrap().offset, -18000);
/// assert_eq!(rules.offset_info(1678604400).unwrap().offset, -14400);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TzRules {
    name: String,
    base: Option<(i32, bool)>,
    transitions: Vec<Transition>,
}

impl TzRules {
    /// Creates an empty rule table for the named zone.
    ///
    /// An empty table answers `None` to every query; corrections that
    /// depend on rule data are skipped against such a zone.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::EmptyName`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ZoneError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ZoneError::EmptyName);
        }
        Ok(Self {
            name,
            base: None,
            transitions: Vec::new(),
        })
    }

    /// Creates a table holding a single fixed offset and no transitions.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::EmptyName`] if `name` is empty.
    pub fn fixed(name: impl Into<String>, offset: i32) -> Result<Self, ZoneError> {
        Ok(Self::new(name)?.with_base(offset, false))
    }

    /// Sets the offset in force before the first transition.
    pub fn with_base(mut self, offset: i32, is_dst: bool) -> Self {
        self.base = Some((offset, is_dst));
        self
    }

    /// Appends a transition to the table.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::UnorderedTransition`] if `at` is not strictly
    /// later than the last transition already in the table.
    pub fn with_transition(mut self, at: i64, offset: i32, is_dst: bool) -> Result<Self, ZoneError> {
        if let Some(last) = self.transitions.last() {
            if at <= last.at {
                return Err(ZoneError::UnorderedTransition { at, prev: last.at });
            }
        }
        self.transitions.push(Transition { at, offset, is_dst });
        Ok(self)
    }

    /// Returns the zone name. Zone identity is name equality.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true when the table holds no offset data at all.
    pub fn is_empty(&self) -> bool {
        self.base.is_none() && self.transitions.is_empty()
    }

    /// Returns the offset information in force at epoch second `at`.
    ///
    /// A transition applies from its own epoch second onward. Returns
    /// `None` when the table has no data covering `at` (no transitions at
    /// or before it and no base offset).
    pub fn offset_info(&self, at: i64) -> Option<OffsetInfo> {
        match self.transitions.partition_point(|t| t.at <= at) {
            0 => self.base.map(|(offset, is_dst)| OffsetInfo {
                offset,
                is_dst,
                since: None,
            }),
            n => {
                let t = self.transitions[n - 1];
                Some(OffsetInfo {
                    offset: t.offset,
                    is_dst: t.is_dst,
                    since: Some(t.at),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eastern_2023() -> TzRules {
        TzRules::new("America/New_York")
            .unwrap()
            .with_base(-18000, false)
            .with_transition(1678604400, -14400, true)
            .unwrap()
            .with_transition(1699164000, -18000, false)
            .unwrap()
    }

    #[test]
    fn empty_name_rejected() {
        assert_eq!(TzRules::new("").unwrap_err(), ZoneError::EmptyName);
        assert_eq!(TzRules::fixed("", 0).unwrap_err(), ZoneError::EmptyName);
    }

    #[test]
    fn unordered_transition_rejected() {
        let err = TzRules::new("X")
            .unwrap()
            .with_transition(100, 0, false)
            .unwrap()
            .with_transition(100, 3600, true)
            .unwrap_err();
        assert_eq!(err, ZoneError::UnorderedTransition { at: 100, prev: 100 });
    }

    #[test]
    fn empty_table_answers_none() {
        let rules = TzRules::new("Nowhere").unwrap();
        assert!(rules.is_empty());
        assert_eq!(rules.offset_info(0), None);
    }

    #[test]
    fn before_first_transition_uses_base() {
        let info = eastern_2023().offset_info(1678604399).unwrap();
        assert_eq!(info.offset, -18000);
        assert!(!info.is_dst);
        assert_eq!(info.since, None);
    }

    #[test]
    fn at_transition_instant_new_offset_applies() {
        let info = eastern_2023().offset_info(1678604400).unwrap();
        assert_eq!(info.offset, -14400);
        assert!(info.is_dst);
        assert_eq!(info.since, Some(1678604400));
    }

    #[test]
    fn between_transitions() {
        let info = eastern_2023().offset_info(1690000000).unwrap();
        assert_eq!(info.offset, -14400);
        assert_eq!(info.since, Some(1678604400));
    }

    #[test]
    fn after_last_transition() {
        let info = eastern_2023().offset_info(1700000000).unwrap();
        assert_eq!(info.offset, -18000);
        assert!(!info.is_dst);
        assert_eq!(info.since, Some(1699164000));
    }

    #[test]
    fn transitions_without_base_leave_early_period_uncovered() {
        let rules = TzRules::new("X")
            .unwrap()
            .with_transition(1000, 3600, false)
            .unwrap();
        assert_eq!(rules.offset_info(999), None);
        assert!(rules.offset_info(1000).is_some());
    }

    #[test]
    fn fixed_zone() {
        let rules = TzRules::fixed("UTC+2", 7200).unwrap();
        let info = rules.offset_info(123456789).unwrap();
        assert_eq!(info.offset, 7200);
        assert!(!info.is_dst);
        assert_eq!(info.since, None);
    }
}
