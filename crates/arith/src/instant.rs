//! Wall-clock instants with offset and zone identity.

use std::cmp::Ordering;
use std::sync::Arc;

use kairos_calendar::{days_in_month, epoch_days_from_civil, hms_to_seconds, SECS_PER_DAY, USECS_PER_SEC};
use kairos_zone::TzRules;

use crate::epoch::{recompute_epoch, resnap, Shift};
use crate::error::ArithError;
use crate::interval::Interval;

/// How an instant's UTC offset is determined.
#[derive(Debug, Clone)]
pub enum Zone {
    /// No zone information; the calendar fields are read as UTC.
    Unspecified,
    /// A fixed numeric offset held in the instant's `z` field, with the
    /// `dst` flag contributing a further hour when set.
    UtcOffset,
    /// A named zone whose offset and DST flag come from a rule table.
    /// Offsets from the table include any DST shift.
    Named(Arc<TzRules>),
}

impl Zone {
    /// Returns the rule table when this is a named zone.
    pub fn rules(&self) -> Option<&Arc<TzRules>> {
        match self {
            Zone::Named(rules) => Some(rules),
            _ => None,
        }
    }

    /// Returns true for [`Zone::Named`].
    pub fn is_named(&self) -> bool {
        matches!(self, Zone::Named(_))
    }
}

/// A fully-resolved point in time: calendar fields, UTC offset, DST flag,
/// zone identity, and the epoch-second value derived from them.
///
/// Fields are public. Callers that edit calendar fields directly must call
/// [`Instant::resync_epoch`] afterwards to keep `sse` consistent; the
/// operations in this crate always return instants with the two in sync.
///
/// Cloning is a deep copy of the value state; a named zone's rule table is
/// shared read-only behind its `Arc`.
#[derive(Debug, Clone)]
pub struct Instant {
    /// Year (proleptic Gregorian; zero and negative years are valid).
    pub y: i64,
    /// Month (1..=12 when well-formed).
    pub m: i64,
    /// Day of month.
    pub d: i64,
    /// Hour of day.
    pub h: i64,
    /// Minute.
    pub i: i64,
    /// Second.
    pub s: i64,
    /// Microsecond (0..=999999 when well-formed). Not part of `sse`.
    pub us: i64,
    /// UTC offset in seconds. Includes the DST shift for named zones;
    /// excludes it for fixed-offset instants (see [`Zone`]).
    pub z: i32,
    /// Whether daylight-saving time is active.
    pub dst: bool,
    /// How the offset is determined.
    pub zone: Zone,
    /// Seconds since the Unix epoch, derived from the fields above.
    pub sse: i64,
    /// Interval awaiting an external relative-date resolver. Set by the
    /// shift operations for weekday- and special-relative intervals and
    /// consumed by that resolver; `None` otherwise.
    pub pending: Option<Interval>,
}

impl Instant {
    /// Creates an instant with no zone information from calendar fields.
    ///
    /// The epoch value is computed immediately; use the builder methods to
    /// attach an offset or a zone.
    ///
    /// # Errors
    ///
    /// Returns an [`ArithError`] variant naming the first out-of-range
    /// field.
    pub fn new(y: i64, m: i64, d: i64, h: i64, i: i64, s: i64, us: i64) -> Result<Self, ArithError> {
        if !(1..=12).contains(&m) {
            return Err(ArithError::InvalidMonth { month: m });
        }
        let max_day = days_in_month(y, m);
        if !(1..=max_day).contains(&d) {
            return Err(ArithError::InvalidDay {
                day: d,
                month: m,
                max_day,
            });
        }
        if !(0..24).contains(&h) {
            return Err(ArithError::InvalidHour { hour: h });
        }
        if !(0..60).contains(&i) {
            return Err(ArithError::InvalidMinute { minute: i });
        }
        if !(0..60).contains(&s) {
            return Err(ArithError::InvalidSecond { second: s });
        }
        if !(0..USECS_PER_SEC).contains(&us) {
            return Err(ArithError::InvalidMicrosecond { microsecond: us });
        }

        let mut t = Self {
            y,
            m,
            d,
            h,
            i,
            s,
            us,
            z: 0,
            dst: false,
            zone: Zone::Unspecified,
            sse: 0,
            pending: None,
        };
        t.sse = t.local_seconds();
        Ok(t)
    }

    /// Attaches a fixed UTC offset (seconds) and recomputes the epoch value.
    pub fn at_offset(mut self, z: i32) -> Self {
        self.zone = Zone::UtcOffset;
        self.z = z;
        self.resync_epoch();
        self
    }

    /// Sets the DST flag and recomputes the epoch value.
    pub fn with_dst(mut self, dst: bool) -> Self {
        self.dst = dst;
        self.resync_epoch();
        self
    }

    /// Attaches a named zone, resolving the wall-clock fields against its
    /// rules to fix the epoch value, offset, and DST flag.
    pub fn in_zone(mut self, rules: Arc<TzRules>) -> Self {
        self.zone = Zone::Named(rules);
        self.resync_epoch();
        resnap(&mut self);
        self
    }

    /// Attaches a named zone together with an already-resolved offset and
    /// DST flag, taking them at face value.
    ///
    /// This is the entry point for callers that have resolved the local
    /// time themselves (for example to pick a specific occurrence of an
    /// ambiguous fall-back reading).
    pub fn in_zone_resolved(mut self, rules: Arc<TzRules>, z: i32, dst: bool) -> Self {
        self.zone = Zone::Named(rules);
        self.z = z;
        self.dst = dst;
        self.sse = self.local_seconds() - i64::from(z);
        self
    }

    /// Recomputes `sse` from the calendar fields and the zone.
    ///
    /// Call after editing calendar fields directly.
    pub fn resync_epoch(&mut self) {
        recompute_epoch(self, Shift::default());
    }

    /// Orders two instants by absolute time: epoch seconds first, then
    /// microseconds.
    pub fn compare(&self, other: &Instant) -> Ordering {
        (self.sse, self.us).cmp(&(other.sse, other.us))
    }

    /// The calendar fields as seconds since the epoch, read as UTC.
    pub(crate) fn local_seconds(&self) -> i64 {
        epoch_days_from_civil(self.y, self.m, self.d) * SECS_PER_DAY
            + hms_to_seconds(self.h, self.i, self.s)
    }
}
