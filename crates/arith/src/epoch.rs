//! Epoch-second recomputation and calendar-field derivation.

use tracing::{debug, warn};

use kairos_calendar::{
    civil_from_epoch_days, epoch_days_from_civil, hms_to_seconds, SECS_PER_DAY, SECS_PER_HOUR,
    SECS_PER_MIN,
};
use kairos_zone::resolve_wall;

use crate::instant::{Instant, Zone};
use crate::interval::Interval;
use crate::normalize::normalize;

/// A signed field-wise adjustment applied during epoch recomputation.
///
/// This is the pending relative adjustment made explicit: the shift
/// operations build one from an interval and a bias and hand it in as an
/// argument instead of parking it on the instant behind a flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shift {
    /// Years.
    pub y: i64,
    /// Months.
    pub m: i64,
    /// Days.
    pub d: i64,
    /// Hours.
    pub h: i64,
    /// Minutes.
    pub i: i64,
    /// Seconds.
    pub s: i64,
    /// Microseconds.
    pub us: i64,
}

impl Shift {
    /// Builds a shift from an interval's components scaled by `bias`.
    pub fn scaled(interval: &Interval, bias: i64) -> Self {
        Self {
            y: interval.y * bias,
            m: interval.m * bias,
            d: interval.d * bias,
            h: interval.h * bias,
            i: interval.i * bias,
            s: interval.s * bias,
            us: interval.us * bias,
        }
    }

    /// Like [`Shift::scaled`], keeping only the date components.
    pub fn date_only(interval: &Interval, bias: i64) -> Self {
        Self {
            y: interval.y * bias,
            m: interval.m * bias,
            d: interval.d * bias,
            ..Self::default()
        }
    }

    /// Returns true when every component is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Applies `shift` to the calendar fields and recomputes `sse` from them.
///
/// The fields are normalized, shifted, normalized again, and the resulting
/// wall-clock reading is resolved to an epoch second according to the
/// zone: as-is for unspecified zones, minus the fixed offset (and DST
/// hour) for fixed-offset instants, and through the rule table for named
/// zones. A named zone without usable rule data falls back to the
/// instant's cached offset.
pub fn recompute_epoch(t: &mut Instant, shift: Shift) {
    normalize(t);
    t.us += shift.us;
    t.s += shift.s;
    t.i += shift.i;
    t.h += shift.h;
    t.d += shift.d;
    t.m += shift.m;
    t.y += shift.y;
    normalize(t);

    let local = epoch_days_from_civil(t.y, t.m, t.d) * SECS_PER_DAY + hms_to_seconds(t.h, t.i, t.s);
    t.sse = match &t.zone {
        Zone::Unspecified => local,
        Zone::UtcOffset => local - i64::from(t.z) - dst_seconds(t.dst),
        Zone::Named(rules) => match resolve_wall(local, rules) {
            Some(sse) => sse,
            None => {
                warn!(
                    zone = rules.name(),
                    "no rule data; resolving with the cached offset"
                );
                local - i64::from(t.z)
            }
        },
    };
}

/// Re-derives the calendar fields from `sse`.
///
/// For named zones the offset and DST flag are re-read from the rule table
/// first (falling back to the cached offset when the table has no data);
/// the microsecond field is not part of `sse` and is left alone.
pub fn derive_fields(t: &mut Instant) {
    let offset = match &t.zone {
        Zone::Unspecified => 0,
        Zone::UtcOffset => i64::from(t.z) + dst_seconds(t.dst),
        Zone::Named(rules) => match rules.offset_info(t.sse) {
            Some(info) => {
                t.z = info.offset;
                t.dst = info.is_dst;
                i64::from(info.offset)
            }
            None => {
                warn!(
                    zone = rules.name(),
                    "no rule data; deriving with the cached offset"
                );
                i64::from(t.z)
            }
        },
    };

    let local = t.sse + offset;
    let days = local.div_euclid(SECS_PER_DAY);
    let sod = local.rem_euclid(SECS_PER_DAY);

    let (y, m, d) = civil_from_epoch_days(days);
    t.y = y;
    t.m = m;
    t.d = d;
    t.h = sod / SECS_PER_HOUR;
    t.i = sod % SECS_PER_HOUR / SECS_PER_MIN;
    t.s = sod % SECS_PER_MIN;
}

/// Re-snaps a named-zone instant's offset and DST flag to its rules at the
/// current `sse`.
///
/// Fixed-offset and unspecified instants are left untouched, as is a named
/// instant whose table has no data for the current epoch second.
pub fn resnap(t: &mut Instant) {
    let Zone::Named(rules) = &t.zone else { return };
    match rules.offset_info(t.sse) {
        Some(info) => {
            t.z = info.offset;
            t.dst = info.is_dst;
        }
        None => debug!(zone = rules.name(), "no rule data; offset left as-is"),
    }
}

fn dst_seconds(dst: bool) -> i64 {
    if dst {
        SECS_PER_HOUR
    } else {
        0
    }
}
