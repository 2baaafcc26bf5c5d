//! Calendar difference between two instants.

use std::cmp::Ordering;

use tracing::debug;

use kairos_calendar::{decimal_hour, epoch_days_from_civil, SECS_PER_DAY, SECS_PER_HOUR, SECS_PER_MIN};

use crate::instant::{Instant, Zone};
use crate::interval::Interval;
use crate::normalize::rel_normalize;

/// Computes the elapsed calendar time between two instants.
///
/// The result's components are the absolute span; `invert` is set exactly
/// when the chronologically later instant was passed as `one`. Two
/// instants in the same named zone get the DST-aware path: their wall
/// clocks are compared directly and the result is corrected for any
/// offset transition between them. Any other pair is differenced on epoch
/// order, with the raw offsets folded into the seconds component.
///
/// Never fails: a named zone whose rule table lacks the data a correction
/// needs simply skips that correction.
pub fn diff(one: &Instant, two: &Instant) -> Interval {
    if same_named_zone(one, two) {
        return diff_same_zone(one, two);
    }

    let mut rt = Interval::default();
    let (one, two, inverted) = sort_old_to_new(one, two);
    rt.invert = inverted;

    rt.y = two.y - one.y;
    rt.m = two.m - one.m;
    rt.d = two.d - one.d;
    rt.h = two.h - one.h;
    if !one.zone.is_named() {
        rt.h += i64::from(one.dst);
    }
    if !two.zone.is_named() {
        rt.h -= i64::from(two.dst);
    }
    rt.i = two.i - one.i;
    rt.s = two.s - one.s - i64::from(two.z) + i64::from(one.z);
    rt.us = two.us - one.us;

    rt.days = Some(diff_days(one, two));

    rel_normalize(if rt.invert { one } else { two }, &mut rt);

    rt
}

/// Difference of two instants sharing one named zone.
fn diff_same_zone(one: &Instant, two: &Instant) -> Interval {
    let mut rt = Interval::default();
    let (one, two, inverted) = sort_old_to_new(one, two);
    rt.invert = inverted;

    // offset change between the two epoch positions
    let mut dst_corr = i64::from(two.z) - i64::from(one.z);
    let dst_h_corr = dst_corr / SECS_PER_HOUR;
    let dst_m_corr = dst_corr % SECS_PER_HOUR / SECS_PER_MIN;

    rt.y = two.y - one.y;
    rt.m = two.m - one.m;
    rt.d = two.d - one.d;
    rt.h = two.h - one.h;
    rt.i = two.i - one.i;
    rt.s = two.s - one.s;
    rt.us = two.us - one.us;

    rt.days = Some(diff_days(one, two));

    // Near a transition the calendar ordering and the epoch ordering can
    // disagree; rebuild h/i/s from the epoch delta and flip the direction.
    if two.sse < one.sse {
        let flipped = (rt.i * SECS_PER_MIN + rt.s - dst_corr).abs();
        rt.h = flipped / SECS_PER_HOUR;
        rt.i = (flipped - rt.h * SECS_PER_HOUR) / SECS_PER_MIN;
        rt.s = flipped % SECS_PER_MIN;
        rt.invert = !rt.invert;
        debug!("calendar and epoch ordering disagree; direction flipped");
    }

    rel_normalize(if rt.invert { one } else { two }, &mut rt);

    if one.dst && !two.dst {
        // Fall back: under a day of elapsed time the wall-clock delta
        // overcounts by the repeated hour.
        if two.zone.is_named() && two.sse - one.sse + dst_corr < SECS_PER_DAY {
            rt.h -= dst_h_corr;
            rt.i -= dst_m_corr;
            debug!(dst_h_corr, dst_m_corr, "fall-back correction applied");
        }
    } else if !one.dst && two.dst {
        // Spring forward: the wall-clock delta overcounts by the skipped
        // hour once the later instant sits past the transition.
        if let Zone::Named(rules) = &two.zone {
            if let Some(trans) = rules.offset_info(two.sse).and_then(|info| info.since) {
                if !(one.sse + SECS_PER_DAY > trans && one.sse + SECS_PER_DAY <= trans + dst_corr)
                    && two.sse >= trans
                    && (two.sse - one.sse + dst_corr) % SECS_PER_DAY > two.sse - trans
                {
                    rt.h -= dst_h_corr;
                    rt.i -= dst_m_corr;
                    debug!(dst_h_corr, dst_m_corr, "spring-forward correction applied");
                }
            }
        }
    } else if two.sse - one.sse >= SECS_PER_DAY {
        // Matching DST flags a day or more apart: a transition may still
        // sit inside the final partial day.
        if let Zone::Named(rules) = &two.zone {
            if let Some(info) = rules.offset_info(two.sse - i64::from(two.z)) {
                if let Some(trans) = info.since {
                    dst_corr = i64::from(one.z) - i64::from(info.offset);
                    if two.sse >= trans - dst_corr && two.sse < trans {
                        rt.d -= 1;
                        rt.h = 24;
                        debug!("transition inside the final day; reporting a 24-hour day");
                    }
                }
            }
        }
    }

    rt
}

/// Absolute day count between two instants.
///
/// In the same effective timezone this counts whole calendar days, backing
/// off by one when the later instant's time-of-day has not yet reached the
/// earlier one's (the final day is not complete). Across different
/// timezones it truncates the absolute epoch delta instead.
pub fn diff_days(one: &Instant, two: &Instant) -> i64 {
    if same_timezone(one, two) {
        let (earliest, latest) = if one.compare(two) == Ordering::Less {
            (one, two)
        } else {
            (two, one)
        };
        let earliest_time = decimal_hour(earliest.h, earliest.i, earliest.s, earliest.us);
        let latest_time = decimal_hour(latest.h, latest.i, latest.s, latest.us);

        let mut days = (epoch_days_from_civil(one.y, one.m, one.d)
            - epoch_days_from_civil(two.y, two.m, two.d))
        .abs();
        if latest_time < earliest_time && days > 0 {
            days -= 1;
        }
        days
    } else {
        (one.sse - two.sse).abs() / SECS_PER_DAY
    }
}

/// Orders a pair of instants chronologically.
///
/// Instants in the same named zone are ordered on their calendar fields;
/// any other pair on epoch seconds, then microseconds. The returned flag
/// is set when the pair was passed latest-first.
fn sort_old_to_new<'a>(
    one: &'a Instant,
    two: &'a Instant,
) -> (&'a Instant, &'a Instant, bool) {
    let swap = if same_named_zone(one, two) {
        (one.y, one.m, one.d, one.h, one.i, one.s, one.us)
            > (two.y, two.m, two.d, two.h, two.i, two.s, two.us)
    } else {
        (one.sse, one.us) > (two.sse, two.us)
    };
    if swap {
        (two, one, true)
    } else {
        (one, two, false)
    }
}

fn same_named_zone(one: &Instant, two: &Instant) -> bool {
    match (&one.zone, &two.zone) {
        (Zone::Named(a), Zone::Named(b)) => a.name() == b.name(),
        _ => false,
    }
}

/// Returns true when both instants resolve offsets the same way: both
/// zoneless, both on the same fixed offset, or both in one named zone.
fn same_timezone(one: &Instant, two: &Instant) -> bool {
    match (&one.zone, &two.zone) {
        (Zone::Unspecified, Zone::Unspecified) => true,
        (Zone::UtcOffset, Zone::UtcOffset) => one.z == two.z,
        (Zone::Named(a), Zone::Named(b)) => a.name() == b.name(),
        _ => false,
    }
}
