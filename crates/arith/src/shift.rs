//! Interval application: absolute and wall-clock variants.

use kairos_calendar::{hms_to_seconds, USECS_PER_SEC};

use crate::epoch::{derive_fields, recompute_epoch, resnap, Shift};
use crate::instant::Instant;
use crate::interval::Interval;
use crate::normalize::{normalize, range_limit};

/// Returns `old_time` shifted forward by `interval`.
///
/// Every component is applied as a calendar-field delta and the result
/// re-resolved to an epoch second, so the elapsed real time across an
/// offset transition can differ from the nominal span. Weekday- and
/// special-relative intervals are not applied; they are copied onto the
/// result's `pending` slot for the external relative-date resolver.
pub fn add(old_time: &Instant, interval: &Interval) -> Instant {
    shift_calendar(old_time, interval, 1)
}

/// Returns `old_time` shifted backward by `interval` (see [`add`]).
pub fn sub(old_time: &Instant, interval: &Interval) -> Instant {
    shift_calendar(old_time, interval, -1)
}

/// Returns `old_time` shifted forward by `interval` with wall-clock
/// semantics.
///
/// Date components move the calendar (local clock readings are preserved
/// across a transition); hour/minute/second components move elapsed real
/// seconds; a microsecond component first carries whole seconds out of
/// the microsecond range and applies the remainder directly. Named zones
/// are re-snapped to their rules afterwards.
pub fn add_wall(old_time: &Instant, interval: &Interval) -> Instant {
    shift_wall(old_time, interval, 1)
}

/// Returns `old_time` shifted backward by `interval` with wall-clock
/// semantics (see [`add_wall`]).
pub fn sub_wall(old_time: &Instant, interval: &Interval) -> Instant {
    shift_wall(old_time, interval, -1)
}

fn shift_calendar(old_time: &Instant, interval: &Interval, dir: i64) -> Instant {
    let mut t = old_time.clone();

    if interval.requires_resolver() {
        t.pending = Some(interval.clone());
        return t;
    }
    t.pending = None;

    let bias = if interval.invert { -dir } else { dir };
    recompute_epoch(&mut t, Shift::scaled(interval, bias));
    derive_fields(&mut t);
    t
}

fn shift_wall(old_time: &Instant, interval: &Interval, dir: i64) -> Instant {
    let mut t = old_time.clone();

    if interval.requires_resolver() {
        t.pending = Some(interval.clone());
    } else {
        t.pending = None;
        let bias = if interval.invert { -dir } else { dir };

        let date = Shift::date_only(interval, bias);
        if !date.is_zero() {
            recompute_epoch(&mut t, date);
        }

        if interval.us == 0 {
            t.sse += bias * hms_to_seconds(interval.h, interval.i, interval.s);
            derive_fields(&mut t);
        } else {
            // carry whole seconds out of the microsecond component first
            let mut us = interval.us;
            let mut s = interval.s;
            range_limit(0, USECS_PER_SEC, USECS_PER_SEC, &mut us, &mut s);

            t.sse += bias * hms_to_seconds(interval.h, interval.i, s);
            derive_fields(&mut t);
            t.us += us * bias;

            normalize(&mut t);
            recompute_epoch(&mut t, Shift::default());
        }
        normalize(&mut t);
    }

    resnap(&mut t);
    t
}
