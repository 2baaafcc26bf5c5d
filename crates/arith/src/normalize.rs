//! Range-limit borrows for calendar fields and interval components.

use kairos_calendar::{days_in_month, days_in_year_starting, USECS_PER_SEC};

use crate::instant::Instant;
use crate::interval::Interval;

/// Folds `a` into `[start, end)`, carrying whole `adj`-sized units into `b`.
///
/// The carry count rounds toward negative readings: `a = -1` with
/// `[0, 60)` borrows exactly one unit from `b`.
pub fn range_limit(start: i64, end: i64, adj: i64, a: &mut i64, b: &mut i64) {
    if *a < start {
        *b -= (start - *a - 1) / adj + 1;
        *a += adj * ((start - *a - 1) / adj + 1);
    }
    if *a >= end {
        *b += *a / adj;
        *a -= adj * (*a / adj);
    }
}

/// Folds the day-of-month into range, one month per call.
///
/// Whole out-of-range years are skipped in single steps first so the
/// month walk stays short. Returns true while another pass is needed.
fn range_limit_days(y: &mut i64, m: &mut i64, d: &mut i64) -> bool {
    range_limit(1, 13, 12, m, y);

    loop {
        if *d > 0 {
            let span = days_in_year_starting(*y, *m);
            if *d > span {
                *d -= span;
                *y += 1;
                continue;
            }
        } else {
            let span = days_in_year_starting(*y - 1, *m);
            if *d + span <= 0 {
                *d += span;
                *y -= 1;
                continue;
            }
        }
        break;
    }

    if *d <= 0 {
        let (last_year, last_month) = if *m == 1 { (*y - 1, 12) } else { (*y, *m - 1) };
        *d += days_in_month(last_year, last_month);
        *m -= 1;
        return true;
    }
    let days_this_month = days_in_month(*y, *m);
    if *d > days_this_month {
        *d -= days_this_month;
        *m += 1;
        return true;
    }
    false
}

/// Canonicalizes an instant's calendar fields after arithmetic.
///
/// Borrows run from microseconds up through days, months fold into years,
/// and the day-of-month is folded against real month lengths.
pub fn normalize(t: &mut Instant) {
    range_limit(0, USECS_PER_SEC, USECS_PER_SEC, &mut t.us, &mut t.s);
    range_limit(0, 60, 60, &mut t.s, &mut t.i);
    range_limit(0, 60, 60, &mut t.i, &mut t.h);
    range_limit(0, 24, 24, &mut t.h, &mut t.d);
    range_limit(1, 13, 12, &mut t.m, &mut t.y);

    while range_limit_days(&mut t.y, &mut t.m, &mut t.d) {}
    range_limit(1, 13, 12, &mut t.m, &mut t.y);
}

/// Canonicalizes an interval against the calendar context of `base`.
///
/// Time components borrow as in [`normalize`], with interval months folded
/// into `[0, 12)`. A negative day component borrows real month lengths
/// from `base`: walking month-by-month backward from `base` for an upright
/// interval, forward from `base` for an inverted one. The difference
/// operation passes the later endpoint as `base` when upright and the
/// earlier one when inverted.
pub fn rel_normalize(base: &Instant, rt: &mut Interval) {
    range_limit(0, USECS_PER_SEC, USECS_PER_SEC, &mut rt.us, &mut rt.s);
    range_limit(0, 60, 60, &mut rt.s, &mut rt.i);
    range_limit(0, 60, 60, &mut rt.i, &mut rt.h);
    range_limit(0, 24, 24, &mut rt.h, &mut rt.d);
    range_limit(0, 12, 12, &mut rt.m, &mut rt.y);

    range_limit_days_relative(base, rt);
    range_limit(0, 12, 12, &mut rt.m, &mut rt.y);
}

fn range_limit_days_relative(base: &Instant, rt: &mut Interval) {
    let (mut year, mut month) = (base.y, base.m);
    range_limit(1, 13, 12, &mut month, &mut year);

    if !rt.invert {
        while rt.d < 0 {
            month -= 1;
            if month < 1 {
                month += 12;
                year -= 1;
            }
            rt.d += days_in_month(year, month);
            rt.m -= 1;
        }
    } else {
        while rt.d < 0 {
            rt.d += days_in_month(year, month);
            rt.m -= 1;
            month += 1;
            if month > 12 {
                month -= 12;
                year += 1;
            }
        }
    }
}
