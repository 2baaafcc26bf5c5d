use kairos_calendar::{
    civil_from_epoch_days, days_in_month, days_in_year_starting, epoch_days_from_civil, is_leap,
};

#[test]
fn epoch_day_roundtrip_sweep() {
    // ~270 years around the epoch, covering 1900 (no leap) and 2000 (leap)
    for day in -36525..=62000i64 {
        let (y, m, d) = civil_from_epoch_days(day);
        assert!((1..=12).contains(&m), "month out of range for day {day}");
        assert!(
            d >= 1 && d <= days_in_month(y, m),
            "day out of range for epoch day {day}: ({y}, {m}, {d})"
        );
        let back = epoch_days_from_civil(y, m, d);
        assert_eq!(back, day, "roundtrip failed for ({y}, {m}, {d})");
    }
}

#[test]
fn consecutive_days_are_contiguous() {
    let mut prev = epoch_days_from_civil(1999, 12, 31);
    let (mut y, mut m, mut d) = (1999, 12, 31);
    for _ in 0..400 {
        d += 1;
        if d > days_in_month(y, m) {
            d = 1;
            m += 1;
            if m > 12 {
                m = 1;
                y += 1;
            }
        }
        let cur = epoch_days_from_civil(y, m, d);
        assert_eq!(cur, prev + 1, "gap at ({y}, {m}, {d})");
        prev = cur;
    }
}

#[test]
fn year_span_matches_day_count() {
    for year in 1990..=2030i64 {
        for month in 1..=12i64 {
            let span = epoch_days_from_civil(year + 1, month, 1) - epoch_days_from_civil(year, month, 1);
            assert_eq!(
                span,
                days_in_year_starting(year, month),
                "span mismatch for ({year}, {month})"
            );
        }
    }
}

#[test]
fn leap_year_day_totals() {
    for year in [1900, 1996, 2000, 2023, 2024] {
        let total = epoch_days_from_civil(year + 1, 1, 1) - epoch_days_from_civil(year, 1, 1);
        assert_eq!(total, if is_leap(year) { 366 } else { 365 }, "year {year}");
    }
}
