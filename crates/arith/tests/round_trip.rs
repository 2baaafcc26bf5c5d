use std::sync::Arc;

use kairos_arith::{add, diff, sub, Instant, Interval};
use kairos_zone::TzRules;

fn eastern() -> Arc<TzRules> {
    Arc::new(
        TzRules::new("America/New_York")
            .unwrap()
            .with_base(-18000, false)
            .with_transition(1678604400, -14400, true)
            .unwrap()
            .with_transition(1699164000, -18000, false)
            .unwrap(),
    )
}

#[test]
fn diff_is_symmetric_on_mid_month_dates() {
    let pairs = [
        ((2023, 5, 10, 8, 15, 30, 0), (2023, 5, 12, 10, 5, 0, 0)),
        ((2023, 1, 15, 23, 59, 59, 999_999), (2024, 7, 20, 0, 0, 0, 1)),
        ((2020, 2, 10, 12, 0, 0, 0), (2020, 3, 10, 11, 0, 0, 0)),
    ];
    for (fa, fb) in pairs {
        let a = Instant::new(fa.0, fa.1, fa.2, fa.3, fa.4, fa.5, fa.6).unwrap();
        let b = Instant::new(fb.0, fb.1, fb.2, fb.3, fb.4, fb.5, fb.6).unwrap();

        let fwd = diff(&a, &b);
        let rev = diff(&b, &a);
        assert_eq!(
            (fwd.y, fwd.m, fwd.d, fwd.h, fwd.i, fwd.s, fwd.us),
            (rev.y, rev.m, rev.d, rev.h, rev.i, rev.s, rev.us),
            "magnitudes differ for {fa:?} / {fb:?}"
        );
        assert!(!fwd.invert);
        assert!(rev.invert);
        assert_eq!(fwd.days, rev.days);
    }
}

#[test]
fn self_diff_is_zero() {
    let a = Instant::new(2023, 8, 7, 6, 5, 4, 3).unwrap();
    let rt = diff(&a, &a.clone());
    assert_eq!(rt, Interval::default().with_days(0));
}

#[test]
fn add_diff_reconstructs_target_epoch() {
    let cases = [
        ((2023, 1, 15, 10, 0, 0, 0), (2023, 3, 20, 8, 30, 0, 0)),
        ((2023, 5, 10, 8, 15, 30, 250_000), (2023, 5, 12, 10, 5, 0, 750_000)),
        ((2019, 12, 15, 6, 0, 0, 0), (2020, 3, 10, 5, 59, 59, 0)),
        ((2024, 2, 10, 0, 0, 0, 0), (2024, 3, 10, 0, 0, 0, 0)),
    ];
    for (fa, fb) in cases {
        let a = Instant::new(fa.0, fa.1, fa.2, fa.3, fa.4, fa.5, fa.6).unwrap();
        let b = Instant::new(fb.0, fb.1, fb.2, fb.3, fb.4, fb.5, fb.6).unwrap();

        let rt = diff(&a, &b);
        let rebuilt = add(&a, &rt);
        assert_eq!(rebuilt.sse, b.sse, "epoch mismatch for {fa:?} -> {fb:?}");
        assert_eq!(rebuilt.us, b.us, "microsecond mismatch for {fa:?} -> {fb:?}");
    }
}

#[test]
fn add_inverted_diff_reconstructs_source() {
    let a = Instant::new(2023, 1, 15, 10, 0, 0, 0).unwrap();
    let b = Instant::new(2023, 3, 20, 8, 30, 0, 0).unwrap();

    // diff(b, a) is the same span marked inverted; adding it to a
    // walks back to a, subtracting it from a reaches b
    let rt = diff(&b, &a);
    assert!(rt.invert);
    let rebuilt = sub(&a, &rt);
    assert_eq!(rebuilt.sse, b.sse);
}

#[test]
fn round_trip_in_named_zone_without_transition_between() {
    // both instants inside the same EDT stretch
    let a = Instant::new(2023, 6, 1, 9, 0, 0, 0)
        .unwrap()
        .in_zone_resolved(eastern(), -14400, true);
    let b = Instant::new(2023, 8, 15, 21, 30, 0, 0)
        .unwrap()
        .in_zone_resolved(eastern(), -14400, true);

    let rt = diff(&a, &b);
    let rebuilt = add(&a, &rt);
    assert_eq!(rebuilt.sse, b.sse);
    assert_eq!(rebuilt.z, -14400);
    assert!(rebuilt.dst);
}

#[test]
fn add_then_sub_returns_to_start() {
    let t = Instant::new(2023, 7, 14, 13, 45, 10, 500_000).unwrap();
    let iv = Interval::new(1, 2, 10, 5, 30, 15, 250_000).unwrap();

    let shifted = add(&t, &iv);
    let back = sub(&shifted, &iv);
    assert_eq!(back.sse, t.sse);
    assert_eq!(back.us, t.us);
    assert_eq!((back.y, back.m, back.d), (t.y, t.m, t.d));
}
