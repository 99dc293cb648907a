use pretty_assertions::assert_eq;
use roi_toolbox::humanize;

#[test]
fn non_finite_never_recoups() {
    assert_eq!(humanize(f64::INFINITY), "Never recoup");
    assert_eq!(humanize(f64::NAN), "Never recoup");
}

#[test]
fn non_positive_is_zero_seconds() {
    assert_eq!(humanize(0.0), "0 seconds");
    assert_eq!(humanize(-5.0), "0 seconds");
    assert_eq!(humanize(-10.0), "0 seconds");
}

#[test]
fn hours_minutes_seconds() {
    assert_eq!(humanize(3661.0), "1h 1m 1s");
}

#[test]
fn zero_components_are_skipped() {
    assert_eq!(humanize(3600.0), "1h");
    assert_eq!(humanize(86_401.0), "1d 1s");
    assert_eq!(humanize(60.9), "1m");
}

#[test]
fn full_breakdown_uses_average_months() {
    // 1y + 2mo + 3d + 4h + 5m + 6s
    let seconds = 31_556_952.0 + 2.0 * 2_629_746.0 + 3.0 * 86_400.0 + 4.0 * 3_600.0 + 5.0 * 60.0 + 6.0;
    assert_eq!(humanize(seconds), "1y 2mo 3d 4h 5m 6s");
}
