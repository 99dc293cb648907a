//! 시간 단위 환산표 회귀 테스트.
use roi_toolbox::conversion::{seconds_per_unit_tag, ConversionError};
use roi_toolbox::units::{convert_time, seconds_per_unit, TimeUnit};

#[test]
fn table_values_match_average_calendar() {
    let expected = [
        (TimeUnit::Seconds, 1.0),
        (TimeUnit::Minutes, 60.0),
        (TimeUnit::Hours, 3_600.0),
        (TimeUnit::Days, 86_400.0),
        (TimeUnit::Weeks, 604_800.0),
        (TimeUnit::Months, 2_629_746.0),
        (TimeUnit::Years, 31_556_952.0),
    ];
    for (unit, seconds) in expected {
        assert_eq!(seconds_per_unit(unit), seconds, "{unit}");
    }
}

#[test]
fn every_unit_is_positive_and_ordered() {
    let factors: Vec<f64> = TimeUnit::ALL.iter().map(|u| u.seconds()).collect();
    assert!(factors.iter().all(|&s| s > 0.0));
    assert!(factors.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn twelve_average_months_make_a_year() {
    assert_eq!(convert_time(12.0, TimeUnit::Months, TimeUnit::Years), 1.0);
}

#[test]
fn unrecognized_tag_fails_fast() {
    assert_eq!(
        seconds_per_unit_tag("decades"),
        Err(ConversionError::InvalidUnit("decades".to_string()))
    );
    assert_eq!(seconds_per_unit_tag("weeks"), Ok(604_800.0));
}
