use thiserror::Error;

use crate::units::{convert_time, TimeUnit};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 닫힌 단위 집합에 없는 태그. 기본값으로 대체하지 않는다.
    #[error("invalid time unit: {0}")]
    InvalidUnit(String),
}

/// 문자열 단위 태그를 enum으로 변환한다.
///
/// 대소문자를 구분하지 않으며 `days`, `day`, `d` 처럼 복수형/단수형/약어를 모두 받는다.
pub fn parse_time_unit(s: &str) -> Result<TimeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "s" | "sec" | "secs" | "second" | "seconds" => Ok(TimeUnit::Seconds),
        "m" | "min" | "mins" | "minute" | "minutes" => Ok(TimeUnit::Minutes),
        "h" | "hr" | "hrs" | "hour" | "hours" => Ok(TimeUnit::Hours),
        "d" | "day" | "days" => Ok(TimeUnit::Days),
        "w" | "wk" | "week" | "weeks" => Ok(TimeUnit::Weeks),
        "mo" | "month" | "months" => Ok(TimeUnit::Months),
        "y" | "yr" | "yrs" | "year" | "years" => Ok(TimeUnit::Years),
        _ => Err(ConversionError::InvalidUnit(s.to_string())),
    }
}

impl std::str::FromStr for TimeUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time_unit(s)
    }
}

/// 태그로 지정된 단위의 초 값을 반환한다. 알 수 없는 태그는 `InvalidUnit`.
pub fn seconds_per_unit_tag(tag: &str) -> Result<f64, ConversionError> {
    parse_time_unit(tag).map(TimeUnit::seconds)
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
pub fn convert(value: f64, from_unit_str: &str, to_unit_str: &str) -> Result<f64, ConversionError> {
    let from = parse_time_unit(from_unit_str)?;
    let to = parse_time_unit(to_unit_str)?;
    Ok(convert_time(value, from, to))
}
