use serde::{Deserialize, Serialize};

/// 시간 단위. 내부 기준은 항상 초(s)이다.
///
/// 월/년은 달력 기준이 아니라 평균 길이(윤년 반영)를 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const SECONDS_PER_WEEK: f64 = 604_800.0;
/// 평균 한 달 ≈ 30.44일
pub const SECONDS_PER_MONTH: f64 = 2_629_746.0;
/// 평균 1년 ≈ 365.2425일
pub const SECONDS_PER_YEAR: f64 = 31_556_952.0;

impl TimeUnit {
    /// 작은 단위부터 큰 단위 순서의 전체 목록.
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Weeks,
        TimeUnit::Months,
        TimeUnit::Years,
    ];

    /// 1 단위가 몇 초인지 반환한다.
    pub const fn seconds(self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => SECONDS_PER_MINUTE,
            TimeUnit::Hours => SECONDS_PER_HOUR,
            TimeUnit::Days => SECONDS_PER_DAY,
            TimeUnit::Weeks => SECONDS_PER_WEEK,
            TimeUnit::Months => SECONDS_PER_MONTH,
            TimeUnit::Years => SECONDS_PER_YEAR,
        }
    }

    /// 설정 파일과 CLI에서 쓰는 정식 태그.
    pub const fn tag(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// 단위당 초 값을 반환한다.
pub fn seconds_per_unit(unit: TimeUnit) -> f64 {
    unit.seconds()
}

fn to_seconds(value: f64, unit: TimeUnit) -> f64 {
    value * unit.seconds()
}

fn from_seconds(value_s: f64, unit: TimeUnit) -> f64 {
    value_s / unit.seconds()
}

/// 시간을 원하는 단위로 변환한다.
pub fn convert_time(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    let s = to_seconds(value, from);
    from_seconds(s, to)
}
