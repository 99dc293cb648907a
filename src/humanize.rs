//! 초/개월 값을 사람이 읽는 문자열로 바꾸는 포매터.

use crate::units::TimeUnit;

/// `humanize`가 무한대/NaN에 대해 돌려주는 문구.
pub const NEVER_RECOUP: &str = "Never recoup";
const ZERO_SECONDS: &str = "0 seconds";

/// 큰 단위부터의 혼합 진법 자릿수와 약어.
const BREAKDOWN: [(TimeUnit, &str); 6] = [
    (TimeUnit::Years, "y"),
    (TimeUnit::Months, "mo"),
    (TimeUnit::Days, "d"),
    (TimeUnit::Hours, "h"),
    (TimeUnit::Minutes, "m"),
    (TimeUnit::Seconds, "s"),
];

/// 초 값을 `1y 2mo 3d 4h 5m 6s` 형태로 분해한다.
///
/// 소수점 이하 초는 버린다. 0인 자릿수는 출력하지 않는다.
pub fn humanize(seconds: f64) -> String {
    if !seconds.is_finite() {
        return NEVER_RECOUP.to_string();
    }
    if seconds <= 0.0 {
        return ZERO_SECONDS.to_string();
    }

    let mut remaining = seconds.floor();
    let mut parts = Vec::with_capacity(BREAKDOWN.len());
    for (unit, abbr) in BREAKDOWN {
        let radix = unit.seconds();
        let amount = (remaining / radix).floor();
        remaining %= radix;
        if amount > 0.0 {
            parts.push(format!("{amount:.0}{abbr}"));
        }
    }

    if parts.is_empty() {
        // 1초 미만
        return ZERO_SECONDS.to_string();
    }
    parts.join(" ")
}

fn plural(n: u32, singular: &str) -> String {
    if n == 1 {
        format!("1 {singular}")
    } else {
        format!("{n} {singular}s")
    }
}

/// 개월 수 라벨. 12의 배수면 년 단위(`2 years`), 아니면 `N months`.
pub fn humanize_month(month: u32) -> String {
    if month == 0 {
        return "Now".to_string();
    }
    if month % 12 == 0 {
        plural(month / 12, "year")
    } else {
        plural(month, "month")
    }
}

/// 경과 기간 라벨. `1 year and 8 months` 처럼 년/개월을 함께 표기한다.
pub fn humanize_elapsed(month: u32) -> String {
    if month == 0 {
        return "Now".to_string();
    }
    let years = month / 12;
    let months = month % 12;
    let mut parts = Vec::with_capacity(2);
    if years > 0 {
        parts.push(plural(years, "year"));
    }
    if months > 0 {
        parts.push(plural(months, "month"));
    }
    parts.join(" and ")
}
