use log::debug;
use serde::{Deserialize, Serialize};

use crate::humanize::{humanize, NEVER_RECOUP};
use crate::quantity::TimedValue;
use crate::units::time::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_YEAR};

/// 보고용 고정 기간 (라벨, 개월).
pub const REPORT_HORIZONS: [(&str, u32); 6] = [
    ("1 month", 1),
    ("3 months", 3),
    ("6 months", 6),
    ("1 year", 12),
    ("5 years", 60),
    ("10 years", 120),
];

/// 차트 시리즈의 마지막 연도. 0년부터 포함하여 11개 점을 만든다.
pub const CHART_YEARS: u32 = 10;

/// 빈도나 절감량이 없을 때의 안내 문구.
pub const NEVER_RECOUP_MESSAGE: &str = "Never recoup (no frequency or no savings)";
/// 계산값이 f64 범위를 넘었을 때의 안내 문구.
pub const OUT_OF_RANGE_MESSAGE: &str = "Recoup unavailable (values out of range)";
const UNAVAILABLE_LABEL: &str = "Unavailable";
const NO_INVESTMENT_MESSAGE: &str = "Recouped immediately (no investment)";

/// 회수 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoupInput {
    /// 실행 빈도 (예: 3회 / days)
    pub frequency: TimedValue,
    /// 1회성 투자 시간
    pub investment: TimedValue,
    /// 1회 실행당 절감 시간
    pub saving: TimedValue,
}

/// 투자를 회수할 수 있는지 여부.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoupStatus {
    Recoups,
    NeverRecoup,
    /// 입력은 유한하지만 계산 중 f64 범위를 넘었다.
    OutOfRange,
}

/// 보고 기간별 요약 행.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizonRow {
    pub label: String,
    pub months: u32,
    pub years: f64,
    /// 누적 절감 [s]
    pub total_saved_seconds: f64,
    /// 누적 절감 - 투자 [s]
    pub net_seconds: f64,
    /// 투자가 0이면 정의되지 않으므로 None
    pub roi: Option<f64>,
}

/// 연 단위 차트 점. 시간 값은 [h].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub year: u32,
    pub gross_saved_hours: f64,
    pub net_saved_hours: f64,
    pub roi: Option<f64>,
}

/// 회수 계산 결과. 사용자에게 보이는 숫자 필드에는 NaN/무한대가 들어가지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoupProjection {
    pub status: RecoupStatus,
    /// 손익분기 시점 [s]. 회수 불가면 None.
    pub breakeven_seconds: Option<f64>,
    pub breakeven_label: String,
    /// 1년 기준 ROI
    pub roi: Option<f64>,
    pub message: String,
    pub horizon_rows: Vec<HorizonRow>,
    pub chart_series: Vec<ChartPoint>,
    pub min_runs_for_positive_roi: Option<u64>,
    pub days_until_positive_roi: Option<f64>,
}

impl RecoupProjection {
    fn never_recoup() -> Self {
        Self {
            status: RecoupStatus::NeverRecoup,
            breakeven_seconds: None,
            breakeven_label: NEVER_RECOUP.to_string(),
            roi: None,
            message: NEVER_RECOUP_MESSAGE.to_string(),
            horizon_rows: Vec::new(),
            chart_series: Vec::new(),
            min_runs_for_positive_roi: None,
            days_until_positive_roi: None,
        }
    }

    fn out_of_range() -> Self {
        Self {
            status: RecoupStatus::OutOfRange,
            breakeven_label: UNAVAILABLE_LABEL.to_string(),
            message: OUT_OF_RANGE_MESSAGE.to_string(),
            ..Self::never_recoup()
        }
    }

    /// 손익분기 시점 [s]. 회수 불가면 무한대.
    pub fn breakeven_or_infinite(&self) -> f64 {
        self.breakeven_seconds.unwrap_or(f64::INFINITY)
    }
}

fn roi_of(net_seconds: f64, invest_seconds: f64) -> Option<f64> {
    if invest_seconds > 0.0 {
        Some(net_seconds / invest_seconds).filter(|roi| roi.is_finite())
    } else {
        None
    }
}

/// 투자 시간이 실행당 절감으로 회수되는 시점과 기간별 수익을 계산한다.
///
/// 모든 값은 초 기준으로 정규화한 뒤 계산한다. 빈도나 절감량이 0 이하이면
/// 나눗셈 없이 `NeverRecoup` 결과를 돌려준다. 정규화나 중간 계산이 무한대로
/// 넘치면 `OutOfRange` 결과를 돌려주며, 결과 숫자 필드에는 무한대가 남지 않는다.
pub fn project(input: &RecoupInput) -> RecoupProjection {
    let rate_per_second = input.frequency.per_second();
    let invest_seconds = input.investment.seconds();
    let save_seconds_per_run = input.saving.seconds();

    if !(rate_per_second.is_finite() && rate_per_second > 0.0)
        || !(save_seconds_per_run.is_finite() && save_seconds_per_run > 0.0)
    {
        debug!(
            "degenerate recoup input: rate={rate_per_second}/s, saving={save_seconds_per_run}s"
        );
        return RecoupProjection::never_recoup();
    }
    if !invest_seconds.is_finite() {
        debug!("investment overflowed: {invest_seconds}s");
        return RecoupProjection::out_of_range();
    }

    let savings_per_second = rate_per_second * save_seconds_per_run;
    if savings_per_second <= 0.0 {
        debug!("savings per second underflowed: {savings_per_second}");
        return RecoupProjection::never_recoup();
    }
    // 가장 긴 보고 기간까지 유한해야 행과 차트에 무한대가 들어가지 않는다.
    let longest_saved = f64::from(CHART_YEARS) * SECONDS_PER_YEAR * savings_per_second;
    if !longest_saved.is_finite() {
        debug!("savings per second overflowed: {savings_per_second}");
        return RecoupProjection::out_of_range();
    }

    let breakeven = invest_seconds / savings_per_second;
    if !breakeven.is_finite() {
        debug!("breakeven overflowed: {invest_seconds}s / {savings_per_second}");
        return RecoupProjection::out_of_range();
    }
    debug!("breakeven after {breakeven}s ({savings_per_second} s saved per s)");

    let horizon_rows: Vec<HorizonRow> = REPORT_HORIZONS
        .iter()
        .map(|&(label, months)| {
            let years = f64::from(months) / 12.0;
            let total_saved_seconds = years * SECONDS_PER_YEAR * savings_per_second;
            let net_seconds = total_saved_seconds - invest_seconds;
            HorizonRow {
                label: label.to_string(),
                months,
                years,
                total_saved_seconds,
                net_seconds,
                roi: roi_of(net_seconds, invest_seconds),
            }
        })
        .collect();

    let chart_series = (0..=CHART_YEARS)
        .map(|year| {
            let total_saved = f64::from(year) * SECONDS_PER_YEAR * savings_per_second;
            let net = total_saved - invest_seconds;
            ChartPoint {
                year,
                gross_saved_hours: total_saved / SECONDS_PER_HOUR,
                net_saved_hours: net / SECONDS_PER_HOUR,
                roi: roi_of(net, invest_seconds),
            }
        })
        .collect();

    let roi = horizon_rows
        .iter()
        .find(|row| row.months == 12)
        .and_then(|row| row.roi);
    let message = match roi {
        Some(r) => format!("ROI after 1 year: {:.2}%", r * 100.0),
        None if invest_seconds > 0.0 => "ROI after 1 year: unavailable".to_string(),
        None => NO_INVESTMENT_MESSAGE.to_string(),
    };

    let min_runs = (invest_seconds / save_seconds_per_run).ceil();
    let min_runs_for_positive_roi = if min_runs.is_finite() && min_runs >= 0.0 {
        Some(min_runs as u64)
    } else {
        None
    };
    let runs_per_day = rate_per_second * SECONDS_PER_DAY;
    let days_until_positive_roi = min_runs_for_positive_roi
        .map(|runs| runs as f64 / runs_per_day)
        .filter(|days| days.is_finite() && *days >= 0.0);

    RecoupProjection {
        status: RecoupStatus::Recoups,
        breakeven_seconds: Some(breakeven),
        breakeven_label: humanize(breakeven),
        roi,
        message,
        horizon_rows,
        chart_series,
        min_runs_for_positive_roi,
        days_until_positive_roi,
    }
}
