use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::cost_model::{CostModel, Solution};
use crate::humanize::{humanize_elapsed, humanize_month};

/// 월 단위 탐색 상한 (1000년).
pub const SCAN_MONTHS: u32 = 12_000;

/// 비용표 보고 기간 [개월].
pub const REPORT_MONTHS: [u32; 8] = [1, 3, 6, 12, 24, 36, 60, 120];

/// 차트는 0개월부터 이 값까지 12개월 간격.
pub const CHART_END_MONTH: u32 = 120;

/// 특정 시점의 두 솔루션 누적 비용.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRow {
    pub month: u32,
    pub label: String,
    pub cost_a: f64,
    pub cost_b: f64,
}

/// 처음으로 더 싼 쪽이 뒤바뀐 달.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crossover {
    pub month: u32,
    pub label: String,
    pub cheaper_before: Solution,
    pub cheaper_after: Solution,
}

/// 탐색 결과 분류.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossoverOutcome {
    Flip(Crossover),
    /// 탐색 범위 내에서 교차 없음. 마지막 달 기준으로 더 싼 쪽.
    AlwaysCheaper(Solution),
    /// 탐색 범위 내에서 교차 없음. 마지막 달 비용이 같다.
    EqualCost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossoverResult {
    pub outcome: CrossoverOutcome,
    pub message: String,
    /// month = 0 기준 행
    pub now: CostRow,
    pub horizon_rows: Vec<CostRow>,
    pub chart_series: Vec<CostRow>,
}

fn cost_row(a: &CostModel, b: &CostModel, environments: u32, month: u32) -> CostRow {
    CostRow {
        month,
        label: humanize_month(month),
        cost_a: a.cost_at(month, environments),
        cost_b: b.cost_at(month, environments),
    }
}

/// 월 단위로 비용 차이의 부호가 처음 바뀌는 달을 찾는다.
///
/// 연속 해를 구하지 않는다. 차이가 0에 닿는 첫 달을 교차로 보고하며,
/// 이전 달 차이가 정확히 0이면 교차로 보지 않고 계속 진행한다.
///
/// `cheaper_before`/`cheaper_after`는 교차 직전과 직후에 더 싼 쪽을 뜻한다.
/// 차이가 정확히 0에 닿은 달은 어느 쪽도 싸지 않으므로, 선형 차이가 계속
/// 진행하는 방향인 `cheaper_before`의 반대편을 직후의 싼 쪽으로 둔다.
/// 보고하는 달은 첫 접점 그대로다.
pub fn scan_crossover(a: &CostModel, b: &CostModel, environments: u32) -> CrossoverOutcome {
    let mut prev_diff = a.cost_at(0, environments) - b.cost_at(0, environments);
    for month in 1..=SCAN_MONTHS {
        let diff = a.cost_at(month, environments) - b.cost_at(month, environments);
        if (prev_diff < 0.0 && diff >= 0.0) || (prev_diff > 0.0 && diff <= 0.0) {
            let cheaper_before = if prev_diff < 0.0 { Solution::A } else { Solution::B };
            // 정확히 0에 닿은 달은 차이가 계속 같은 방향으로 움직이므로 반대편이 싸진다.
            let cheaper_after = if diff < 0.0 {
                Solution::A
            } else if diff > 0.0 {
                Solution::B
            } else {
                cheaper_before.other()
            };
            debug!("crossover at month {month}: {cheaper_before} -> {cheaper_after}");
            return CrossoverOutcome::Flip(Crossover {
                month,
                label: humanize_month(month),
                cheaper_before,
                cheaper_after,
            });
        }
        prev_diff = diff;
    }

    let final_a = a.cost_at(SCAN_MONTHS, environments);
    let final_b = b.cost_at(SCAN_MONTHS, environments);
    trace!("no crossover within {SCAN_MONTHS} months: a={final_a}, b={final_b}");
    if final_a < final_b {
        CrossoverOutcome::AlwaysCheaper(Solution::A)
    } else if final_b < final_a {
        CrossoverOutcome::AlwaysCheaper(Solution::B)
    } else {
        CrossoverOutcome::EqualCost
    }
}

fn outcome_message(outcome: &CrossoverOutcome) -> String {
    match outcome {
        CrossoverOutcome::Flip(c) => format!(
            "{} is cheaper for {}, then {} is cheaper.",
            c.cheaper_before,
            humanize_elapsed(c.month),
            c.cheaper_after
        ),
        CrossoverOutcome::AlwaysCheaper(solution) => {
            format!("{solution} is always cheaper within 1000 years.")
        }
        CrossoverOutcome::EqualCost => {
            "Both solutions have the same cost for 1000 years.".to_string()
        }
    }
}

/// 두 비용 모델의 교차 시점과 보고용 비용표/차트를 계산한다.
pub fn find_crossover(a: &CostModel, b: &CostModel, environments: u32) -> CrossoverResult {
    let outcome = scan_crossover(a, b, environments);
    let message = outcome_message(&outcome);

    let horizon_rows = REPORT_MONTHS
        .iter()
        .map(|&month| cost_row(a, b, environments, month))
        .collect();
    let chart_series = (0..=CHART_END_MONTH)
        .step_by(12)
        .map(|month| cost_row(a, b, environments, month))
        .collect();

    CrossoverResult {
        outcome,
        message,
        now: cost_row(a, b, environments, 0),
        horizon_rows,
        chart_series,
    }
}
