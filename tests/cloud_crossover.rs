//! 클라우드 비용 교차 탐색 회귀 테스트.
use pretty_assertions::assert_eq;
use roi_toolbox::cloud::{
    find_crossover, scan_crossover, CostModel, CrossoverOutcome, Solution, SCAN_MONTHS,
};

#[test]
fn flat_rate_meets_setup_heavy_solution_at_month_20() {
    // 100m = 20m + 1600 -> m = 20
    let a = CostModel::new(100.0, 0.0, 0.0);
    let b = CostModel::new(20.0, 1_600.0, 1.0);
    let res = find_crossover(&a, &b, 1);
    let CrossoverOutcome::Flip(c) = &res.outcome else {
        panic!("expected a crossover, got {:?}", res.outcome);
    };
    assert_eq!(c.month, 20);
    assert_eq!(c.label, "20 months");
    // 0개월에는 A가 0, B가 1600 이므로 A가 먼저 싸다. 20개월째 차이가 0에 닿는다.
    assert_eq!(c.cheaper_before, Solution::A);
    assert_eq!(c.cheaper_after, Solution::B);
    assert_eq!(
        res.message,
        "Solution A is cheaper for 1 year and 8 months, then Solution B is cheaper."
    );
}

#[test]
fn strict_flip_reports_new_cheaper_side() {
    let a = CostModel::new(100.0, 0.0, 0.0);
    let b = CostModel::new(20.0, 1_650.0, 1.0);
    match scan_crossover(&a, &b, 1) {
        CrossoverOutcome::Flip(c) => {
            assert_eq!(c.month, 21);
            assert_eq!(c.cheaper_before, Solution::A);
            assert_eq!(c.cheaper_after, Solution::B);
        }
        other => panic!("expected flip, got {other:?}"),
    }
}

#[test]
fn environments_scale_only_recurring_cost() {
    let a = CostModel::new(100.0, 0.0, 0.0);
    let b = CostModel::new(20.0, 1_600.0, 1.0);
    // 2개 환경: 200m = 40m + 1600 -> m = 10
    match scan_crossover(&a, &b, 2) {
        CrossoverOutcome::Flip(c) => {
            assert_eq!(c.month, 10);
            assert_eq!(c.label, "10 months");
        }
        other => panic!("expected flip, got {other:?}"),
    }
}

#[test]
fn identical_models_cost_the_same_everywhere() {
    let model = CostModel::new(100.0, 8.0, 200.0);
    let res = find_crossover(&model, &model, 3);
    assert_eq!(res.outcome, CrossoverOutcome::EqualCost);
    assert_eq!(res.message, "Both solutions have the same cost for 1000 years.");
    assert_eq!(res.now.cost_a, res.now.cost_b);
    assert!(res.horizon_rows.iter().all(|r| r.cost_a == r.cost_b));
}

#[test]
fn dominated_solution_is_always_more_expensive() {
    let a = CostModel::new(10.0, 1.0, 10.0);
    let b = CostModel::new(20.0, 2.0, 10.0);
    let res = find_crossover(&a, &b, 1);
    assert_eq!(res.outcome, CrossoverOutcome::AlwaysCheaper(Solution::A));
    assert_eq!(res.message, "Solution A is always cheaper within 1000 years.");
}

#[test]
fn scan_stops_at_bound() {
    // 12000.5개월째에야 교차하므로 탐색 범위 밖이다.
    let a = CostModel::new(1.0, 0.0, 0.0);
    let b = CostModel::new(0.0, 12_000.5, 1.0);
    assert_eq!(SCAN_MONTHS, 12_000);
    assert_eq!(
        scan_crossover(&a, &b, 1),
        CrossoverOutcome::AlwaysCheaper(Solution::A)
    );

    // 정확히 마지막 달에 닿으면 교차로 본다.
    let b = CostModel::new(0.0, 12_000.0, 1.0);
    match scan_crossover(&a, &b, 1) {
        CrossoverOutcome::Flip(c) => {
            assert_eq!(c.month, SCAN_MONTHS);
            assert_eq!(c.label, "1000 years");
        }
        other => panic!("expected flip at bound, got {other:?}"),
    }
}

#[test]
fn starting_tie_is_not_a_crossover() {
    // 0개월 차이가 0이면 부호 변화로 보지 않는다.
    let a = CostModel::new(10.0, 0.0, 0.0);
    let b = CostModel::new(5.0, 0.0, 0.0);
    assert_eq!(
        scan_crossover(&a, &b, 1),
        CrossoverOutcome::AlwaysCheaper(Solution::B)
    );
}

#[test]
fn horizon_table_and_chart_layout() {
    let a = CostModel::new(100.0, 8.0, 200.0);
    let b = CostModel::new(20.0, 80.0, 200.0);
    let res = find_crossover(&a, &b, 1);

    assert_eq!(res.now.month, 0);
    assert_eq!(res.now.label, "Now");
    assert_eq!(res.now.cost_a, 1_600.0);
    assert_eq!(res.now.cost_b, 16_000.0);

    let months: Vec<u32> = res.horizon_rows.iter().map(|r| r.month).collect();
    assert_eq!(months, [1, 3, 6, 12, 24, 36, 60, 120]);
    let labels: Vec<&str> = res.horizon_rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        ["1 month", "3 months", "6 months", "1 year", "2 years", "3 years", "5 years", "10 years"]
    );
    assert_eq!(res.horizon_rows[3].cost_a, 1_600.0 + 1_200.0);

    let chart: Vec<u32> = res.chart_series.iter().map(|r| r.month).collect();
    assert_eq!(chart, (0..=120u32).step_by(12).collect::<Vec<_>>());

    // 80m = 14400 -> m = 180
    match &res.outcome {
        CrossoverOutcome::Flip(c) => {
            assert_eq!(c.month, 180);
            assert_eq!(c.label, "15 years");
            assert_eq!(c.cheaper_before, Solution::A);
        }
        other => panic!("expected flip, got {other:?}"),
    }
}

#[test]
fn touching_zero_from_above_hands_over_to_a() {
    let a = CostModel::new(20.0, 1_600.0, 1.0);
    let b = CostModel::new(100.0, 0.0, 0.0);
    match scan_crossover(&a, &b, 1) {
        CrossoverOutcome::Flip(c) => {
            assert_eq!(c.month, 20);
            assert_eq!(c.cheaper_before, Solution::B);
            assert_eq!(c.cheaper_after, Solution::A);
        }
        other => panic!("expected flip, got {other:?}"),
    }
}
