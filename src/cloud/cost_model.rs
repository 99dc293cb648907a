use serde::{Deserialize, Serialize};

/// 솔루션 하나의 비용 모델.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// 환경 1개당 월 비용
    pub monthly_cost: f64,
    /// 1회성 구축 작업 시간 [h]
    pub one_time_hours: f64,
    /// 작업 시간당 비용
    pub hourly_rate: f64,
}

impl CostModel {
    pub const fn new(monthly_cost: f64, one_time_hours: f64, hourly_rate: f64) -> Self {
        Self {
            monthly_cost,
            one_time_hours,
            hourly_rate,
        }
    }

    /// 월 수와 무관하게 한 번만 발생하는 구축 비용.
    pub fn one_time_cost(&self) -> f64 {
        self.one_time_hours * self.hourly_rate
    }

    /// `month` 개월 운영 시 누적 총비용. 0개월이면 1회성 비용만 남는다.
    pub fn cost_at(&self, month: u32, environments: u32) -> f64 {
        let recurring = self.monthly_cost * f64::from(month) * f64::from(environments);
        recurring + self.one_time_cost()
    }
}

/// 비교 대상 솔루션 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Solution {
    A,
    B,
}

impl Solution {
    pub const fn label(self) -> &'static str {
        match self {
            Solution::A => "Solution A",
            Solution::B => "Solution B",
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Solution::A => Solution::B,
            Solution::B => Solution::A,
        }
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
