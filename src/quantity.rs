use serde::{Deserialize, Serialize};

use crate::units::TimeUnit;

/// 시간 단위가 붙은 입력값. 단위 없는 숫자는 의미가 없으므로 항상 함께 다닌다.
///
/// 서로 다른 단위의 값을 섞기 전에 반드시 초 기준으로 정규화한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedValue {
    pub value: f64,
    pub unit: TimeUnit,
}

impl TimedValue {
    pub const fn new(value: f64, unit: TimeUnit) -> Self {
        Self { value, unit }
    }

    /// 기간으로 해석한 초 값 (value × 단위 초).
    pub fn seconds(&self) -> f64 {
        self.value * self.unit.seconds()
    }

    /// "단위당 n회" 빈도로 해석한 초당 횟수 (value ÷ 단위 초).
    pub fn per_second(&self) -> f64 {
        self.value / self.unit.seconds()
    }
}
