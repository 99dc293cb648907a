//! 클라우드 비용 비교 및 손익 교차 시점 계산 모듈.

pub mod cost_model;
pub mod crossover;

pub use cost_model::*;
pub use crossover::*;
