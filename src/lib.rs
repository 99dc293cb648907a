//! 시간 단위 정규화 기반의 재무 비교 계산기 모음.
//!
//! 핵심 계산(회수 시점, 기간별 ROI, 클라우드 비용 교차)은 순수 함수로 두고
//! CLI는 입력 정리와 출력만 담당한다.

pub mod app;
pub mod cloud;
pub mod config;
pub mod conversion;
pub mod humanize;
pub mod quantity;
pub mod recoup;
pub mod ui_cli;
pub mod units;

pub use cloud::{find_crossover, CostModel, CrossoverOutcome, CrossoverResult, Solution};
pub use humanize::humanize;
pub use recoup::{project, RecoupInput, RecoupProjection, RecoupStatus};
pub use units::{seconds_per_unit, TimeUnit};
