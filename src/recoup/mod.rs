//! 프로세스 최적화 투자 회수(ROI/Recoup) 계산 모듈.

pub mod projector;

pub use projector::*;
