//! 단위 정의 및 변환 모듈 모음.

pub mod time;

pub use time::{convert_time, seconds_per_unit, TimeUnit};
