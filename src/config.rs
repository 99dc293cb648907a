use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::cloud::CostModel;
use crate::quantity::TimedValue;
use crate::units::TimeUnit;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 회수 계산기의 기본 입력값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoupDefaults {
    pub frequency: TimedValue,
    pub investment: TimedValue,
    pub saving: TimedValue,
}

impl Default for RecoupDefaults {
    fn default() -> Self {
        Self {
            frequency: TimedValue::new(1.0, TimeUnit::Days),
            investment: TimedValue::new(1.0, TimeUnit::Hours),
            saving: TimedValue::new(5.0, TimeUnit::Minutes),
        }
    }
}

/// 클라우드 비용 비교의 기본 입력값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudDefaults {
    pub environments: u32,
    pub solution_a: CostModel,
    pub solution_b: CostModel,
}

impl Default for CloudDefaults {
    fn default() -> Self {
        Self {
            environments: 1,
            solution_a: CostModel::new(100.0, 8.0, 200.0),
            solution_b: CostModel::new(20.0, 80.0, 200.0),
        }
    }
}

/// 표 출력 형식.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    pub currency_symbol: String,
    pub decimals: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            decimals: 2,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub recoup: RecoupDefaults,
    pub cloud: CloudDefaults,
    pub output: OutputSettings,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        log::debug!("wrote default config to {}", path.display());
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }
}
