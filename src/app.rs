use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::cloud::{find_crossover, CostModel};
use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::conversion;
use crate::humanize::humanize;
use crate::quantity::TimedValue;
use crate::recoup::{project, RecoupInput};
use crate::ui_cli::{self, sanitize_input, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
    #[error(transparent)]
    Conversion(#[from] conversion::ConversionError),
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

fn parse_timed_arg(s: &str) -> Result<TimedValue, String> {
    ui_cli::parse_timed_value(s).map_err(|e| e.to_string())
}

/// 명령행 인자.
#[derive(Debug, Parser)]
#[command(name = "roi_toolbox", version, about = "Recoup, ROI and cloud cost comparison calculators")]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// 결과를 JSON으로 출력
    #[arg(long, global = true)]
    pub json: bool,
    /// debug 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// 생략하면 대화형 메뉴를 띄운다
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 투자 시간 회수 시점과 기간별 ROI
    Recoup {
        /// 실행 빈도, 예: 3/days
        #[arg(long, value_parser = parse_timed_arg)]
        frequency: Option<TimedValue>,
        /// 1회성 투자 시간, 예: 1/hours
        #[arg(long, value_parser = parse_timed_arg)]
        investment: Option<TimedValue>,
        /// 실행당 절감 시간, 예: 5/minutes
        #[arg(long, value_parser = parse_timed_arg)]
        saving: Option<TimedValue>,
    },
    /// 두 클라우드 솔루션의 비용 교차 시점
    Cloud {
        #[arg(long)]
        environments: Option<u32>,
        #[arg(long)]
        a_monthly: Option<f64>,
        #[arg(long)]
        a_hours: Option<f64>,
        #[arg(long)]
        a_rate: Option<f64>,
        #[arg(long)]
        b_monthly: Option<f64>,
        #[arg(long)]
        b_hours: Option<f64>,
        #[arg(long)]
        b_rate: Option<f64>,
    },
    /// 초 값을 `1h 1m 1s` 형태로 표기
    Humanize {
        #[arg(allow_hyphen_values = true)]
        seconds: f64,
    },
    /// 시간 단위 변환
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        from: String,
        to: String,
    },
}

fn override_model(
    base: CostModel,
    monthly: Option<f64>,
    hours: Option<f64>,
    rate: Option<f64>,
) -> CostModel {
    CostModel::new(
        sanitize_input(monthly.unwrap_or(base.monthly_cost)),
        sanitize_input(hours.unwrap_or(base.one_time_hours)),
        sanitize_input(rate.unwrap_or(base.hourly_rate)),
    )
}

fn sanitize_timed(v: TimedValue) -> TimedValue {
    TimedValue::new(sanitize_input(v.value), v.unit)
}

/// 단일 서브커맨드를 실행한다.
pub fn run_command(command: Command, config: &Config, json: bool) -> Result<(), AppError> {
    match command {
        Command::Recoup {
            frequency,
            investment,
            saving,
        } => {
            let input = RecoupInput {
                frequency: sanitize_timed(frequency.unwrap_or(config.recoup.frequency)),
                investment: sanitize_timed(investment.unwrap_or(config.recoup.investment)),
                saving: sanitize_timed(saving.unwrap_or(config.recoup.saving)),
            };
            let result = project(&input);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                ui_cli::print_recoup(&result);
            }
        }
        Command::Cloud {
            environments,
            a_monthly,
            a_hours,
            a_rate,
            b_monthly,
            b_hours,
            b_rate,
        } => {
            let cloud = &config.cloud;
            let a = override_model(cloud.solution_a, a_monthly, a_hours, a_rate);
            let b = override_model(cloud.solution_b, b_monthly, b_hours, b_rate);
            let result = find_crossover(&a, &b, environments.unwrap_or(cloud.environments));
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                ui_cli::print_crossover(&result, &config.output);
            }
        }
        Command::Humanize { seconds } => println!("{}", humanize(seconds)),
        Command::Convert { value, from, to } => {
            let result = conversion::convert(value, &from, &to)?;
            println!("{result} {to}");
        }
    }
    Ok(())
}

/// 대화형 메뉴 루프를 실행한다. 종료 시 입력값을 설정 파일에 남긴다.
pub fn run_interactive(config: &mut Config, path: &std::path::Path) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::Recoup => ui_cli::handle_recoup(config)?,
            MenuChoice::CloudCost => ui_cli::handle_cloud_cost(config)?,
            MenuChoice::Humanize => ui_cli::handle_humanize()?,
            MenuChoice::UnitConversion => match ui_cli::handle_unit_conversion() {
                Err(AppError::Conversion(e)) => println!("{e}"),
                other => other?,
            },
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save(path)?;
            }
            MenuChoice::Exit => {
                config.save(path)?;
                println!("Bye.");
                break;
            }
        }
    }
    Ok(())
}
