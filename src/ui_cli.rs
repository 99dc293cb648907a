use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::app::AppError;
use crate::cloud::{CostModel, CrossoverResult};
use crate::config::{Config, OutputSettings};
use crate::conversion::{self, parse_time_unit};
use crate::humanize::humanize;
use crate::quantity::TimedValue;
use crate::recoup::{RecoupInput, RecoupProjection, RecoupStatus};
use crate::units::time::SECONDS_PER_HOUR;
use crate::units::TimeUnit;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Recoup,
    CloudCost,
    Humanize,
    UnitConversion,
    Settings,
    Exit,
}

/// 외부 입력 숫자를 코어에 넘기기 전에 정리한다. 유한하지 않거나 음수면 0.
pub fn sanitize_input(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// 문자열을 숫자로 해석한다. 해석할 수 없으면 0.
pub fn coerce_number(s: &str) -> f64 {
    sanitize_input(s.trim().parse::<f64>().unwrap_or(0.0))
}

/// `3/days`, `5 minutes`, `1h` 형태의 값-단위 쌍을 해석한다.
///
/// 숫자 부분은 `coerce_number` 규칙을 따르고, 단위는 알 수 없으면 오류다.
pub fn parse_timed_value(s: &str) -> Result<TimedValue, conversion::ConversionError> {
    let s = s.trim();
    let (number, unit) = match s.split_once(['/', ' ']) {
        Some((n, u)) => (n, u),
        None => {
            let split = s
                .find(|c: char| c.is_ascii_alphabetic())
                .unwrap_or(s.len());
            s.split_at(split)
        }
    };
    let unit = parse_time_unit(unit)?;
    Ok(TimedValue::new(coerce_number(number), unit))
}

/// 금액 표기.
pub fn format_money(value: f64, out: &OutputSettings) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!(
        "{sign}{}{:.*}",
        out.currency_symbol,
        out.decimals,
        value.abs()
    )
}

/// ROI 표기. 정의되지 않으면 `n/a`.
pub fn format_roi(roi: Option<f64>) -> String {
    match roi {
        Some(r) => format!("{:.2}%", r * 100.0),
        None => "n/a".to_string(),
    }
}

fn format_hours(seconds: f64) -> String {
    format!("{:.2} h", seconds / SECONDS_PER_HOUR)
}

/// 회수 계산 결과를 표로 출력한다.
pub fn print_recoup(result: &RecoupProjection) {
    println!("Recoup time: {}", result.breakeven_label);
    println!("{}", result.message);
    if result.status != RecoupStatus::Recoups {
        return;
    }
    if let Some(runs) = result.min_runs_for_positive_roi {
        match result.days_until_positive_roi {
            Some(days) => println!("Minimum runs to recoup: {runs} (~{days:.1} days)"),
            None => println!("Minimum runs to recoup: {runs}"),
        }
    }
    println!();
    println!("{:<10} {:>14} {:>14} {:>12}", "Horizon", "Saved", "Net", "ROI");
    for row in &result.horizon_rows {
        println!(
            "{:<10} {:>14} {:>14} {:>12}",
            row.label,
            format_hours(row.total_saved_seconds),
            format_hours(row.net_seconds),
            format_roi(row.roi)
        );
    }
    println!();
    println!("{:<6} {:>14} {:>14}", "Year", "Gross [h]", "Net [h]");
    for point in &result.chart_series {
        println!(
            "{:<6} {:>14.2} {:>14.2}",
            point.year, point.gross_saved_hours, point.net_saved_hours
        );
    }
}

/// 클라우드 비용 비교 결과를 표로 출력한다.
pub fn print_crossover(result: &CrossoverResult, out: &OutputSettings) {
    println!("{}", result.message);
    println!();
    println!("{:<14} {:>16} {:>16}", "Time Deployed", "Solution A", "Solution B");
    for row in std::iter::once(&result.now).chain(&result.horizon_rows) {
        println!(
            "{:<14} {:>16} {:>16}",
            row.label,
            format_money(row.cost_a, out),
            format_money(row.cost_b, out)
        );
    }
}

/// 메뉴 번호를 선택지로 바꾼다.
pub fn parse_menu_choice(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::Recoup),
        "2" => Some(MenuChoice::CloudCost),
        "3" => Some(MenuChoice::Humanize),
        "4" => Some(MenuChoice::UnitConversion),
        "5" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    main_menu_from(&mut io::stdin().lock())
}

/// 주어진 입력에서 메뉴를 읽는다. 입력이 끝나면(EOF) 종료로 본다.
pub fn main_menu_from<R: BufRead>(input: &mut R) -> Result<MenuChoice, AppError> {
    println!("\n=== ROI Toolbox ===");
    println!("1) Process optimization recoup");
    println!("2) Cloud cost crossover");
    println!("3) Humanize seconds");
    println!("4) Time unit conversion");
    println!("5) Settings");
    println!("0) Exit");
    loop {
        let Some(sel) = read_line_from(input, "Select: ")? else {
            debug!("end of input at main menu");
            return Ok(MenuChoice::Exit);
        };
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("Invalid selection, try again."),
        }
    }
}

/// 회수 계산 메뉴를 처리한다. 입력값은 다음 실행의 기본값으로 남긴다.
pub fn handle_recoup(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- Process optimization recoup --");
    let defaults = cfg.recoup.clone();
    let frequency = read_timed_value("How often does it run", defaults.frequency)?;
    let investment = read_timed_value("Time invested (one-time)", defaults.investment)?;
    let saving = read_timed_value("Time saved per run", defaults.saving)?;
    cfg.recoup.frequency = frequency;
    cfg.recoup.investment = investment;
    cfg.recoup.saving = saving;

    let result = crate::recoup::project(&RecoupInput {
        frequency,
        investment,
        saving,
    });
    print_recoup(&result);
    Ok(())
}

/// 클라우드 비용 비교 메뉴를 처리한다.
pub fn handle_cloud_cost(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- Cloud cost crossover --");
    let environments = read_number("Number of environments", f64::from(cfg.cloud.environments))?;
    cfg.cloud.environments = environments.round() as u32;
    println!("Solution A");
    cfg.cloud.solution_a = read_cost_model(cfg.cloud.solution_a)?;
    println!("Solution B");
    cfg.cloud.solution_b = read_cost_model(cfg.cloud.solution_b)?;

    let result = crate::cloud::find_crossover(
        &cfg.cloud.solution_a,
        &cfg.cloud.solution_b,
        cfg.cloud.environments,
    );
    print_crossover(&result, &cfg.output);
    Ok(())
}

/// 초 값을 사람이 읽는 기간으로 보여준다. 음수/무한대도 그대로 받는다.
pub fn handle_humanize() -> Result<(), AppError> {
    let s = read_line("Seconds: ")?;
    let seconds = s.trim().parse::<f64>().unwrap_or(0.0);
    println!("{}", humanize(seconds));
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion() -> Result<(), AppError> {
    println!("\n-- Time unit conversion --");
    println!("Units: {}", unit_list());
    let value = coerce_number(&read_line("Value: ")?);
    let from_unit = read_line("From unit (ex: days): ")?;
    let to_unit = read_line("To unit (ex: hours): ")?;
    let result = conversion::convert(value, from_unit.trim(), to_unit.trim())?;
    println!("Result: {result} {}", to_unit.trim());
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- Settings --");
    println!(
        "Currency symbol: {}, decimals: {}",
        cfg.output.currency_symbol, cfg.output.decimals
    );
    let symbol = read_line("New currency symbol (enter to keep): ")?;
    if !symbol.trim().is_empty() {
        cfg.output.currency_symbol = symbol.trim().to_string();
    }
    let decimals = read_line("Decimal places (enter to keep): ")?;
    if !decimals.trim().is_empty() {
        match decimals.trim().parse::<usize>() {
            Ok(d) => cfg.output.decimals = d,
            Err(_) => println!("Not a whole number, keeping {}.", cfg.output.decimals),
        }
    }
    Ok(())
}

fn unit_list() -> String {
    TimeUnit::ALL
        .iter()
        .map(|u| u.tag())
        .collect::<Vec<_>>()
        .join(", ")
}

/// 한 줄을 읽는다. EOF면 None.
fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let read = input.read_line(&mut buf).map_err(AppError::Io)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

/// EOF는 빈 입력과 같이 취급하여 각 프롬프트의 기본값이 적용된다.
fn read_line(prompt: &str) -> Result<String, AppError> {
    Ok(read_line_from(&mut io::stdin().lock(), prompt)?.unwrap_or_default())
}

/// 빈 입력이면 기본값, 숫자가 아니면 0.
fn read_number(prompt: &str, default: f64) -> Result<f64, AppError> {
    let s = read_line(&format!("{prompt} [{default}]: "))?;
    if s.trim().is_empty() {
        return Ok(default);
    }
    let value = coerce_number(&s);
    if s.trim().parse::<f64>().is_err() {
        warn!("could not parse {:?}, using 0", s.trim());
    }
    Ok(value)
}

fn read_time_unit(default: TimeUnit) -> Result<TimeUnit, AppError> {
    loop {
        let s = read_line(&format!("  unit ({}) [{default}]: ", unit_list()))?;
        if s.trim().is_empty() {
            return Ok(default);
        }
        match parse_time_unit(&s) {
            Ok(unit) => return Ok(unit),
            Err(e) => println!("{e}"),
        }
    }
}

fn read_timed_value(prompt: &str, default: TimedValue) -> Result<TimedValue, AppError> {
    let value = read_number(prompt, default.value)?;
    let unit = read_time_unit(default.unit)?;
    Ok(TimedValue::new(value, unit))
}

fn read_cost_model(default: CostModel) -> Result<CostModel, AppError> {
    Ok(CostModel::new(
        read_number("  Cost per month", default.monthly_cost)?,
        read_number("  Hours worked (one-time)", default.one_time_hours)?,
        read_number("  Cost per hour worked", default.hourly_rate)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_non_finite_and_negative() {
        assert_eq!(sanitize_input(f64::NAN), 0.0);
        assert_eq!(sanitize_input(f64::INFINITY), 0.0);
        assert_eq!(sanitize_input(-3.0), 0.0);
        assert_eq!(sanitize_input(2.5), 2.5);
        assert_eq!(coerce_number("abc"), 0.0);
    }

    #[test]
    fn parses_value_unit_pairs() {
        assert_eq!(
            parse_timed_value("3/days").unwrap(),
            TimedValue::new(3.0, TimeUnit::Days)
        );
        assert_eq!(
            parse_timed_value("5 minutes").unwrap(),
            TimedValue::new(5.0, TimeUnit::Minutes)
        );
        assert_eq!(
            parse_timed_value("1.5h").unwrap(),
            TimedValue::new(1.5, TimeUnit::Hours)
        );
        assert!(parse_timed_value("2/fortnights").is_err());
    }

    #[test]
    fn end_of_input_exits_menu() {
        let mut input = io::Cursor::new("");
        assert_eq!(main_menu_from(&mut input).unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn invalid_selection_is_retried() {
        let mut input = io::Cursor::new("9\nabc\n2\n");
        assert_eq!(main_menu_from(&mut input).unwrap(), MenuChoice::CloudCost);

        // 잘못된 입력 뒤 EOF면 종료
        let mut input = io::Cursor::new("7\n");
        assert_eq!(main_menu_from(&mut input).unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn menu_numbers_map_to_choices() {
        assert_eq!(parse_menu_choice(" 1\n"), Some(MenuChoice::Recoup));
        assert_eq!(parse_menu_choice("0"), Some(MenuChoice::Exit));
        assert_eq!(parse_menu_choice(""), None);
    }

    #[test]
    fn money_and_roi_formatting() {
        let out = OutputSettings::default();
        assert_eq!(format_money(1600.0, &out), "$1600.00");
        assert_eq!(format_money(-5.5, &out), "-$5.50");
        assert_eq!(format_roi(Some(0.25)), "25.00%");
        assert_eq!(format_roi(None), "n/a");
    }
}
