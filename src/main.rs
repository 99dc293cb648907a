use clap::Parser;
use roi_toolbox::{app, config};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 서브커맨드 또는 대화형 메뉴를 실행한다.
fn main() {
    let cli = app::Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(err) = try_run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: app::Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    match cli.command {
        Some(command) => app::run_command(command, &cfg, cli.json)?,
        None => app::run_interactive(&mut cfg, &cli.config)?,
    }
    Ok(())
}
