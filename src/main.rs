use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use focus_lint::config::{Args, Config, OutputFormat};
use focus_lint::report::{render_json, render_text, SourceReport};

/// Overall result of a run, most severe first
enum RunStatus {
    InputError,
    Failed,
    Passed,
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level.as_str()),
    )
    .init();

    match run(args) {
        Ok(RunStatus::Passed) => ExitCode::SUCCESS,
        Ok(RunStatus::Failed) => ExitCode::from(1),
        Ok(RunStatus::InputError) => ExitCode::from(2),
        Err(e) => {
            eprintln!("focus-lint: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Check every input independently, then print one report
fn run(args: Args) -> Result<RunStatus> {
    // Merge command line with the config file
    let config = Config::from_args(args)?;

    let checker = config.checker();
    log::debug!("enabled rules: {:?}", checker.rule_ids());

    let mut reports = Vec::with_capacity(config.inputs.len());
    let mut unreadable = 0;
    for input in &config.inputs {
        let markup = match input.read() {
            Ok(markup) => markup,
            Err(e) => {
                eprintln!("focus-lint: {:#}", e);
                unreadable += 1;
                continue;
            }
        };
        let report = checker.check(&markup);
        log::info!(
            "{}: {} diagnostic(s)",
            input.name(),
            report.diagnostics.len()
        );
        reports.push(SourceReport::new(input.name(), report));
    }

    match config.format {
        OutputFormat::Text => print!("{}", render_text(&reports)),
        OutputFormat::Json => println!("{}", render_json(&reports)?),
    }

    Ok(if unreadable > 0 {
        RunStatus::InputError
    } else if reports.iter().all(|report| report.passed) {
        RunStatus::Passed
    } else {
        RunStatus::Failed
    })
}
