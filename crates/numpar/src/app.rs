//! Application entry point and dispatch.

use anyhow::{Context, Result};

use numpar_cli::output::{format_sequence, format_value, write_to_file};
use numpar_cli::presenter::CLIResultPresenter;
use numpar_core::constants::COMPARISON_TOLERANCE;
use numpar_core::fibonacci::generate_sequence;
use numpar_core::registry::DefaultFactory;
use numpar_orchestration::calculator_selection::get_calculators_to_run;
use numpar_orchestration::interfaces::ResultPresenter;
use numpar_orchestration::orchestrator::{analyze_comparison_results, execute_calculations};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        numpar_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if let Some(terms) = config.fibonacci {
        return run_fibonacci(config, terms);
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let opts = config.options();
    let factory = DefaultFactory::new();
    let calculators = get_calculators_to_run(&config.algo, &factory)?;

    let mut results = execute_calculations(&calculators, config.intervals, &opts);

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    for result in &results {
        if let Ok(approx) = &result.outcome {
            presenter.present_result(
                &result.algorithm,
                config.intervals,
                approx,
                result.duration,
                config.details,
            );
        }
    }

    if results.len() > 1 {
        presenter.present_comparison(&results);
    }

    if let Some(path) = &config.output {
        if let Some(value) = results.iter().find_map(|r| r.value()) {
            write_to_file(path, &format_value(value))
                .with_context(|| format!("writing result to {}", path.display()))?;
        }
    }

    if let Some(pos) = results.iter().position(|r| r.outcome.is_err()) {
        let failed = results.swap_remove(pos);
        if let Err(err) = failed.outcome {
            return Err(anyhow::Error::new(err).context(failed.algorithm));
        }
    }

    if results.len() > 1 {
        analyze_comparison_results(&results, COMPARISON_TOLERANCE)?;
    }

    Ok(())
}

fn run_fibonacci(config: &AppConfig, terms: usize) -> Result<()> {
    let sequence = generate_sequence(terms)?;

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    presenter.present_sequence(&sequence);

    if let Some(path) = &config.output {
        write_to_file(path, &format_sequence(&sequence))
            .with_context(|| format!("writing sequence to {}", path.display()))?;
    }
    Ok(())
}
