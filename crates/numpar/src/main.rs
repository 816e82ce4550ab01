//! numpar: parallel midpoint integration of pi.

use std::process::ExitCode;

use numpar_cli::presenter::CLIResultPresenter;
use numpar_lib::{app, config, errors};
use numpar_orchestration::interfaces::ResultPresenter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
            presenter.present_error(&format!("{err:#}"));
            ExitCode::from(u8::try_from(errors::exit_code(&err)).unwrap_or(1))
        }
    }
}
