use std::process::ExitCode;

use clap::Parser;
use table_into_gsheet::adapters::config::environment::{environment_values, process_environment};
use table_into_gsheet::adapters::config::flags::CliArgs;
use table_into_gsheet::adapters::config::request::QUERY_STRING_VAR;
use table_into_gsheet::adapters::config::settings::{ParameterError, SettingsSources};
use table_into_gsheet::prettyprint::prettyprint::PrettyFormatter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

mod cli_adapter;

use cli_adapter::{CliAdapter, EXIT_PARAMETERS};

const LOG_FILE: &str = "table_into_gsheet.log";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = setup_tracing() {
        eprintln!("Logging disabled: {e}");
    }
    setup_panic_hook();

    let args = CliArgs::parse();
    let environment = match environment_values(process_environment()) {
        Ok(values) => values,
        Err(report) => {
            tracing::error!("{:?}", report);
            eprintln!("Parameter error: {}", report.current_context());
            return ExitCode::from(EXIT_PARAMETERS);
        }
    };
    let sources = SettingsSources::new(args, std::env::var(QUERY_STRING_VAR).ok(), environment);

    let settings = match sources.resolve() {
        Ok(settings) => settings,
        Err(report) => {
            match report.current_context() {
                ParameterError::NoParameters => eprintln!("Parameter error"),
                other => eprintln!("Parameter error: {other}"),
            }
            return ExitCode::from(EXIT_PARAMETERS);
        }
    };

    tracing::info!(
        "Copying table {} into page {} of {}",
        settings.table,
        settings.page,
        settings.spreadsheet_id
    );
    CliAdapter::new(settings).run().await
}

fn setup_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(true))
        .with_writer(std::io::stderr);

    let log_file_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(false))
        .with_writer(std::sync::Mutex::new(std::fs::File::create(LOG_FILE)?))
        .with_ansi(false);

    Registry::default()
        .with(
            tracing_subscriber::filter::Targets::new()
                .with_target("table_into_gsheet", tracing::Level::TRACE),
        )
        .with(log_file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(())
}

fn setup_panic_hook() {
    tracing::trace!("Setting panic hook");
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}
