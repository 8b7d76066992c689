use clap::Parser;
use portfolio_ui::cli::{utils::output_error, Cli, OutputFormat};
use portfolio_ui::UiError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up APP_ENV, TOAST_CAPACITY, etc.
    let _ = dotenvy::dotenv();

    let config = portfolio_ui::config::config();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.filter.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    tracing::debug!("Starting portfolio CLI in {:?} mode", config.environment);

    let cli = Cli::parse();
    let output_format = OutputFormat::from_cli(&cli);

    if let Err(e) = portfolio_ui::cli::run(cli).await {
        let code = e.downcast_ref::<UiError>().map(UiError::error_code);
        match output_format {
            OutputFormat::Json => output_error(&output_format, &e.to_string(), code)?,
            OutputFormat::Text => match std::env::var("CLI_VERBOSE").as_deref() {
                Ok("true") | Ok("1") => eprintln!("Error: {e:?}"),
                _ => eprintln!("Error: {e}"),
            },
        }
        std::process::exit(1);
    }

    Ok(())
}
