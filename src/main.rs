use l10n_csv_fill::{run, AppConfig, FillError};
use tracing_subscriber::{filter::Directive, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CONFIG_FILE: &str = "l10n-csv-fill.toml";
const DEFAULT_DIRECTIVE: &str = "l10n_csv_fill=info";

fn main() -> anyhow::Result<()> {
    let (config, config_error) = AppConfig::load_or_default(CONFIG_FILE);

    let (directive, level_error) = match config.log_directive().parse::<Directive>() {
        Ok(directive) => (directive, None),
        Err(e) => (DEFAULT_DIRECTIVE.parse()?, Some(e)),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(directive))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match config_error {
        None => tracing::info!(path = CONFIG_FILE, "Loaded configuration"),
        Some(FillError::FileNotFound(_)) => tracing::debug!("No configuration file, using defaults"),
        Some(e) => tracing::warn!(error = %e, "Ignoring configuration file, using defaults"),
    }
    if let Some(e) = level_error {
        tracing::warn!(
            level = %config.logging.level,
            error = %e,
            "Invalid logging level, using info"
        );
    }

    let report = run(&config)?;
    tracing::debug!("Fill report: {}", serde_json::to_string(&report)?);

    println!(
        "English translations added to {}",
        config.files.output_path().display()
    );
    Ok(())
}
