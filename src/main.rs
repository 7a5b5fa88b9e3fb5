use product_recommender::config::{LoggingSettings, Settings};
use product_recommender::{render, sample_catalog, AppResult, PreferencePrompt, Recommender};
use std::io::{self, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn run(settings: &Settings) -> AppResult<()> {
    let catalog = sample_catalog();
    let recommender = Recommender::new(settings.ranking.tie_break);

    info!(
        products = catalog.len(),
        tie_break = ?recommender.tie_break(),
        "Catalog loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let preferences = PreferencePrompt::new(stdin.lock(), stdout.lock()).collect()?;

    let results = recommender.recommend(&catalog, &preferences);
    let rendered = render(&results, settings.output.format)?;

    let mut out = stdout.lock();
    write!(out, "{rendered}")?;
    out.flush()?;

    Ok(())
}

fn main() -> AppResult<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    init_logging(&settings.logging);

    run(&settings).map_err(|e| {
        error!("Recommendation run failed: {}", e);
        e
    })
}
