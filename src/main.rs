//! recycle_rewards - Recycling Rewards Console
//!
//! Registers citizens, records waste deposits under a swappable scoring
//! policy and reports per zone and system-wide. All state lives in memory
//! for the lifetime of the process.

use std::io;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recycle_rewards::console::{Console, ConsoleSettings};
use recycle_rewards::store::InMemoryCitizenStore;
use recycle_rewards::{seed, Config, LogFormat, ManagementService};

/// Initialize tracing/logging. Logs go to stderr so they never interleave
/// with the menu on stdout.
fn init_tracing(format: LogFormat) {
    let registry = tracing_subscriber::registry().with(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "recycle_rewards=info".into()),
    );

    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init(),
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(config.log_format);

    tracing::info!(policy = config.scoring_policy.as_str(), "Starting recycle_rewards");

    let mut service = ManagementService::new(InMemoryCitizenStore::new(), config.scoring_policy);

    if config.seed_demo_data {
        if let Err(e) = seed::load_demo_data(&mut service) {
            tracing::warn!(error = %e, "Failed to load demo data, continuing without it");
        }
    }

    let stdin = io::stdin();
    let mut console = Console::new(
        stdin.lock(),
        io::stdout(),
        ConsoleSettings::from(&config),
    );
    console.run(&mut service)?;

    tracing::info!(
        audit_entries = service.audit_log().len(),
        "Session finished. Goodbye!"
    );

    Ok(())
}
