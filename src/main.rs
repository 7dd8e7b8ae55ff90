use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gam::cli;
use gam::config::StorePaths;
use gam::render::Style;
use gam::store::AliasStore;

/// Initialize tracing on stderr so stdout only carries command output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "gam=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = cli::parse_from(std::env::args_os());

    let paths = StorePaths::from_env().context("Unable to locate the account store")?;
    tracing::debug!("Using store {:?}", paths);

    let store = AliasStore::new(paths);
    if store.initialize().with_context(|| {
        format!(
            "Failed to create store directory {}",
            store.paths().store_dir.display()
        )
    })? {
        println!("Initializing...");
    }

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let outcome = cli::run(
        cli,
        &store,
        Style::detect(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;

    Ok(outcome.exit_code())
}
