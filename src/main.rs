use anyhow::Context;
use favorites_acceptance::configuration::get_configuration;
use favorites_acceptance::suite::all_cases;
use favorites_acceptance::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber(
        "favorites-acceptance".into(),
        "info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber)?;

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let runner = configuration.runner()?;

    // Optional substring filter on case names, e.g. `lat_rejected`
    let filter = std::env::args().nth(1);
    let cases: Vec<_> = all_cases()
        .into_iter()
        .filter(|case| filter.as_deref().is_none_or(|f| case.name.contains(f)))
        .collect();
    tracing::info!(
        base_url = %runner.client().base_url(),
        cases = cases.len(),
        "Running favorites acceptance suite"
    );

    let report = runner.run_all(&cases).await;
    tracing::info!(
        passed = report.passed.len(),
        failed = report.failed.len(),
        "Favorites acceptance suite finished"
    );
    if !report.is_success() {
        anyhow::bail!(
            "{} of {} cases failed:\n{}",
            report.failed.len(),
            cases.len(),
            report.failure_summary()
        );
    }
    Ok(())
}
