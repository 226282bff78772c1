use favorites_acceptance::suite::SuiteReport;
use favorites_acceptance::telemetry::{get_subscriber, init_subscriber};
use std::sync::LazyLock;

// Ensure that the `tracing` stack is only initialised once using `LazyLock`
static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // We cannot assign the output of `get_subscriber` to a variable based on the
    // value of `TEST_LOG` because the sink is part of the type returned by
    // `get_subscriber`, therefore they are not the same type.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to initialise tracing.");
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to initialise tracing.");
    }
});

pub fn init_tracing() {
    LazyLock::force(&TRACING);
}

pub fn assert_report_is_success(report: &SuiteReport, expected_cases: usize) {
    assert!(
        report.is_success(),
        "{} case(s) failed:\n{}",
        report.failed.len(),
        report.failure_summary()
    );
    assert_eq!(report.passed.len(), expected_cases);
}
