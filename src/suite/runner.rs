use crate::domain::FavoriteDraft;
use crate::favorites_client::{AuthError, FavoritesClient, SessionCredential};
use crate::suite::matrix::TestCase;
use crate::telemetry::error_chain_fmt;
use crate::validation::{CreationWindow, ServerClock, ValidationFailure, Verdict, validate_response};
use chrono::Utc;

#[derive(thiserror::Error)]
pub enum CaseFailure {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("Failed to submit the favorite.")]
    Transport(#[source] reqwest::Error),
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
}

impl std::fmt::Debug for CaseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(Debug, Default)]
pub struct SuiteReport {
    pub passed: Vec<String>,
    pub failed: Vec<(String, CaseFailure)>,
}

impl SuiteReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// One line per failed case, for assertion messages.
    pub fn failure_summary(&self) -> String {
        self.failed
            .iter()
            .map(|(name, failure)| format!("{}: {}", name, failure))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone)]
pub struct SuiteRunner {
    client: FavoritesClient,
    clock: ServerClock,
}

impl SuiteRunner {
    pub fn new(client: FavoritesClient, clock: ServerClock) -> Self {
        Self { client, clock }
    }

    pub fn client(&self) -> &FavoritesClient {
        &self.client
    }

    /// Authenticates with a fresh credential, then submits and validates the
    /// case's draft.
    #[tracing::instrument(
        name = "Running acceptance case",
        skip(self, case),
        fields(case = %case.name, category = %case.category)
    )]
    pub async fn run_case(&self, case: &TestCase) -> Result<Verdict, CaseFailure> {
        let credential = self.client.authenticate().await?;
        self.submit_and_validate(&credential, &case.draft).await
    }

    pub async fn submit_and_validate(
        &self,
        credential: &SessionCredential,
        draft: &FavoriteDraft,
    ) -> Result<Verdict, CaseFailure> {
        let started = Utc::now();
        let response = self
            .client
            .post_favorite(credential, draft)
            .await
            .map_err(CaseFailure::Transport)?;
        let window = CreationWindow::new(started, Utc::now());
        let verdict = validate_response(draft, &response, &window, &self.clock)?;
        Ok(verdict)
    }

    /// Runs every case in order; a failing case never stops the rest.
    pub async fn run_all(&self, cases: &[TestCase]) -> SuiteReport {
        let mut report = SuiteReport::default();
        for case in cases {
            match self.run_case(case).await {
                Ok(verdict) => {
                    tracing::info!(case = %case.name, ?verdict, "Case passed");
                    report.passed.push(case.name.clone());
                }
                Err(e) => {
                    tracing::error!(
                        case = %case.name,
                        error.cause_chain = ?e,
                        error.message = %e,
                        "Case failed"
                    );
                    report.failed.push((case.name.clone(), e));
                }
            }
        }
        report
    }
}
