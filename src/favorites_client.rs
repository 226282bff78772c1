use crate::domain::FavoriteDraft;
use reqwest::Client;
use reqwest::header::COOKIE;
use secrecy::{ExposeSecret, Secret};

pub const AUTH_TOKENS_PATH: &str = "/v1/auth/tokens";
pub const FAVORITES_PATH: &str = "/v1/favorites";
pub const TOKEN_COOKIE_NAME: &str = "token";

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("Connection error by server.")]
    Connection(#[source] reqwest::Error),
    #[error("There is no token in the response (status {0}).")]
    MissingToken(u16),
}

/// Opaque session token issued by the auth endpoint.
#[derive(Debug)]
pub struct SessionCredential(Secret<String>);

impl SessionCredential {
    pub fn new(token: Secret<String>) -> Self {
        Self(token)
    }

    fn cookie_header(&self) -> String {
        format!("{}={}", TOKEN_COOKIE_NAME, self.0.expose_secret())
    }
}

/// Status and body text of an endpoint reply, before any interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Clone, Debug)]
pub struct FavoritesClient {
    base_url: String,
    http_client: Client,
}

impl FavoritesClient {
    pub fn new(base_url: String, timeout: std::time::Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[tracing::instrument(name = "Requesting a session credential", skip(self), fields(base_url = %self.base_url))]
    pub async fn authenticate(&self) -> Result<SessionCredential, AuthError> {
        let url = format!("{}{}", self.base_url, AUTH_TOKENS_PATH);
        let response = self
            .http_client
            .post(&url)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach the auth endpoint: {:?}", e);
                AuthError::Connection(e)
            })?;
        let status = response.status().as_u16();
        let token = response
            .cookies()
            .find(|cookie| cookie.name() == TOKEN_COOKIE_NAME)
            .map(|cookie| cookie.value().to_string());
        token
            .map(|token| SessionCredential(Secret::new(token)))
            .ok_or(AuthError::MissingToken(status))
    }

    #[tracing::instrument(
        name = "Submitting a favorite",
        skip(self, credential, draft),
        fields(
            title_length = draft.title.chars().count(),
            lat = draft.lat,
            lon = draft.lon,
            color = ?draft.color
        )
    )]
    pub async fn post_favorite(
        &self,
        credential: &SessionCredential,
        draft: &FavoriteDraft,
    ) -> Result<RawResponse, reqwest::Error> {
        let url = format!("{}{}", self.base_url, FAVORITES_PATH);
        let response = self
            .http_client
            .post(&url)
            .header(COOKIE, credential.cookie_header())
            .form(&draft.form_fields())
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!(status, %body, "Received favorites response");
        Ok(RawResponse { status, body })
    }
}
