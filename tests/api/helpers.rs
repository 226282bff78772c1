use crate::common::init_tracing;
use crate::favorites_stub::FavoritesStub;
use chrono::TimeDelta;
use favorites_acceptance::favorites_client::{AUTH_TOKENS_PATH, FAVORITES_PATH, FavoritesClient};
use favorites_acceptance::suite::SuiteRunner;
use favorites_acceptance::validation::ServerClock;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "4f1e7a0b9c2d";

pub struct TestApi {
    pub server: MockServer,
    pub runner: SuiteRunner,
}

impl TestApi {
    pub fn client(&self) -> &FavoritesClient {
        self.runner.client()
    }
}

pub fn server_clock() -> ServerClock {
    ServerClock::new(chrono_tz::Europe::London, TimeDelta::zero())
}

pub fn auth_response() -> ResponseTemplate {
    ResponseTemplate::new(200).insert_header(
        "Set-Cookie",
        format!("token={}; Path=/; HttpOnly", TEST_TOKEN),
    )
}

pub async fn mount_auth(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(AUTH_TOKENS_PATH))
        .respond_with(auth_response())
        .mount(server)
        .await;
}

pub async fn mount_favorites_stub(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(FAVORITES_PATH))
        .respond_with(FavoritesStub::new(TEST_TOKEN, chrono_tz::Europe::London))
        .mount(server)
        .await;
}

/// A server with nothing mounted; tests mount the mocks they need.
pub async fn spawn_bare_api() -> TestApi {
    init_tracing();
    let server = MockServer::start().await;
    let client = FavoritesClient::new(server.uri(), std::time::Duration::from_secs(2))
        .expect("Failed to build the favorites client.");
    TestApi {
        runner: SuiteRunner::new(client, server_clock()),
        server,
    }
}

/// A server behaving like the real endpoint.
pub async fn spawn_api() -> TestApi {
    let test_api = spawn_bare_api().await;
    mount_auth(&test_api.server).await;
    mount_favorites_stub(&test_api.server).await;
    test_api
}
