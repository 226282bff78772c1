use crate::favorites_client::FavoritesClient;
use crate::suite::SuiteRunner;
use crate::validation::ServerClock;
use anyhow::Context;
use chrono::TimeDelta;
use chrono_tz::Tz;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub api: ApiSettings,
    pub suite: SuiteSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
    /// IANA name of the zone the server renders `created_at` in
    pub server_timezone: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct SuiteSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub created_at_tolerance_seconds: u64,
}

impl ApiSettings {
    pub fn client(&self) -> Result<FavoritesClient, reqwest::Error> {
        FavoritesClient::new(self.base_url.clone(), self.timeout())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn timezone(&self) -> Result<Tz, anyhow::Error> {
        self.server_timezone.parse::<Tz>().map_err(|e| {
            anyhow::anyhow!(
                "Failed to parse server timezone '{}': {}",
                self.server_timezone,
                e
            )
        })
    }
}

impl SuiteSettings {
    pub fn created_at_tolerance(&self) -> Result<TimeDelta, anyhow::Error> {
        i64::try_from(self.created_at_tolerance_seconds)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .context("The created_at tolerance is out of range.")
    }
}

impl Settings {
    pub fn runner(&self) -> Result<SuiteRunner, anyhow::Error> {
        let client = self
            .api
            .client()
            .context("Failed to build the favorites HTTP client.")?;
        let clock = ServerClock::new(self.api.timezone()?, self.suite.created_at_tolerance()?);
        Ok(SuiteRunner::new(client, clock))
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `test` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "test".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_API__BASE_URL=http://127.0.0.1:8000` would set `Settings.api.base_url`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible targets of the suite.
#[derive(Debug)]
pub enum Environment {
    Test,
    Local,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Test => "test",
            Environment::Local => "local",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "test" => Ok(Self::Test),
            "local" => Ok(Self::Local),
            other => Err(format!(
                "{} is not a supported environment. Use either `test` or `local`.",
                other
            )),
        }
    }
}
