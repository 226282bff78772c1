//! Checks a favorites endpoint reply against what the submitted draft implies.
//!
//! Accepted drafts must come back as a complete record echoing every
//! submitted value, stamped with the server's current minute. Rejected drafts
//! must come back as a 400 carrying the localized message of the violated rule.
use crate::domain::{ConstraintViolation, Expectation, Favorite, FavoriteDraft};
use crate::favorites_client::RawResponse;
use chrono::{DateTime, LocalResult, NaiveDateTime, TimeDelta, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde_json::Value;

/// Fields every created favorite must carry, `color` included even when null.
pub const REQUIRED_FIELDS: [&str; 6] = ["id", "title", "lat", "lon", "color", "created_at"];

const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(thiserror::Error, Debug)]
pub enum ValidationFailure {
    #[error("Unexpected status code {actual} (expected {expected}). Response text is '{body}'")]
    UnexpectedStatus {
        expected: u16,
        actual: u16,
        body: String,
    },
    #[error("Response is not in JSON format. Response text is '{body}'")]
    NotJson {
        body: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("The '{0}' field is missed")]
    MissingField(&'static str),
    #[error("The response is not a favorite record")]
    UnexpectedShape(#[source] serde_json::Error),
    #[error("The 'id' value {0} is not positive")]
    NonPositiveId(i64),
    #[error("The '{field}' value {actual} is not equal to the submitted {expected}")]
    Mismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },
    #[error(
        "Unexpected time in 'created_at': {actual} is outside {earliest}..={latest} ({timezone})"
    )]
    UnexpectedCreatedAt {
        actual: String,
        earliest: String,
        latest: String,
        timezone: String,
    },
    #[error("There is no 'error.message' for a wrong request")]
    MissingErrorMessage,
    #[error("The error message '{actual}' does not contain '{expected}'")]
    WrongErrorMessage { expected: String, actual: String },
}

/// How a reply was classified once every check passed.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Created(Favorite),
    Rejected(ConstraintViolation),
}

/// Client clock readings taken around the favorites request.
#[derive(Debug, Clone, Copy)]
pub struct CreationWindow {
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
}

impl CreationWindow {
    pub fn new(started: DateTime<Utc>, finished: DateTime<Utc>) -> Self {
        Self { started, finished }
    }
}

/// Reference for reading server timestamps.
#[derive(Debug, Clone, Copy)]
pub struct ServerClock {
    pub timezone: Tz,
    /// Widens the creation window on both sides.
    pub tolerance: TimeDelta,
}

impl ServerClock {
    pub fn new(timezone: Tz, tolerance: TimeDelta) -> Self {
        Self {
            timezone,
            tolerance,
        }
    }

    fn local_minute(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.timezone)
            .format(MINUTE_FORMAT)
            .to_string()
    }

    /// Instants a `created_at` value may denote. Values carrying an offset
    /// are converted; naive values are server-local and resolve to two
    /// instants inside the autumn fold and to none inside the spring gap.
    fn created_at_instants(&self, created_at: &str) -> Vec<DateTime<Utc>> {
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(created_at) {
            return vec![timestamp.with_timezone(&Utc)];
        }
        let Ok(naive) = NaiveDateTime::parse_from_str(created_at, "%Y-%m-%dT%H:%M:%S%.f") else {
            return Vec::new();
        };
        match self.timezone.from_local_datetime(&naive) {
            LocalResult::Single(timestamp) => vec![timestamp.with_timezone(&Utc)],
            LocalResult::Ambiguous(first, second) => {
                vec![first.with_timezone(&Utc), second.with_timezone(&Utc)]
            }
            LocalResult::None => Vec::new(),
        }
    }
}

fn truncate_to_minute(instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
    instant.with_second(0)?.with_nanosecond(0)
}

#[tracing::instrument(
    name = "Validating favorites response",
    skip(draft, response, window, clock),
    fields(status = response.status)
)]
pub fn validate_response(
    draft: &FavoriteDraft,
    response: &RawResponse,
    window: &CreationWindow,
    clock: &ServerClock,
) -> Result<Verdict, ValidationFailure> {
    match draft.expectation() {
        Expectation::Accepted => {
            validate_created(draft, response, window, clock).map(Verdict::Created)
        }
        Expectation::Rejected(violation) => {
            validate_rejected(violation, response).map(|_| Verdict::Rejected(violation))
        }
    }
}

pub fn validate_created(
    draft: &FavoriteDraft,
    response: &RawResponse,
    window: &CreationWindow,
    clock: &ServerClock,
) -> Result<Favorite, ValidationFailure> {
    expect_status(response, 200)?;
    let body = parse_json(response)?;
    if let Some(missing) = REQUIRED_FIELDS
        .into_iter()
        .find(|field| body.get(field).is_none())
    {
        return Err(ValidationFailure::MissingField(missing));
    }
    // Checked on the raw value so that a color outside the known set is still
    // reported as a color mismatch
    let echoed_color = &body["color"];
    if echoed_color.as_str() != draft.color.as_deref()
        || !(echoed_color.is_string() || echoed_color.is_null())
    {
        return Err(mismatch(
            "color",
            draft.color.as_deref().unwrap_or("null"),
            echoed_color.as_str().map_or_else(|| echoed_color.to_string(), str::to_string),
        ));
    }
    let favorite: Favorite =
        serde_json::from_value(body).map_err(ValidationFailure::UnexpectedShape)?;

    if favorite.id <= 0 {
        return Err(ValidationFailure::NonPositiveId(favorite.id));
    }
    if favorite.title != draft.title {
        return Err(mismatch("title", &draft.title, &favorite.title));
    }
    if favorite.lat != draft.lat {
        return Err(mismatch("lat", draft.lat, favorite.lat));
    }
    if favorite.lon != draft.lon {
        return Err(mismatch("lon", draft.lon, favorite.lon));
    }
    check_created_at(&favorite.created_at, window, clock)?;
    Ok(favorite)
}

pub fn validate_rejected(
    violation: ConstraintViolation,
    response: &RawResponse,
) -> Result<(), ValidationFailure> {
    expect_status(response, 400)?;
    let body = parse_json(response)?;
    let message = body
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(Value::as_str)
        .ok_or(ValidationFailure::MissingErrorMessage)?;
    let expected = violation.to_string();
    if !message.contains(&expected) {
        return Err(ValidationFailure::WrongErrorMessage {
            expected,
            actual: message.to_string(),
        });
    }
    Ok(())
}

fn expect_status(response: &RawResponse, expected: u16) -> Result<(), ValidationFailure> {
    if response.status != expected {
        return Err(ValidationFailure::UnexpectedStatus {
            expected,
            actual: response.status,
            body: response.body.clone(),
        });
    }
    Ok(())
}

fn parse_json(response: &RawResponse) -> Result<Value, ValidationFailure> {
    serde_json::from_str(&response.body).map_err(|source| ValidationFailure::NotJson {
        body: response.body.clone(),
        source,
    })
}

fn mismatch(
    field: &'static str,
    expected: impl std::fmt::Display,
    actual: impl std::fmt::Display,
) -> ValidationFailure {
    ValidationFailure::Mismatch {
        field,
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}

fn check_created_at(
    created_at: &str,
    window: &CreationWindow,
    clock: &ServerClock,
) -> Result<(), ValidationFailure> {
    let earliest = window.started - clock.tolerance;
    let latest = window.finished + clock.tolerance;
    let within = match (truncate_to_minute(earliest), truncate_to_minute(latest)) {
        (Some(first_minute), Some(last_minute)) => clock
            .created_at_instants(created_at)
            .into_iter()
            .filter_map(truncate_to_minute)
            .any(|minute| first_minute <= minute && minute <= last_minute),
        _ => false,
    };
    if within {
        return Ok(());
    }
    Err(ValidationFailure::UnexpectedCreatedAt {
        actual: created_at.to_string(),
        earliest: clock.local_minute(earliest),
        latest: clock.local_minute(latest),
        timezone: clock.timezone.name().to_string(),
    })
}
