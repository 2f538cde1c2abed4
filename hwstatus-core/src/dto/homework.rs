//! Homework status DTOs
//!
//! Wire format of the homework status API and validation of a raw JSON
//! answer into domain items.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::homework::TrackedItem;
use crate::error::{Error, Result};

/// Key holding the homework list in the API answer
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Key holding the server-side poll timestamp
pub const CURRENT_DATE_KEY: &str = "current_date";

/// One entry of the `homeworks` array
#[derive(Debug, Clone, Deserialize)]
pub struct HomeworkRecord {
    /// Homework name as shown to the user
    pub homework_name: String,

    /// Raw review status code
    pub status: String,
}

impl From<HomeworkRecord> for TrackedItem {
    fn from(record: HomeworkRecord) -> Self {
        TrackedItem::new(record.homework_name, record.status)
    }
}

/// Validated, non-empty answer of the status API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    items: Vec<TrackedItem>,
    poll_timestamp: Option<i64>,
}

impl ApiResponse {
    /// Items in API order; the first one is the most recent
    pub fn items(&self) -> &[TrackedItem] {
        &self.items
    }

    pub fn latest(&self) -> &TrackedItem {
        &self.items[0]
    }

    pub fn poll_timestamp(&self) -> Option<i64> {
        self.poll_timestamp
    }

    pub fn polled_at(&self) -> Option<DateTime<Utc>> {
        self.poll_timestamp
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
    }
}

/// Outcome of validating one API answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Homeworks {
    /// Valid answer with nothing to report yet
    Empty { poll_timestamp: Option<i64> },

    /// At least one homework was returned
    Items(ApiResponse),
}

/// Validates a raw API answer and extracts its homeworks
///
/// Undocumented status codes are kept and tagged `Unknown`; only the shape of
/// the answer is checked here.
pub fn validate(raw: &Value) -> Result<Homeworks> {
    let object = raw.as_object().ok_or_else(|| {
        Error::Schema(format!("expected a JSON object, got {}", type_name(raw)))
    })?;

    let homeworks = object
        .get(HOMEWORKS_KEY)
        .ok_or_else(|| Error::Schema(format!("missing \"{}\" key", HOMEWORKS_KEY)))?;

    let entries = homeworks.as_array().ok_or_else(|| {
        Error::Schema(format!(
            "\"{}\" must be an array, got {}",
            HOMEWORKS_KEY,
            type_name(homeworks)
        ))
    })?;

    let poll_timestamp = object.get(CURRENT_DATE_KEY).and_then(Value::as_i64);

    if entries.is_empty() {
        return Ok(Homeworks::Empty { poll_timestamp });
    }

    let items = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<HomeworkRecord>(entry.clone())
                .map(TrackedItem::from)
                .map_err(|e| Error::Schema(format!("homework #{}: {}", index, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Homeworks::Items(ApiResponse {
        items,
        poll_timestamp,
    }))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
