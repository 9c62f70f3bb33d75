use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{SkillId, SwapRequestId};
use crate::error::ValidationError;

/// Lifecycle state of a swap request. Only `Pending` exists; nothing moves a
/// request out of it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapStatus {
    #[default]
    Pending,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRequest {
    pub id: SwapRequestId,
    pub from_user: String,
    pub to_user: String,
    pub skill_id: SkillId,
    pub status: SwapStatus,
    pub created_at: DateTime<Utc>,
}

/// Validated body of `POST /swap_requests`.
///
/// The skill id is not checked against the catalog and the user names are
/// taken as-is; only presence and JSON type are enforced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewSwapRequest {
    pub from_user: String,
    pub to_user: String,
    pub skill_id: SkillId,
}

impl NewSwapRequest {
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let fields = body.as_object().ok_or(ValidationError::NotAnObject)?;
        Ok(Self {
            from_user: required_str(fields, "from_user")?,
            to_user: required_str(fields, "to_user")?,
            skill_id: required_field(fields, "skill_id")?
                .as_i64()
                .ok_or(ValidationError::InvalidField {
                    field: "skill_id",
                    expected: "an integer",
                })?,
        })
    }
}

fn required_field<'a>(
    fields: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, ValidationError> {
    match fields.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(value) => Ok(value),
    }
}

fn required_str(fields: &Map<String, Value>, field: &'static str) -> Result<String, ValidationError> {
    required_field(fields, field)?
        .as_str()
        .map(String::from)
        .ok_or(ValidationError::InvalidField {
            field,
            expected: "a string",
        })
}
