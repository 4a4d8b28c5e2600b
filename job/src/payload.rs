//! Parsing of the fetched task response into typed values.
//!
//! The response's `data.users` comes in two shapes: a flat array of user
//! records, or an object grouping the array with `findId` and `n`. The shape
//! is resolved here once into [`UsersPayload`].

use follow_graph_core::{NodeId, UserRecord};
use serde_json::Value;
use tracing::warn;

use crate::error::{JobError, Result};
use crate::util::{as_node_id, optional_int};

/// `data.users`, resolved by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsersPayload {
    Raw(Vec<UserRecord>),
    Grouped {
        users: Vec<UserRecord>,
        find_id: Option<NodeId>,
        n: Option<i64>,
    },
}

impl UsersPayload {
    pub fn users(&self) -> &[UserRecord] {
        match self {
            UsersPayload::Raw(users) => users,
            UsersPayload::Grouped { users, .. } => users,
        }
    }

    pub fn into_users(self) -> Vec<UserRecord> {
        match self {
            UsersPayload::Raw(users) => users,
            UsersPayload::Grouped { users, .. } => users,
        }
    }
}

/// The fetched task: where to deliver, how to authenticate, what to analyse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPayload {
    pub webhook: String,
    pub access_token: String,
    pub users: UsersPayload,
}

/// Parse the raw response body of the fetch call.
pub fn parse_response_body(body: &str) -> Result<TaskPayload> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| JobError::Fetch(format!("response is not JSON: {}", e)))?;
    parse_task(&value)
}

/// Parse the fetched JSON tree.
pub fn parse_task(value: &Value) -> Result<TaskPayload> {
    let object = match value {
        Value::Null => return Err(JobError::Fetch("empty response".to_string())),
        Value::Object(o) => o,
        other => {
            return Err(JobError::Fetch(format!(
                "expected a JSON object, got {}",
                json_type(other)
            )))
        }
    };

    let webhook = object.get("webhook").and_then(Value::as_str);
    let access_token = object.get("accessToken").and_then(Value::as_str);
    let (Some(webhook), Some(access_token)) = (webhook, access_token) else {
        return Err(JobError::Fetch(
            "response missing webhook URL or access token".to_string(),
        ));
    };

    let data = object
        .get("data")
        .and_then(Value::as_object)
        .ok_or_else(|| JobError::InputShape("missing data object".to_string()))?;

    let users = match data.get("users") {
        Some(Value::Array(records)) => UsersPayload::Raw(parse_users(records)),
        Some(Value::Object(group)) => {
            let records = group
                .get("users")
                .and_then(Value::as_array)
                .ok_or_else(|| {
                    JobError::InputShape("grouped users missing users array".to_string())
                })?;
            UsersPayload::Grouped {
                users: parse_users(records),
                find_id: optional_int(group, "findId"),
                n: optional_int(group, "n"),
            }
        }
        Some(other) => {
            return Err(JobError::InputShape(format!(
                "data.users must be an array or object, got {}",
                json_type(other)
            )))
        }
        None => return Err(JobError::InputShape("missing data.users".to_string())),
    };

    Ok(TaskPayload {
        webhook: webhook.to_string(),
        access_token: access_token.to_string(),
        users,
    })
}

/// Parse user records, skipping any without an integer `id`.
fn parse_users(records: &[Value]) -> Vec<UserRecord> {
    let mut users = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let Some(id) = record.get("id").and_then(as_node_id) else {
            warn!(index, record = %record, "skipping user record without integer id");
            continue;
        };
        let follows = record
            .get("follows")
            .and_then(Value::as_array)
            .map(|f| f.iter().filter_map(as_node_id).collect())
            .unwrap_or_default();
        users.push(UserRecord { id, follows });
    }
    users
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
