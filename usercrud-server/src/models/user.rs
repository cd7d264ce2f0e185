//! User record, request payload and primary key

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// User row as stored in the `users` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Body accepted by create and update.
///
/// Missing fields decode to empty strings; nothing rejects them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// User as rendered on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            created_at: u.created_at.to_rfc3339(),
        }
    }
}

/// Primary key of a user, parsed from the `{id}` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Parse a path segment into a key.
    ///
    /// Accepts an optional sign followed by decimal digits.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        raw.parse::<i64>().map(Self).map_err(|_| ValidationError::InvalidFormat {
            field: "id",
            reason: "expected an integer",
        })
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parse_accepts_signed_integers() {
        assert_eq!(UserId::parse("42").unwrap().get(), 42);
        assert_eq!(UserId::parse("+7").unwrap().get(), 7);
        assert_eq!(UserId::parse("-3").unwrap().get(), -3);
    }

    #[test]
    fn parse_rejects_non_numeric() {
        for raw in ["", "abc", "1.5", " 1", "1e3", "99999999999999999999"] {
            assert!(UserId::parse(raw).is_err(), "{raw:?} should not parse");
        }
    }

    #[test]
    fn payload_fields_default_to_empty() {
        let p: UserPayload = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
        assert_eq!(p.name, "Ana");
        assert_eq!(p.email, "");

        let p: UserPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(p, UserPayload::default());
    }

    #[test]
    fn payload_ignores_server_owned_fields() {
        let p: UserPayload =
            serde_json::from_str(r#"{"id":9,"name":"Ana","email":"ana@x.com","created_at":"x"}"#)
                .unwrap();
        assert_eq!(p.name, "Ana");
        assert_eq!(p.email, "ana@x.com");
    }

    #[test]
    fn response_renders_rfc3339_timestamp() {
        let user = User {
            id: 1,
            name: "Ana".into(),
            email: "ana@x.com".into(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        };
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Ana",
                "email": "ana@x.com",
                "created_at": "2024-05-01T12:30:00+00:00"
            })
        );
    }
}
