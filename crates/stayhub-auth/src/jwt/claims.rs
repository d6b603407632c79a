//! JWT claims structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stayhub_entity::user::UserRole;

/// JWT claims payload embedded in every token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the username).
    pub sub: String,
    /// User ID for direct lookups.
    pub uid: Uuid,
    /// User role at the time of token issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Returns true if the token's expiration is in the past.
    pub fn is_expired(&self) -> bool {
        self.expires_at() <= Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_at_converts_exp_seconds() {
        let claims = Claims {
            sub: "alice".to_string(),
            uid: Uuid::new_v4(),
            role: UserRole::User,
            iat: 1_700_000_000,
            exp: 1_700_003_600,
        };
        assert_eq!(claims.expires_at().timestamp(), 1_700_003_600);
    }
}
