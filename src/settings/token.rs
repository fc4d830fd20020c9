//! Inspection of IONOS Cloud JWT tokens

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{IonosError, Result};

/// Claims carried in the payload of an IONOS Cloud token
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    /// Expiry as a unix timestamp
    pub exp: Option<i64>,
    /// Issue time as a unix timestamp
    pub iat: Option<i64>,
    #[serde(default)]
    pub identity: Option<TokenIdentity>,
}

/// Identity section of the token payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenIdentity {
    pub uuid: Option<String>,
    pub contract_number: Option<u64>,
    pub role: Option<String>,
}

impl TokenClaims {
    /// Decode the payload (second segment) of a JWT without verifying it
    pub fn parse(token: &str) -> Result<Self> {
        let payload = token
            .split('.')
            .nth(1)
            .ok_or_else(|| IonosError::Config("Token is not a JWT".to_string()))?;

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| IonosError::Config(format!("Token payload is not base64: {}", e)))?;

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Expiry time, if the token carries one
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// Issue time, if the token carries one
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.iat.and_then(|iat| DateTime::from_timestamp(iat, 0))
    }

    /// Whether the token has expired at the given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|exp| exp <= now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{}.{}.signature", header, body)
    }

    #[test]
    fn test_parse_claims() {
        let token = make_token(&serde_json::json!({
            "iss": "ionoscloud",
            "iat": 1_700_000_000,
            "exp": 1_731_536_000,
            "identity": {
                "uuid": "c5b3b8b6-0000-4000-8000-000000000000",
                "contractNumber": 31_000_000,
                "role": "owner"
            }
        }));

        let claims = TokenClaims::parse(&token).unwrap();
        assert_eq!(claims.exp, Some(1_731_536_000));
        let identity = claims.identity.unwrap();
        assert_eq!(identity.contract_number, Some(31_000_000));
        assert_eq!(identity.role.as_deref(), Some("owner"));
    }

    #[test]
    fn test_expiry_check() {
        let token = make_token(&serde_json::json!({ "exp": 1_000 }));
        let claims = TokenClaims::parse(&token).unwrap();
        let later = DateTime::from_timestamp(2_000, 0).unwrap();
        let earlier = DateTime::from_timestamp(500, 0).unwrap();
        assert!(claims.is_expired_at(later));
        assert!(!claims.is_expired_at(earlier));
    }

    #[test]
    fn test_no_exp_never_expires() {
        let token = make_token(&serde_json::json!({}));
        let claims = TokenClaims::parse(&token).unwrap();
        assert!(claims.expires_at().is_none());
        assert!(!claims.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_not_a_jwt() {
        assert!(TokenClaims::parse("opaque-token").is_err());
    }

    #[test]
    fn test_bad_base64_payload() {
        assert!(TokenClaims::parse("a.!!!.c").is_err());
    }
}
