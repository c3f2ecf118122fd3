use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use game_types::UserId;

const ACCESS_TOKEN_LIFETIME_SECS: i64 = 8 * 60 * 60;
const REFRESH_TOKEN_LIFETIME_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: UserId, // Authenticated user
    pub iat: i64,   // Issued at
    pub exp: i64,   // Expiry
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    dev_mode: bool,
}

impl AuthService {
    /// HS256 tokens signed and verified with a shared secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            dev_mode: false,
        }
    }

    /// Accepts a bare user UUID as the token, with no signature check
    pub fn new_dev_mode() -> Self {
        Self {
            dev_mode: true,
            ..Self::new("dev")
        }
    }

    pub fn is_dev_mode(&self) -> bool {
        self.dev_mode
    }

    pub fn issue_access_token(&self, user_id: UserId) -> Result<String, AuthError> {
        self.issue_token(user_id, ACCESS_TOKEN_LIFETIME_SECS)
    }

    pub fn issue_refresh_token(&self, user_id: UserId) -> Result<String, AuthError> {
        self.issue_token(user_id, REFRESH_TOKEN_LIFETIME_SECS)
    }

    pub fn issue_token_pair(&self, user_id: UserId) -> Result<TokenPair, AuthError> {
        Ok(TokenPair {
            access_token: self.issue_access_token(user_id)?,
            refresh_token: self.issue_refresh_token(user_id)?,
        })
    }

    fn issue_token(&self, user_id: UserId, lifetime_secs: i64) -> Result<String, AuthError> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            id: user_id,
            iat: now,
            exp: now + lifetime_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign token for {}: {:?}", user_id, e);
            AuthError::TokenCreation
        })
    }

    pub fn validate_token(&self, token: &str) -> Result<UserId, AuthError> {
        if self.dev_mode {
            return self.validate_dev_token(token);
        }

        let validation = Validation::new(Algorithm::HS256);
        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Rejected expired token");
                    AuthError::TokenExpired
                }
                _ => {
                    tracing::warn!("JWT token validation failed: {:?}", e);
                    AuthError::InvalidToken
                }
            }
        })?;

        Ok(token_data.claims.id)
    }

    fn validate_dev_token(&self, token: &str) -> Result<UserId, AuthError> {
        tracing::debug!(
            "Validating dev token (first 20 chars): {}",
            token_preview(token)
        );

        Uuid::parse_str(token.trim()).map_err(|_| AuthError::InvalidToken)
    }
}

fn token_preview(token: &str) -> String {
    token.chars().take(20).collect()
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Failed to create token")]
    TokenCreation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_validate_access_token() {
        let auth_service = AuthService::new("test-secret");
        let user_id = Uuid::new_v4();

        let token = auth_service.issue_access_token(user_id).unwrap();
        assert_eq!(auth_service.validate_token(&token).unwrap(), user_id);
    }

    #[test]
    fn test_token_pair_lifetimes() {
        let auth_service = AuthService::new("test-secret");
        let user_id = Uuid::new_v4();

        let pair = auth_service.issue_token_pair(user_id).unwrap();
        assert_eq!(auth_service.validate_token(&pair.access_token).unwrap(), user_id);
        assert_eq!(auth_service.validate_token(&pair.refresh_token).unwrap(), user_id);

        let key = DecodingKey::from_secret(b"test-secret");
        let validation = Validation::new(Algorithm::HS256);
        let access = decode::<Claims>(&pair.access_token, &key, &validation).unwrap();
        let refresh = decode::<Claims>(&pair.refresh_token, &key, &validation).unwrap();

        assert_eq!(access.claims.exp - access.claims.iat, 8 * 60 * 60);
        assert_eq!(refresh.claims.exp - refresh.claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_expired_token() {
        let auth_service = AuthService::new("test-secret");

        // Well past the default validation leeway
        let token = auth_service.issue_token(Uuid::new_v4(), -3600).unwrap();
        let result = auth_service.validate_token(&token);
        assert!(matches!(result.unwrap_err(), AuthError::TokenExpired));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = AuthService::new("one-secret");
        let verifier = AuthService::new("another-secret");

        let token = issuer.issue_access_token(Uuid::new_v4()).unwrap();
        let result = verifier.validate_token(&token);
        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken));
    }

    #[test]
    fn test_invalid_token_validation() {
        let auth_service = AuthService::new("test-secret");

        let result = auth_service.validate_token("invalid-token");
        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken));
    }

    #[test]
    fn test_dev_mode_accepts_uuid() {
        let auth_service = AuthService::new_dev_mode();
        assert!(auth_service.is_dev_mode());

        let user_id = Uuid::new_v4();
        assert_eq!(
            auth_service.validate_token(&user_id.to_string()).unwrap(),
            user_id
        );
        assert!(matches!(
            auth_service.validate_token("not-a-uuid").unwrap_err(),
            AuthError::InvalidToken
        ));
    }

    #[test]
    fn test_dev_token_preview_with_multibyte_chars() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();

        // Byte 20 falls inside the 'é' run
        let token = format!("{}{}", "a".repeat(19), "é".repeat(5));
        assert_eq!(token_preview(&token).chars().count(), 20);

        tracing::subscriber::with_default(subscriber, || {
            let auth_service = AuthService::new_dev_mode();
            assert!(matches!(
                auth_service.validate_token(&token).unwrap_err(),
                AuthError::InvalidToken
            ));
        });
    }
}
