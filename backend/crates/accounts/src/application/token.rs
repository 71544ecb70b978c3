//! Token Service
//!
//! Issues and validates the stateless bearer tokens that carry the
//! authenticated subject between requests. Tokens are signed JWTs (HS256)
//! with an expiry; nothing is stored server-side.

use axum::http::{HeaderMap, header};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::TokenConfig;
use crate::domain::value_object::{account_role::AccountRole, email::Email};
use crate::error::{AccountError, AccountResult};

/// Verified token claim set
///
/// `sub` is the domain profile id (company or employee), not the internal
/// identity id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: domain profile id
    pub sub: Uuid,
    /// Login email
    pub email: String,
    /// Account role
    pub role: AccountRole,
    /// Display name (company name or employee full name)
    pub name: String,
    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiry (Unix timestamp, seconds)
    pub exp: i64,
}

/// Token issue/verify service
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl TokenService {
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&config.secret),
            decoding_key: DecodingKey::from_secret(&config.secret),
            ttl_seconds: config.ttl_seconds(),
        }
    }

    /// Issue a signed token for an authenticated subject
    pub fn issue(
        &self,
        subject: Uuid,
        email: &Email,
        role: AccountRole,
        display_name: &str,
    ) -> AccountResult<String> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: subject,
            email: email.as_str().to_string(),
            role,
            name: display_name.to_string(),
            iat: now,
            exp: now + self.ttl_seconds,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AccountError::Internal(format!("Token signing failed: {e}")))
    }

    /// Verify signature and expiry, returning the claim set
    pub fn verify(&self, token: &str) -> AccountResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|_| AccountError::Unauthenticated)
    }

    /// Extract and verify the bearer token from request headers
    pub fn claims_from_headers(&self, headers: &HeaderMap) -> AccountResult<Claims> {
        let auth_header = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AccountError::Unauthenticated)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AccountError::Unauthenticated)?;

        self.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn service() -> TokenService {
        TokenService::new(&TokenConfig::with_random_secret())
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let service = service();
        let subject = Uuid::new_v4();
        let email = Email::new("a@acme.com").unwrap();

        let token = service
            .issue(subject, &email, AccountRole::Company, "Acme")
            .unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, subject);
        assert_eq!(claims.email, "a@acme.com");
        assert_eq!(claims.role, AccountRole::Company);
        assert_eq!(claims.name, "Acme");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = service();
        let email = Email::new("a@acme.com").unwrap();
        let token = service
            .issue(Uuid::new_v4(), &email, AccountRole::Employee, "John")
            .unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });

        assert!(matches!(
            service.verify(&tampered),
            Err(AccountError::Unauthenticated)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = service();
        let verifier = service(); // different random secret
        let email = Email::new("a@acme.com").unwrap();

        let token = issuer
            .issue(Uuid::new_v4(), &email, AccountRole::Company, "Acme")
            .unwrap();

        assert!(matches!(
            verifier.verify(&token),
            Err(AccountError::Unauthenticated)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = TokenConfig::with_random_secret();
        let service = TokenService::new(&config);

        // Encode claims that expired well past the default leeway
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "a@acme.com".to_string(),
            role: AccountRole::Company,
            name: "Acme".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&config.secret),
        )
        .unwrap();

        assert!(matches!(
            service.verify(&token),
            Err(AccountError::Unauthenticated)
        ));
    }

    #[test]
    fn test_claims_from_headers() {
        let service = service();
        let email = Email::new("a@acme.com").unwrap();
        let token = service
            .issue(Uuid::new_v4(), &email, AccountRole::Company, "Acme")
            .unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        assert!(service.claims_from_headers(&headers).is_ok());

        // Missing header
        assert!(matches!(
            service.claims_from_headers(&HeaderMap::new()),
            Err(AccountError::Unauthenticated)
        ));

        // Wrong scheme
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Basic {token}")).unwrap(),
        );
        assert!(matches!(
            service.claims_from_headers(&headers),
            Err(AccountError::Unauthenticated)
        ));
    }
}
