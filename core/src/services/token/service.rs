//! Session token service implementation.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service that mints and verifies signed session tokens
///
/// Sessions are stateless: there is no server-side record and no revocation
/// list. A token stays valid until its expiry, and verification fails closed
/// on any signature or expiry problem.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from the given configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a session token for the given user
    pub fn issue(&self, user: &User) -> Result<String, DomainError> {
        let claims = Claims::new(user, self.config.token_expiry_hours);
        self.encode(&claims)
    }

    /// Encodes claims into a signed token
    pub(crate) fn encode(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Verifies a session token and returns its claims
    ///
    /// Any tampering with the payload or signature fails verification; it
    /// never degrades into partially trusted claims.
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        DomainError::Token(TokenError::Expired)
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        DomainError::Token(TokenError::InvalidSignature)
                    }
                    _ => DomainError::Token(TokenError::InvalidFormat),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Token lifetime in seconds, for response bodies
    pub fn expires_in_seconds(&self) -> i64 {
        self.config.token_expiry_hours * 3600
    }
}
