use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::{error::Error as StdError, fmt};
use uuid::Uuid;

// Errors returned by access-token verification + strict claim validation.
// Only ever logged: the middleware collapses all of them into one response.
#[derive(Debug)]
pub enum AccessJwtError {
    Jwt(jsonwebtoken::errors::Error),
    EmptySecret,
    EmptyClaim(&'static str),
    InvalidIdUuid,
}

impl fmt::Display for AccessJwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
            Self::EmptySecret => write!(f, "signing secret is empty"),
            Self::EmptyClaim(name) => write!(f, "empty '{}' claim", name),
            Self::InvalidIdUuid => write!(f, "invalid 'id' (expected UUID)"),
        }
    }
}

impl StdError for AccessJwtError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Jwt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AccessJwtError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(e)
    }
}

/// Access token (JWT) claims.
///
/// `id` carries the user id; `exp` is mandatory (tokens without it are rejected).
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenClaims {
    pub id: String,
    pub exp: u64,

    #[serde(default)]
    pub iat: Option<u64>,
}

/// What the verifier hands to the rest of the app once a token checks out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedAccessToken {
    pub user_id: Uuid,
    pub expires_at: u64,
    pub issued_at: Option<u64>,
}

/// HS256 access-token verifier over a shared secret.
///
/// - Key material is not printable via Debug.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(secret: &str, leeway_seconds: u64) -> Result<Self, AccessJwtError> {
        if secret.is_empty() {
            return Err(AccessJwtError::EmptySecret);
        }

        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);
        validation.validate_exp = true;
        validation.leeway = leeway_seconds;

        Ok(Self {
            decoding_key,
            validation,
        })
    }

    /// Signature + `exp` check, then `id` must be a non-empty UUID.
    pub fn verify(&self, token: &str) -> Result<VerifiedAccessToken, AccessJwtError> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;
        let claims = data.claims;

        if claims.id.trim().is_empty() {
            return Err(AccessJwtError::EmptyClaim("id"));
        }

        let user_id = Uuid::parse_str(claims.id.trim()).map_err(|_| AccessJwtError::InvalidIdUuid)?;

        Ok(VerifiedAccessToken {
            user_id,
            expires_at: claims.exp,
            issued_at: claims.iat,
        })
    }
}

#[cfg(test)]
pub mod testing {
    use jsonwebtoken::{EncodingKey, Header};
    use serde_json::json;
    use uuid::Uuid;

    pub const SECRET: &str = "test-secret-please-rotate";

    pub fn sign_raw(claims: &serde_json::Value, secret: &str) -> String {
        jsonwebtoken::encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    /// A token for `user_id` valid for the next hour.
    pub fn token_for(user_id: Uuid) -> String {
        let now = jsonwebtoken::get_current_timestamp();
        sign_raw(
            &json!({ "id": user_id.to_string(), "iat": now, "exp": now + 3600 }),
            SECRET,
        )
    }
}
