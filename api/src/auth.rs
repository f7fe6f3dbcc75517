use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use crate::config::CONFIG;
#[cfg(feature = "server")]
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

/// What the browser knows about the logged-in user.
///
/// `auth_token` is the ListenBrainz user token, needed client-side to act on
/// the user's behalf.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AuthResponse {
    pub user_name: String,
    pub auth_token: String,
    pub expires_at: i64,
}

pub static EXPIRATION_DAYS: i64 = 30;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_name
    pub lb_token: String,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    pub fn to_response(&self) -> AuthResponse {
        AuthResponse {
            user_name: self.sub.clone(),
            auth_token: self.lb_token.clone(),
            expires_at: self.exp as i64,
        }
    }
}

/// Signs a session for `user_name`. Returns the JWT and the matching response.
#[cfg(feature = "server")]
pub fn create_token(user_name: String, lb_token: String) -> Result<(String, AuthResponse), String> {
    let encoding_key = EncodingKey::from_secret(CONFIG.secret_key().as_bytes());
    let now = chrono::Utc::now();
    let iat = now.timestamp() as usize;

    let exp = now
        .checked_add_signed(chrono::Duration::days(EXPIRATION_DAYS))
        .ok_or_else(|| "expiration out of range".to_string())?
        .timestamp();

    let claims = Claims {
        sub: user_name,
        lb_token,
        iat,
        exp: exp as usize,
    };

    let token = encode(&Header::default(), &claims, &encoding_key).map_err(|e| e.to_string())?;

    Ok((token, claims.to_response()))
}

#[cfg(feature = "server")]
pub fn verify_token(token: &str) -> Result<Claims, String> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(CONFIG.secret_key().as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| e.to_string())?;

    Ok(token_data.claims)
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies_back_to_same_user() {
        let (jwt, response) = create_token("alice".to_string(), "lb-token".to_string()).unwrap();
        let claims = verify_token(&jwt).unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.lb_token, "lb-token");
        assert_eq!(claims.to_response(), response);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let (jwt, _) = create_token("alice".to_string(), "lb-token".to_string()).unwrap();
        let tampered = format!("{jwt}x");
        assert!(verify_token(&tampered).is_err());
    }
}
