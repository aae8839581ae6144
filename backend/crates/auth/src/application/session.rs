//! Session Tokens
//!
//! Cookie value format: `<session_id>.<base64url(HMAC-SHA256(secret, session_id))>`.
//! The token only names a server-side session; it carries no user data.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::repository::AuthSessionRepository;
use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

fn mac(secret: &[u8]) -> AuthResult<HmacSha256> {
    HmacSha256::new_from_slice(secret).map_err(|e| AuthError::Internal(format!("HMAC key: {e}")))
}

/// Generate signed session token
pub fn sign_token(secret: &[u8], session_id: Uuid) -> AuthResult<String> {
    let session_id = session_id.to_string();

    let mut mac = mac(secret)?;
    mac.update(session_id.as_bytes());
    let signature = mac.finalize().into_bytes();

    Ok(format!("{}.{}", session_id, URL_SAFE_NO_PAD.encode(signature)))
}

/// Parse and verify session token
pub fn verify_token(secret: &[u8], token: &str) -> AuthResult<Uuid> {
    let (session_id_str, signature_b64) = token.split_once('.').ok_or(AuthError::SessionInvalid)?;

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| AuthError::SessionInvalid)?;

    let mut mac = mac(secret)?;
    mac.update(session_id_str.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| AuthError::SessionInvalid)?;

    session_id_str
        .parse()
        .map_err(|_| AuthError::SessionInvalid)
}

/// Create a session for `user` and return its cookie token
pub async fn establish<S>(repo: &S, config: &AuthConfig, user: &User) -> AuthResult<String>
where
    S: AuthSessionRepository,
{
    let session = AuthSession::new(user, config.session_ttl_chrono()?)?;
    repo.create_session(&session).await?;

    tracing::debug!(
        user_id = %user.user_id,
        session_id = %session.session_id,
        "Session established"
    );

    sign_token(&config.session_secret, session.session_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [42u8; 32];

    #[test]
    fn test_sign_and_verify() {
        let session_id = Uuid::new_v4();
        let token = sign_token(&SECRET, session_id).unwrap();

        assert!(token.starts_with(&session_id.to_string()));
        assert_eq!(verify_token(&SECRET, &token).unwrap(), session_id);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = sign_token(&SECRET, Uuid::new_v4()).unwrap();
        assert!(matches!(
            verify_token(&[1u8; 32], &token),
            Err(AuthError::SessionInvalid)
        ));
    }

    #[test]
    fn test_tampered_session_id_rejected() {
        let token = sign_token(&SECRET, Uuid::new_v4()).unwrap();
        let (_, signature) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", Uuid::new_v4(), signature);
        assert!(matches!(
            verify_token(&SECRET, &forged),
            Err(AuthError::SessionInvalid)
        ));
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        for token in ["", "no-dot", "a.b.c", "not-a-uuid.!!!"] {
            assert!(
                matches!(verify_token(&SECRET, token), Err(AuthError::SessionInvalid)),
                "{token}"
            );
        }
    }
}
