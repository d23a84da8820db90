//! Identity façade. Accounts and session tokens live in the same KV
//! namespace as user data (`user:<email>`, `token:<token>`); every data
//! route verifies the bearer token before touching any blob.

use crate::errors::AppError;
use crate::models::{Session, SigninRequest, SignupRequest};
use crate::storage::KvStore;
use axum::http::{HeaderMap, header::AUTHORIZATION};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

pub fn password_digest(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

pub fn signup(
    kv: &mut KvStore,
    request: SignupRequest,
    now: DateTime<Utc>,
) -> Result<UserAccount, AppError> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(AppError::malformed("email and password are required"));
    }

    let key = KvStore::key("user", request.email.trim());
    if kv.contains(&key) {
        return Err(AppError::malformed("account already exists"));
    }

    let account = UserAccount {
        id: Uuid::new_v4().to_string(),
        email: request.email.trim().to_string(),
        name: request.name.unwrap_or_default(),
        password_hash: password_digest(&request.password),
        created_at: now,
    };
    kv.set_as(&key, &account)?;
    Ok(account)
}

pub fn signin(kv: &mut KvStore, request: SigninRequest) -> Result<Session, AppError> {
    let key = KvStore::key("user", request.email.trim());
    let account: UserAccount = kv.get_as(&key).ok_or(AppError::InvalidCredential)?;

    if account.password_hash != password_digest(&request.password) {
        return Err(AppError::InvalidCredential);
    }

    let token = Uuid::new_v4().to_string();
    kv.set_as(&KvStore::key("token", &token), &account.id)?;
    Ok(Session {
        token,
        user_id: account.id,
    })
}

/// Resolves the bearer token from the request headers to a user id.
/// Absence of the header and an unknown token are distinct failures, both
/// answered with 401 before any store access happens.
pub fn verify_bearer(headers: &HeaderMap, kv: &KvStore) -> Result<String, AppError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::MissingCredential)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AppError::MissingCredential)?;

    kv.get_as::<String>(&KvStore::key("token", token))
        .ok_or(AppError::InvalidCredential)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn signup_request() -> SignupRequest {
        SignupRequest {
            email: "user@example.com".to_string(),
            password: "hunter2".to_string(),
            name: Some("Test User".to_string()),
        }
    }

    #[test]
    fn signup_rejects_missing_fields() {
        let mut kv = KvStore::default();
        let result = signup(
            &mut kv,
            SignupRequest {
                email: " ".to_string(),
                password: "pw".to_string(),
                name: None,
            },
            Utc::now(),
        );
        assert!(matches!(result, Err(AppError::MalformedInput(_))));
    }

    #[test]
    fn signup_rejects_duplicate_email() {
        let mut kv = KvStore::default();
        signup(&mut kv, signup_request(), Utc::now()).expect("first signup");
        let result = signup(&mut kv, signup_request(), Utc::now());
        assert!(matches!(result, Err(AppError::MalformedInput(_))));
    }

    #[test]
    fn signin_issues_a_verifiable_token() {
        let mut kv = KvStore::default();
        let account = signup(&mut kv, signup_request(), Utc::now()).expect("signup");
        let session = signin(
            &mut kv,
            SigninRequest {
                email: "user@example.com".to_string(),
                password: "hunter2".to_string(),
            },
        )
        .expect("signin");
        assert_eq!(session.user_id, account.id);

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", session.token)).unwrap(),
        );
        let user_id = verify_bearer(&headers, &kv).expect("token valid");
        assert_eq!(user_id, account.id);
    }

    #[test]
    fn signin_rejects_wrong_password() {
        let mut kv = KvStore::default();
        signup(&mut kv, signup_request(), Utc::now()).expect("signup");
        let result = signin(
            &mut kv,
            SigninRequest {
                email: "user@example.com".to_string(),
                password: "wrong".to_string(),
            },
        );
        assert!(matches!(result, Err(AppError::InvalidCredential)));
    }

    #[test]
    fn verify_distinguishes_missing_from_invalid() {
        let kv = KvStore::default();
        let empty = HeaderMap::new();
        assert!(matches!(
            verify_bearer(&empty, &kv),
            Err(AppError::MissingCredential)
        ));

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer bogus"));
        assert!(matches!(
            verify_bearer(&headers, &kv),
            Err(AppError::InvalidCredential)
        ));
    }
}
