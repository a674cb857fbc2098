//! Thin client for the remote transaction/auth API. Every call resolves to
//! either a typed value or an [`ApiError`] whose `Display` text is what the
//! views show; nothing here panics or retries.

use gloo_net::http::{Request, RequestBuilder, Response};
use thiserror::Error;

use crate::model::{Transaction, TransactionDraft};
use crate::storage::TokenStore;

pub const API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Raised locally before any network I/O when the credential slot is
    /// empty.
    #[error("You are not logged in")]
    NotAuthenticated,
    /// Non-success status; the message is the server's `message` field when
    /// it sent one, else the status line.
    #[error("{message}")]
    Server { message: String },
    #[error("{0}")]
    Network(#[from] gloo_net::Error),
    #[error("Could not read the server response")]
    Decode,
}

fn bearer_token(store: &dyn TokenStore) -> Result<String, ApiError> {
    match store.get() {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(ApiError::NotAuthenticated),
    }
}

fn authorized(builder: RequestBuilder, store: &dyn TokenStore) -> Result<RequestBuilder, ApiError> {
    let token = bearer_token(store)?;
    Ok(builder.header("Authorization", &format!("Bearer {}", token)))
}

fn message_from_body(value: &serde_json::Value) -> Option<String> {
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

async fn expect_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.json::<serde_json::Value>().await {
        Ok(body) => message_from_body(&body)
            .unwrap_or_else(|| format!("Request failed with status {}", status)),
        Err(_) => format!("Request failed with status {}", status),
    };
    Err(ApiError::Server { message })
}

pub async fn fetch_transactions(store: &dyn TokenStore) -> Result<Vec<Transaction>, ApiError> {
    let url = format!("{}/transactions/", API_BASE_URL);
    let request = authorized(Request::get(&url), store)?;
    let response = expect_ok(request.send().await?).await?;
    response
        .json::<Vec<Transaction>>()
        .await
        .map_err(|_| ApiError::Decode)
}

pub async fn create_transaction(
    store: &dyn TokenStore,
    draft: &TransactionDraft,
) -> Result<Transaction, ApiError> {
    let url = format!("{}/transactions/", API_BASE_URL);
    let request = authorized(Request::post(&url), store)?.json(draft)?;
    let response = expect_ok(request.send().await?).await?;
    response
        .json::<Transaction>()
        .await
        .map_err(|_| ApiError::Decode)
}

pub async fn update_transaction(
    store: &dyn TokenStore,
    id: &str,
    draft: &TransactionDraft,
) -> Result<Transaction, ApiError> {
    let url = format!("{}/transactions/{}", API_BASE_URL, id);
    let request = authorized(Request::put(&url), store)?.json(draft)?;
    let response = expect_ok(request.send().await?).await?;
    response
        .json::<Transaction>()
        .await
        .map_err(|_| ApiError::Decode)
}

/// Exchanges credentials for a bearer token. Storing it is the caller's
/// decision.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    let url = format!("{}/users/login", API_BASE_URL);
    let body = serde_json::json!({ "email": email, "password": password });
    let request = Request::post(&url).json(&body)?;
    let response = expect_ok(request.send().await?).await?;
    let payload = response
        .json::<serde_json::Value>()
        .await
        .map_err(|_| ApiError::Decode)?;
    payload
        .get("token")
        .and_then(|t| t.as_str())
        .map(str::to_string)
        .ok_or(ApiError::Decode)
}

/// Registers a new account and returns the created-user payload as-is.
pub async fn register(
    username: &str,
    email: &str,
    password: &str,
) -> Result<serde_json::Value, ApiError> {
    let url = format!("{}/users/register", API_BASE_URL);
    let body = serde_json::json!({
        "username": username,
        "email": email,
        "password": password,
    });
    let request = Request::post(&url).json(&body)?;
    let response = expect_ok(request.send().await?).await?;
    response
        .json::<serde_json::Value>()
        .await
        .map_err(|_| ApiError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryTokenStore;

    #[test]
    fn missing_token_short_circuits() {
        let store = MemoryTokenStore::new();
        assert!(matches!(
            bearer_token(&store),
            Err(ApiError::NotAuthenticated)
        ));
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let store = MemoryTokenStore::with_token("");
        assert!(matches!(
            bearer_token(&store),
            Err(ApiError::NotAuthenticated)
        ));
    }

    #[test]
    fn present_token_is_returned() {
        let store = MemoryTokenStore::with_token("tok-123");
        assert_eq!(bearer_token(&store).unwrap(), "tok-123");
    }

    #[test]
    fn server_message_field_wins() {
        let body = serde_json::json!({ "message": "Invalid credentials" });
        assert_eq!(message_from_body(&body).as_deref(), Some("Invalid credentials"));

        let body = serde_json::json!({ "error": "nope" });
        assert_eq!(message_from_body(&body), None);
    }

    #[test]
    fn error_display_matches_view_text() {
        assert_eq!(ApiError::NotAuthenticated.to_string(), "You are not logged in");
        let err = ApiError::Server {
            message: "Email already taken".into(),
        };
        assert_eq!(err.to_string(), "Email already taken");
        assert_eq!(ApiError::Decode.to_string(), "Could not read the server response");
    }
}
