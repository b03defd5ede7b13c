//! Auth Service Bindings
//!
//! Email/password calls straight to the hosted auth service; credentials
//! never pass through the recipe API. Requests carry the public anon key,
//! sign-out also the session's bearer token.

use serde::Serialize;

use potluck_core::Session;

use super::{client, decode_json, send, status_error, ApiError};

fn auth_base() -> &'static str {
    option_env!("POTLUCK_AUTH_URL").unwrap_or("http://localhost:9999")
}

fn anon_key() -> &'static str {
    option_env!("POTLUCK_ANON_KEY").unwrap_or("dev-anon-key")
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

pub async fn sign_in(email: &str, password: &str) -> Result<Session, ApiError> {
    let request = client()
        .post(format!("{}/token?grant_type=password", auth_base()))
        .header("apikey", anon_key())
        .json(&Credentials { email, password });
    decode_json(send(request).await?).await
}

/// Create the account. Success is acknowledged without reading the body;
/// the service may want email confirmation before the first sign-in, so
/// the caller routes to the login screen either way.
pub async fn sign_up(email: &str, password: &str) -> Result<(), ApiError> {
    let request = client()
        .post(format!("{}/signup", auth_base()))
        .header("apikey", anon_key())
        .json(&Credentials { email, password });
    let response = send(request).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(status_error(status.as_u16(), response).await);
    }
    Ok(())
}

/// Best-effort service-side sign-out; local state is cleared by the
/// caller regardless of the outcome
pub async fn sign_out(session: &Session) -> Result<(), ApiError> {
    let request = client()
        .post(format!("{}/logout", auth_base()))
        .header("apikey", anon_key())
        .bearer_auth(&session.access_token);
    send(request).await?;
    Ok(())
}
