//! Blocking HTTP client for a running roster server.

use roster_core::Catalog;

use crate::api::{ErrorBody, MessageResponse};
use crate::error::ServerError;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// `GET /activities`
pub fn list_activities(base_url: &str) -> Result<Catalog, ServerError> {
    let url = format!("{}/activities", base_url.trim_end_matches('/'));
    let response = ureq::get(&url)
        .call()
        .map_err(|err| request_error(base_url, err))?;
    response
        .into_json()
        .map_err(|e| ServerError::Transport(format!("invalid catalog payload: {e}")))
}

/// `POST /activities/{activity}/signup?email=`
pub fn signup(base_url: &str, activity: &str, email: &str) -> Result<String, ServerError> {
    let url = activity_url(base_url, activity, "signup");
    let response = ureq::post(&url)
        .query("email", email)
        .call()
        .map_err(|err| request_error(base_url, err))?;
    into_message(response)
}

/// `DELETE /activities/{activity}/participants?email=`
pub fn unregister(base_url: &str, activity: &str, email: &str) -> Result<String, ServerError> {
    let url = activity_url(base_url, activity, "participants");
    let response = ureq::delete(&url)
        .query("email", email)
        .call()
        .map_err(|err| request_error(base_url, err))?;
    into_message(response)
}

fn activity_url(base_url: &str, activity: &str, action: &str) -> String {
    format!(
        "{}/activities/{}/{action}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(activity)
    )
}

fn into_message(response: ureq::Response) -> Result<String, ServerError> {
    let body: MessageResponse = response
        .into_json()
        .map_err(|e| ServerError::Transport(format!("invalid response payload: {e}")))?;
    Ok(body.message)
}

fn request_error(base_url: &str, err: ureq::Error) -> ServerError {
    match err {
        ureq::Error::Status(status, response) => {
            let raw = response.into_string().unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&raw)
                .map(|body| body.detail)
                .unwrap_or(raw);
            ServerError::Rejected { status, detail }
        }
        ureq::Error::Transport(transport) => match transport.kind() {
            ureq::ErrorKind::ConnectionFailed => ServerError::NotRunning {
                url: base_url.to_string(),
            },
            _ => ServerError::Transport(transport.to_string()),
        },
    }
}
