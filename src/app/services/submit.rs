use serde::Deserialize;
use std::time::Duration;

/// The submit button stays in its loading state for at least this long so
/// fast responses do not flicker it.
pub const MIN_BUSY: Duration = Duration::from_millis(1000);

/// Request timeout for the contact endpoint.
const SEND_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The endpoint answered with a non-success status. `detail` carries
    /// the server's own error messages when the body had any.
    Rejected { status: u16, detail: Option<String> },
    /// The request never completed.
    Network(String),
}

impl SubmitError {
    /// Text for the notification toast. Server-provided messages are shown
    /// verbatim; everything else collapses to a generic retry prompt.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => "There was an error sending your message. Please try again.".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    message: String,
}

/// Join the `errors[].message` entries of a failure body, if it has any.
pub fn parse_error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    if parsed.errors.is_empty() {
        return None;
    }
    Some(
        parsed
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// How long to keep the submit button locked after a response arrived
/// `elapsed` after the send began.
pub fn unlock_delay(elapsed: Duration) -> Duration {
    MIN_BUSY.saturating_sub(elapsed)
}

/// POST the form as multipart/form-data. Runs on a worker thread; the
/// result travels back over the message channel.
pub fn post_form(endpoint: &str, payload: &FormPayload) -> Result<(), SubmitError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("FolioDesk/", env!("CARGO_PKG_VERSION")))
        .timeout(SEND_TIMEOUT)
        .build()
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    let form = reqwest::blocking::multipart::Form::new()
        .text("name", payload.name.clone())
        .text("email", payload.email.clone())
        .text("message", payload.message.clone());

    let response = client
        .post(endpoint)
        .header(reqwest::header::ACCEPT, "application/json")
        .multipart(form)
        .send()
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = response.text().unwrap_or_default();
    Err(SubmitError::Rejected {
        status: status.as_u16(),
        detail: parse_error_detail(&body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_joined_with_commas() {
        let body = r#"{"errors":[{"message":"Invalid token"},{"message":"Missing field"}]}"#;
        assert_eq!(
            parse_error_detail(body),
            Some("Invalid token, Missing field".to_string())
        );
    }

    #[test]
    fn test_single_error_shown_verbatim() {
        let body = r#"{"errors":[{"message":"Invalid token"}]}"#;
        let err = SubmitError::Rejected {
            status: 422,
            detail: parse_error_detail(body),
        };
        assert_eq!(err.user_message(), "Invalid token");
    }

    #[test]
    fn test_unparseable_body_falls_back_to_generic() {
        assert_eq!(parse_error_detail("<html>502</html>"), None);
        assert_eq!(parse_error_detail(r#"{"errors":[]}"#), None);

        let err = SubmitError::Rejected {
            status: 502,
            detail: None,
        };
        assert_eq!(
            err.user_message(),
            "There was an error sending your message. Please try again."
        );
    }

    #[test]
    fn test_network_error_is_generic_to_users() {
        let err = SubmitError::Network("dns failure".to_string());
        assert!(err.user_message().contains("Please try again."));
    }

    #[test]
    fn test_unlock_delay_enforces_minimum() {
        assert_eq!(
            unlock_delay(Duration::from_millis(200)),
            Duration::from_millis(800)
        );
        assert_eq!(unlock_delay(Duration::from_millis(1500)), Duration::ZERO);
    }
}
