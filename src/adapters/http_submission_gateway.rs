//! Submission gateway implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::response::Payload;
use crate::domain::{AckMode, AppError, GatewayConfig};
use crate::ports::{SubmissionError, SubmissionErrorKind, SubmissionGateway};

/// HTTP transport to the response collector.
///
/// Posts the payload as `application/x-www-form-urlencoded`, one request per call. Retry
/// behavior lives in a dedicated wrapper adapter.
#[derive(Clone)]
pub struct HttpSubmissionGateway {
    endpoint: Url,
    acknowledgement: AckMode,
    client: Client,
}

impl std::fmt::Debug for HttpSubmissionGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Deployment paths of hosted collectors act as credentials.
        f.debug_struct("HttpSubmissionGateway")
            .field("host", &self.endpoint.host_str())
            .field("endpoint", &"[REDACTED]")
            .field("acknowledgement", &self.acknowledgement)
            .finish()
    }
}

impl HttpSubmissionGateway {
    pub fn new(endpoint: Url, config: &GatewayConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { endpoint, acknowledgement: config.acknowledgement, client })
    }

    /// Build from configuration, failing when no endpoint is configured.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, AppError> {
        let endpoint = config.url.clone().ok_or(AppError::GatewayNotConfigured)?;
        Self::new(endpoint, config)
    }
}

impl SubmissionGateway for HttpSubmissionGateway {
    fn submit(&self, payload: &Payload) -> Result<(), SubmissionError> {
        tracing::debug!(fields = payload.len(), "posting response to collector");

        let response = self
            .client
            .post(self.endpoint.clone())
            .form(payload.fields())
            .send()
            .map_err(classify_transport_error)?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "collector answered");

        if self.acknowledgement == AckMode::Status
            && (status.is_client_error() || status.is_server_error())
        {
            let body = response.text().unwrap_or_default();
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("error status").to_string()
            } else {
                truncate(body.trim(), 200)
            };
            return Err(SubmissionError::new(SubmissionErrorKind::Status(status.as_u16()), message));
        }

        Ok(())
    }
}

fn classify_transport_error(error: reqwest::Error) -> SubmissionError {
    let kind = if error.is_timeout() {
        SubmissionErrorKind::Timeout
    } else if error.is_connect() {
        SubmissionErrorKind::Connect
    } else {
        SubmissionErrorKind::Other
    };
    // Strip the URL so the collector path never reaches logs or terminal output.
    SubmissionError::new(kind, error.without_url().to_string())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::*;
    use crate::domain::response::{Choice, FieldEdit, ResponseDraft};

    fn config(server: &mockito::Server, acknowledgement: AckMode) -> GatewayConfig {
        GatewayConfig {
            url: Some(Url::parse(&server.url()).unwrap()),
            timeout_secs: 2,
            acknowledgement,
            ..GatewayConfig::default()
        }
    }

    fn payload() -> Payload {
        let draft = ResponseDraft::new()
            .with(FieldEdit::GivenName("Ana".into()))
            .with(FieldEdit::FamilyName("Ruiz".into()))
            .with(FieldEdit::Email("ana@x.com".into()))
            .with(FieldEdit::Attending(Choice::No));
        Payload::from_draft(&draft)
    }

    #[test]
    fn posts_form_encoded_fields() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("nombre".into(), "Ana".into()),
                Matcher::UrlEncoded("apellidos".into(), "Ruiz".into()),
                Matcher::UrlEncoded("email".into(), "ana@x.com".into()),
                Matcher::UrlEncoded("asiste".into(), "no".into()),
                Matcher::UrlEncoded("parada".into(), "".into()),
            ]))
            .with_status(200)
            .expect(1)
            .create();

        let gateway =
            HttpSubmissionGateway::from_config(&config(&server, AckMode::Transport)).unwrap();
        assert!(gateway.submit(&payload()).is_ok());
        mock.assert();
    }

    #[test]
    fn transport_mode_accepts_error_statuses() {
        let mut server = mockito::Server::new();
        let _m = server.mock("POST", "/").with_status(500).create();

        let gateway =
            HttpSubmissionGateway::from_config(&config(&server, AckMode::Transport)).unwrap();
        assert!(gateway.submit(&payload()).is_ok());
    }

    #[test]
    fn status_mode_rejects_error_statuses() {
        let mut server = mockito::Server::new();
        let _m = server.mock("POST", "/").with_status(503).with_body("maintenance").create();

        let gateway =
            HttpSubmissionGateway::from_config(&config(&server, AckMode::Status)).unwrap();
        let err = gateway.submit(&payload()).unwrap_err();
        assert_eq!(err.kind, SubmissionErrorKind::Status(503));
        assert_eq!(err.message, "maintenance");
    }

    #[test]
    fn unreachable_collector_is_a_connect_error() {
        let config = GatewayConfig {
            url: Some(Url::parse("http://127.0.0.1:1/").unwrap()),
            timeout_secs: 2,
            ..GatewayConfig::default()
        };
        let gateway = HttpSubmissionGateway::from_config(&config).unwrap();

        let err = gateway.submit(&payload()).unwrap_err();
        assert_eq!(err.kind, SubmissionErrorKind::Connect);
        assert!(!err.message.contains("127.0.0.1:1"));
    }

    #[test]
    fn missing_endpoint_is_reported() {
        let err = HttpSubmissionGateway::from_config(&GatewayConfig::default()).unwrap_err();
        assert!(matches!(err, AppError::GatewayNotConfigured));
    }

    #[test]
    fn debug_output_redacts_endpoint_path() {
        let config = GatewayConfig {
            url: Some(Url::parse("https://script.example.com/macros/s/secret-id/exec").unwrap()),
            ..GatewayConfig::default()
        };
        let gateway = HttpSubmissionGateway::from_config(&config).unwrap();
        let debug = format!("{:?}", gateway);
        assert!(debug.contains("script.example.com"));
        assert!(!debug.contains("secret-id"));
    }

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }
}
