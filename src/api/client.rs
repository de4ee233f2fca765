use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::types::{
    AuthOutcome, Credentials, Endpoint, FailureKind, RegisterRequest, RegistrationInput,
    ResponseBody, NETWORK_ERROR,
};

/// The two authentication calls the screens depend on.
///
/// Implementations must never fail past this boundary: every error path
/// resolves to [`AuthOutcome::Failure`].
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> AuthOutcome;

    async fn register(&self, input: &RegistrationInput) -> AuthOutcome;
}

/// Failures inside one HTTP exchange, before they are folded into an outcome.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    #[error("server returned {status}")]
    Server {
        status: StatusCode,
        detail: Option<String>,
    },
}

impl ApiError {
    fn into_outcome(self, endpoint: Endpoint) -> AuthOutcome {
        match self {
            ApiError::Transport(err) => {
                let text = err.to_string();
                AuthOutcome::Failure {
                    kind: FailureKind::Transport,
                    reason: if text.is_empty() {
                        NETWORK_ERROR.to_string()
                    } else {
                        text
                    },
                }
            }
            ApiError::Server { detail, .. } => AuthOutcome::Failure {
                kind: FailureKind::Server,
                reason: detail.unwrap_or_else(|| endpoint.default_failure().to_string()),
            },
        }
    }
}

/// [`AuthApi`] over JSON/HTTP against the configured base URL.
///
/// One request per call. No retries, no caching, and no timeout beyond
/// what the transport applies by default.
#[derive(Clone)]
pub struct HttpAuthApi {
    client: Client,
    base_url: Url,
}

impl HttpAuthApi {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            endpoint.path()
        )
    }

    async fn post<B: Serialize + Sync>(&self, endpoint: Endpoint, body: &B) -> AuthOutcome {
        match self.send(endpoint, body).await {
            Ok(message) => {
                debug!(path = endpoint.path(), "auth request succeeded");
                AuthOutcome::Success {
                    message: message.unwrap_or_else(|| endpoint.default_success().to_string()),
                }
            }
            Err(err) => {
                warn!(path = endpoint.path(), error = %err, "auth request failed");
                err.into_outcome(endpoint)
            }
        }
    }

    async fn send<B: Serialize + Sync>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<Option<String>, ApiError> {
        let response = self
            .client
            .post(self.endpoint_url(endpoint))
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(ApiError::Transport)?;
        let parsed = ResponseBody::parse(&bytes);

        if status.is_success() {
            Ok(parsed.message)
        } else {
            Err(ApiError::Server {
                status,
                detail: parsed.detail,
            })
        }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> AuthOutcome {
        self.post(Endpoint::Login, credentials).await
    }

    async fn register(&self, input: &RegistrationInput) -> AuthOutcome {
        self.post(Endpoint::Register, &RegisterRequest::from(input)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_without_double_slash() {
        let api = HttpAuthApi::new(Url::parse("http://10.0.0.2:5000/").unwrap());
        assert_eq!(
            api.endpoint_url(Endpoint::Login),
            "http://10.0.0.2:5000/api/auth/login"
        );
    }

    #[test]
    fn server_error_without_detail_uses_endpoint_default() {
        let err = ApiError::Server {
            status: StatusCode::CONFLICT,
            detail: None,
        };
        assert_eq!(
            err.into_outcome(Endpoint::Register),
            AuthOutcome::Failure {
                kind: FailureKind::Server,
                reason: "Registration failed".into(),
            }
        );
    }

    #[test]
    fn server_error_prefers_detail() {
        let err = ApiError::Server {
            status: StatusCode::UNAUTHORIZED,
            detail: Some("Wrong password".into()),
        };
        assert_eq!(err.into_outcome(Endpoint::Login).text(), "Wrong password");
    }
}
