//! HTTP client for the SurveyMars API.
//!
//! Survey generation is asynchronous on the remote side: the create call only
//! returns a callback URL, which is then polled until the job reaches a
//! terminal status or the [`PollPolicy`] budget runs out.
//!
//! Every await point in here is a plain future, so dropping the future
//! returned by [`SurveyClient::create_survey`] stops the workflow at whatever
//! request or sleep it is currently in.

use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::{Credentials, PollPolicy};
use crate::models::*;

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// `{"data": ...}` wrapper used by every endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct AuthData {
    access_token: Option<AccessToken>,
}

#[derive(Debug, Deserialize)]
struct CreateData {
    url_callback: Option<String>,
}

/// HTTP client for the SurveyMars API.
#[derive(Debug, Clone)]
pub struct SurveyClient {
    credentials: Credentials,
    poll: PollPolicy,
    client: Client,
}

impl SurveyClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_poll_policy(credentials, PollPolicy::default())
    }

    pub fn with_poll_policy(credentials: Credentials, poll: PollPolicy) -> Self {
        Self {
            credentials,
            poll,
            client: Client::new(),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn poll_policy(&self) -> PollPolicy {
        self.poll
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.credentials.base_url, path)
    }

    /// Check the status and decode the body as JSON.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value, ClientError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status { status, body });
        }
        Ok(serde_json::from_str(&body)?)
    }

    fn decode<T: DeserializeOwned>(value: Value) -> Result<Option<T>, ClientError> {
        let envelope: Envelope<T> = serde_json::from_value(value)?;
        Ok(envelope.data)
    }

    // ============================================================
    // Authentication
    // ============================================================

    /// Exchange the account credentials for an access token.
    ///
    /// Missing token fields come back as empty strings; transport and
    /// decoding failures are returned as errors.
    pub async fn authenticate(&self) -> Result<AccessToken, ClientError> {
        let response = self
            .client
            .post(self.url("/v1/authenticate"))
            .json(&serde_json::json!({
                "id": self.credentials.account_id,
                "credential": self.credentials.secret_key,
            }))
            .send()
            .await?;
        let body = self.handle_response(response).await?;

        // The bearer token stays out of the logs.
        let logged = redact_token(&body);
        tracing::info!(
            account_id = %self.credentials.account_id,
            response = %logged,
            "[authenticate] success"
        );

        let token = Self::decode::<AuthData>(body)?
            .and_then(|data| data.access_token)
            .unwrap_or_default();
        Ok(token)
    }

    // ============================================================
    // Survey Operations
    // ============================================================

    /// Generate a survey and wait for the result.
    ///
    /// Errors are returned only for authentication and submission failures.
    /// Problems while polling are logged and retried until the budget runs out.
    #[tracing::instrument(
        skip_all,
        fields(account_id = %self.credentials.account_id, title = %request.title)
    )]
    pub async fn create_survey(
        &self,
        request: &SurveyCreateRequest,
    ) -> Result<SurveyOutcome, ClientError> {
        let token = self.authenticate().await?;
        let auth = token.header_value();

        let Some(callback) = self.submit(&auth, request).await? else {
            tracing::error!("[surveys create] task create failed: callback url empty");
            return Ok(SurveyOutcome::CallbackMissing);
        };

        Ok(self.poll_callback(&callback, &auth).await)
    }

    /// Submit the generation job. Returns the callback URL, if any.
    async fn submit(
        &self,
        auth: &str,
        request: &SurveyCreateRequest,
    ) -> Result<Option<String>, ClientError> {
        let response = self
            .client
            .post(self.url("/v1/surveys/ai"))
            .header(AUTHORIZATION, auth)
            .json(request)
            .send()
            .await?;
        let body = self.handle_response(response).await?;

        let callback = Self::decode::<CreateData>(body.clone())?
            .and_then(|data| data.url_callback)
            .filter(|url| !url.is_empty());

        if callback.is_some() {
            tracing::info!(response = %body, "[surveys create] task create success");
        }
        Ok(callback)
    }

    /// Poll the callback URL until a terminal status or the budget runs out.
    async fn poll_callback(&self, url: &str, auth: &str) -> SurveyOutcome {
        let max_attempts = self.poll.max_attempts;

        for attempt in 1..=max_attempts {
            match self.fetch_status(url, auth).await {
                Ok((status, data)) => {
                    let response = Value::Object(data.clone());
                    tracing::info!(
                        attempt,
                        task_status = ?status,
                        response = %response,
                        "[survey create] callback"
                    );
                    match status.and_then(JobStatus::from_code) {
                        Some(JobStatus::Success) => return SurveyOutcome::Created(data),
                        Some(status @ (JobStatus::Failure | JobStatus::Canceled)) => {
                            tracing::warn!(
                                attempt,
                                task_status = status.code(),
                                "[survey create] callback: task failed"
                            );
                            return SurveyOutcome::TaskFailed {
                                status,
                                attempts: attempt,
                            };
                        }
                        _ => {}
                    }
                }
                Err(e) => {
                    tracing::error!(attempt, error = %e, "[survey create] callback error");
                }
            }

            if attempt < max_attempts {
                tokio::time::sleep(self.poll.interval).await;
            }
        }

        tracing::error!(max_attempts, "[survey create] callback timeout");
        SurveyOutcome::TimedOut {
            attempts: max_attempts,
        }
    }

    /// One callback request. Returns the raw `task_status` and the rest of `data`.
    ///
    /// The body is read whatever the HTTP status, so a job status reported
    /// alongside an error code still counts. A non-2xx response without a JSON
    /// body is a [`ClientError::Status`].
    async fn fetch_status(
        &self,
        url: &str,
        auth: &str,
    ) -> Result<(Option<i64>, Map<String, Value>), ClientError> {
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, auth)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        let body: Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(ClientError::Status { status, body: text })
            }
            Err(e) => return Err(e.into()),
        };

        let mut data = Self::decode::<Map<String, Value>>(body)?.unwrap_or_default();
        let status = data.shift_remove("task_status").and_then(|v| v.as_i64());
        Ok((status, data))
    }
}

/// Copy of an authenticate response with the token value masked, for logging.
fn redact_token(body: &Value) -> Value {
    let mut logged = body.clone();
    if let Some(token) = logged.pointer_mut("/data/access_token/token") {
        *token = Value::String("<redacted>".to_string());
    }
    logged
}
