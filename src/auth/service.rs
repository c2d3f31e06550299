use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const LOGIN_PATH: &str = "/api/user/login";
pub const REGISTER_PATH: &str = "/api/user/register";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthRequest {
    Login(LoginRequest),
    Register(RegisterRequest),
}

impl AuthRequest {
    pub async fn send<S: AuthService + ?Sized>(&self, service: &S) -> Result<AuthResponse, AuthError> {
        match self {
            AuthRequest::Login(request) => service.login(request).await,
            AuthRequest::Register(request) => service.register(request).await,
        }
    }
}

/// Body returned by both endpoints. Error bodies from the server may carry
/// only a `message`, so both fields are optional on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed with status code {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("Unexpected response from auth service: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AuthError {
    /// Message supplied by the service itself, if it sent one.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            AuthError::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AuthError>;

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError>;
}

/// Auth service reached over HTTP with JSON bodies.
#[derive(Clone, Debug)]
pub struct HttpAuthService {
    client: Client,
    base_url: String,
}

impl HttpAuthService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<AuthResponse, AuthError> {
        let url = self.url(path);
        debug!(%url, "auth request");
        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<AuthResponse>(&text)
                .ok()
                .and_then(|parsed| parsed.message);
            warn!(%url, status = status.as_u16(), "auth service rejected request");
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AuthError> {
        self.post(LOGIN_PATH, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError> {
        self.post(REGISTER_PATH, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_body_uses_user_name_key() {
        let body = serde_json::to_value(RegisterRequest {
            user_name: "Asha".into(),
            email: "asha@example.com".into(),
            password: "secret1".into(),
        })
        .unwrap();
        assert_eq!(body["userName"], "Asha");
        assert!(body.get("user_name").is_none());
    }

    #[test]
    fn response_fields_are_optional() {
        let parsed: AuthResponse = serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.message.as_deref(), Some("Invalid credentials"));

        let parsed: AuthResponse =
            serde_json::from_str(r#"{"success":true,"user":{"id":"1"},"token":"t"}"#).unwrap();
        assert!(parsed.success);
        assert!(parsed.message.is_none());
    }

    #[test]
    fn url_joins_without_double_slash() {
        let service = HttpAuthService::new("http://localhost:5000/");
        assert_eq!(service.url(LOGIN_PATH), "http://localhost:5000/api/user/login");
    }

    #[test]
    fn service_message_only_for_non_empty_rejections() {
        let err = AuthError::Rejected {
            status: 401,
            message: Some("Password is not correct!".into()),
        };
        assert_eq!(err.service_message(), Some("Password is not correct!"));

        let err = AuthError::Rejected {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(err.service_message(), None);
        assert_eq!(err.to_string(), "Request failed with status code 500");
    }
}
