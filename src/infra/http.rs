//! HTTP transport.
//!
//! Thin wrapper over reqwest with a cookie store (the server issues the
//! session as an `access_token` cookie), base-URL joining, and uniform error
//! decoding. A 401 "Not authenticated" on a non-auth path means the session
//! expired server-side; the local session is cleared so the rest of the
//! client sees the logout.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use mensa_api_types::ErrorBody;
use reqwest::{Client, Method, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use super::endpoints;
use super::session::Session;
use crate::config::ApiSettings;

const NOT_AUTHENTICATED_DETAIL: &str = "Not authenticated";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("server rejected request ({status}): {detail}")]
    Api { status: u16, detail: String },
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// Error observed through a coalesced fetch shared by several waiters.
    #[error("{0}")]
    Shared(Arc<ApiError>),
}

impl ApiError {
    /// Status code of the underlying API rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::NotAuthenticated => Some(401),
            Self::Shared(inner) => inner.status(),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base: Url,
    session: Session,
}

impl HttpClient {
    pub fn new(settings: &ApiSettings, session: Session) -> Result<Self, ApiError> {
        // Relative joins drop the last path segment unless the base ends in a
        // slash, so "http://host/api" and "http://host/api/" must both work.
        let mut base = Url::parse(&settings.base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .cookie_store(true)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base,
            session,
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("mensa/", env!("CARGO_PKG_VERSION"))
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path)?)
    }

    /// GET returning the raw body. This is what cached reads go through.
    pub async fn get_bytes(&self, path: &str) -> Result<Bytes, ApiError> {
        let resp = self.client.get(self.url(path)?).send().await?;
        self.handle(path, resp).await
    }

    /// Request with an optional JSON body, decoding the response.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<T, ApiError> {
        let bytes = self.send(method, path, body).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Request whose response body is irrelevant.
    pub async fn request_unit(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<(), ApiError> {
        self.send(method, path, body).await?;
        Ok(())
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// POST without a request body (logout, invitation answers).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::POST, path, None::<&()>).await
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request_unit(Method::DELETE, path, None::<&()>).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<Bytes, ApiError> {
        let mut req = self.client.request(method, self.url(path)?);
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req.send().await?;
        self.handle(path, resp).await
    }

    async fn handle(&self, path: &str, resp: Response) -> Result<Bytes, ApiError> {
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if status.is_success() {
            return Ok(bytes);
        }

        let detail = match serde_json::from_slice::<ErrorBody>(&bytes) {
            Ok(body) => body.detail,
            Err(_) => String::from_utf8_lossy(&bytes).into_owned(),
        };

        if status.as_u16() == 401
            && detail == NOT_AUTHENTICATED_DETAIL
            && !endpoints::is_auth_path(path)
        {
            warn!(path, "Session expired server-side; clearing local session");
            self.session.clear();
            return Err(ApiError::NotAuthenticated);
        }

        debug!(path, status = status.as_u16(), detail, "API request rejected");
        Err(ApiError::Api {
            status: status.as_u16(),
            detail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiSettings;

    fn client(base_url: &str) -> HttpClient {
        let settings = ApiSettings {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        };
        HttpClient::new(&settings, Session::new()).expect("valid base url")
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let http = client("http://localhost:8000/api/");
        let url = http.url("auth/me").expect("join");
        assert_eq!(url.as_str(), "http://localhost:8000/api/auth/me");
    }

    #[test]
    fn missing_trailing_slash_is_tolerated() {
        let http = client("http://localhost:8000/api");
        let url = http.url(&endpoints::group(uuid::Uuid::nil())).expect("join");
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/groups/00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn garbage_base_url_is_rejected() {
        let settings = ApiSettings {
            base_url: "not a url".to_string(),
            timeout_secs: 5,
        };
        assert!(HttpClient::new(&settings, Session::new()).is_err());
    }
}
