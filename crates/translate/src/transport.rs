//! HTTP seam for completion requests

use async_trait::async_trait;
use polyrun_core::{Error, Result};
use serde_json::Value;

/// Status and raw body of an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON POST with bearer authentication.
///
/// Any response that arrives, whatever its status, is `Ok`; only transport
/// failures are errors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(&self, url: &str, bearer: &str, body: &Value) -> Result<HttpResponse>;
}

/// Production transport backed by `reqwest`
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, bearer: &str, body: &Value) -> Result<HttpResponse> {
        let response = self
            .client
            .post(url)
            .bearer_auth(bearer)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::network(url, describe(&e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::network(url, format!("failed to read response body: {e}")))?;

        Ok(HttpResponse { status, body })
    }
}

fn describe(err: &reqwest::Error) -> String {
    if err.is_connect() {
        format!("connection failed: {err}")
    } else if err.is_timeout() {
        format!("request timed out: {err}")
    } else {
        format!("request failed: {err}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_reqwest_transport_posts_json_with_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/echo"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({"hello": "world"})))
            .respond_with(ResponseTemplate::new(201).set_body_string("created"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new();
        let response = transport
            .post_json(
                &format!("{}/echo", server.uri()),
                "sk-test",
                &json!({"hello": "world"}),
            )
            .await
            .unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(response.body, "created");
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_error_status_is_not_a_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let response = ReqwestTransport::new()
            .post_json(&server.uri(), "k", &json!({}))
            .await
            .unwrap();
        assert_eq!(response.status, 503);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        // Reserve a port, then free it so nothing is listening
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = ReqwestTransport::new()
            .post_json(&format!("http://{addr}/x"), "k", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Network { .. }), "{err:?}");
    }
}
