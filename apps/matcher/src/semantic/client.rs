use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{SemanticClient, SemanticError, SemanticMatchRequest, SemanticMatchResponse};

/// HTTP client for the similarity service.
///
/// One attempt per call, no retries. Each request carries its own timeout.
#[derive(Clone)]
pub struct HttpSemanticClient {
    client: Client,
    base_url: String,
    health_timeout: Duration,
    match_timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    #[serde(alias = "error", alias = "message")]
    detail: String,
}

impl HttpSemanticClient {
    pub fn new(
        base_url: impl Into<String>,
        health_timeout: Duration,
        match_timeout: Duration,
    ) -> Result<Self, SemanticError> {
        let client = Client::builder().build()?;
        Ok(Self::with_http_client(client, base_url, health_timeout, match_timeout))
    }

    /// Uses a caller-built `reqwest::Client` (proxy, TLS and pool settings stay the caller's).
    pub fn with_http_client(
        client: Client,
        base_url: impl Into<String>,
        health_timeout: Duration,
        match_timeout: Duration,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            health_timeout,
            match_timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn error_from(response: reqwest::Response) -> SemanticError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ServiceError>(&body)
            .map(|e| e.detail)
            .unwrap_or(body);
        SemanticError::Api { status, message }
    }
}

fn map_timeout(err: reqwest::Error, timeout: Duration) -> SemanticError {
    if err.is_timeout() {
        SemanticError::Timeout(timeout)
    } else {
        SemanticError::Http(err)
    }
}

#[async_trait]
impl SemanticClient for HttpSemanticClient {
    async fn health_check(&self) -> Result<(), SemanticError> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .timeout(self.health_timeout)
            .send()
            .await
            .map_err(|e| map_timeout(e, self.health_timeout))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(())
    }

    async fn match_candidate(
        &self,
        request: &SemanticMatchRequest,
    ) -> Result<SemanticMatchResponse, SemanticError> {
        let response = self
            .client
            .post(format!("{}/match", self.base_url))
            .timeout(self.match_timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| map_timeout(e, self.match_timeout))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| map_timeout(e, self.match_timeout))?;
        let parsed: SemanticMatchResponse = serde_json::from_str(&body)
            .map_err(|e| SemanticError::Malformed(e.to_string()))?;

        debug!(
            "Semantic match succeeded: weighted={}, overall={}",
            parsed.weighted_score_percentage, parsed.overall_similarity_percentage
        );

        parsed.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    fn request() -> SemanticMatchRequest {
        SemanticMatchRequest {
            job_description: "Build APIs".to_string(),
            resume_text: "Built APIs".to_string(),
            job_skills: vec!["Node.js".to_string()],
            candidate_skills: vec!["Node.js".to_string(), "React".to_string()],
        }
    }

    fn client_for(base_url: &str) -> HttpSemanticClient {
        let http = Client::builder().no_proxy().build().unwrap();
        HttpSemanticClient::with_http_client(
            http,
            base_url,
            Duration::from_secs(2),
            Duration::from_secs(2),
        )
    }

    /// Reads one HTTP/1.1 request: headers, then `content-length` bytes of body.
    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Answers a single request with `status` and `body`, returning the raw request it saw.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let seen = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            seen
        });
        (format!("http://{addr}"), handle)
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HttpSemanticClient::new(
            "http://localhost:8001/",
            Duration::from_secs(5),
            Duration::from_secs(15),
        )
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8001");
    }

    #[test]
    fn test_request_wire_shape() {
        let value = serde_json::to_value(request()).unwrap();
        assert_eq!(value["job_description"], "Build APIs");
        assert_eq!(value["candidate_skills"][1], "React");
    }

    #[tokio::test]
    async fn test_match_posts_json_and_parses_response() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"weighted_score_percentage":72.5,"overall_similarity_percentage":64.0,"skill_similarity_percentage":80.0}"#,
        )
        .await;

        let response = client_for(&url).match_candidate(&request()).await.unwrap();
        assert_eq!(response.weighted_score_percentage, 72.5);
        assert_eq!(response.overall_similarity_percentage, 64.0);
        assert_eq!(response.skill_similarity_percentage, Some(80.0));

        let seen = server.await.unwrap();
        assert!(seen.starts_with("POST /match HTTP/1.1\r\n"));
        assert!(seen.to_lowercase().contains("content-type: application/json"));
        let body = &seen[seen.find("\r\n\r\n").unwrap() + 4..];
        let body: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(body["resume_text"], "Built APIs");
        assert_eq!(body["job_skills"][0], "Node.js");
    }

    #[tokio::test]
    async fn test_error_status_carries_service_message() {
        let (url, _server) =
            serve_once("500 Internal Server Error", r#"{"detail":"model not loaded"}"#).await;
        match client_for(&url).match_candidate(&request()).await {
            Err(SemanticError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "model not loaded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }

        let (url, _server) = serve_once("422 Unprocessable Entity", r#"{"error":"empty resume"}"#).await;
        match client_for(&url).match_candidate(&request()).await {
            Err(SemanticError::Api { status, message }) => {
                assert_eq!(status, 422);
                assert_eq!(message, "empty resume");
            }
            other => panic!("expected Api error, got {other:?}"),
        }

        // non-JSON bodies are passed through as-is
        let (url, _server) = serve_once("502 Bad Gateway", "upstream down").await;
        match client_for(&url).match_candidate(&request()).await {
            Err(SemanticError::Api { status, message }) => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_success_body_is_malformed() {
        let (url, _server) = serve_once("200 OK", "<html>not json</html>").await;
        let result = client_for(&url).match_candidate(&request()).await;
        assert!(matches!(result, Err(SemanticError::Malformed(_))), "{result:?}");

        let (url, _server) = serve_once("200 OK", r#"{"overall_similarity_percentage":50.0}"#).await;
        let result = client_for(&url).match_candidate(&request()).await;
        assert!(matches!(result, Err(SemanticError::Malformed(_))), "{result:?}");
    }

    #[tokio::test]
    async fn test_out_of_range_percentage_is_malformed() {
        let (url, _server) = serve_once(
            "200 OK",
            r#"{"weighted_score_percentage":140.0,"overall_similarity_percentage":60.0}"#,
        )
        .await;
        let result = client_for(&url).match_candidate(&request()).await;
        assert!(matches!(result, Err(SemanticError::Malformed(_))), "{result:?}");
    }

    #[tokio::test]
    async fn test_health_check_follows_status() {
        let (url, server) = serve_once("200 OK", r#"{"status":"healthy"}"#).await;
        client_for(&url).health_check().await.unwrap();
        assert!(server.await.unwrap().starts_with("GET /health HTTP/1.1\r\n"));

        let (url, _server) = serve_once("503 Service Unavailable", r#"{"detail":"warming up"}"#).await;
        match client_for(&url).health_check().await {
            Err(SemanticError::Api { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "warming up");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_slow_service_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let http = Client::builder().no_proxy().build().unwrap();
        let timeout = Duration::from_millis(200);
        let client =
            HttpSemanticClient::with_http_client(http, format!("http://{addr}"), timeout, timeout);
        match client.match_candidate(&request()).await {
            Err(SemanticError::Timeout(after)) => assert_eq!(after, timeout),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_service_is_an_error() {
        // port 9 (discard) on localhost is closed in test environments
        let client = HttpSemanticClient::new(
            "http://127.0.0.1:9",
            Duration::from_secs(1),
            Duration::from_secs(1),
        )
        .unwrap();
        assert!(client.health_check().await.is_err());
    }
}
