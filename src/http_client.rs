use reqwest::Client;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

use crate::config::ScrapeConfig;

/// Raw result of a single GET. The status is kept for logging only.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: Vec<u8>,
}

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// No request or connect timeout is set; a slow server is waited on.
    pub fn new(config: &ScrapeConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// Issues one GET and returns whatever body came back.
    ///
    /// A non-success status is not an error here: the body is handed to the
    /// parser as-is, the same as a 200.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let url = Url::parse(url)?;
        info!(url = %url, host = url.host_str().unwrap_or(""), "fetching page");

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "non-success status, parsing body anyway");
        }

        let body = response.bytes().await?.to_vec();
        info!(status = status.as_u16(), bytes = body.len(), "fetch complete");

        Ok(FetchedPage {
            status: status.as_u16(),
            body,
        })
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> HttpClient {
        HttpClient::new(&ScrapeConfig::default()).expect("client builds")
    }

    #[tokio::test]
    async fn fetch_returns_body_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wiki/Page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>hello</p>"))
            .expect(1)
            .mount(&server)
            .await;

        let page = client()
            .fetch(&format!("{}/wiki/Page", server.uri()))
            .await
            .expect("fetch succeeds");

        assert_eq!(page.status, 200);
        assert_eq!(page.body, b"<p>hello</p>".to_vec());
    }

    #[tokio::test]
    async fn fetch_sends_configured_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", "Mozilla/5.0 (compatible; LinkScraper/0.1)"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let page = client().fetch(&server.uri()).await.expect("fetch succeeds");
        assert_eq!(page.body, b"ok".to_vec());
    }

    #[tokio::test]
    async fn non_success_status_still_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("<h1>Not Found</h1>"))
            .mount(&server)
            .await;

        let page = client().fetch(&server.uri()).await.expect("404 is not an error");

        assert_eq!(page.status, 404);
        assert_eq!(page.body, b"<h1>Not Found</h1>".to_vec());
    }

    #[tokio::test]
    async fn slow_response_is_waited_for() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<p>late</p>")
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let page = client().fetch(&server.uri()).await.expect("slow page is not an error");

        assert_eq!(page.body, b"<p>late</p>".to_vec());
    }

    #[tokio::test]
    async fn malformed_url_is_rejected_before_sending() {
        let err = client().fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_request_error() {
        let err = client().fetch("http://127.0.0.1:1/").await.unwrap_err();
        assert!(matches!(err, FetchError::Request(_)));
    }
}
