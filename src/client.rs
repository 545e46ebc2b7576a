//! Authenticated HTTP executor for the CircleCI API
//!
//! Every call in the pipeline goes through [`ApiClient::get`]: it sends
//! `Accept: application/json`, appends the API token as the `circle-token`
//! query parameter, and treats anything other than HTTP 200 as an error.
//! There are no retries; a single failure aborts the whole pipeline.

use std::time::Duration;

use reqwest::header;

use crate::error::{Error, Result};

/// Per-request timeout. The upstream API has no long-polling endpoints, so
/// anything slower than this is a stalled connection.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP executor carrying the API token
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    token: String,
}

impl ApiClient {
    /// Build a client with the given API token
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            token: token.into(),
        })
    }

    /// Issue an authenticated GET request
    ///
    /// `query` is appended after the `circle-token` parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Request`] (with status code and body) for any
    /// response status other than 200, or [`Error::Network`] on a
    /// transport-level failure such as a timeout.
    pub async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<reqwest::Response> {
        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .query(&[("circle-token", self.token.as_str())])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Request {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn get_sends_accept_header_and_token_param() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(header("accept", "application/json"))
            .and(query_param("circle-token", "tok-123"))
            .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new("tok-123").unwrap();
        let response = client
            .get(&format!("{}/ping", server.uri()), &[])
            .await
            .unwrap();

        assert_eq!(response.text().await.unwrap(), "pong");
    }

    #[tokio::test]
    async fn get_merges_extra_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tree/master"))
            .and(query_param("circle-token", "tok"))
            .and(query_param("limit", "1"))
            .and(query_param("filter", "successful"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new("tok").unwrap();
        client
            .get(
                &format!("{}/tree/master", server.uri()),
                &[("limit", "1"), ("filter", "successful")],
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn non_200_status_fails_with_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such project"))
            .mount(&server)
            .await;

        let client = ApiClient::new("tok").unwrap();
        let url = format!("{}/missing", server.uri());
        let err = client.get(&url, &[]).await.unwrap_err();

        match err {
            Error::Request { status, body, url: u } => {
                assert_eq!(status, 404);
                assert_eq!(body, "no such project");
                assert_eq!(u, url);
            }
            other => panic!("expected Request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn only_exact_200_counts_as_success() {
        // A 204 has no artifact body to use
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/empty"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = ApiClient::new("tok").unwrap();
        let err = client
            .get(&format!("{}/empty", server.uri()), &[])
            .await
            .unwrap_err();

        match err {
            Error::Request { status, .. } => assert_eq!(status, 204),
            other => panic!("expected Request error, got {other:?}"),
        }
    }
}
