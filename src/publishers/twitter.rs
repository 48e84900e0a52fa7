use crate::config::{Config, TwitterCredentials};
use crate::error::PublishError;
use crate::publishers::oauth::OAuthSigner;
use crate::publishers::traits::Publisher;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

const CREATE_POST_PATH: &str = "/2/tweets";

/// Posts statuses through the Twitter v2 API
pub struct TwitterPublisher {
    client: Client,
    credentials: TwitterCredentials,
    endpoint: String,
}

#[derive(Serialize)]
struct CreatePost<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct CreatePostResponse {
    data: PostedStatus,
}

#[derive(Deserialize)]
struct PostedStatus {
    id: String,
    text: String,
}

impl TwitterPublisher {
    pub fn new(credentials: TwitterCredentials, api_base: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            credentials,
            endpoint: format!("{}{}", api_base.trim_end_matches('/'), CREATE_POST_PATH),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.twitter.clone(), &config.api_base)
    }

    /// Any 2xx reply counts as posted; the echoed status is only read for logging
    async fn submit(&self, message: &str) -> Result<Option<PostedStatus>, PublishError> {
        let authorization =
            OAuthSigner::new(&self.credentials).authorization("POST", &self.endpoint, &[])?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, authorization)
            .json(&CreatePost { text: message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::Api { status, body });
        }

        let posted = response
            .json::<CreatePostResponse>()
            .await
            .ok()
            .map(|r| r.data);
        Ok(posted)
    }
}

#[async_trait]
impl Publisher for TwitterPublisher {
    async fn publish(&self, message: &str) -> Result<(), PublishError> {
        info!("Submitting post to the Twitter API...");

        match self.submit(message).await {
            Ok(Some(posted)) => {
                info!("Successfully posted status {}", posted.id);
                debug!("Posted text: {}", posted.text);
                Ok(())
            }
            Ok(None) => {
                info!("Successfully posted status");
                Ok(())
            }
            Err(e) => {
                error!("An issue occurred attempting to post: {}", e);
                Err(e)
            }
        }
    }

    fn destination(&self) -> &'static str {
        "Twitter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credentials() -> TwitterCredentials {
        TwitterCredentials {
            consumer_key: "consumer".to_string(),
            consumer_secret: "consumer-secret".to_string(),
            access_token_key: "token".to_string(),
            access_token_secret: "token-secret".to_string(),
        }
    }

    #[tokio::test]
    async fn posts_signed_json_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/2/tweets"))
            .and(header_exists("authorization"))
            .and(body_json(json!({ "text": "Temp: 28F" })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({ "data": { "id": "1745", "text": "Temp: 28F" } })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let publisher = TwitterPublisher::new(credentials(), &server.uri()).unwrap();
        publisher.publish("Temp: 28F").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let authorization = requests[0]
            .headers
            .get("authorization")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(authorization.starts_with("OAuth "));
        assert!(authorization.contains("oauth_consumer_key=\"consumer\""));
        assert!(authorization.contains("oauth_token=\"token\""));
    }

    #[tokio::test]
    async fn accepted_post_without_body_succeeds() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/2/tweets"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let publisher = TwitterPublisher::new(credentials(), &server.uri()).unwrap();
        assert!(publisher.publish("Temp: 28F").await.is_ok());
    }

    #[tokio::test]
    async fn accepted_post_with_unexpected_body_succeeds() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/2/tweets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .mount(&server)
            .await;

        let publisher = TwitterPublisher::new(credentials(), &server.uri()).unwrap();
        assert!(publisher.publish("Temp: 28F").await.is_ok());
    }

    #[tokio::test]
    async fn api_rejection_carries_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/2/tweets"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_string(r#"{"title":"Forbidden","detail":"duplicate content"}"#),
            )
            .mount(&server)
            .await;

        let publisher = TwitterPublisher::new(credentials(), &server.uri()).unwrap();
        let err = publisher.publish("Temp: 28F").await.unwrap_err();

        match err {
            PublishError::Api { status, body } => {
                assert_eq!(status.as_u16(), 403);
                assert!(body.contains("duplicate content"));
            }
            other => panic!("expected an API error, got {other:?}"),
        }
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let publisher = TwitterPublisher::new(credentials(), "https://api.twitter.com/").unwrap();
        assert_eq!(publisher.endpoint, "https://api.twitter.com/2/tweets");
    }
}
