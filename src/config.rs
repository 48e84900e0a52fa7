use crate::scrapers::RenderOptions;
use std::fmt;
use tracing::warn;

/// Resort conditions page
pub const CONDITIONS_URL: &str = "http://bogusbasin.org/the-mountain/overview/conditions-webcams/";

/// Shortened link to the full report, appended to every post
pub const SHORT_LINK: &str = "https://t.co/scvdRYJMDd";

pub const TWITTER_API_BASE: &str = "https://api.twitter.com";

const CONSUMER_KEY_VAR: &str = "VALHOLLER_TWITTER_CONSUMER_KEY";
const CONSUMER_SECRET_VAR: &str = "VALHOLLER_TWITTER_CONSUMER_SECRET";
const ACCESS_TOKEN_KEY_VAR: &str = "VALHOLLER_TWITTER_ACCESS_TOKEN_KEY";
const ACCESS_TOKEN_SECRET_VAR: &str = "VALHOLLER_TWITTER_ACCESS_TOKEN_SECRET";

/// OAuth 1.0a user-context credentials for the posting account
#[derive(Clone, Default)]
pub struct TwitterCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token_key: String,
    pub access_token_secret: String,
}

impl fmt::Debug for TwitterCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwitterCredentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("access_token_key", &self.access_token_key)
            .field("access_token_secret", &"<redacted>")
            .finish()
    }
}

impl TwitterCredentials {
    /// Read the credentials from the environment.
    ///
    /// Unset variables become empty strings; the API rejects them when posting.
    pub fn from_env() -> Self {
        Self {
            consumer_key: read_var(CONSUMER_KEY_VAR),
            consumer_secret: read_var(CONSUMER_SECRET_VAR),
            access_token_key: read_var(ACCESS_TOKEN_KEY_VAR),
            access_token_secret: read_var(ACCESS_TOKEN_SECRET_VAR),
        }
    }
}

fn read_var(name: &str) -> String {
    match std::env::var(name) {
        Ok(value) => value,
        Err(_) => {
            warn!("{} is not set, posting will fail to authenticate", name);
            String::new()
        }
    }
}

/// Everything a single run needs
#[derive(Debug, Clone)]
pub struct Config {
    pub target_url: String,
    pub short_link: String,
    pub render: RenderOptions,
    pub twitter: TwitterCredentials,
    pub api_base: String,
}

impl Config {
    /// Build the run configuration, loading a `.env` file first if one exists
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            twitter: TwitterCredentials::from_env(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_url: CONDITIONS_URL.to_string(),
            short_link: SHORT_LINK.to_string(),
            render: RenderOptions::default(),
            twitter: TwitterCredentials::default(),
            api_base: TWITTER_API_BASE.to_string(),
        }
    }
}
