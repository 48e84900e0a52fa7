use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure while driving the headless browser
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to build browser launch options: {0}")]
    Options(String),

    #[error("failed to launch Chrome browser")]
    Launch(#[source] BoxError),

    #[error("failed to load {url}")]
    Navigation {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to read page content")]
    Content(#[source] BoxError),

    #[error("browser task did not complete")]
    Task(#[from] tokio::task::JoinError),
}

/// A selector that matched nothing in the rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNotFound {
    pub field: &'static str,
    pub selector: &'static str,
}

/// The rendered page is missing one or more expected conditions nodes
#[derive(Debug, Error)]
#[error("conditions page is missing {}", describe_missing(.missing))]
pub struct ExtractError {
    pub missing: Vec<FieldNotFound>,
}

impl ExtractError {
    /// Names of every field whose node was absent
    pub fn fields(&self) -> Vec<&'static str> {
        self.missing.iter().map(|m| m.field).collect()
    }
}

fn describe_missing(missing: &[FieldNotFound]) -> String {
    missing
        .iter()
        .map(|m| format!("{} ({})", m.field, m.selector))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure while submitting a post
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to sign request: {0}")]
    Signing(String),

    #[error("request to posting API failed")]
    Transport(#[from] reqwest::Error),

    #[error("posting API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}
