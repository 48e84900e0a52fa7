pub mod config;
pub mod coordinator;
pub mod error;
pub mod logging;
pub mod message;
pub mod models;
pub mod publishers;
pub mod scrapers;

pub use config::Config;
pub use coordinator::{run, RunOutcome};
pub use error::{ExtractError, PublishError, RenderError};
pub use models::ConditionsSnapshot;
