pub mod oauth;
pub mod traits;
pub mod twitter;

pub use traits::Publisher;
pub use twitter::TwitterPublisher;
