pub mod browser;
pub mod conditions;
pub mod traits;
pub mod types;

pub use browser::ChromeRenderer;
pub use conditions::extract;
pub use traits::PageRenderer;
pub use types::RenderOptions;
