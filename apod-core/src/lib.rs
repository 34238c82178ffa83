pub mod api_client;
pub mod config;
pub mod date;
pub mod error;
pub mod logging;
pub mod panel;
pub mod render;
pub mod types;

pub use api_client::ApodClient;
pub use config::{ApodSettings, AppConfig};
pub use error::{ApodError, ConfigError};
pub use panel::ApodPanel;
pub use render::{ImageSlot, RenderTarget, RenderUpdate};
pub use types::{ApodRecord, MediaType};
