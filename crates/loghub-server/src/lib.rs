pub mod analytics;
pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

pub use analytics::{AnalyticsClient, AnalyticsError, AnalyticsResponse};
pub use api::create_router;
pub use config::{AppConfig, Credentials};
pub use error::{ApiError, Result};
pub use state::AppState;
