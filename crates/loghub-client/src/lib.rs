pub mod client;
pub mod mock;

pub use client::{ClientError, LogsClient};
pub use mock::mock_logs;
