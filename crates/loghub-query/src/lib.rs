pub mod envelope;
pub mod plan;
pub mod source;
pub mod sql;
pub mod templates;
pub mod window;

pub use envelope::{clamp_limit, LogQueryResponse, QueryParams, DEFAULT_LIMIT, MAX_LIMIT};
pub use plan::QueryPlan;
pub use source::LogTable;
pub use sql::build_sql;
pub use templates::{query_templates, QueryTemplate};
pub use window::TimeWindow;
