use crate::analytics::AnalyticsClient;
use std::sync::Arc;

/// API 应用状态
#[derive(Clone)]
pub struct AppState {
    /// 上游分析 API 客户端
    pub analytics: Arc<AnalyticsClient>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(analytics: Arc<AnalyticsClient>) -> Self {
        Self { analytics }
    }
}
