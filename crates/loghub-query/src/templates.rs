use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 预设查询模板，供前端快捷查询使用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryTemplate {
    pub title: String,
    /// 对应的日志源别名，可直接作为查询的 `type` 参数
    pub log_type: String,
    pub description: String,
}

impl QueryTemplate {
    fn new(title: &str, log_type: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            log_type: log_type.to_string(),
            description: description.to_string(),
        }
    }
}

/// 常用日志查询模板，键名与前端约定保持一致
pub fn query_templates() -> BTreeMap<&'static str, QueryTemplate> {
    BTreeMap::from([
        (
            "api_logs",
            QueryTemplate::new("API请求日志", "edge", "查询最近24小时的API请求日志"),
        ),
        (
            "function_edge_logs",
            QueryTemplate::new(
                "边缘函数日志",
                "function_edge",
                "查询最近24小时的边缘函数调用日志",
            ),
        ),
        (
            "function_logs",
            QueryTemplate::new("函数执行日志", "function", "查询最近24小时的函数执行日志"),
        ),
        (
            "recent_auth",
            QueryTemplate::new("最近认证日志", "auth", "查询最近24小时的用户认证活动"),
        ),
        (
            "recent_errors",
            QueryTemplate::new(
                "最近错误日志",
                "edge",
                "查询最近24小时的错误日志(400/500等状态码)",
            ),
        ),
    ])
}
