use crate::config::Credentials;
use loghub_query::window::{self, TimeWindow};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// 上游调用错误
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    #[error("Invalid response body: {0}")]
    BodyError(String),
}

/// 上游分析 API 返回的状态码与原始 JSON 负载
#[derive(Debug, Clone)]
pub struct AnalyticsResponse {
    pub status: u16,
    pub body: Value,
}

impl AnalyticsResponse {
    /// `result` 数组；字段缺失或不是数组时为 `None`
    pub fn result_rows(&self) -> Option<&Vec<Value>> {
        self.body.get("result").and_then(Value::as_array)
    }

    /// 上游负载中的错误消息
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }
}

/// 日志分析 API 客户端。
///
/// 每次调用发起单个 HTTPS 请求，不重试、不设额外超时；
/// 需要限定时延的调用方自行包裹 deadline。
pub struct AnalyticsClient {
    client: Client,
    base_url: String,
    project_id: String,
    access_token: String,
}

impl AnalyticsClient {
    pub fn new(base_url: String, credentials: Credentials) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: credentials.project_id,
            access_token: credentials.access_token,
        }
    }

    /// `logs.all` 端点地址（不含查询参数）
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/analytics/endpoints/logs.all",
            self.base_url, self.project_id
        )
    }

    /// 查询一个 UTC 时间窗口内的日志。
    ///
    /// `sql` 为 `None` 时不携带查询文本，由上游返回默认结果集。
    pub async fn fetch_logs(
        &self,
        window: &TimeWindow,
        sql: Option<&str>,
    ) -> Result<AnalyticsResponse, AnalyticsError> {
        let mut query: Vec<(&str, String)> = vec![
            ("iso_timestamp_start", window::format_utc(window.start)),
            ("iso_timestamp_end", window::format_utc(window.end)),
        ];
        if let Some(sql) = sql {
            query.push(("sql", sql.to_string()));
        }

        debug!(endpoint = %self.endpoint_url(), "Querying analytics endpoint");

        let response = self
            .client
            .get(self.endpoint_url())
            .query(&query)
            .bearer_auth(&self.access_token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| AnalyticsError::HttpError(e.to_string()))?;

        let status = response.status().as_u16();
        let body: Value = response
            .json()
            .await
            .map_err(|e| AnalyticsError::BodyError(e.to_string()))?;

        Ok(AnalyticsResponse { status, body })
    }

    /// 令牌预览（前 10 个字符），用于连通性探测的调试输出
    pub fn token_preview(&self) -> String {
        let preview: String = self.access_token.chars().take(10).collect();
        format!("{}...", preview)
    }
}
