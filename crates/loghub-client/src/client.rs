use loghub_query::{LogQueryResponse, LogTable, QueryParams};
use reqwest::Client;
use serde_json::Value;
use tracing::{info, warn};

use crate::mock::mock_logs;

/// 客户端错误
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    #[error("Unexpected response shape: {0}")]
    InvalidResponse(String),
}

/// 日志网关客户端
pub struct LogsClient {
    client: Client,
    base_url: String,
}

impl LogsClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn logs_url(&self) -> String {
        format!("{}/api/v1/logs", self.base_url)
    }

    /// 查询系统日志，返回网关的统一信封；传输失败时报错，
    /// 由调用方决定如何降级。
    pub async fn get_system_logs(
        &self,
        params: &QueryParams,
    ) -> Result<LogQueryResponse, ClientError> {
        let response = self
            .client
            .post(self.logs_url())
            .json(params)
            .send()
            .await
            .map_err(|e| ClientError::HttpError(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// 查询系统日志并在失败时回退到模拟数据。
    ///
    /// 网关不可达或响应无法解析时记录告警并返回请求日志源对应的
    /// 内置数据集，保证调用方总能拿到可展示的行。
    pub async fn get_logs_or_mock(&self, params: &QueryParams) -> Vec<Value> {
        let table = LogTable::resolve(params.log_type.as_deref());

        match self.get_system_logs(params).await {
            Ok(envelope) => {
                info!(count = envelope.data.len(), table = %table, "Fetched system logs");
                envelope.data
            }
            Err(err) => {
                warn!(error = %err, table = %table, "Gateway unavailable, falling back to mock data");
                mock_logs(table)
            }
        }
    }
}
