use serde::{Deserialize, Serialize};

/// 默认返回条数
pub const DEFAULT_LIMIT: u32 = 20;

/// 单次查询允许的最大返回条数
pub const MAX_LIMIT: u32 = 100;

/// 日志查询请求参数，来自请求体或查询字符串
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    /// 日志源标识，自由文本，按别名表解析
    #[serde(rename = "type")]
    pub log_type: Option<String>,
    /// 开始时间，东八区本地时间字符串
    pub iso_timestamp_start: Option<String>,
    /// 结束时间，东八区本地时间字符串
    pub iso_timestamp_end: Option<String>,
    /// 返回条数，字符串编码的整数
    pub limit: Option<String>,
}

impl QueryParams {
    /// 请求体与查询字符串回退时，用于判断请求体是否携带了参数
    pub fn is_empty(&self) -> bool {
        self.log_type.is_none()
            && self.iso_timestamp_start.is_none()
            && self.iso_timestamp_end.is_none()
            && self.limit.is_none()
    }

    /// 空白字符串视为未提供；查询字符串里 `?type=` 会解析出空值
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value.filter(|s| !s.trim().is_empty())
        }

        Self {
            log_type: clean(self.log_type),
            iso_timestamp_start: clean(self.iso_timestamp_start),
            iso_timestamp_end: clean(self.iso_timestamp_end),
            limit: clean(self.limit),
        }
    }

    /// 解析后的有效返回条数
    pub fn effective_limit(&self) -> u32 {
        clamp_limit(self.limit.as_deref())
    }
}

/// 解析 limit 参数：缺失、非法或非正值回退到默认 20，上限 100
pub fn clamp_limit(raw: Option<&str>) -> u32 {
    match raw.and_then(|s| s.trim().parse::<i64>().ok()) {
        Some(n) if n >= 1 => n.min(i64::from(MAX_LIMIT)) as u32,
        _ => DEFAULT_LIMIT,
    }
}

/// 错误信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// 调用方原始输入的时间回显
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRangeInput {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// 解析后的时间范围元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRangeMeta {
    /// 解析后的 UTC 开始时间
    pub start: String,
    /// 解析后的 UTC 结束时间
    pub end: String,
    /// 东八区本地显示
    pub start_local: String,
    pub end_local: String,
    /// 调用方原始输入
    pub input: TimeRangeInput,
    /// 中文时长描述
    pub duration: String,
}

/// 响应元数据中的查询描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryMeta {
    /// 调用方提交的日志源标识
    #[serde(rename = "type")]
    pub log_type: Option<String>,
    /// 解析后的日志表名称
    pub table: String,
    /// 解析后的返回条数
    pub limit: u32,
    pub time_range: TimeRangeMeta,
    /// 生成的查询 SQL
    pub sql: String,
}

/// 响应元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    pub query: QueryMeta,
    /// 本次返回的记录数
    pub count: usize,
    /// 响应生成时间（UTC）
    pub timestamp: String,
    /// 响应生成时间（东八区）
    pub timestamp_local: String,
}

/// 统一响应信封。
///
/// 无论上游结果如何，网关始终返回该结构；真实结果码在嵌套的
/// `status` 字段中，传输层一律 200。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogQueryResponse {
    pub success: bool,
    pub status: u16,
    /// 上游返回的原始日志行，结构因日志源而异
    pub data: Vec<serde_json::Value>,
    pub error: Option<ErrorBody>,
    pub meta: ResponseMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_limit_defaults_and_bounds() {
        assert_eq!(clamp_limit(None), 20);
        assert_eq!(clamp_limit(Some("abc")), 20);
        assert_eq!(clamp_limit(Some("")), 20);
        assert_eq!(clamp_limit(Some("0")), 20);
        assert_eq!(clamp_limit(Some("-5")), 20);
        assert_eq!(clamp_limit(Some("1")), 1);
        assert_eq!(clamp_limit(Some("50")), 50);
        assert_eq!(clamp_limit(Some("100")), 100);
        assert_eq!(clamp_limit(Some("500")), 100);
        assert_eq!(clamp_limit(Some(" 30 ")), 30);
    }

    #[test]
    fn test_normalized_drops_blank_values() {
        let params = QueryParams {
            log_type: Some("".to_string()),
            iso_timestamp_start: Some("  ".to_string()),
            iso_timestamp_end: Some("2025-04-09T09:00:00".to_string()),
            limit: None,
        }
        .normalized();

        assert_eq!(params.log_type, None);
        assert_eq!(params.iso_timestamp_start, None);
        assert_eq!(
            params.iso_timestamp_end.as_deref(),
            Some("2025-04-09T09:00:00")
        );
        assert!(!params.is_empty());
        assert!(QueryParams::default().is_empty());
    }

    #[test]
    fn test_params_deserialize_wire_names() {
        let params: QueryParams = serde_json::from_str(
            r#"{"type":"auth","iso_timestamp_start":"2025-04-09T08:00:00","limit":"50"}"#,
        )
        .unwrap();

        assert_eq!(params.log_type.as_deref(), Some("auth"));
        assert_eq!(params.effective_limit(), 50);
    }

    #[test]
    fn test_envelope_wire_shape() {
        let response = LogQueryResponse {
            success: false,
            status: 200,
            data: vec![],
            error: Some(ErrorBody {
                message: "没有找到符合条件的日志数据".to_string(),
            }),
            meta: ResponseMeta {
                query: QueryMeta {
                    log_type: Some("auth".to_string()),
                    table: "auth_logs".to_string(),
                    limit: 20,
                    time_range: TimeRangeMeta {
                        start: "2025-04-09T00:00:00+00:00".to_string(),
                        end: "2025-04-09T01:00:00+00:00".to_string(),
                        start_local: "2025-04-09 08:00:00".to_string(),
                        end_local: "2025-04-09 09:00:00".to_string(),
                        input: TimeRangeInput::default(),
                        duration: "1小时".to_string(),
                    },
                    sql: "SELECT 1".to_string(),
                },
                count: 0,
                timestamp: "2025-04-09T01:00:00+00:00".to_string(),
                timestamp_local: "2025-04-09 09:00:00".to_string(),
            },
        };

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["meta"]["query"]["type"], "auth");
        assert_eq!(value["meta"]["query"]["table"], "auth_logs");
        assert!(value["meta"]["query"]["timeRange"]["startLocal"].is_string());
        assert!(value["meta"]["query"]["timeRange"]["input"]["start"].is_null());
        assert!(value["meta"]["timestampLocal"].is_string());
        assert_eq!(value["error"]["message"], "没有找到符合条件的日志数据");

        // error 为 None 时序列化为显式 null
        let ok = LogQueryResponse {
            success: true,
            error: None,
            ..response
        };
        let value = serde_json::to_value(&ok).unwrap();
        assert!(value["error"].is_null());
    }
}
