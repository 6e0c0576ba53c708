use crate::source::LogTable;

/// 时间戳投影：按东八区渲染为可读格式
const TIMESTAMP_SELECT: &str = r#"datetime(timestamp, "Asia/Shanghai") as formatted_time"#;

/// 按日志源渲染查询 SQL。
///
/// 所有模板均按时间倒序排列并以解析后的 limit 截断；
/// 同一输入必定产生字节一致的输出。
pub fn build_sql(table: LogTable, limit: u32) -> String {
    let name = table.table_name();

    match table {
        // 边缘 API 日志额外投影请求/响应元数据，并过滤预检与健康检查噪音
        LogTable::Edge => format!(
            "SELECT\n  \
             {TIMESTAMP_SELECT},\n  \
             id,\n  \
             event_message,\n  \
             r.method as request_method,\n  \
             r.path as request_path,\n  \
             r.host as request_host,\n  \
             rs.status_code as response_status,\n  \
             h.x_real_ip as client_ip,\n  \
             h.user_agent as user_agent,\n  \
             r.sb as supabase_auth\n\
             FROM {name}\n\
             CROSS JOIN UNNEST(metadata) as m\n\
             CROSS JOIN UNNEST(m.request) as r\n\
             CROSS JOIN UNNEST(m.response) as rs\n\
             CROSS JOIN UNNEST(r.headers) as h\n\
             WHERE r.method != 'OPTIONS'\n  \
             AND r.path NOT LIKE '/auth/v1/health%'\n  \
             AND r.path NOT LIKE '/rest-admin/v1/live%'\n\
             ORDER BY timestamp DESC\n\
             LIMIT {limit}"
        ),

        // 函数日志携带执行元数据
        LogTable::Function | LogTable::FunctionEdge => format!(
            "SELECT\n  \
             {TIMESTAMP_SELECT},\n  \
             id,\n  \
             event_message,\n  \
             m.function_id,\n  \
             m.execution_time_ms,\n  \
             m.deployment_id\n\
             FROM {name}\n\
             CROSS JOIN UNNEST(metadata) as m\n\
             ORDER BY timestamp DESC\n\
             LIMIT {limit}"
        ),

        // 其余日志源只投影时间戳、标识和消息
        _ => format!(
            "SELECT\n  \
             {TIMESTAMP_SELECT},\n  \
             id,\n  \
             event_message\n\
             FROM {name}\n\
             ORDER BY timestamp DESC\n\
             LIMIT {limit}"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_is_deterministic() {
        let first = build_sql(LogTable::Edge, 35);
        let second = build_sql(LogTable::Edge, 35);

        assert_eq!(first, second);
    }

    #[test]
    fn test_all_templates_order_and_limit() {
        for table in [
            LogTable::Auth,
            LogTable::Edge,
            LogTable::FunctionEdge,
            LogTable::Function,
            LogTable::PgBouncer,
            LogTable::Postgres,
            LogTable::Postgrest,
            LogTable::Realtime,
            LogTable::Storage,
            LogTable::Supervisor,
        ] {
            let sql = build_sql(table, 42);

            assert!(sql.contains(&format!("FROM {}", table.table_name())), "{}", sql);
            assert!(sql.contains("ORDER BY timestamp DESC"), "{}", sql);
            assert!(sql.ends_with("LIMIT 42"), "{}", sql);
            assert!(sql.contains(r#"datetime(timestamp, "Asia/Shanghai")"#), "{}", sql);
        }
    }

    #[test]
    fn test_edge_template_filters_noise() {
        let sql = build_sql(LogTable::Edge, 20);

        assert!(sql.contains("r.method != 'OPTIONS'"));
        assert!(sql.contains("'/auth/v1/health%'"));
        assert!(sql.contains("'/rest-admin/v1/live%'"));
        assert!(sql.contains("user_agent"));
        assert!(sql.contains("client_ip"));
    }

    #[test]
    fn test_function_templates_expose_execution_metadata() {
        for table in [LogTable::Function, LogTable::FunctionEdge] {
            let sql = build_sql(table, 20);

            assert!(sql.contains("m.function_id"));
            assert!(sql.contains("m.execution_time_ms"));
            assert!(sql.contains("m.deployment_id"));
        }
    }

    #[test]
    fn test_basic_template_has_no_joins() {
        let sql = build_sql(LogTable::Auth, 20);

        assert!(!sql.contains("CROSS JOIN"));
        assert!(sql.contains("event_message"));
    }
}
