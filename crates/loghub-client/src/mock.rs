use chrono::{Duration, Utc};
use loghub_query::LogTable;
use serde_json::{json, Value};

/// 指定日志源的模拟数据集。
///
/// 行结构与真实日志行保持一致，消息前缀 `模拟数据` 便于前端识别；
/// 没有预设数据的日志源返回单行占位记录。
pub fn mock_logs(table: LogTable) -> Vec<Value> {
    let now = Utc::now().to_rfc3339();
    let yesterday = (Utc::now() - Duration::hours(24)).to_rfc3339();

    match table {
        LogTable::Auth => vec![
            json!({ "time": now, "event_message": "模拟数据: User admin@example.com signed in", "user_id": "admin-123" }),
            json!({ "time": now, "event_message": "模拟数据: User user1@example.com signed in", "user_id": "user-456" }),
            json!({ "time": yesterday, "event_message": "模拟数据: User admin@example.com signed out", "user_id": "admin-123" }),
            json!({ "time": yesterday, "event_message": "模拟数据: Password reset requested for user2@example.com", "user_id": "user-789" }),
            json!({ "time": yesterday, "event_message": "模拟数据: User user3@example.com failed to sign in: incorrect password", "user_id": "user-101" }),
        ],
        LogTable::Edge => vec![
            json!({ "time": now, "message": "模拟数据: GET请求到 /api/users", "function_id": "api-handler", "method": "GET", "path": "/api/users", "status_code": 200 }),
            json!({ "time": now, "message": "模拟数据: POST请求到 /api/departments", "function_id": "api-handler", "method": "POST", "path": "/api/departments", "status_code": 201 }),
            json!({ "time": now, "message": "模拟数据: PUT请求到 /api/users/123", "function_id": "api-handler", "method": "PUT", "path": "/api/users/123", "status_code": 200 }),
            json!({ "time": yesterday, "message": "模拟数据: GET请求到不存在的路径", "function_id": "api-handler", "method": "GET", "path": "/api/nonexistent", "status_code": 404 }),
            json!({ "time": yesterday, "message": "模拟数据: 登录失败", "function_id": "auth-handler", "method": "POST", "path": "/api/auth/login", "status_code": 401 }),
        ],
        LogTable::Postgres => vec![
            json!({ "time": now, "event_message": "模拟数据: UPDATE users SET last_login = NOW() WHERE id = 123" }),
            json!({ "time": now, "event_message": "模拟数据: INSERT INTO departments (name, code) VALUES ('测试部门', 'TEST')" }),
            json!({ "time": yesterday, "event_message": "模拟数据: DELETE FROM temp_data WHERE created_at < NOW() - INTERVAL '7 days'" }),
            json!({ "time": yesterday, "event_message": "模拟数据: SELECT * FROM users WHERE email = 'admin@example.com'" }),
            json!({ "time": yesterday, "event_message": "模拟数据: CREATE TABLE new_table (id serial PRIMARY KEY, name text)" }),
        ],
        _ => vec![
            json!({ "time": now, "message": "模拟数据 - 当前日志类型没有预设的模拟数据" }),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sources_have_datasets() {
        assert_eq!(mock_logs(LogTable::Auth).len(), 5);
        assert_eq!(mock_logs(LogTable::Edge).len(), 5);
        assert_eq!(mock_logs(LogTable::Postgres).len(), 5);
    }

    #[test]
    fn test_other_sources_get_placeholder() {
        for table in [
            LogTable::Function,
            LogTable::FunctionEdge,
            LogTable::Realtime,
            LogTable::Storage,
        ] {
            let rows = mock_logs(table);
            assert_eq!(rows.len(), 1);
            assert!(rows[0]["message"].as_str().unwrap().contains("模拟数据"));
        }
    }

    #[test]
    fn test_rows_are_flagged_as_mock() {
        for row in mock_logs(LogTable::Auth) {
            assert!(row["event_message"].as_str().unwrap().starts_with("模拟数据"));
            assert!(row["user_id"].is_string());
        }
        for row in mock_logs(LogTable::Edge) {
            assert!(row["status_code"].is_number());
        }
    }
}
