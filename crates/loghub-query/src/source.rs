use std::fmt;

/// 日志源类型，与底层日志表一一对应
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTable {
    /// 认证日志
    Auth,
    /// 边缘 API 请求日志
    Edge,
    /// 边缘函数调用日志
    FunctionEdge,
    /// 函数执行日志
    Function,
    /// 连接池日志
    PgBouncer,
    /// 数据库日志
    Postgres,
    /// REST 层日志
    Postgrest,
    /// 实时订阅日志
    Realtime,
    /// 存储日志
    Storage,
    /// 进程管理日志
    Supervisor,
}

impl LogTable {
    /// 物理日志表名称
    pub fn table_name(&self) -> &'static str {
        match self {
            LogTable::Auth => "auth_logs",
            LogTable::Edge => "edge_logs",
            LogTable::FunctionEdge => "function_edge_logs",
            LogTable::Function => "function_logs",
            LogTable::PgBouncer => "pgbouncer_logs",
            LogTable::Postgres => "postgres_logs",
            LogTable::Postgrest => "postgrest_logs",
            LogTable::Realtime => "realtime_logs",
            LogTable::Storage => "storage_logs",
            LogTable::Supervisor => "supervisor_logs",
        }
    }

    /// 根据请求的 `type` 参数解析日志源。
    ///
    /// 匹配大小写不敏感，每个日志源接受一组固定别名；
    /// 未提供或无法识别时回退到边缘 API 日志。
    pub fn resolve(kind: Option<&str>) -> Self {
        let kind = match kind {
            Some(k) => k.trim().to_lowercase(),
            None => return LogTable::Edge,
        };

        match kind.as_str() {
            "auth" | "authentication" => LogTable::Auth,
            "api" | "edge" => LogTable::Edge,
            "function_edge" | "functionedge" => LogTable::FunctionEdge,
            "function" => LogTable::Function,
            "pgbouncer" | "pg_bouncer" => LogTable::PgBouncer,
            "postgres" | "database" | "db" => LogTable::Postgres,
            "postgrest" | "rest" => LogTable::Postgrest,
            "realtime" | "rt" => LogTable::Realtime,
            "storage" => LogTable::Storage,
            "supervisor" => LogTable::Supervisor,
            _ => LogTable::Edge,
        }
    }
}

impl fmt::Display for LogTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(LogTable::resolve(Some("AUTH")), LogTable::Auth);
        assert_eq!(LogTable::resolve(Some("Authentication")), LogTable::Auth);
        assert_eq!(LogTable::resolve(Some("Edge")), LogTable::Edge);
        assert_eq!(LogTable::resolve(Some("STORAGE")), LogTable::Storage);
    }

    #[test]
    fn test_resolve_all_aliases() {
        let cases = [
            ("auth", LogTable::Auth),
            ("authentication", LogTable::Auth),
            ("api", LogTable::Edge),
            ("edge", LogTable::Edge),
            ("function_edge", LogTable::FunctionEdge),
            ("functionedge", LogTable::FunctionEdge),
            ("function", LogTable::Function),
            ("pgbouncer", LogTable::PgBouncer),
            ("pg_bouncer", LogTable::PgBouncer),
            ("postgres", LogTable::Postgres),
            ("database", LogTable::Postgres),
            ("db", LogTable::Postgres),
            ("postgrest", LogTable::Postgrest),
            ("rest", LogTable::Postgrest),
            ("realtime", LogTable::Realtime),
            ("rt", LogTable::Realtime),
            ("storage", LogTable::Storage),
            ("supervisor", LogTable::Supervisor),
        ];

        for (alias, expected) in cases {
            assert_eq!(LogTable::resolve(Some(alias)), expected, "alias {}", alias);
        }
    }

    #[test]
    fn test_unknown_or_absent_defaults_to_edge() {
        assert_eq!(LogTable::resolve(None), LogTable::Edge);
        assert_eq!(LogTable::resolve(Some("no-such-source")), LogTable::Edge);
        assert_eq!(LogTable::resolve(Some("")), LogTable::Edge);
    }

    #[test]
    fn test_table_names() {
        assert_eq!(LogTable::Auth.table_name(), "auth_logs");
        assert_eq!(LogTable::FunctionEdge.table_name(), "function_edge_logs");
        assert_eq!(LogTable::Supervisor.to_string(), "supervisor_logs");
    }
}
