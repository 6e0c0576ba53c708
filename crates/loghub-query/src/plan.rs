use chrono::{DateTime, Utc};

use crate::envelope::{QueryMeta, QueryParams, TimeRangeInput, TimeRangeMeta};
use crate::source::LogTable;
use crate::sql::build_sql;
use crate::window::{self, TimeWindow};

/// 归一化后的查询计划：日志表、UTC 时间窗口、返回条数与生成的 SQL。
///
/// 解析过程不会失败；非法输入按各自的回退规则静默修正。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub table: LogTable,
    pub window: TimeWindow,
    pub limit: u32,
    pub sql: String,
}

impl QueryPlan {
    /// 从归一化后的请求参数解析查询计划
    pub fn resolve(params: &QueryParams, now: DateTime<Utc>) -> Self {
        let table = LogTable::resolve(params.log_type.as_deref());
        let window = TimeWindow::resolve(
            params.iso_timestamp_start.as_deref(),
            params.iso_timestamp_end.as_deref(),
            params.log_type.is_some(),
            now,
        );
        let limit = params.effective_limit();
        let sql = build_sql(table, limit);

        Self {
            table,
            window,
            limit,
            sql,
        }
    }

    /// 响应元数据中的 query 部分，回显原始输入
    pub fn query_meta(&self, params: &QueryParams) -> QueryMeta {
        QueryMeta {
            log_type: params.log_type.clone(),
            table: self.table.table_name().to_string(),
            limit: self.limit,
            time_range: TimeRangeMeta {
                start: window::format_utc(self.window.start),
                end: window::format_utc(self.window.end),
                start_local: window::format_local(self.window.start),
                end_local: window::format_local(self.window.end),
                input: TimeRangeInput {
                    start: params.iso_timestamp_start.clone(),
                    end: params.iso_timestamp_end.clone(),
                },
                duration: self.window.describe_duration(),
            },
            sql: self.sql.clone(),
        }
    }
}
