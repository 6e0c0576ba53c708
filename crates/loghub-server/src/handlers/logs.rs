use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use loghub_query::envelope::{ErrorBody, LogQueryResponse, ResponseMeta};
use loghub_query::{query_templates, window, QueryParams, QueryPlan, QueryTemplate};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// 查询系统日志。
///
/// GET/POST 共用：POST 请求体携带参数时优先于查询字符串，
/// 请求体缺失、非法或为空对象时回退到查询字符串。
/// 无论上游结果如何都返回统一信封，真实结果码在嵌套的
/// `status` 字段中，传输层恒为 200。
pub async fn query_logs(
    State(state): State<AppState>,
    query: Option<Query<QueryParams>>,
    body: Option<Json<QueryParams>>,
) -> Json<LogQueryResponse> {
    let from_query = query.map(|Query(p)| p.normalized()).unwrap_or_default();
    let from_body = body.map(|Json(p)| p.normalized()).unwrap_or_default();

    let params = if from_body.is_empty() {
        from_query
    } else {
        from_body
    };

    let now = Utc::now();
    let plan = QueryPlan::resolve(&params, now);

    info!(
        table = %plan.table,
        limit = plan.limit,
        start = %window::format_utc(plan.window.start),
        end = %window::format_utc(plan.window.end),
        "Querying system logs"
    );

    let outcome = state
        .analytics
        .fetch_logs(&plan.window, Some(&plan.sql))
        .await;

    let (success, status, data, error) = match outcome {
        Ok(response) => {
            let status = response.status;
            match response.result_rows() {
                Some(rows) if status == 200 && !rows.is_empty() => {
                    (true, status, rows.clone(), None)
                }
                _ if status == 200 => (
                    false,
                    status,
                    Vec::new(),
                    Some("没有找到符合条件的日志数据".to_string()),
                ),
                _ => (
                    false,
                    status,
                    Vec::new(),
                    Some(
                        response
                            .message()
                            .unwrap_or("获取日志数据失败")
                            .to_string(),
                    ),
                ),
            }
        }
        Err(err) => {
            warn!(error = %err, "Analytics request failed");
            (false, 500, Vec::new(), Some(err.to_string()))
        }
    };

    let count = data.len();

    Json(LogQueryResponse {
        success,
        status,
        data,
        error: error.map(|message| ErrorBody { message }),
        meta: ResponseMeta {
            query: plan.query_meta(&params),
            count,
            timestamp: window::format_utc(now),
            timestamp_local: window::format_local(now),
        },
    })
}

/// 预设查询模板
pub async fn list_templates() -> Json<BTreeMap<&'static str, QueryTemplate>> {
    Json(query_templates())
}
