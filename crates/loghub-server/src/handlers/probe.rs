use crate::error::Result;
use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::{Duration, Utc};
use loghub_query::window::{self, TimeWindow};
use serde_json::json;
use tracing::info;

/// 上游连通性探测。
///
/// 不携带 SQL 模板，直接查询最近 5 分钟的日志，返回上游状态、
/// 原始负载与调试信息；上游不可达时返回 500。
pub async fn probe(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let now = Utc::now();
    let window = TimeWindow {
        start: now - Duration::minutes(5),
        end: now,
    };

    info!(endpoint = %state.analytics.endpoint_url(), "Probing analytics endpoint");

    let response = state.analytics.fetch_logs(&window, None).await?;

    Ok(Json(json!({
        "status": response.status,
        "data": response.body,
        "message": "测试完成",
        "debug": {
            "url": state.analytics.endpoint_url(),
            "tokenPreview": state.analytics.token_preview(),
            "timeRange": {
                "start": window::format_utc(window.start),
                "end": window::format_utc(window.end),
                "duration": "5分钟"
            }
        }
    })))
}
