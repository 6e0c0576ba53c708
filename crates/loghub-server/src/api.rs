use crate::{handlers, state::AppState};
use axum::{
    http::{header, HeaderName, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// 创建 API 路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // 健康检查
        .route("/health", get(health_check))
        // 日志查询
        .route(
            "/api/v1/logs",
            get(handlers::query_logs).post(handlers::query_logs),
        )
        .route("/api/v1/logs/templates", get(handlers::list_templates))
        // 上游连通性探测
        .route("/api/v1/probe", get(handlers::probe))
        // 添加中间件
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 浏览器跨域放行：与前端约定的预检响应头
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
}

/// 健康检查
async fn health_check() -> &'static str {
    "OK"
}
