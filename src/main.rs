//! atrium - 小型站点内容管理后端
//!
//! About Us 内容、博客文章、联系表单三类集合，
//! 单管理员 Bearer token 认证

mod about;
mod admin;
mod auth;
mod blog;
mod common;
mod contact;
mod db;
mod error;
mod model;
mod notification;

use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::about::{AboutStore, create_about_router};
use crate::admin::{AdminState, create_admin_router};
use crate::auth::{AuthState, CredentialStore};
use crate::blog::{BlogStore, create_blog_router};
use crate::contact::{ContactStore, create_contact_router};
use crate::db::Database;
use crate::model::config::Config;
use crate::notification::NotificationService;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "atrium", version, about = "站点内容管理后端")]
struct Args {
    /// 配置文件路径
    #[arg(short, long, default_value_t = Config::default_config_path().to_string())]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::load(&args.config)?;

    let database = Database::open(&config.database_path)
        .with_context(|| format!("打开数据库失败: {}", config.database_path))?;

    let credentials = Arc::new(CredentialStore::new(
        config.admin_email.clone(),
        &config.admin_password,
    ));
    let notifier = Arc::new(NotificationService::new(config.email.clone()));
    if !notifier.is_configured() {
        tracing::info!("未配置邮件通知，跳过");
    }

    let auth_state = AuthState::new(config.secret_key.clone());
    let admin_state = AdminState::new(credentials, config.secret_key.clone(), notifier);

    let api = Router::new()
        .route("/health", get(health))
        .merge(create_admin_router(admin_state, auth_state.clone()))
        .merge(create_about_router(
            AboutStore::new(database.clone()),
            auth_state.clone(),
        ))
        .merge(create_blog_router(
            BlogStore::new(database.clone()),
            auth_state.clone(),
        ))
        .merge(create_contact_router(
            ContactStore::new(database),
            auth_state,
        ));

    let app = Router::new()
        .nest("/api", api)
        .layer(build_cors(config.cors_origins.as_deref())?);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("监听地址失败: {}", addr))?;
    tracing::info!(addr = %addr, "atrium 已启动");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// GET /api/health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// 构建 CORS 层
///
/// 配置了 corsOrigins 时只允许列表内的来源，否则允许所有来源
fn build_cors(origins: Option<&[String]>) -> anyhow::Result<CorsLayer> {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match origins {
        Some(list) if !list.is_empty() => {
            let values = list
                .iter()
                .map(|origin| {
                    origin
                        .parse::<HeaderValue>()
                        .map_err(|e| anyhow::anyhow!("无效的 CORS origin '{}': {}", origin, e))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            Ok(cors.allow_origin(values))
        }
        _ => Ok(cors.allow_origin(Any)),
    }
}

/// 等待退出信号
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("监听退出信号失败: {}", e);
        return;
    }
    tracing::info!("收到退出信号，正在关闭");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[test]
    fn test_build_cors() {
        assert!(build_cors(None).is_ok());
        assert!(build_cors(Some(&[])).is_ok());
        assert!(build_cors(Some(&["https://example.com".to_string()])).is_ok());
        assert!(build_cors(Some(&["\u{0}".to_string()])).is_err());
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = Router::new().route("/health", get(health));
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
