use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum_test::TestServer;
use hello_shell::AppState;
use hello_shell::config::{
    AppConfig, LogFormat, PageConfig, PageLayout, ServerConfig, TelemetryConfig, ThemeConfig,
};
use hello_shell::server::router;
use hello_shell::theme::Theme;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

fn test_config(layout: PageLayout, static_dir: Option<PathBuf>) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
            request_timeout_secs: 5,
            static_dir,
        },
        page: PageConfig {
            layout,
            ..PageConfig::default()
        },
        theme: ThemeConfig {
            name: "hpe".to_string(),
            file: None,
        },
        telemetry: TelemetryConfig {
            format: LogFormat::Compact,
            filter: "info".to_string(),
        },
    }
}

fn test_state(layout: PageLayout) -> AppState {
    AppState {
        config: Arc::new(test_config(layout, None)),
        theme: Arc::new(Theme::hpe()),
    }
}

#[tokio::test]
async fn index_renders_the_shell() -> anyhow::Result<()> {
    let server = TestServer::new(router(test_state(PageLayout::Contained)))?;

    let response = server.get("/").await;
    response.assert_status_ok();
    let content_type = response.header(header::CONTENT_TYPE);
    assert!(content_type.to_str()?.starts_with("text/html"));

    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Hello, World!"));
    assert_eq!(html.matches("data-region=").count(), 3);
    assert!(html.contains(r#"data-theme="hpe""#));
    Ok(())
}

#[tokio::test]
async fn index_is_stable_across_requests() -> anyhow::Result<()> {
    let server = TestServer::new(router(test_state(PageLayout::Contained)))?;

    let first = server.get("/").await.text();
    let second = server.get("/").await.text();
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn full_bleed_layout_serves_single_region() -> anyhow::Result<()> {
    let server = TestServer::new(router(test_state(PageLayout::FullBleed)))?;

    let html = server.get("/").await.text();
    assert_eq!(html.matches("data-region=").count(), 1);
    assert!(html.contains(r#"data-region="main""#));
    assert!(html.contains("Hello, World!"));
    Ok(())
}

#[tokio::test]
async fn theme_css_is_served_as_css() -> anyhow::Result<()> {
    let server = TestServer::new(router(test_state(PageLayout::Contained)))?;

    let response = server.get("/theme.css").await;
    response.assert_status_ok();
    assert_eq!(
        response.header(header::CONTENT_TYPE).to_str()?,
        "text/css; charset=utf-8"
    );
    let css = response.text();
    assert!(css.contains("--color-brand: #01a982;"));
    assert!(css.contains(".pad-h-medium"));
    Ok(())
}

#[tokio::test]
async fn healthz_reports_theme_and_layout() -> anyhow::Result<()> {
    let server = TestServer::new(router(test_state(PageLayout::FullBleed)))?;

    let response = server.get("/healthz").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["theme"], "hpe");
    assert_eq!(body["layout"], "full_bleed");
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_not_found() -> anyhow::Result<()> {
    let server = TestServer::new(router(test_state(PageLayout::Contained)))?;

    server
        .get("/about")
        .expect_failure()
        .await
        .assert_status(StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn static_dir_is_mounted_when_configured() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("robots.txt"), "User-agent: *\n")?;

    let state = AppState {
        config: Arc::new(test_config(
            PageLayout::Contained,
            Some(dir.path().to_path_buf()),
        )),
        theme: Arc::new(Theme::hpe()),
    };

    let response = router(state)
        .oneshot(Request::builder().uri("/static/robots.txt").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn static_dir_is_absent_by_default() -> anyhow::Result<()> {
    let response = router(test_state(PageLayout::Contained))
        .oneshot(Request::builder().uri("/static/robots.txt").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}
