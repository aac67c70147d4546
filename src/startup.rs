use std::sync::Arc;

use axum::{body::Body, routing, Router};
use http::Request;
use tokio::net::TcpListener;
use tower_http::trace::{MakeSpan, TraceLayer};
use tracing::{Level, Span};

use crate::{
    error::RequestParamError,
    resolver::InvalidParamSpec,
    routes::{
        health_check, request_param_default, request_param_map, request_param_required,
        request_param_v1, request_param_v2, request_param_v3, request_param_v4,
        RequestParamSpecs,
    },
    settings::Settings,
};

pub struct Server {
    tcp_listener: TcpListener,
    router: Router,
}

impl Server {
    /// 설정에 따라 리스너를 열고 서버를 구성한다.
    pub async fn build(settings: &Settings) -> Result<Self, RequestParamError> {
        let tcp_listener = settings.application.get_listener().await?;
        let server = Self::new(tcp_listener)?;
        Ok(server)
    }

    // 파라미터 선언이 잘못되었으면 요청을 받기 전에 실패한다.
    pub fn new(tcp_listener: TcpListener) -> Result<Self, InvalidParamSpec> {
        let specs = RequestParamSpecs::new()?;
        Ok(Self {
            tcp_listener,
            router: router(specs),
        })
    }

    /// OS가 할당한 포트를 확인할 때 사용한다.
    pub fn port(&self) -> Result<u16, std::io::Error> {
        Ok(self.tcp_listener.local_addr()?.port())
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        axum::serve(self.tcp_listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

// Ctrl+C를 받으면 처리 중인 요청을 마치고 종료한다.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

// 모든 HTTP 메서드를 받는다.
// 쿼리 스트링과 폼 본문을 같은 방식으로 바인딩한다.
fn router(specs: RequestParamSpecs) -> Router {
    Router::new()
        .route("/health_check", routing::get(health_check))
        .route("/request-param-v1", routing::any(request_param_v1))
        .route("/request-param-v2", routing::any(request_param_v2))
        .route("/request-param-v3", routing::any(request_param_v3))
        .route("/request-param-v4", routing::any(request_param_v4))
        .route("/request-param-required", routing::any(request_param_required))
        .route("/request-param-default", routing::any(request_param_default))
        .route("/request-param-map", routing::any(request_param_map))
        .layer(TraceLayer::new_for_http().make_span_with(AddRequestID))
        .with_state(Arc::new(specs))
}

// https://docs.rs/tower-http/0.5.2/src/tower_http/trace/make_span.rs.html#65-68의 코드를 참조했음
#[derive(Clone)]
struct AddRequestID;

impl MakeSpan<Body> for AddRequestID {
    fn make_span(&mut self, request: &Request<Body>) -> Span {
        tracing::span!(
            Level::INFO,
            "request",
            request_id = %uuid::Uuid::new_v4(),
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
            error = tracing::field::Empty,
            error_detail = tracing::field::Empty
        )
    }
}
