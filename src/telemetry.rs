use std::{str::FromStr, sync::Once};

use tracing::{dispatcher::set_global_default, level_filters::LevelFilter, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

/// bunyan 형식의 JSON을 `sink`로 출력하는 subscriber를 만든다.
///
/// `RUST_LOG`가 설정되어 있으면 그 값을 우선한다.
/// 그렇지 않으면 `level` 이상을 출력하되 요청 추적과 추출 실패는 더 자세히 남긴다.
pub fn get_tracing_subscriber<Sink>(level: LevelFilter, sink: Sink) -> impl Subscriber + Send + Sync
where
    // 모든 라이프타임 `'a`에 대해 `MakeWriter`를 구현해야 한다.
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::from_str("tower_http=debug,axum::rejection=trace")
            .unwrap_or_default()
            .add_directive(level.into())
    });

    let formatting_layer = BunyanFormattingLayer::new("request_param_axum".into(), sink);
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// subscriber를 글로벌 기본값으로 등록하고 `log` 레코드를 `tracing`으로 넘긴다.
/// 여러 번 호출해도 한 번만 등록된다.
pub fn init_tracing_subscriber(tracing_subscriber: impl Subscriber + Send + Sync) {
    static ONCE: Once = Once::new();

    ONCE.call_once(|| {
        if set_global_default(tracing_subscriber.into()).is_err() {
            eprintln!("A global tracing subscriber is already set.");
            return;
        }
        if LogTracer::builder().init().is_err() {
            eprintln!("A global logger is already set.");
        }
    })
}
