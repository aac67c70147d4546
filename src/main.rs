use request_param_axum::{
    settings::Settings,
    telemetry::{get_tracing_subscriber, init_tracing_subscriber},
};
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let tracing_subscriber = get_tracing_subscriber(LevelFilter::INFO, std::io::stdout);
    init_tracing_subscriber(tracing_subscriber);

    let settings = Settings::get_settings()?;
    // 파라미터 선언이 잘못되었으면 여기서 실패한다.
    let server = settings.build_server().await?;

    tracing::info!(
        "Starting Server on {}:{}",
        settings.application.host,
        server.port()?
    );
    server.run().await?;
    Ok(())
}
