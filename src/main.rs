use mcda_engine::config::AppConfig;
use mcda_engine::error::AppError;
use mcda_engine::{server, telemetry};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    config.validate()?;

    telemetry::init(&config.server)?;

    server::run(config).await
}
