use linkdrop::{config, server, telemetry};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    telemetry::init(&config.log_level, config.is_json_logging());
    config.print_summary();

    server::run(config).await
}
