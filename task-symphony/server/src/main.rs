#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    let config = task_symphony_server::config::ServerConfig::load()?;
    task_symphony_server::web::start_web_server(config).await
}
