// Entry point for `cargo run -p web-server`: serves with file/env configuration only.
// The `mockquote` binary adds command-line overrides on top.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = configuration::load_config(None)?;
    let _log_guard = configuration::init_tracing(&config.logging)?;

    web_server::run_server(&config).await
}
