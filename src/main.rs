use clap::Parser;
use copydraft::provider::{DraftProvider, OpenAiProvider, ProviderConfig};
use copydraft::server::{self, AppState, ServerConfig};
use std::io::Write;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "copydraft")]
#[command(about = "Marketing copy draft service with an AI provider and a deterministic fallback")]
struct CliArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Browser origins allowed by CORS; repeat the flag for each origin.
    #[arg(
        long = "cors-origin",
        default_values_t = [
            "http://localhost:5173".to_string(),
            "http://127.0.0.1:5173".to_string(),
        ]
    )]
    cors_origins: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // default level is info; installed before reading provider config so
    // warnings about malformed env overrides are not dropped
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Info)
        .init();

    let provider: Option<Arc<dyn DraftProvider>> = match ProviderConfig::from_env() {
        Some(config) => Some(Arc::new(OpenAiProvider::new(config)?)),
        None => None,
    };

    let config = ServerConfig {
        host: args.host,
        port: args.port,
        cors_allowed_origins: args.cors_origins,
    };
    let app_state = AppState { provider };

    actix_web::rt::System::new().block_on(server::startup(config, app_state))?;
    Ok(())
}
