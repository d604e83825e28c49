mod cli;
mod commands;
mod render;
mod repl;

use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use gemchat_ai::{
    ChatSession, ConfigurationController, GeminiConfig, GeminiSessionFactory, ModelConfiguration,
};
use gemchat_common::{ChatError, ConfigError, ModelId};
use gemchat_config::{credentials, ChatConfig, LogLevel};
use tokio::io::BufReader;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

fn init_logging(directive: &str) {
    let mut filter = EnvFilter::from_default_env();
    match directive.parse::<Directive>() {
        Ok(d) => filter = filter.add_directive(d),
        Err(e) => eprintln!("Ignoring invalid log filter {directive:?}: {e}"),
    }
    // stdout belongs to the conversation
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn gemini_config(api_key: String, config: &ChatConfig) -> GeminiConfig {
    GeminiConfig::new(api_key)
        .with_base_url(config.api.base_url.clone())
        .with_max_tokens(config.model.max_output_tokens)
        .with_temperature(config.model.temperature)
        .with_timeouts(
            Duration::from_secs(u64::from(config.api.connect_timeout_secs)),
            Duration::from_secs(u64::from(config.api.request_timeout_secs)),
        )
}

/// Startup configuration: command-line flags win over the config file.
fn initial_configuration(
    args: &cli::Args,
    config: &ChatConfig,
) -> Result<ModelConfiguration, ConfigError> {
    let model = match args.model.as_deref() {
        Some(name) => name
            .parse::<ModelId>()
            .map_err(|e| ConfigError::ValidationError(format!("--model: {e}")))?,
        None => config.model.name,
    };
    let instruction = args
        .system
        .as_deref()
        .unwrap_or(config.model.system_instruction.as_str());
    Ok(ModelConfiguration::new(model, instruction))
}

async fn run(args: cli::Args, config: ChatConfig) -> gemchat_common::Result<()> {
    let api_key = credentials::resolve_api_key(&config.api.api_key_env)?;
    let initial = initial_configuration(&args, &config)?;

    let factory = GeminiSessionFactory::new(gemini_config(api_key, &config));
    let controller = ConfigurationController::new(Box::new(factory), initial)
        .map_err(|e| ChatError::Ai(e.to_string()))?;
    let mut session = ChatSession::new(controller);

    let mut stdout = std::io::stdout();
    render::banner(&mut stdout, session.configuration())?;

    tracing::info!("Entering chat loop");
    repl::run(&mut session, BufReader::new(tokio::io::stdin()), &mut stdout).await?;
    Ok(())
}

fn main() -> ExitCode {
    // Load .env before anything reads the environment
    let dotenv = credentials::load_dotenv(&credentials::dotenv_candidates());

    let args = cli::parse();

    let loaded = gemchat_config::load_config(args.config.as_deref().map(Path::new));
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or(LogLevel::Info);
    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| level.as_directive().to_string());
    init_logging(&directive);

    tracing::info!("gemchat v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = dotenv {
        tracing::info!("Environment loaded from {}", path.display());
    }
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ChatConfig::default()
    });
    tracing::info!("Config loaded (model: {})", config.model.name);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = runtime.block_on(run(args, config)) {
        tracing::error!("{e}");
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
