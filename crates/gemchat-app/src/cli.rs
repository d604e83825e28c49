use clap::Parser;

/// Chat with Gemini models from the terminal.
#[derive(Parser, Debug)]
#[command(name = "gemchat", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter override (e.g. `gemchat=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model to start with (overrides `model.name`).
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// System instruction to start with (overrides `model.system_instruction`).
    #[arg(short = 's', long)]
    pub system: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
