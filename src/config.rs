use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "URL_STORE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(short, long, env = "URL_STORE_PORT", default_value_t = 8082)]
    pub port: u16,

    /// Number of HTTP workers, defaults to one per CPU
    #[arg(short, long, env = "URL_STORE_WORKERS")]
    pub workers: Option<usize>,

    /// Filter used when RUST_LOG is unset
    #[arg(long, env = "URL_STORE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "URL_STORE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}
