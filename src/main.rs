use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use user_api::config::Config;
use user_api::server;

/// REST API for user records.
#[derive(Parser)]
#[command(name = "user-api")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides `LISTEN`
    #[arg(short, long)]
    listen: Option<String>,

    /// Log format (`text` or `json`), overrides `LOG_FORMAT`
    #[arg(long)]
    log_format: Option<String>,
}

impl Cli {
    fn apply(self, mut config: Config) -> Result<Config> {
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
        if let Some(log_format) = self.log_format {
            config.log_format = log_format;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(Config::from_env()?)?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}
