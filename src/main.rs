use portfolio_terminal::config::Config;
use portfolio_terminal::repl;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn init_tracing(directive: &str) {
    let (filter, bad_directive) = match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new("warn"), Some(err)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    if let Some(err) = bad_directive {
        warn!(%err, directive, "ignoring invalid log filter");
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.log_filter);
    repl::start_repl(&config)
}
