use stockroom_cli::{Config, demo};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = Config::from_env();
    tracing::debug!(file = %config.file.display(), threshold = config.low_stock_threshold, "starting demo");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo::run(&config, &mut out)?;

    Ok(())
}
