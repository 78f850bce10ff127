mod config;
mod main_lib;
mod output;

use ceprace_lookup::QueryKey;
use config::Config;
use main_lib::{build_lookup, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().with_args(std::env::args().skip(1));
    init_tracing(&config.log_format);

    let lookup = build_lookup(&config);
    let key = QueryKey::new(&config.postal_code);
    tracing::debug!("Looking up postal code '{}'", key);

    let report = lookup.lookup(&key).await;

    let stdout = std::io::stdout();
    output::write_report(&mut stdout.lock(), &report)?;
    Ok(())
}
