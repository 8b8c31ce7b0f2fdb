//! `ja3-auth <payload-json> [proxy|null] [profile]`

use std::io::Write;

use ja3_cli::{
    auth::{self, AuthEndpoint},
    config, Config,
};
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    config::init_tracing(&config);

    let endpoint = AuthEndpoint::default();
    debug!(url = %endpoint.url, "Authenticating");

    let envelope = auth::run_from(std::env::args_os(), &endpoint, &config).await;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", envelope.to_json_line())?;
    stdout.flush()?;
    Ok(())
}
