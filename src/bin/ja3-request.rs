//! `ja3-request <url> <method> <payload-json|null> <headers-json> [proxy|null] [profile]`

use std::io::Write;

use ja3_cli::{config, runner, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    config::init_tracing(&config);

    let envelope = runner::run_from(std::env::args_os(), &config).await;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", envelope.to_json_line())?;
    stdout.flush()?;
    Ok(())
}
