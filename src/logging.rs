use std::io::Write;

use anyhow::Result;
use env_logger::{Builder, Env, Target};
use log::info;

use crate::config::Settings;

/// Installs the global logger. `RUST_LOG` still wins over `LOG_LEVEL`.
pub fn init(settings: &Settings) -> Result<()> {
    builder(Env::default().default_filter_or(settings.log_level.as_str())).try_init()?;

    info!("Logging configured with level: {}", settings.log_level);
    Ok(())
}

// Lines go to stdout as `<timestamp> - <target> - <LEVEL> - <message>`.
fn builder(env: Env) -> Builder {
    let mut builder = Builder::from_env(env);
    builder
        .target(Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {} - {}",
                buf.timestamp(),
                record.target(),
                record.level(),
                record.args()
            )
        });
    builder
}
