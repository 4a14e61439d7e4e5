//! stderr logger built on `fern`.

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use log::LevelFilter;

/// Environment variable read by [`level_from_env`].
pub const LOG_ENV: &str = "CAROUSEL_LOG";

/// Install the global logger: `[secs.millis LEVEL target] message` on
/// stderr.
///
/// Only the first call succeeds; later calls return the `log` crate's
/// `SetLoggerError`, which callers that may initialise twice (tests) can
/// ignore.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                timestamp(),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // winit is chatty at debug level
        .level_for("winit", LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()
}

/// Level named by `$CAROUSEL_LOG` (`error`, `warn`, `info`, `debug`,
/// `trace`, `off`), if set and valid.
pub fn level_from_env() -> Option<LevelFilter> {
    std::env::var(LOG_ENV).ok().and_then(|v| parse_level(&v))
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(value.trim()).ok()
}

fn timestamp() -> String {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => format!("{}.{:03}", d.as_secs(), d.subsec_millis()),
        Err(_) => "0.000".to_string(),
    }
}
