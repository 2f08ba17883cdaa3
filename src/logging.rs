use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Level from `NAVAL_BATTLE_LOG` (e.g. `debug`), or `default` when unset or invalid.
pub fn log_level(default: LevelFilter) -> LevelFilter {
    env::var("NAVAL_BATTLE_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(default)
}

/// Install the stderr logger. Later calls are no-ops.
pub fn init_logging(default: LevelFilter) {
    let level = log_level(default);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
