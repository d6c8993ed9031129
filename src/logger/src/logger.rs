use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use log::{Level, LevelFilter};
use env_logger::{Builder, Env, fmt::Color};
use std::io::Write;
use once_cell::sync::OnceCell;

mod error;
pub use error::LoggerError;

/// Environment variable allowing users to override log filters (e.g. `MENDEL_LOG=family_sims=trace`)
pub const LOG_ENV_VAR: &str = "MENDEL_LOG";

static INSTANCE: OnceCell<Logger> = OnceCell::new();

/// Global logger handle. Keeps track of the `MultiProgress` bar container, so that
/// progress bars and log records never interleave on the terminal.
#[derive(Debug)]
pub struct Logger {
    multi_pg: MultiProgress,
}

impl Logger {
    /// Initialize the global logger.
    ///
    /// # Arguments
    /// - `verbosity`: 0 = errors only | 1 = warnings | 2 = info | 3 = debug | 4+ = trace
    ///
    /// # Errors
    /// - if a global logger was already set for this process.
    pub fn init(verbosity: u8) -> Result<(), LoggerError> {
        let log_level = Self::u8_to_loglevel(verbosity);
        let env = Env::default().filter(LOG_ENV_VAR);

        let logger = Builder::new().filter_level(log_level)
            .format(|buf, record| {
                let is_error = record.level() == LevelFilter::Error;
                let traceback = match is_error {
                    true  => format!("(@ {}:{}) ", record.file().unwrap_or("unknown"), record.line().unwrap_or(0)),
                    false => String::new(),
                };

                let mut arg_style = buf.style();
                arg_style.set_intense(is_error);

                let mut level_style = buf.style();
                let color = match record.level() {
                    Level::Error => Color::Red,
                    Level::Warn  => Color::Yellow,
                    Level::Info  => Color::Green,
                    Level::Debug => Color::Blue,
                    Level::Trace => Color::Cyan
                };
                level_style.set_color(color).set_bold(true);

                writeln!(
                    buf,
                    "[{} {: <5} {}] {traceback}{}",
                    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                    level_style.value(record.level()),
                    record.target(),
                    arg_style.value(record.args())
                )
            })
            .parse_env(env)
            .build();

        let max_level = logger.filter();
        let multi_pg = MultiProgress::new();
        LogWrapper::new(multi_pg.clone(), logger).try_init()?;
        log::set_max_level(max_level);

        INSTANCE.set(Self{multi_pg}).map_err(|_| LoggerError::DuplicateInstance)
    }

    fn u8_to_loglevel(verbosity: u8) -> LevelFilter {
        match verbosity {
            0            => LevelFilter::Error,
            1            => LevelFilter::Warn,
            2            => LevelFilter::Info,
            3            => LevelFilter::Debug,
            4..= u8::MAX => LevelFilter::Trace
        }
    }

    pub fn set_level(verbosity: u8) {
        log::set_max_level(Self::u8_to_loglevel(verbosity));
    }

    /// Return the progress-bar container of the global logger, if it was initialized.
    pub fn multi() -> Option<&'static MultiProgress> {
        INSTANCE.get().map(|logger| &logger.multi_pg)
    }
}
