use {
    crate::config::Config,
    std::{io::IsTerminal, panic::PanicHookInfo, sync::Once},
    time::macros::format_description,
    tracing_subscriber::{EnvFilter, fmt::time::UtcTime, prelude::*, util::SubscriberInitExt},
};

/// Initializes the global tracing subscriber. Logs go to stderr so stdout is
/// left to the program's actual output.
///
/// The filter has similar syntax to env_logger. It is documented at
/// https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html
pub fn initialize(config: &Config) {
    set_tracing_subscriber(config);
    std::panic::set_hook(Box::new(tracing_panic_hook));
}

/// Like [`initialize`], but can be called multiple times in a row. Later calls
/// are ignored.
///
/// Useful for tests.
pub fn initialize_reentrant(env_filter: &str) {
    // The tracing subscriber below is global object so initializing it again in the
    // same process by a different thread would fail.
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        set_tracing_subscriber(&Config::default().with_env_filter(env_filter));
        std::panic::set_hook(Box::new(tracing_panic_hook));
    });
}

fn set_tracing_subscriber(config: &Config) {
    let timer = UtcTime::new(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ));
    let env_filter = EnvFilter::new(&config.env_filter);

    if config.use_json_format {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_timer(timer)
                    .with_filter(env_filter),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_timer(timer)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_filter(env_filter),
            )
            .init();
    }
    tracing::debug!(
        filter = %config.env_filter,
        json = config.use_json_format,
        "initialized logging"
    );
}

/// Panic hook that prints roughly the same message as the default panic hook
/// but uses tracing:error instead of stderr.
fn tracing_panic_hook(panic: &PanicHookInfo) {
    let thread = std::thread::current();
    let name = thread.name().unwrap_or("<unnamed>");
    let backtrace = std::backtrace::Backtrace::force_capture();
    tracing::error!("thread '{name}' {panic}\nstack backtrace:\n{backtrace}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reentrant_initialization_is_idempotent() {
        initialize_reentrant("debug");
        initialize_reentrant("trace");
        tracing::info!("still logging after the second initialization");
    }

    #[test]
    fn config_builders() {
        let config = Config::new("warn", false)
            .with_env_filter("conversions=trace")
            .with_json_format();
        assert_eq!(config.env_filter, "conversions=trace");
        assert!(config.use_json_format);
        assert_eq!(Config::default().env_filter, "info");
    }
}
