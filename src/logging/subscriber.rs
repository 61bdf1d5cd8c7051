//! Tracing subscriber setup: console formatter and initialisation.
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits hyprkeys-style
/// console output.
struct HyprkeysFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for HyprkeysFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let level = *metadata.level();
        let target = metadata.target();

        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let msg = &extractor.message;

        match level {
            tracing::Level::ERROR => writeln!(writer, "\x1b[31mERROR\x1b[0m {msg}"),
            tracing::Level::WARN => writeln!(writer, "\x1b[33mWARN\x1b[0m  {msg}"),
            tracing::Level::INFO if target == "hyprkeys::stage" => {
                writeln!(writer, "\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m")
            }
            tracing::Level::INFO => writeln!(writer, "  {msg}"),
            _ => writeln!(writer, "  \x1b[2m{msg}\x1b[0m"),
        }
    }
}

/// Build the level filter: `RUST_LOG` when set, otherwise `INFO`
/// (or `DEBUG` when verbose).
fn console_filter(verbose: bool) -> EnvFilter {
    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    EnvFilter::builder()
        .with_default_directive(console_level.into())
        .from_env_lossy()
}

/// Initialise the global [`tracing`] subscriber.
///
/// All log output goes to stderr so that command output on stdout (JSON,
/// generated config) can be piped cleanly. Must be called once at program
/// startup, before any logging.
pub fn init_subscriber(verbose: bool) {
    use tracing_subscriber::{
        Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
    };

    let console_layer = fmt::layer()
        .event_format(HyprkeysFormatter)
        .with_writer(std::io::stderr)
        .with_filter(console_filter(verbose));

    tracing_subscriber::registry().with(console_layer).init();
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::{Layer as _, fmt, layer::SubscriberExt as _};

    /// In-memory writer shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(level: LevelFilter, f: impl FnOnce()) -> String {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let layer = fmt::layer()
            .event_format(HyprkeysFormatter)
            .with_writer(move || writer.clone())
            .with_filter(level);
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buf.0.lock().unwrap().clone();
        String::from_utf8(bytes).expect("utf-8 log output")
    }

    #[test]
    fn stage_lines_get_arrow_prefix() {
        let out = capture(LevelFilter::INFO, || {
            crate::logging::Logger::new().stage("Parsing hyprland.conf");
        });
        assert!(out.contains("==>"), "missing stage arrow in {out:?}");
        assert!(out.contains("Parsing hyprland.conf"));
    }

    #[test]
    fn levels_are_labelled() {
        let out = capture(LevelFilter::DEBUG, || {
            let log = crate::logging::Logger::new();
            log.warn("careful");
            log.error("broken");
            log.info("plain");
        });
        assert!(out.contains("WARN"));
        assert!(out.contains("careful"));
        assert!(out.contains("ERROR"));
        assert!(out.contains("broken"));
        assert!(out.contains("  plain\n"));
    }

    #[test]
    fn debug_is_filtered_at_info() {
        let out = capture(LevelFilter::INFO, || {
            crate::logging::Logger::new().debug("hidden");
        });
        assert!(!out.contains("hidden"));
    }
}
