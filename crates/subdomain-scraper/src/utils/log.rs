use crate::Result;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

/// `output_dir/{stem}.log`, never rotated.
pub fn log_file_appender(output_dir: &Path, stem: &str) -> Result<RollingFileAppender> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(stem)
        .filename_suffix("log")
        .build(output_dir)?;
    Ok(appender)
}

/// Installs the global subscriber. Verbosity comes from `RUST_LOG`, events go
/// to stderr and, when `log_file` names a directory and a stem, to that file.
pub fn init_tracing_subscriber(log_file: Option<(&Path, &str)>) -> Result<()> {
    let file_layer = match log_file {
        Some((output_dir, stem)) => Some(
            layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(log_file_appender(output_dir, stem)?),
        ),
        None => None,
    };

    let stderr_layer = layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(stderr_layer)
        .with(file_layer);

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
