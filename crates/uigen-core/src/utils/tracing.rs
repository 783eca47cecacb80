use std::io;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "warn";

/// Initialize the tracing system.
///
/// The filter comes from `RUST_LOG`, falling back to `warn`. Output goes to
/// stderr, or is appended to `log_file` when one is given.
pub fn init_tracing(log_file: Option<&Path>) -> io::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(dir)?;
            let file_name = path.file_name().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("log file path has no file name: {}", path.display()),
                )
            })?;
            let file_appender = tracing_appender::rolling::never(dir, file_name);

            tracing_subscriber::registry()
                .with(
                    fmt::Layer::new()
                        .with_writer(file_appender)
                        .with_ansi(false)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
                .map_err(io::Error::other)?;

            tracing::debug!(
                target: "uigen::utils::tracing",
                path = %path.display(),
                "Tracing initialized with file output"
            );
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::Layer::new().with_writer(io::stderr).with_target(true))
                .with(filter)
                .try_init()
                .map_err(io::Error::other)?;

            tracing::debug!(
                target: "uigen::utils::tracing",
                "Tracing initialized with stderr output"
            );
        }
    }

    Ok(())
}
