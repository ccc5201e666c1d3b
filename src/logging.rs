use std::{
    fs::{self, File, OpenOptions},
    io,
    path::Path,
    sync::Mutex,
};
use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};

use crate::{
    config::{ClientArgs, LogFormat},
    error::{Error, Result},
};

/// Where log lines go when no `--log-file` was given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    // The terminal UI owns stdout and stderr, so without a file it logs nowhere.
    Silent,
}

pub fn init(args: &ClientArgs, fallback: LogSink) -> Result<()> {
    let (writer, ansi) = match (&args.log_file, fallback) {
        (Some(path), _) => (BoxMakeWriter::new(Mutex::new(open_log_file(path)?)), false),
        (None, LogSink::Stderr) => (BoxMakeWriter::new(io::stderr), true),
        (None, LogSink::Silent) => return Ok(()),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.default_log_level()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi);

    match args.log_format {
        LogFormat::Plain => subscriber.try_init(),
        LogFormat::Json => subscriber.json().try_init(),
    }
    .map_err(|error| Error::Logging(error.to_string()))
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}
