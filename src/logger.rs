//! Logging setup: logs/ask-a-local.log, or stderr if the file can't be opened.

use log::LevelFilter;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

const LOG_FILE: &str = "logs/ask-a-local.log";

// GUI and HTTP stacks are too chatty at INFO
const QUIET_MODULES: &[&str] = &["eframe", "egui", "wgpu", "reqwest", "hyper"];

pub fn init() {
    let mut builder = env_logger::Builder::new();

    match std::env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            builder.filter_level(LevelFilter::Info);
            for module in QUIET_MODULES {
                builder.filter_module(module, LevelFilter::Warn);
            }
        }
    }

    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{} {}] {} - {}",
            chrono::Local::now().format("%H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    let target = match open_log_file(Path::new(LOG_FILE)) {
        Ok(file) => env_logger::Target::Pipe(Box::new(file)),
        Err(e) => {
            eprintln!("Could not open {}: {}; logging to stderr", LOG_FILE, e);
            env_logger::Target::Stderr
        }
    };
    builder.target(target).init();

    log::info!("Logging initialized ✓");
}

/// Opens `path` for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("ask_a_local_{}_{}", name, nanos))
    }

    #[test]
    fn open_log_file_creates_directories_and_appends() {
        let dir = scratch_dir("logs");
        let path = dir.join("nested").join("app.log");

        {
            let mut file = open_log_file(&path).expect("log file should open");
            writeln!(file, "first").unwrap();
        }
        {
            let mut file = open_log_file(&path).expect("log file should reopen");
            writeln!(file, "second").unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn open_log_file_fails_when_parent_is_a_file() {
        let dir = scratch_dir("blocked");
        std::fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();

        assert!(open_log_file(&blocker.join("app.log")).is_err());
        let _ = std::fs::remove_dir_all(dir);
    }
}
