//! JSON-lines roll log.
//!
//! One [`RollRecord`] per line for every roll the player attempts, accepted or
//! rejected. Logging never interrupts play: the first write failure disables the
//! log and is kept for the caller to report once the terminal is restored.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::GameSnapshot;
use crate::types::BowlingError;

/// One logged roll.
#[derive(Debug, Clone, Serialize)]
pub struct RollRecord<'a> {
    pub ts_ms: u64,
    pub pinfall: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Game state after the roll (unchanged when the roll was rejected).
    pub snapshot: &'a GameSnapshot,
}

impl<'a> RollRecord<'a> {
    pub fn new(
        pinfall: u8,
        outcome: Result<(), BowlingError>,
        snapshot: &'a GameSnapshot,
    ) -> Self {
        Self {
            ts_ms: current_timestamp_ms(),
            pinfall,
            error: outcome.err().map(|e| e.to_string()),
            snapshot,
        }
    }
}

pub struct RollLog {
    sink: Option<Box<dyn Write>>,
    buf: Vec<u8>,
    failure: Option<anyhow::Error>,
}

impl RollLog {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &str) -> Result<Self> {
        let file: File = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open roll log {}", path))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    pub fn from_writer<W: Write + 'static>(writer: W) -> Self {
        Self {
            sink: Some(Box::new(writer)),
            buf: Vec::with_capacity(4096),
            failure: None,
        }
    }

    /// A log that drops every record.
    pub fn disabled() -> Self {
        Self {
            sink: None,
            buf: Vec::new(),
            failure: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Append one record. After the first failure the log is disabled.
    pub fn append(&mut self, record: &RollRecord<'_>) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };

        self.buf.clear();
        let result = serde_json::to_writer(&mut self.buf, record)
            .context("failed to encode roll record")
            .and_then(|()| {
                self.buf.push(b'\n');
                sink.write_all(&self.buf)?;
                sink.flush()?;
                Ok(())
            });

        if let Err(e) = result {
            self.sink = None;
            self.failure = Some(e);
        }
    }

    /// The error that disabled the log, if any.
    pub fn failure(&self) -> Option<&anyhow::Error> {
        self.failure.as_ref()
    }
}

fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Game;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _data: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_records_accepted_and_rejected_rolls() {
        let out = SharedBuf::default();
        let mut log = RollLog::from_writer(out.clone());
        let mut game = Game::new();

        let first = game.bowl(6);
        log.append(&RollRecord::new(6, first, &game.snapshot()));
        let second = game.bowl(5);
        log.append(&RollRecord::new(5, second, &game.snapshot()));

        let text = String::from_utf8(out.0.borrow().clone()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);

        assert_eq!(lines[0]["pinfall"], 6);
        assert!(lines[0].get("error").is_none());
        assert_eq!(lines[0]["snapshot"]["pins_standing"], 4);

        assert_eq!(lines[1]["pinfall"], 5);
        assert_eq!(
            lines[1]["error"],
            "invalid roll: 5 pins knocked down but only 4 standing"
        );
        assert_eq!(lines[1]["snapshot"]["frames"][0]["rolls"], serde_json::json!([6]));
    }

    #[test]
    fn test_write_failure_disables_log() {
        let mut log = RollLog::from_writer(BrokenPipe);
        let snap = Game::new().snapshot();

        log.append(&RollRecord::new(3, Ok(()), &snap));
        assert!(!log.is_enabled());
        assert!(log.failure().is_some());

        // Further appends are dropped without replacing the first failure.
        log.append(&RollRecord::new(4, Ok(()), &snap));
        assert!(log.failure().is_some());
    }

    #[test]
    fn test_disabled_log_drops_records() {
        let mut log = RollLog::disabled();
        log.append(&RollRecord::new(3, Ok(()), &Game::new().snapshot()));
        assert!(!log.is_enabled());
        assert!(log.failure().is_none());
    }

    #[test]
    fn test_open_appends_to_file() {
        let path = std::env::temp_dir().join(format!("tui-bowling-{}.jsonl", std::process::id()));
        let path_str = path.to_string_lossy().to_string();
        let _ = std::fs::remove_file(&path);

        {
            let mut log = RollLog::open(&path_str).unwrap();
            log.append(&RollRecord::new(10, Ok(()), &Game::new().snapshot()));
        }
        {
            let mut log = RollLog::open(&path_str).unwrap();
            log.append(&RollRecord::new(9, Ok(()), &Game::new().snapshot()));
        }

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        let _ = std::fs::remove_file(&path);
    }
}
