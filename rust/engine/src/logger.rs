use serde::{Deserialize, Serialize};

use crate::cards::{Card, DeckProfile};

/// One deck operation inside a logged session.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum DealEvent {
    /// The deck was (re)populated; `profile` is absent for explicit card
    /// lists.
    Initialize {
        profile: Option<DeckProfile>,
        count: usize,
    },
    /// The draw pile was shuffled in place.
    Shuffle,
    /// A card left the top of the draw pile.
    Draw { card: Card },
    /// A card was appended to the discard pile.
    Discard { card: Card },
    /// A card re-entered the draw pile.
    Return { card: Card, to_top: bool },
    /// The discard pile was folded back into the draw pile and shuffled.
    Reshuffle,
}

/// Complete record of one dealing session: the seed that drove it and the
/// chronological operation list. Serialized to JSONL for replay and
/// debugging.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique identifier for this session (format: YYYYMMDD-NNNNNN)
    pub session_id: String,
    /// RNG seed the deck was constructed with (enables deterministic replay)
    pub seed: Option<u64>,
    /// Chronological list of deck operations
    pub events: Vec<DealEvent>,
    /// Timestamp when the session was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_session_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Buffered JSONL writer for [`SessionRecord`]s, one record per line.
pub struct TableLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl TableLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: "19700101".to_string(),
            seq: 0,
        })
    }

    /// A sink-less logger with a fixed date, for exercising id sequencing.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_session_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &SessionRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
