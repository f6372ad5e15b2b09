use serde::{Deserialize, Serialize};

use crate::errors::ScoreError;
use crate::hand::Category;
use crate::score::MatchResult;

/// Per-side category summary of a settled match: which form each region held.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct SideSummary {
    pub head: Category,
    pub middle: Category,
    pub tail: Category,
}

impl From<&MatchResult> for SideSummary {
    fn from(result: &MatchResult) -> Self {
        Self {
            head: result.head().category(),
            middle: result.middle().category(),
            tail: result.tail().category(),
        }
    }
}

/// Complete record of one settled match comparison.
/// Serialized to JSONL format for match history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Unique identifier for this match (format: YYYYMMDD-NNNNNN)
    pub match_id: String,
    /// RNG seed used for the deal, when the deck was ours (enables replay)
    pub seed: Option<u64>,
    /// Both sides' per-region categories, first side's perspective first
    pub sides: [SideSummary; 2],
    /// Signed per-region margins in head, body, tail order
    pub margins: [i32; 3],
    /// Total margin, the sum of the three region margins
    pub total: i32,
    /// Timestamp when the match was settled (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Optional notes about the settlement
    #[serde(default)]
    pub notes: Option<String>,
}

impl MatchRecord {
    /// Builds a record from a scored comparison, from `x`'s perspective.
    /// The timestamp is left unset for the logger to inject at write time.
    pub fn from_comparison(
        match_id: String,
        seed: Option<u64>,
        x: &MatchResult,
        y: &MatchResult,
    ) -> Result<Self, ScoreError> {
        let margins = x.region_margins(y)?;
        Ok(Self {
            match_id,
            seed,
            sides: [x.into(), y.into()],
            margins,
            total: margins.iter().sum(),
            ts: None,
            notes: None,
        })
    }
}

pub fn format_match_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct MatchLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl MatchLogger {
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

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_match_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &MatchRecord) -> std::io::Result<()> {
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
