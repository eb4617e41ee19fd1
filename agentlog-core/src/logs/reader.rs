use crate::logs::error::LogError;
use crate::logs::parse::parse_line;
use crate::logs::types::{ParsedLine, ReadBatch, SkipReason, SkippedLine};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineMode {
    /// Parse everything, including a final line without a trailing LF.
    All,
    /// Stop before a trailing partial line so it is read whole next time.
    CompleteOnly,
    /// Like `CompleteOnly`, but a trailing line that already decodes to an
    /// entry is taken as well.
    CompleteOrParsed,
}

impl LineMode {
    fn accepts_partial(self, buf: &[u8]) -> bool {
        match self {
            LineMode::All => true,
            LineMode::CompleteOnly => false,
            LineMode::CompleteOrParsed => matches!(
                std::str::from_utf8(buf).ok().and_then(parse_line),
                Some(ParsedLine::Parsed(_))
            ),
        }
    }
}

/// Read every valid entry in the file.
///
/// A missing file is [`LogError::NotFound`]; an empty file is an empty batch.
pub fn read_entries(path: &Path) -> Result<ReadBatch, LogError> {
    let file = open_log(path)?;
    scan(BufReader::new(file), 0, LineMode::All).map_err(|e| LogError::from_io(path, e))
}

/// Read what a tail session replays: every complete line, plus a final
/// unterminated line if it is already a valid entry.
pub fn read_existing(path: &Path) -> Result<ReadBatch, LogError> {
    let file = open_log(path)?;
    scan(BufReader::new(file), 0, LineMode::CompleteOrParsed)
        .map_err(|e| LogError::from_io(path, e))
}

/// Read the complete lines appended after `offset`.
///
/// If the file has shrunk below `offset` it was truncated in place, so the read
/// restarts from the beginning and the batch is flagged.
pub fn read_from_offset(path: &Path, offset: u64) -> Result<ReadBatch, LogError> {
    let mut file = open_log(path)?;
    let len = file
        .metadata()
        .map_err(|e| LogError::from_io(path, e))?
        .len();

    let (start, truncated) = if offset > len {
        tracing::info!(
            path = %path.display(),
            offset,
            len,
            "log file shrank below last offset; restarting from the beginning"
        );
        (0, true)
    } else {
        (offset, false)
    };

    file.seek(SeekFrom::Start(start))
        .map_err(|e| LogError::from_io(path, e))?;

    let mut batch = scan(BufReader::new(file), start, LineMode::CompleteOnly)
        .map_err(|e| LogError::from_io(path, e))?;
    batch.truncated = truncated;
    Ok(batch)
}

/// Emit one warning per skipped line.
pub fn log_skipped(path: &Path, batch: &ReadBatch) {
    for skipped in &batch.skipped {
        tracing::warn!(
            path = %path.display(),
            line = skipped.line_number,
            reason = %skipped.reason,
            "skipping malformed line"
        );
    }
}

fn open_log(path: &Path) -> Result<File, LogError> {
    let file = File::open(path).map_err(|e| LogError::from_io(path, e))?;
    let meta = file.metadata().map_err(|e| LogError::from_io(path, e))?;

    if !meta.is_file() {
        return Err(LogError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    Ok(file)
}

fn scan<R: BufRead>(mut reader: R, start: u64, mode: LineMode) -> io::Result<ReadBatch> {
    let mut batch = ReadBatch {
        offset: start,
        ..ReadBatch::default()
    };
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf)?;
        if n == 0 {
            break;
        }

        if buf.last() != Some(&b'\n') && !mode.accepts_partial(&buf) {
            break;
        }

        line_number += 1;
        batch.offset += n as u64;

        let outcome = match std::str::from_utf8(&buf) {
            Ok(line) => parse_line(line),
            Err(_) => Some(ParsedLine::Skipped(SkipReason::InvalidUtf8)),
        };

        match outcome {
            None => {}
            Some(ParsedLine::Parsed(entry)) => batch.entries.push(entry),
            Some(ParsedLine::Skipped(reason)) => {
                batch.skipped.push(SkippedLine {
                    line_number,
                    reason,
                });
            }
        }
    }

    tracing::debug!(
        start,
        end = batch.offset,
        entries = batch.entries.len(),
        skipped = batch.skipped.len(),
        "scanned log"
    );

    Ok(batch)
}
