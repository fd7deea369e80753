use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{FrameCountError, Result};

pub const RECORD_FILE: &str = "n_frames";

pub fn record_path(video_dir: &Path) -> PathBuf {
    video_dir.join(RECORD_FILE)
}

/// Creates or truncates the record and writes `n_frames` as bare decimal text.
pub fn write_record(video_dir: &Path, n_frames: i64) -> Result<PathBuf> {
    let path = record_path(video_dir);
    fs::write(&path, n_frames.to_string())?;
    Ok(path)
}

pub fn read_record(video_dir: &Path) -> Result<Option<i64>> {
    let path = record_path(video_dir);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let parsed = text.trim().parse::<i64>();
    parsed.map(Some).map_err(|_| FrameCountError::CorruptRecord {
        path,
        content: text,
    })
}
