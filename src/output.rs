use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::{FrameCountError, Result};
use crate::frames::VideoFrames;
use crate::runner::{RunSummary, StaleRecord};

pub fn print_progress(out: &mut impl Write, frames: &VideoFrames) -> Result<()> {
    if frames.has_frames() {
        writeln!(out, "{} {}", frames.dir.display(), frames.n_frames)?;
    } else {
        writeln!(out, "no image files {}", frames.dir.display())?;
    }
    Ok(())
}

pub fn print_stale(out: &mut impl Write, record: &StaleRecord) -> Result<()> {
    let recorded = record
        .recorded
        .map_or_else(|| "missing".to_string(), |v| v.to_string());
    writeln!(
        out,
        "stale {} {} {}",
        record.dir.display(),
        recorded,
        record.n_frames
    )?;
    Ok(())
}

pub fn print_summary(format: &str, summary: &RunSummary) -> Result<()> {
    match format {
        // Text mode already reported each video while walking.
        "text" => Ok(()),
        "json" => print_json(summary),
        other => Err(FrameCountError::InvalidArg(format!(
            "Unknown output format: {other}"
        ))),
    }
}

#[derive(Serialize)]
struct JsonStale<'a> {
    dir: &'a Path,
    recorded: Option<i64>,
    n_frames: i64,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    root: &'a Path,
    class_dir: &'a Path,
    videos: &'a [VideoFrames],
    total_videos: usize,
    empty_videos: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    stale: Vec<JsonStale<'a>>,
}

fn json_summary(summary: &RunSummary) -> JsonSummary<'_> {
    JsonSummary {
        root: &summary.root,
        class_dir: &summary.class_dir,
        videos: &summary.videos,
        total_videos: summary.videos.len(),
        empty_videos: summary.empty_videos(),
        stale: summary
            .stale
            .iter()
            .map(|s| JsonStale {
                dir: &s.dir,
                recorded: s.recorded,
                n_frames: s.n_frames,
            })
            .collect(),
    }
}

fn print_json(summary: &RunSummary) -> Result<()> {
    let out = serde_json::to_string_pretty(&json_summary(summary))?;
    let mut stdout = io::stdout();
    writeln!(stdout, "{out}")?;
    Ok(())
}
