use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;

use crate::cli::Cli;
use crate::error::{FrameCountError, Result};
use crate::frames::{VideoFrames, scan_video_dir};
use crate::output;
use crate::record::{read_record, write_record};

pub struct RunSummary {
    pub root: PathBuf,
    pub class_dir: PathBuf,
    pub videos: Vec<VideoFrames>,
    pub stale: Vec<StaleRecord>,
}

impl RunSummary {
    pub fn empty_videos(&self) -> usize {
        self.videos.iter().filter(|v| !v.has_frames()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleRecord {
    pub dir: PathBuf,
    pub recorded: Option<i64>,
    pub n_frames: i64,
}

/// Walks every video directory under the class directory in name order.
///
/// The walk stops at the first error; records already written stay on disk.
/// Progress lines go to `out` as each video finishes, unless the output
/// format is `json`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<RunSummary> {
    cli.validate().map_err(FrameCountError::InvalidArg)?;

    let class_dir = cli.class_dir();
    require_dir(&cli.root)?;
    require_dir(&class_dir)?;

    let progress = cli.output == "text";
    let mut videos = Vec::new();
    let mut stale = Vec::new();

    let walker = WalkDir::new(&class_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            return Err(FrameCountError::NotADirectory {
                path: entry.into_path(),
            });
        }

        let frames = scan_video_dir(entry.path())?;

        if cli.check {
            let recorded = read_record(&frames.dir)?;
            if recorded != Some(frames.n_frames) {
                let record = StaleRecord {
                    dir: frames.dir.clone(),
                    recorded,
                    n_frames: frames.n_frames,
                };
                if progress {
                    output::print_stale(out, &record)?;
                }
                stale.push(record);
            }
        } else {
            let path = write_record(&frames.dir, frames.n_frames)?;
            debug!("wrote {}", path.display());
            if progress {
                output::print_progress(out, &frames)?;
            }
        }

        videos.push(frames);
    }

    info!(
        "processed {} video directories under {}",
        videos.len(),
        class_dir.display()
    );

    Ok(RunSummary {
        root: cli.root.clone(),
        class_dir,
        videos,
        stale,
    })
}

fn require_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(FrameCountError::MissingDir {
            path: path.to_path_buf(),
        })
    }
}
