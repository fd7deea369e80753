use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "n_frames",
    version,
    about = "Record the frame count of every extracted video under <ROOT>/<CLASS>"
)]
pub struct Cli {
    /// Dataset root holding the class directory
    pub root: PathBuf,

    /// Class subdirectory under ROOT holding one directory per video
    #[arg(long = "class", env = "N_FRAMES_CLASS", default_value = "test")]
    pub class_name: String,

    /// Output format: per-video lines (text) or a final summary (json)
    #[arg(long, default_value = "text")]
    pub output: String,

    /// Compare existing records against the frames on disk without writing
    #[arg(long)]
    pub check: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn validate(&self) -> Result<(), String> {
        if self.class_name.is_empty() {
            return Err("class must not be empty".to_string());
        }

        if self.class_name.contains(['/', '\\']) {
            return Err(format!(
                "class must be a single directory name, got {:?}",
                self.class_name
            ));
        }

        if !matches!(self.output.as_str(), "text" | "json") {
            return Err(format!("Unknown output format: {}", self.output));
        }

        Ok(())
    }

    pub fn class_dir(&self) -> PathBuf {
        self.root.join(&self.class_name)
    }
}
