use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{FrameCountError, Result};

/// Marker that identifies an extracted frame among a video directory's entries.
pub const IMAGE_MARKER: &str = "image";

/// Character range of the frame index inside names like `image_00042.jpg`.
const INDEX_START: usize = 6;
const INDEX_END: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoFrames {
    pub dir: PathBuf,
    pub image_count: usize,
    pub n_frames: i64,
}

impl VideoFrames {
    pub fn has_frames(&self) -> bool {
        self.image_count > 0
    }
}

pub fn is_frame_image(file_name: &str) -> bool {
    file_name.contains(IMAGE_MARKER)
}

/// Parses the frame index stored at characters `[6, 11)` of `file_name`.
///
/// Names shorter than the range yield whatever characters are present, so
/// a name that ends before position 7 always fails.
pub fn parse_frame_index(file_name: &str) -> Result<i64> {
    let slice = index_slice(file_name);
    strip_digit_separators(slice.trim())
        .and_then(|digits| digits.parse::<i64>().ok())
        .ok_or_else(|| FrameCountError::FrameIndex {
            path: PathBuf::from(file_name),
            slice,
        })
}

/// Drops single `_` separators that sit between two digits (`0_001` -> `0001`).
/// Any other underscore makes the number invalid.
fn strip_digit_separators(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut digits = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            digits.push(c);
            continue;
        }
        let before = i.checked_sub(1).map(|j| chars[j]);
        let after = chars.get(i + 1).copied();
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(digits)
}

fn index_slice(file_name: &str) -> String {
    file_name
        .chars()
        .skip(INDEX_START)
        .take(INDEX_END - INDEX_START)
        .collect()
}

/// Lists `dir` (non-recursive) and takes the highest frame index among its
/// image entries, or 0 when there are none.
pub fn scan_video_dir(dir: &Path) -> Result<VideoFrames> {
    let mut image_count = 0;
    let mut max_index: Option<i64> = None;

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy();
        if !is_frame_image(&name) {
            continue;
        }
        let index = parse_frame_index(&name).map_err(|err| match err {
            FrameCountError::FrameIndex { slice, .. } => FrameCountError::FrameIndex {
                path: entry.path().to_path_buf(),
                slice,
            },
            other => other,
        })?;
        image_count += 1;
        max_index = Some(max_index.map_or(index, |m| m.max(index)));
    }

    debug!("{}: {image_count} image entries", dir.display());

    Ok(VideoFrames {
        dir: dir.to_path_buf(),
        image_count,
        n_frames: max_index.unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").expect("touch");
    }

    #[test]
    fn parses_standard_frame_name() {
        assert_eq!(parse_frame_index("image_00042.jpg").unwrap(), 42);
        assert_eq!(parse_frame_index("image_12345.png").unwrap(), 12345);
    }

    #[test]
    fn only_fixed_range_is_read() {
        // Digits past position 10 are ignored.
        assert_eq!(parse_frame_index("image_000019999.jpg").unwrap(), 1);
    }

    #[test]
    fn rejects_non_numeric_slice() {
        let err = parse_frame_index("image_abcde.jpg").unwrap_err();
        match err {
            FrameCountError::FrameIndex { slice, .. } => assert_eq!(slice, "abcde"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn accepts_underscore_between_digits() {
        assert_eq!(parse_frame_index("image_0_001.jpg").unwrap(), 1);
        assert_eq!(parse_frame_index("image_12_34.jpg").unwrap(), 1234);
    }

    #[test]
    fn rejects_misplaced_underscores() {
        assert!(parse_frame_index("image_0__01.jpg").is_err());
        assert!(parse_frame_index("image__0001.jpg").is_err());
        assert!(parse_frame_index("image_0001_.jpg").is_err());
        assert!(parse_frame_index("image_+_001.jpg").is_err());
    }

    #[test]
    fn rejects_short_name() {
        assert!(parse_frame_index("image").is_err());
        assert!(parse_frame_index("image_1").is_ok());
    }

    #[test]
    fn marker_is_a_substring_match() {
        assert!(is_frame_image("image_00001.jpg"));
        assert!(is_frame_image("my_image.png"));
        assert!(!is_frame_image("Image_00001.jpg"));
        assert!(!is_frame_image("readme.md"));
    }

    #[test]
    fn scan_takes_max_index() {
        let tmp = tempfile::tempdir().expect("tempdir");
        for name in ["image_00003.jpg", "image_00001.jpg", "image_00007.jpg", "notes.txt"] {
            touch(tmp.path(), name);
        }

        let frames = scan_video_dir(tmp.path()).expect("scan");
        assert_eq!(frames.n_frames, 7);
        assert_eq!(frames.image_count, 3);
        assert!(frames.has_frames());
    }

    #[test]
    fn scan_without_images_is_zero() {
        let tmp = tempfile::tempdir().expect("tempdir");
        touch(tmp.path(), "other.txt");
        touch(tmp.path(), "readme.md");

        let frames = scan_video_dir(tmp.path()).expect("scan");
        assert_eq!(frames.n_frames, 0);
        assert!(!frames.has_frames());
    }

    #[test]
    fn scan_is_not_recursive() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let nested = tmp.path().join("clips");
        fs::create_dir(&nested).expect("mkdir");
        touch(&nested, "image_00099.jpg");
        touch(tmp.path(), "image_00002.jpg");

        let frames = scan_video_dir(tmp.path()).expect("scan");
        assert_eq!(frames.n_frames, 2);
    }

    #[test]
    fn scan_reports_full_path_of_bad_frame() {
        let tmp = tempfile::tempdir().expect("tempdir");
        touch(tmp.path(), "image_0x001.jpg");

        match scan_video_dir(tmp.path()).unwrap_err() {
            FrameCountError::FrameIndex { path, slice } => {
                assert_eq!(path, tmp.path().join("image_0x001.jpg"));
                assert_eq!(slice, "0x001");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
