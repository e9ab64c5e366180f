//! Output naming and input filtering rules

use std::path::{Path, PathBuf};

use crate::domain::model::{ClipInterval, ClipName};

fn basename(input_file: &Path) -> String {
    input_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input_file.to_string_lossy().into_owned())
}

/// `<output_dir>/<input_basename>-<start>-<end>.<container_extension>`
pub fn clip_output_path(
    output_dir: &Path,
    input_file: &Path,
    interval: &ClipInterval,
    container_extension: &str,
) -> PathBuf {
    output_dir.join(format!(
        "{}-{}-{}.{}",
        basename(input_file),
        interval.start,
        interval.end,
        container_extension
    ))
}

/// `<output_dir>/<input_basename>`, used when a file is re-encoded whole
pub fn same_name_output_path(output_dir: &Path, input_file: &Path) -> PathBuf {
    output_dir.join(basename(input_file))
}

/// Recognise a clip produced by [`clip_output_path`].
///
/// The head keeps any dashes of the original basename; only the last two
/// dash-separated fields before the extension are frame numbers.
pub fn parse_clip_name(path: &Path) -> Option<ClipName> {
    let file_name = path.file_name()?.to_str()?;
    let (stem, extension) = file_name.rsplit_once('.')?;

    let mut fields = stem.rsplitn(3, '-');
    let end = fields.next()?.parse().ok()?;
    let start = fields.next()?.parse().ok()?;
    let head = fields.next()?;
    if head.is_empty() || extension.is_empty() {
        return None;
    }

    Some(ClipName {
        head: head.to_string(),
        start,
        end,
        extension: extension.to_string(),
    })
}

/// Extension allow-list check, case-insensitive
pub fn is_video_file(path: &Path, video_extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            video_extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
