//! Conversion of shot-change markers into clip intervals

use crate::domain::model::{ClipInterval, FrameMarker};

/// Build the interior clip intervals between consecutive markers.
///
/// Each interval ends one frame before the next marker so clips never share
/// a frame. The last marker only starts the unterminated trailing segment,
/// which is not emitted here (see [`trailing_interval`]).
///
/// Duplicate or decreasing markers produce degenerate intervals
/// (`end < start`). They are passed through unchanged so callers can detect
/// them with [`ClipInterval::is_degenerate`].
pub fn build_intervals(markers: &[FrameMarker]) -> Vec<ClipInterval> {
    markers
        .windows(2)
        .map(|pair| ClipInterval::new(pair[0], pair[1] - 1))
        .collect()
}

/// Segment from the last marker through the last frame of the media.
///
/// `None` when the media ends before the marker.
pub fn trailing_interval(last_marker: FrameMarker, last_frame: FrameMarker) -> Option<ClipInterval> {
    (last_frame >= last_marker).then(|| ClipInterval::new(last_marker, last_frame))
}
