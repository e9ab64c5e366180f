// Domain rules - Segmentation logic and policies

pub mod intervals;
pub mod markers;
pub mod naming;
pub mod strategy;

pub use intervals::{build_intervals, trailing_interval};
pub use markers::{parse_marker_payload, parse_markers, parse_producer_out, SHOT_CHANGE_PROPERTY};
pub use naming::{clip_output_path, is_video_file, parse_clip_name, same_name_output_path};
pub use strategy::{SceneSplit, SegmentationStrategy, StrategyKind, TrailingFrameRemoval};
