// Domain layer - Core segmentation logic

pub mod errors;
pub mod model;
pub mod rules;
