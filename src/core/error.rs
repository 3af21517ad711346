use thiserror::Error;

/// Rejected story configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoryError {
    #[error("scene has no section objects")]
    EmptyScene,
    #[error("object spacing must be positive and finite, got {0}")]
    InvalidSpacing(f32),
    #[error("section tween duration must be non-negative and finite, got {0}")]
    InvalidTweenDuration(f32),
    #[error("parallax ease rate must be non-negative and finite, got {0}")]
    InvalidEaseRate(f32),
}
