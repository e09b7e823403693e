use validator::{Validate, ValidationError};

/// Frames captured over a run when no explicit cadence is given.
pub const FRAMES_PER_RUN: usize = 75;

fn validate_run_config(cfg: &RunConfig) -> Result<(), ValidationError> {
    if cfg.epochs < 1 {
        return Err(ValidationError::new("epochs must be >= 1"));
    }
    if cfg.frame_cadence == Some(0) {
        return Err(ValidationError::new("frame_cadence must be >= 1"));
    }
    Ok(())
}

/// Parameters of the epoch loop.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
#[validate(schema(function = "validate_run_config"))]
pub struct RunConfig {
    /// Number of single-site Metropolis steps.
    pub epochs: usize,
    /// Whether snapshots are handed to the frame observer.
    pub capture_frames: bool,
    /// Epochs between captured frames. `None` spreads [`FRAMES_PER_RUN`]
    /// frames over the run.
    pub frame_cadence: Option<usize>,
}

impl RunConfig {
    pub fn new(epochs: usize, capture_frames: bool) -> Self {
        Self {
            epochs,
            capture_frames,
            frame_cadence: None,
        }
    }

    /// Effective capture interval; never zero, even for runs shorter than
    /// [`FRAMES_PER_RUN`] epochs.
    pub fn cadence(&self) -> usize {
        self.frame_cadence
            .unwrap_or(self.epochs / FRAMES_PER_RUN)
            .max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cadence() {
        assert_eq!(RunConfig::new(1_000_000, true).cadence(), 13_333);
        assert_eq!(RunConfig::new(750, true).cadence(), 10);
    }

    #[test]
    fn test_short_run_cadence_never_zero() {
        assert_eq!(RunConfig::new(10, true).cadence(), 1);
        assert_eq!(RunConfig::new(74, true).cadence(), 1);
    }

    #[test]
    fn test_explicit_cadence() {
        let cfg = RunConfig {
            frame_cadence: Some(7),
            ..RunConfig::new(100, true)
        };
        assert_eq!(cfg.cadence(), 7);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(RunConfig::new(1, false).validate().is_ok());
        assert!(RunConfig::new(0, false).validate().is_err());
        let cfg = RunConfig {
            frame_cadence: Some(0),
            ..RunConfig::new(100, true)
        };
        assert!(cfg.validate().is_err());
    }
}
