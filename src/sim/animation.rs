//! Sprite animation timing

/// Pick the animation frame shown at `elapsed_ms`.
///
/// Frames advance every `frame_duration_ms` and loop over `frame_count`.
/// Degenerate inputs (no frames, zero duration) always select frame 0.
pub fn frame_index(elapsed_ms: u64, frame_count: usize, frame_duration_ms: u64) -> usize {
    if frame_count == 0 || frame_duration_ms == 0 {
        return 0;
    }
    ((elapsed_ms / frame_duration_ms) % frame_count as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_advances_every_duration() {
        assert_eq!(frame_index(0, 10, 100), 0);
        assert_eq!(frame_index(99, 10, 100), 0);
        assert_eq!(frame_index(100, 10, 100), 1);
        assert_eq!(frame_index(950, 10, 100), 9);
    }

    #[test]
    fn test_frame_wraps() {
        assert_eq!(frame_index(1000, 10, 100), 0);
        assert_eq!(frame_index(1234, 10, 100), 2);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(frame_index(5000, 0, 100), 0);
        assert_eq!(frame_index(5000, 10, 0), 0);
    }
}
