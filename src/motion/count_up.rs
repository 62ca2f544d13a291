//! Frame stepping for the animated stat counters.
//!
//! The browser scheduler (`request_animation_frame`) calls back with a
//! timestamp; [`count_up_frame`] turns that into the integer to display and
//! whether another frame is needed. Keeping the math here, away from any
//! `web_sys` types, makes the counter behavior testable off-browser.

/// Ease-out quartic: `1 - (1 - p)^4`.
pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUpFrame {
    pub value: u64,
    /// Terminal frame; the caller must not schedule another one.
    pub done: bool,
}

/// Compute the displayed value for one animation frame.
///
/// `start_ms` is the timestamp of the first frame, `now_ms` the current one.
/// The terminal frame always pins `value` to `target` exactly, so the floor
/// of a near-1.0 eased progress can never leave the counter one short.
pub fn count_up_frame(target: u64, duration_ms: f64, start_ms: f64, now_ms: f64) -> CountUpFrame {
    if target == 0 || duration_ms <= 0.0 {
        return CountUpFrame {
            value: target,
            done: true,
        };
    }

    let progress = ((now_ms - start_ms) / duration_ms).clamp(0.0, 1.0);
    if progress >= 1.0 {
        return CountUpFrame {
            value: target,
            done: true,
        };
    }

    let eased = ease_out_quart(progress);
    CountUpFrame {
        value: (eased * target as f64).floor() as u64,
        done: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(target: u64, duration_ms: f64, frame_ms: f64) -> Vec<u64> {
        let start = 1000.0;
        let mut now = start;
        let mut values = Vec::new();
        loop {
            let frame = count_up_frame(target, duration_ms, start, now);
            values.push(frame.value);
            if frame.done {
                return values;
            }
            now += frame_ms;
        }
    }

    #[test]
    fn sequence_is_non_decreasing_and_ends_at_target() {
        for &target in &[1u64, 7, 50, 99, 500, 1_000_000] {
            let values = run_to_completion(target, 2500.0, 16.7);
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "target {target}");
            assert_eq!(*values.last().unwrap(), target);
            assert!(values.iter().all(|&v| v <= target));
        }
    }

    #[test]
    fn zero_target_settles_immediately() {
        let frame = count_up_frame(0, 2000.0, 0.0, 0.0);
        assert_eq!(frame, CountUpFrame { value: 0, done: true });
    }

    #[test]
    fn non_positive_duration_settles_at_target() {
        let frame = count_up_frame(42, 0.0, 0.0, 0.0);
        assert_eq!(frame, CountUpFrame { value: 42, done: true });
    }

    #[test]
    fn terminal_frame_is_exact_even_past_duration() {
        let frame = count_up_frame(99, 2000.0, 0.0, 2000.0);
        assert_eq!(frame, CountUpFrame { value: 99, done: true });
        let frame = count_up_frame(99, 2000.0, 0.0, 50_000.0);
        assert_eq!(frame, CountUpFrame { value: 99, done: true });
    }

    #[test]
    fn frame_before_start_clamps_to_zero_progress() {
        let frame = count_up_frame(99, 2000.0, 1000.0, 900.0);
        assert_eq!(frame, CountUpFrame { value: 0, done: false });
    }

    #[test]
    fn easing_endpoints_and_monotonicity() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        let mut prev = 0.0;
        for i in 1..=1000 {
            let eased = ease_out_quart(i as f64 / 1000.0);
            assert!(eased > prev, "not strictly increasing at step {i}");
            prev = eased;
        }
    }
}
