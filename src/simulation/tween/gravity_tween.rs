/// Timed gravity transition: idle -> active -> idle.
///
/// The curve is ease-out quadratic, `1 - (1 - t)^2`. Completion snaps to the
/// end value exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct GravityTween {
    active: bool,
    start: f32,
    end: f32,
    /// `None` until the first frame after `begin` latches its timestamp
    start_time: Option<f64>,
    duration: f64,
}

impl GravityTween {
    pub fn idle() -> Self {
        Self {
            active: false,
            start: 0.0,
            end: 0.0,
            start_time: None,
            duration: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> f32 {
        self.end
    }

    /// `duration` must be positive.
    pub fn begin(&mut self, from: f32, to: f32, duration: f64, start_time: Option<f64>) {
        self.active = true;
        self.start = from;
        self.end = to;
        self.start_time = start_time;
        self.duration = duration;
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Gravity for frame time `now`, or `None` when idle.
    pub fn sample(&mut self, now: f64) -> Option<f32> {
        if !self.active {
            return None;
        }
        let start_time = *self.start_time.get_or_insert(now);
        // Frame timestamps may trail an input-event timestamp slightly
        let t = ((now - start_time) / self.duration).max(0.0);
        if t >= 1.0 {
            self.active = false;
            return Some(self.end);
        }
        let eased = (1.0 - (1.0 - t) * (1.0 - t)) as f32;
        Some(self.start + (self.end - self.start) * eased)
    }
}

impl Default for GravityTween {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_tween_yields_nothing() {
        let mut tw = GravityTween::idle();
        assert_eq!(tw.sample(100.0), None);
    }

    #[test]
    fn ease_out_midpoint_and_exact_completion() {
        let mut tw = GravityTween::idle();
        tw.begin(0.0, 0.1, 600.0, Some(0.0));

        let mid = tw.sample(300.0).unwrap();
        assert!((mid - 0.075).abs() < 1e-6, "mid = {}", mid);
        assert!(mid > 0.0 && mid < 0.1);
        assert!(tw.is_active());

        assert_eq!(tw.sample(600.0), Some(0.1));
        assert!(!tw.is_active());
        assert_eq!(tw.sample(700.0), None);
    }

    #[test]
    fn start_time_latches_on_first_sample() {
        let mut tw = GravityTween::idle();
        tw.begin(0.12, 0.0, 150.0, None);
        assert_eq!(tw.sample(1000.0), Some(0.12));
        let later = tw.sample(1075.0).unwrap();
        assert!((later - 0.03).abs() < 1e-6, "later = {}", later);
        assert_eq!(tw.sample(1150.0), Some(0.0));
    }

    #[test]
    fn early_frame_clamps_to_start() {
        let mut tw = GravityTween::idle();
        tw.begin(0.0, 1.0, 100.0, Some(50.0));
        assert_eq!(tw.sample(40.0), Some(0.0));
    }
}
