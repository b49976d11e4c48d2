#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Previous,
}

/// Tracks one horizontal touch gesture.
#[derive(Clone, Copy, Debug)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: Option<f64>,
    delta_x: f64,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.abs(),
            start_x: None,
            delta_x: 0.0,
        }
    }

    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
        self.delta_x = 0.0;
    }

    pub fn track(&mut self, x: f64) {
        if let Some(start) = self.start_x {
            self.delta_x = x - start;
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn delta(&self) -> f64 {
        self.delta_x
    }

    /// Ends the gesture. A leftward move is `Next`, rightward `Previous`.
    pub fn finish(&mut self) -> Option<SwipeDirection> {
        let started = self.start_x.take().is_some();
        let delta = std::mem::take(&mut self.delta_x);
        if !started || delta.abs() < self.threshold {
            return None;
        }
        if delta < 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
        self.delta_x = 0.0;
    }
}
