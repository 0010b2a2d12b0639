//! Call-rate shaping for high-frequency events, kept as plain state machines
//! over f64 millisecond timestamps so the semantics are testable without a
//! clock. The web layer supplies `Date.now()` and the actual timers.

/// Trailing-edge debounce: the wrapped action fires only after `wait_ms` has
/// elapsed with no further calls.
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    wait_ms: f64,
    deadline: Option<f64>,
}

impl Debounce {
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms,
            deadline: None,
        }
    }

    /// Records a call, pushing the fire deadline out to `now_ms + wait_ms`.
    pub fn call(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.wait_ms);
    }

    /// Returns true exactly once per quiet period, when the deadline has
    /// passed. A later `call` moves the deadline, so earlier scheduled polls
    /// come back false and only the final one fires.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(d) if now_ms >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn wait_ms(&self) -> f64 {
        self.wait_ms
    }
}

/// Leading-edge throttle: the first call in a window passes, the rest are
/// dropped until `limit_ms` has elapsed.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    limit_ms: f64,
    window_until: f64,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            window_until: f64::NEG_INFINITY,
        }
    }

    /// Returns true if the call may proceed, opening a new window when it
    /// does. At most one call passes per `limit_ms` window.
    pub fn allow(&mut self, now_ms: f64) -> bool {
        if now_ms < self.window_until {
            return false;
        }
        self.window_until = now_ms + self.limit_ms;
        true
    }
}
