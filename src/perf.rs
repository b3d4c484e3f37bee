//! Timing instrumentation for interaction hot paths.
//!
//! Pointer moves and drag updates run dozens of times per second; the
//! `profile_scope!` macro makes it cheap to see where that time goes.
//! Zero-cost when the `profiling` feature is disabled.
//!
//! ```ignore
//! fn handle_pointer_move() {
//!     profile_scope!("pointer_move");
//!     // ... work ...
//! }
//! ```

use std::time::Instant;
use tracing::trace;

/// Profile a scope with the given name. Zero-cost when profiling is
/// disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::start($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
}

/// RAII timer: logs the elapsed time of its scope at trace level on drop.
pub struct ScopedTimer {
    name: &'static str,
    started: Instant,
}

impl ScopedTimer {
    pub fn start(name: &'static str) -> Self {
        Self {
            name,
            started: Instant::now(),
        }
    }

    pub fn elapsed_micros(&self) -> u128 {
        self.started.elapsed().as_micros()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        trace!(scope = self.name, micros = self.elapsed_micros(), "scope timing");
    }
}
