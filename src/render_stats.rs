//! Render statistics tracking for debugging and performance analysis.
//!
//! Enable render stats by compiling with the `render-stats` feature:
//! ```bash
//! cargo run --example deep_chain --features render-stats
//! ```
//!
//! Stats are printed every second when enabled, showing:
//! - Pass counts and average inclusive time per pass
//! - Stateful renders executed vs memoized, and execution reasons
//! - Wasted renders (executed although inputs were value-equal)
//! - Squash collapses (wrapper layers that added no depth)
//!
//! The pipeline behaves identically whether or not the feature is compiled
//! in; without it every record call is an inlined no-op.

/// Reasons why a stateful render body was executed (can be multiple).
#[derive(Default, Clone, Copy)]
pub struct RenderReasons {
    pub attrs_changed: bool,
    pub state_changed: bool,
}

/// Snapshot of accumulated render statistics.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub passes: u64,
    pub renders_executed: u64,
    pub renders_memoized: u64,
    pub renders_wasted: u64,
    pub render_primary_attrs: u64,
    pub render_primary_state: u64,
    pub squash_collapsed: u64,
    pub inclusive_micros: u64,
}

#[cfg(feature = "render-stats")]
mod inner {
    use super::RenderReasons;
    use std::cell::RefCell;
    use std::time::{Duration, Instant};

    thread_local! {
        static STATS: RefCell<RenderStats> = RefCell::new(RenderStats::new());
    }

    struct RenderStats {
        passes: u64,
        renders_executed: u64,
        renders_memoized: u64,
        renders_wasted: u64,
        render_primary_attrs: u64,
        render_primary_state: u64,
        squash_collapsed: u64,
        inclusive_micros: u64,
        last_print: Instant,
    }

    impl RenderStats {
        fn new() -> Self {
            Self {
                passes: 0,
                renders_executed: 0,
                renders_memoized: 0,
                renders_wasted: 0,
                render_primary_attrs: 0,
                render_primary_state: 0,
                squash_collapsed: 0,
                inclusive_micros: 0,
                last_print: Instant::now(),
            }
        }

        fn reset(&mut self) {
            self.passes = 0;
            self.renders_executed = 0;
            self.renders_memoized = 0;
            self.renders_wasted = 0;
            self.render_primary_attrs = 0;
            self.render_primary_state = 0;
            self.squash_collapsed = 0;
            self.inclusive_micros = 0;
            self.last_print = Instant::now();
        }
    }

    /// Record a stateful render whose body was executed, with reasons.
    #[inline]
    pub fn record_render_executed(reasons: RenderReasons) {
        STATS.with(|s| {
            let mut stats = s.borrow_mut();
            stats.renders_executed += 1;

            if reasons.attrs_changed {
                stats.render_primary_attrs += 1;
            } else if reasons.state_changed {
                stats.render_primary_state += 1;
            }
        });
    }

    /// Record a stateful render satisfied from the memo slot.
    #[inline]
    pub fn record_render_memoized() {
        STATS.with(|s| {
            s.borrow_mut().renders_memoized += 1;
        });
    }

    /// Record an executed render whose inputs were value-equal to the
    /// previous call (what a pure policy would have skipped).
    #[inline]
    pub fn record_render_wasted() {
        STATS.with(|s| {
            s.borrow_mut().renders_wasted += 1;
        });
    }

    /// Record a wrapper layer collapsed by squashing.
    #[inline]
    pub fn record_squash_collapsed() {
        STATS.with(|s| {
            s.borrow_mut().squash_collapsed += 1;
        });
    }

    /// Return a snapshot of the current stats (for testing).
    pub fn get_stats() -> super::StatsSnapshot {
        STATS.with(|s| {
            let stats = s.borrow();
            super::StatsSnapshot {
                passes: stats.passes,
                renders_executed: stats.renders_executed,
                renders_memoized: stats.renders_memoized,
                renders_wasted: stats.renders_wasted,
                render_primary_attrs: stats.render_primary_attrs,
                render_primary_state: stats.render_primary_state,
                squash_collapsed: stats.squash_collapsed,
                inclusive_micros: stats.inclusive_micros,
            }
        })
    }

    /// Reset all stats to zero (for test isolation).
    pub fn reset_stats() {
        STATS.with(|s| {
            s.borrow_mut().reset();
        });
    }

    /// Called at the end of each pass with its inclusive wall time.
    /// Potentially prints accumulated stats.
    pub fn record_pass(elapsed: Duration) {
        STATS.with(|s| {
            let mut stats = s.borrow_mut();
            stats.passes += 1;
            stats.inclusive_micros += elapsed.as_micros() as u64;

            if stats.last_print.elapsed().as_secs() >= 1 {
                let renders = stats.renders_executed + stats.renders_memoized;

                let memo_rate = if renders > 0 {
                    (stats.renders_memoized as f64 / renders as f64) * 100.0
                } else {
                    0.0
                };

                let wasted_rate = if stats.renders_executed > 0 {
                    (stats.renders_wasted as f64 / stats.renders_executed as f64) * 100.0
                } else {
                    0.0
                };

                let inclusive_avg = stats.inclusive_micros / stats.passes;

                eprintln!(
                    "[Render Stats] passes={} inclusive_avg={}us",
                    stats.passes, inclusive_avg
                );
                eprintln!(
                    "  renders: total={} executed={} memoized={} memo_rate={:.1}%",
                    renders, stats.renders_executed, stats.renders_memoized, memo_rate
                );
                if stats.renders_executed > 0 {
                    eprintln!(
                        "    primary: attrs={} state={}",
                        stats.render_primary_attrs, stats.render_primary_state
                    );
                }
                eprintln!(
                    "  wasted: {} ({:.1}% of executed)",
                    stats.renders_wasted, wasted_rate
                );
                eprintln!("  squash: collapsed={}", stats.squash_collapsed);

                stats.reset();
            }
        });
    }
}

#[cfg(feature = "render-stats")]
pub use inner::*;

// No-op implementations when the feature is disabled - these get completely
// inlined away.

#[cfg(not(feature = "render-stats"))]
#[inline(always)]
pub fn get_stats() -> StatsSnapshot {
    StatsSnapshot::default()
}

#[cfg(not(feature = "render-stats"))]
#[inline(always)]
pub fn reset_stats() {}

#[cfg(not(feature = "render-stats"))]
#[inline(always)]
pub fn record_render_executed(_reasons: RenderReasons) {}

#[cfg(not(feature = "render-stats"))]
#[inline(always)]
pub fn record_render_memoized() {}

#[cfg(not(feature = "render-stats"))]
#[inline(always)]
pub fn record_render_wasted() {}

#[cfg(not(feature = "render-stats"))]
#[inline(always)]
pub fn record_squash_collapsed() {}

#[cfg(not(feature = "render-stats"))]
#[inline(always)]
pub fn record_pass(_elapsed: std::time::Duration) {}
