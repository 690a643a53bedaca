pub mod attrs;
pub mod chain;
pub mod error;
pub mod node;
pub mod reactive;
pub mod render_stats;
pub mod renderable;
pub mod wrappers;

use std::time::{Duration, Instant};

use attrs::{Attributes, CONTENT};
use error::ChainError;
use node::RenderNode;
use renderable::Renderable;

pub mod prelude {
    pub use crate::attrs::{AttrValue, Attributes, CONTENT, EXTRA_TAG};
    pub use crate::chain::compose;
    pub use crate::error::ChainError;
    pub use crate::node::RenderNode;
    pub use crate::reactive::{create_state, StateCell};
    pub use crate::renderable::{item, leaf, RenderPolicy, Renderable};
    pub use crate::wrappers::{
        hovered, impure, pure, squashing, squashing_pure, stateful, tagged, with_state,
        HoverPalette, HoverPhase, HoverState, Wrapper,
    };
    pub use crate::{Driver, DriverConfig};
}

pub struct DriverConfig {
    /// Number of render passes to drive.
    pub ticks: u64,
    /// Pause between passes.
    pub period: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            ticks: 20,
            period: Duration::from_millis(1000),
        }
    }
}

/// A callback that gets called before each pass with the tick counter.
/// Use this to advance state cells and drive state-triggered re-renders.
pub type TickCallback = Box<dyn FnMut(u64)>;

/// Harness driving a composed chain.
///
/// The driver owns the tick counter and the pacing; the pipeline itself
/// holds no global mutable state. Each tick, the counter is broadcast as the
/// `content` attribute into the root renderable's render entry point.
///
/// # Example
/// ```ignore
/// let factories: Vec<Wrapper> = (0..40).map(|i| impure(i.to_string())).collect();
/// let root = compose(factories, item());
///
/// Driver::new(root)
///     .ticks(20)
///     .period(Duration::from_millis(1000))
///     .run()?;
/// ```
pub struct Driver {
    config: DriverConfig,
    root: Renderable,
    on_tick: Option<TickCallback>,
}

impl Driver {
    pub fn new(root: Renderable) -> Self {
        Self {
            config: DriverConfig::default(),
            root,
            on_tick: None,
        }
    }

    pub fn with_config(root: Renderable, config: DriverConfig) -> Self {
        Self {
            config,
            root,
            on_tick: None,
        }
    }

    pub fn ticks(mut self, ticks: u64) -> Self {
        self.config.ticks = ticks;
        self
    }

    pub fn period(mut self, period: Duration) -> Self {
        self.config.period = period;
        self
    }

    /// Set a callback that gets called before each pass.
    ///
    /// # Example
    /// ```ignore
    /// let (wrap, counter) = with_state("s", Attributes::new().with("count", 0));
    /// let root = compose(vec![wrap], item());
    ///
    /// Driver::new(root)
    ///     .on_tick(move |tick| {
    ///         counter.update(|s| s.set("count", tick as i64));
    ///     })
    ///     .run()?;
    /// ```
    pub fn on_tick<F: FnMut(u64) + 'static>(mut self, callback: F) -> Self {
        self.on_tick = Some(Box::new(callback));
        self
    }

    /// Drive a single render pass for `tick` without pacing.
    pub fn pass(&mut self, tick: u64) -> Result<RenderNode, ChainError> {
        if let Some(ref mut callback) = self.on_tick {
            callback(tick);
        }

        let attrs = Attributes::new().with(CONTENT, tick as i64);
        let started = Instant::now();
        let node = self.root.render(&attrs)?;
        render_stats::record_pass(started.elapsed());

        log::trace!("pass {}: depth {}", tick, node.depth());
        Ok(node)
    }

    /// Run the configured number of passes, pacing each by the period.
    pub fn run(mut self) -> Result<(), ChainError> {
        env_logger::init();

        log::info!(
            "driving {} passes every {:?}",
            self.config.ticks,
            self.config.period
        );

        for tick in 0..self.config.ticks {
            let node = self.pass(tick)?;
            log::debug!("pass {} rendered a tree of depth {}", tick, node.depth());
            std::thread::sleep(self.config.period);
        }

        Ok(())
    }
}
