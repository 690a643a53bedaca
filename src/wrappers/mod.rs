//! Wrapper factories.
//!
//! Each factory takes a tag (or a state handle) and returns a [`Wrapper`]: a
//! one-shot function that closes over an inner renderable and produces the
//! outer one. A factory fixes the produced renderable's variant and its
//! squashing behavior up front; only the squashing factories dispatch on the
//! inner variant, and they do so once, while the chain is being built.

mod hover;
mod squash;
mod stateful;
mod tagged;

pub use hover::{hovered, HoverPalette, HoverPhase, HoverState};
pub use squash::{squashing, squashing_pure};
pub use stateful::{impure, pure, stateful, with_state};
pub use tagged::tagged;

use crate::renderable::Renderable;

/// A wrapper ready to be applied around an inner renderable.
///
/// Produced by a factory, consumed exactly once by [`crate::chain::compose`].
pub type Wrapper = Box<dyn FnOnce(Renderable) -> Renderable>;
