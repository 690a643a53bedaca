//! Renderable entities and their render dispatch.
//!
//! A renderable is classified once, at chain-construction time, as one of
//! two variants:
//!
//! - **Stateless**: a pure function from attributes to a node.
//! - **Stateful**: an entity owning local state, a render policy, and a
//!   memo slot used by the pure policy to skip value-equal re-renders.
//!
//! The variant is an explicit enum rather than a per-call predicate, so
//! wrappers that need to dispatch on their inner entity (squashing does)
//! decide the dispatch while the chain is being built.

use std::cell::RefCell;
use std::rc::Rc;

use crate::attrs::Attributes;
use crate::error::ChainError;
use crate::node::RenderNode;
use crate::reactive::StateCell;
use crate::render_stats;

pub mod leaf;

pub use leaf::{item, leaf};

/// Pure render function of a stateless renderable.
pub type RenderFn = Rc<dyn Fn(&Attributes) -> Result<RenderNode, ChainError>>;

/// Render body of a stateful renderable: incoming attributes plus a snapshot
/// of the entity's local state.
pub type BodyFn = Rc<dyn Fn(&Attributes, &Attributes) -> Result<RenderNode, ChainError>>;

/// Produces a fresh local state from construction attributes. Used when a
/// squashing wrapper re-instantiates a stateful inner entity.
pub type InitFn = Rc<dyn Fn(&Attributes) -> Result<Attributes, ChainError>>;

/// Re-render policy of a stateful renderable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPolicy {
    /// Skip the body when attributes and state are value-equal to the
    /// previous invocation; return the memoized node instead.
    Pure,
    /// Invoke the body unconditionally on every render request.
    Impure,
}

/// A renderable entity: produces a [`RenderNode`] from [`Attributes`].
pub enum Renderable {
    Stateless(Stateless),
    Stateful(Stateful),
}

impl Renderable {
    /// Build a stateless renderable from a fallible render function.
    pub fn stateless<F>(f: F) -> Self
    where
        F: Fn(&Attributes) -> Result<RenderNode, ChainError> + 'static,
    {
        Renderable::Stateless(Stateless::new(f))
    }

    /// Render this entity. The single entry point the harness calls per pass.
    pub fn render(&self, attrs: &Attributes) -> Result<RenderNode, ChainError> {
        match self {
            Renderable::Stateless(r) => r.render(attrs),
            Renderable::Stateful(r) => r.render(attrs),
        }
    }

    pub fn is_stateless(&self) -> bool {
        matches!(self, Renderable::Stateless(_))
    }

    pub fn is_stateful(&self) -> bool {
        matches!(self, Renderable::Stateful(_))
    }
}

/// A pure function of attributes.
pub struct Stateless {
    render: RenderFn,
}

impl Stateless {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Attributes) -> Result<RenderNode, ChainError> + 'static,
    {
        Self { render: Rc::new(f) }
    }

    pub fn render(&self, attrs: &Attributes) -> Result<RenderNode, ChainError> {
        (self.render)(attrs)
    }
}

struct MemoEntry {
    attrs: Attributes,
    state: Attributes,
    node: RenderNode,
}

/// An entity owning local state.
///
/// The state is never written by the entity itself; the [`StateCell`] handle
/// is the harness's mutation path. The memo slot holds the inputs and output
/// of the previous render so the pure policy can detect no-op requests by
/// structural equality.
pub struct Stateful {
    tag: String,
    policy: RenderPolicy,
    state: StateCell<Attributes>,
    init: InitFn,
    body: BodyFn,
    memo: RefCell<Option<MemoEntry>>,
}

impl std::fmt::Debug for Stateful {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stateful")
            .field("tag", &self.tag)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Stateful {
    pub fn new(
        tag: impl Into<String>,
        policy: RenderPolicy,
        state: StateCell<Attributes>,
        init: InitFn,
        body: BodyFn,
    ) -> Self {
        Self {
            tag: tag.into(),
            policy,
            state,
            init,
            body,
            memo: RefCell::new(None),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn policy(&self) -> RenderPolicy {
        self.policy
    }

    pub fn state(&self) -> &StateCell<Attributes> {
        &self.state
    }

    /// Construct a fresh instance of this entity.
    ///
    /// The initializer is evaluated against the construction attributes and
    /// its result becomes the new local state; the memo starts empty. Any
    /// state accumulated by this instance is not carried over.
    pub fn instantiate(&self, attrs: &Attributes) -> Result<Stateful, ChainError> {
        let state = (self.init)(attrs)?;
        Ok(Stateful {
            tag: self.tag.clone(),
            policy: self.policy,
            state: StateCell::new(state),
            init: Rc::clone(&self.init),
            body: Rc::clone(&self.body),
            memo: RefCell::new(None),
        })
    }

    pub fn render(&self, attrs: &Attributes) -> Result<RenderNode, ChainError> {
        let state = self.state.get();

        let mut reasons = render_stats::RenderReasons {
            attrs_changed: true,
            state_changed: true,
        };
        if let Some(entry) = self.memo.borrow().as_ref() {
            reasons.attrs_changed = entry.attrs != *attrs;
            reasons.state_changed = entry.state != state;
            if !reasons.attrs_changed && !reasons.state_changed && self.policy == RenderPolicy::Pure
            {
                render_stats::record_render_memoized();
                return Ok(entry.node.clone());
            }
        }
        if !reasons.attrs_changed && !reasons.state_changed {
            // An impure entity re-renders even though nothing changed.
            render_stats::record_render_wasted();
        }

        let node = (self.body)(attrs, &state)?;
        render_stats::record_render_executed(reasons);
        *self.memo.borrow_mut() = Some(MemoEntry {
            attrs: attrs.clone(),
            state,
            node: node.clone(),
        });
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::attrs::Attributes;

    fn counting_body(calls: Rc<Cell<usize>>) -> BodyFn {
        Rc::new(move |attrs: &Attributes, state: &Attributes| {
            calls.set(calls.get() + 1);
            let mut merged = state.clone();
            merged.merge_from(attrs);
            Ok(RenderNode::element("body", merged))
        })
    }

    fn noop_init() -> InitFn {
        Rc::new(|_| Ok(Attributes::new()))
    }

    fn entity(policy: RenderPolicy, calls: Rc<Cell<usize>>) -> Stateful {
        Stateful::new(
            "t",
            policy,
            StateCell::new(Attributes::new()),
            noop_init(),
            counting_body(calls),
        )
    }

    #[test]
    fn test_pure_skips_body_on_equal_inputs() {
        let calls = Rc::new(Cell::new(0));
        let entity = entity(RenderPolicy::Pure, calls.clone());
        let attrs = Attributes::new().with("content", 1);

        let first = entity.render(&attrs).unwrap();
        let second = entity.render(&attrs).unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_pure_rerenders_on_attr_change() {
        let calls = Rc::new(Cell::new(0));
        let entity = entity(RenderPolicy::Pure, calls.clone());

        entity.render(&Attributes::new().with("content", 1)).unwrap();
        entity.render(&Attributes::new().with("content", 2)).unwrap();

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_pure_rerenders_on_state_change() {
        let calls = Rc::new(Cell::new(0));
        let state = StateCell::new(Attributes::new().with("count", 0));
        let entity = Stateful::new(
            "t",
            RenderPolicy::Pure,
            state.clone(),
            noop_init(),
            counting_body(calls.clone()),
        );
        let attrs = Attributes::new();

        entity.render(&attrs).unwrap();
        state.update(|s| s.set("count", 1));
        entity.render(&attrs).unwrap();

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_pure_noop_state_update_stays_memoized() {
        let calls = Rc::new(Cell::new(0));
        let state = StateCell::new(Attributes::new().with("count", 0));
        let entity = Stateful::new(
            "t",
            RenderPolicy::Pure,
            state.clone(),
            noop_init(),
            counting_body(calls.clone()),
        );
        let attrs = Attributes::new();

        entity.render(&attrs).unwrap();
        state.update(|s| s.set("count", 0));
        entity.render(&attrs).unwrap();

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_impure_always_invokes_body() {
        let calls = Rc::new(Cell::new(0));
        let entity = entity(RenderPolicy::Impure, calls.clone());
        let attrs = Attributes::new().with("content", 1);

        entity.render(&attrs).unwrap();
        entity.render(&attrs).unwrap();

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_instantiate_resets_state_and_memo() {
        let calls = Rc::new(Cell::new(0));
        let state = StateCell::new(Attributes::new().with("count", 0));
        let init_state = Attributes::new().with("count", 100);
        let init: InitFn = Rc::new(move |_| Ok(init_state.clone()));
        let entity = Stateful::new(
            "t",
            RenderPolicy::Pure,
            state.clone(),
            init,
            counting_body(calls.clone()),
        );

        state.update(|s| s.set("count", 5));
        let fresh = entity.instantiate(&Attributes::new()).unwrap();
        assert_eq!(
            fresh.state().get(),
            Attributes::new().with("count", 100)
        );

        // The fresh instance renders from scratch.
        fresh.render(&Attributes::new()).unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_instantiate_propagates_init_failure() {
        let init: InitFn = Rc::new(|attrs| {
            if attrs.get("content").is_none() {
                return Err(ChainError::state_init("t", "missing content"));
            }
            Ok(Attributes::new())
        });
        let entity = Stateful::new(
            "t",
            RenderPolicy::Impure,
            StateCell::new(Attributes::new()),
            init,
            Rc::new(|attrs, _| Ok(RenderNode::element("body", attrs.clone()))),
        );

        let err = entity.instantiate(&Attributes::new()).unwrap_err();
        assert_eq!(err, ChainError::state_init("t", "missing content"));
        assert!(entity.instantiate(&Attributes::new().with("content", 1)).is_ok());
    }

    #[test]
    fn test_variant_helpers() {
        let stateless = Renderable::stateless(|attrs| Ok(RenderNode::element("x", attrs.clone())));
        assert!(stateless.is_stateless());
        assert!(!stateless.is_stateful());

        let calls = Rc::new(Cell::new(0));
        let stateful = Renderable::Stateful(entity(RenderPolicy::Pure, calls));
        assert!(stateful.is_stateful());
    }
}
