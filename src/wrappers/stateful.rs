use std::rc::Rc;

use crate::attrs::{Attributes, EXTRA_TAG};
use crate::node::RenderNode;
use crate::reactive::StateCell;
use crate::renderable::{BodyFn, InitFn, RenderPolicy, Renderable, Stateful};

use super::tagged::child_attributes_over;
use super::Wrapper;

/// State-bearing tag-injecting wrapper.
///
/// Attribute injection matches the stateless tagged wrapper, and the local
/// state entries are spread into the child's input the same way the tag is:
/// own entries first, incoming attributes merged over them. The wrapper
/// never mutates the cell itself; the handle passed in here is the harness's
/// mutation path for state-driven re-renders.
///
/// With [`RenderPolicy::Pure`] the wrapper skips its body whenever both the
/// incoming attributes and the state snapshot are value-equal to the
/// previous render. With [`RenderPolicy::Impure`] it re-renders every time,
/// which is exactly the waste the pure policy exists to measure.
pub fn stateful(
    tag: impl Into<String>,
    policy: RenderPolicy,
    state: StateCell<Attributes>,
) -> Wrapper {
    let tag = tag.into();
    Box::new(move |inner: Renderable| {
        let body_tag = tag.clone();
        let body: BodyFn = Rc::new(move |attrs: &Attributes, state: &Attributes| {
            // Own entries first (tag, then state), incoming merged over them.
            let mut own = Attributes::new().with(EXTRA_TAG, body_tag.as_str());
            own.merge_from(state);
            let child_attrs = child_attributes_over(own, attrs);
            let child = inner.render(&child_attrs)?;
            Ok(RenderNode::element(body_tag.clone(), child_attrs).with_child(child))
        });
        // Fresh instances restart from the state the wrapper was built with.
        let initial = state.get();
        let init: InitFn = Rc::new(move |_| Ok(initial.clone()));
        Renderable::Stateful(Stateful::new(tag, policy, state, init, body))
    })
}

/// Memoizing stateful wrapper with a private empty state.
pub fn pure(tag: impl Into<String>) -> Wrapper {
    stateful(tag, RenderPolicy::Pure, StateCell::new(Attributes::new()))
}

/// Unconditionally re-rendering stateful wrapper with a private empty state.
pub fn impure(tag: impl Into<String>) -> Wrapper {
    stateful(tag, RenderPolicy::Impure, StateCell::new(Attributes::new()))
}

/// Pure stateful wrapper whose initial state is supplied by the caller.
///
/// Returns the wrapper together with the cell handle so the harness can
/// advance the state between passes.
///
/// # Example
/// ```ignore
/// let (wrap, counter) = with_state("s", Attributes::new().with("count", 0));
/// let root = compose(vec![wrap], item());
/// counter.update(|s| s.set("count", 1)); // next pass re-renders
/// ```
pub fn with_state(
    tag: impl Into<String>,
    initial: Attributes,
) -> (Wrapper, StateCell<Attributes>) {
    let cell = StateCell::new(initial);
    (stateful(tag, RenderPolicy::Pure, cell.clone()), cell)
}
