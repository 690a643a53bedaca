use std::rc::Rc;

use crate::attrs::Attributes;
use crate::reactive::StateCell;
use crate::render_stats;
use crate::renderable::{BodyFn, InitFn, RenderPolicy, Renderable, Stateful};

use super::tagged::child_attributes;
use super::Wrapper;

/// Squashing wrapper: adds zero render-tree depth.
///
/// Instead of nesting a new layer, the produced renderable invokes the
/// wrapped entity's render logic inline and returns its node verbatim. The
/// dispatch on the inner variant happens once, while the chain is built:
///
/// - a stateless inner is called directly with the incoming attributes;
/// - a stateful inner is freshly instantiated on every render call, so any
///   local state it accumulated in prior passes is discarded. Squashing
///   trades state continuity for tree depth.
///
/// A stateful inner whose initializer rejects the construction attributes is
/// a misbuilt chain; the error propagates to the harness.
pub fn squashing(tag: impl Into<String>) -> Wrapper {
    squash_with_policy(tag.into(), RenderPolicy::Impure)
}

/// Squashing wrapper that additionally memoizes its own render, skipping
/// even the fresh instantiation when its inputs are value-equal to the
/// previous pass.
pub fn squashing_pure(tag: impl Into<String>) -> Wrapper {
    squash_with_policy(tag.into(), RenderPolicy::Pure)
}

fn squash_with_policy(tag: String, policy: RenderPolicy) -> Wrapper {
    Box::new(move |inner: Renderable| {
        let body: BodyFn = match inner {
            Renderable::Stateless(f) => Rc::new(move |attrs: &Attributes, _: &Attributes| {
                render_stats::record_squash_collapsed();
                f.render(attrs)
            }),
            Renderable::Stateful(template) => {
                let body_tag = tag.clone();
                Rc::new(move |attrs: &Attributes, _: &Attributes| {
                    render_stats::record_squash_collapsed();
                    let instance = template.instantiate(attrs)?;
                    instance.render(&child_attributes(&body_tag, attrs))
                })
            }
        };
        let init: InitFn = Rc::new(|_| Ok(Attributes::new()));
        Renderable::Stateful(Stateful::new(
            tag,
            policy,
            StateCell::new(Attributes::new()),
            init,
            body,
        ))
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::attrs::AttrValue;
    use crate::error::ChainError;
    use crate::node::RenderNode;
    use crate::renderable::{item, leaf};
    use crate::wrappers::{stateful, with_state};

    #[test]
    fn test_stateless_inner_adds_no_depth() {
        let wrap = squashing("s");
        let root = wrap(item());
        let node = root.render(&Attributes::new().with("content", 2)).unwrap();
        assert_eq!(node.depth(), 1);
        assert_eq!(node.label(), "item");
        assert_eq!(node.attr("content"), Some(&AttrValue::Int(2)));
    }

    #[test]
    fn test_stateless_inner_gets_attributes_verbatim() {
        let wrap = squashing("s");
        let root = wrap(item());
        let node = root.render(&Attributes::new().with("content", 2)).unwrap();
        // No tag injection on the direct-call path.
        assert_eq!(node.attr("extra_tag"), None);
    }

    #[test]
    fn test_stateful_inner_rendered_once_per_call() {
        let calls = Rc::new(Cell::new(0));
        let calls_inner = calls.clone();
        let counting = leaf(move |attrs| {
            calls_inner.set(calls_inner.get() + 1);
            RenderNode::element("item", attrs.clone())
        });
        let inner_wrap = stateful(
            "inner",
            RenderPolicy::Impure,
            StateCell::new(Attributes::new()),
        );
        let wrap = squashing("outer");
        let root = wrap(inner_wrap(counting));

        let node = root.render(&Attributes::new().with("content", 1)).unwrap();
        assert_eq!(calls.get(), 1);
        // The inner wrapper's own layer survives; the squashing layer does not.
        assert_eq!(node.depth(), 2);
        assert_eq!(node.label(), "inner");
    }

    #[test]
    fn test_stateful_inner_state_is_discarded_each_render() {
        let (inner_wrap, cell) = with_state("inner", Attributes::new().with("count", 0));
        let wrap = squashing("outer");
        let root = wrap(inner_wrap(item()));

        // Advance the original cell; the fresh instance never sees it.
        cell.update(|s| s.set("count", 5));
        let node = root.render(&Attributes::new()).unwrap();
        assert_eq!(node.leaf().attr("count"), Some(&AttrValue::Int(0)));
    }

    #[test]
    fn test_failing_initializer_propagates() {
        let init: InitFn = Rc::new(|attrs| {
            if attrs.get("content").is_none() {
                return Err(ChainError::state_init("inner", "missing content"));
            }
            Ok(Attributes::new())
        });
        let body: BodyFn =
            Rc::new(|attrs, _| Ok(RenderNode::element("inner", attrs.clone())));
        let inner = Renderable::Stateful(Stateful::new(
            "inner",
            RenderPolicy::Impure,
            StateCell::new(Attributes::new()),
            init,
            body,
        ));

        let wrap = squashing("outer");
        let root = wrap(inner);

        let err = root.render(&Attributes::new()).unwrap_err();
        assert_eq!(err, ChainError::state_init("inner", "missing content"));
        assert!(root.render(&Attributes::new().with("content", 1)).is_ok());
    }

    #[test]
    fn test_squashing_pure_memoizes_whole_collapse() {
        let calls = Rc::new(Cell::new(0));
        let calls_inner = calls.clone();
        let counting = leaf(move |attrs| {
            calls_inner.set(calls_inner.get() + 1);
            RenderNode::element("item", attrs.clone())
        });
        let wrap = squashing_pure("s");
        let root = wrap(counting);
        let attrs = Attributes::new().with("content", 1);

        root.render(&attrs).unwrap();
        root.render(&attrs).unwrap();
        assert_eq!(calls.get(), 1);

        root.render(&Attributes::new().with("content", 2)).unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_produces_stateful_renderable() {
        let wrap = squashing("s");
        assert!(wrap(item()).is_stateful());
    }
}
