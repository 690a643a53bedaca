use crate::attrs::Attributes;
use crate::node::RenderNode;

use super::{Renderable, Stateless};

/// Build a leaf renderable from a pure render function.
///
/// The function receives the attributes that survived the wrapper chain
/// (content value plus whatever the wrappers injected) and must be
/// deterministic with no side effects.
pub fn leaf<F>(render: F) -> Renderable
where
    F: Fn(&Attributes) -> RenderNode + 'static,
{
    Renderable::Stateless(Stateless::new(move |attrs| Ok(render(attrs))))
}

/// The standard display leaf: an `"item"` node echoing the attributes it
/// received.
///
/// # Example
/// ```ignore
/// let root = compose(vec![tagged("a")], item());
/// let node = root.render(&Attributes::new().with("content", 3))?;
/// assert_eq!(node.leaf().attr("content"), Some(&AttrValue::Int(3)));
/// ```
pub fn item() -> Renderable {
    leaf(|attrs| RenderNode::element("item", attrs.clone()))
}
