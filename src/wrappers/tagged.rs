use crate::attrs::{Attributes, EXTRA_TAG};
use crate::node::RenderNode;
use crate::renderable::{Renderable, Stateless};

use super::Wrapper;

/// Stateless tag-injecting wrapper.
///
/// The produced renderable injects `tag` under [`EXTRA_TAG`] into its
/// child's input and wraps the child node in one new layer, so a chain of N
/// of these renders a tree of depth N + 1. An `extra_tag` already present in
/// the incoming attributes wins: the outermost wrapper's tag is the one the
/// leaf sees.
///
/// # Example
/// ```ignore
/// let root = compose(vec![tagged("a"), tagged("b")], item());
/// let node = root.render(&Attributes::new())?;
/// assert_eq!(node.leaf().attr(EXTRA_TAG), Some(&AttrValue::Text("a".into())));
/// ```
pub fn tagged(tag: impl Into<String>) -> Wrapper {
    let tag = tag.into();
    Box::new(move |inner: Renderable| {
        Renderable::Stateless(Stateless::new(move |attrs: &Attributes| {
            let child_attrs = child_attributes(&tag, attrs);
            let child = inner.render(&child_attrs)?;
            Ok(RenderNode::element(tag.clone(), child_attrs).with_child(child))
        }))
    })
}

/// Child attributes for a tag-injecting layer: the wrapper's own tag first,
/// incoming entries merged over it so outer layers take precedence.
pub(crate) fn child_attributes(tag: &str, incoming: &Attributes) -> Attributes {
    child_attributes_over(Attributes::new().with(EXTRA_TAG, tag), incoming)
}

/// Merge the incoming attributes over a wrapper's own entries.
pub(crate) fn child_attributes_over(mut own: Attributes, incoming: &Attributes) -> Attributes {
    own.merge_from(incoming);
    own
}
