use crate::renderable::Renderable;
use crate::wrappers::Wrapper;

/// Compose a wrapper chain around a leaf.
///
/// Factories are applied by folding from the last to the first, so the first
/// factory in the sequence becomes the outermost wrapper. The composition
/// happens once at configuration time; the returned renderable is reused for
/// every subsequent render pass.
pub fn compose(factories: Vec<Wrapper>, leaf: Renderable) -> Renderable {
    log::debug!("composing chain of {} wrappers", factories.len());
    factories
        .into_iter()
        .rev()
        .fold(leaf, |inner, wrap| wrap(inner))
}
