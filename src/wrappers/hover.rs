//! Delegating hover wrapper.
//!
//! The closest thing the pipeline has to inheritance: the wrapper owns the
//! inner renderable and extends its render output by explicit delegation,
//! adding one container layer whose `background` attribute tracks a
//! two-phase pointer state machine driven by external trigger events.

use std::rc::Rc;

use crate::attrs::{AttrValue, Attributes};
use crate::node::RenderNode;
use crate::reactive::StateCell;
use crate::renderable::{BodyFn, InitFn, RenderPolicy, Renderable, Stateful};

use super::Wrapper;

/// Attribute key carrying the resolved background of the hover container.
pub const BACKGROUND: &str = "background";

const HOVERED_KEY: &str = "hovered";

/// The two backgrounds a hover container toggles between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverPalette {
    pub normal: String,
    pub hovered: String,
}

/// Pointer phase of a hover container.
///
/// `pointer_enter` moves `Normal` to `Hovered`; `pointer_leave` moves back.
/// There is no other phase and no terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    Normal,
    Hovered,
}

/// External trigger handle for a hover wrapper.
///
/// The harness delivers pointer events here; the wrapper itself only reads
/// the resulting state.
#[derive(Clone)]
pub struct HoverState {
    palette: HoverPalette,
    cell: StateCell<Attributes>,
}

impl HoverState {
    pub fn new(palette: HoverPalette) -> Self {
        let cell = StateCell::new(attrs_for(&palette, HoverPhase::Normal));
        Self { palette, cell }
    }

    pub fn pointer_enter(&self) {
        self.cell.set(attrs_for(&self.palette, HoverPhase::Hovered));
    }

    pub fn pointer_leave(&self) {
        self.cell.set(attrs_for(&self.palette, HoverPhase::Normal));
    }

    pub fn phase(&self) -> HoverPhase {
        match self.cell.with(|s| s.get(HOVERED_KEY).cloned()) {
            Some(AttrValue::Flag(true)) => HoverPhase::Hovered,
            _ => HoverPhase::Normal,
        }
    }

    fn cell(&self) -> StateCell<Attributes> {
        self.cell.clone()
    }
}

fn attrs_for(palette: &HoverPalette, phase: HoverPhase) -> Attributes {
    let (background, hovered) = match phase {
        HoverPhase::Normal => (palette.normal.as_str(), false),
        HoverPhase::Hovered => (palette.hovered.as_str(), true),
    };
    Attributes::new()
        .with(BACKGROUND, background)
        .with(HOVERED_KEY, hovered)
}

/// Wrap an inner renderable in a hover container.
///
/// Whether the inner entity is stateless or stateful, it is rendered by
/// explicit delegation with the incoming attributes untouched, and its node
/// is wrapped in one `"hover"` node carrying the current phase's attributes.
///
/// # Example
/// ```ignore
/// let hover = HoverState::new(HoverPalette {
///     normal: "white".to_string(),
///     hovered: "blue".to_string(),
/// });
/// let root = compose(vec![hovered(&hover)], item());
/// hover.pointer_enter(); // next pass renders the hovered background
/// ```
pub fn hovered(state: &HoverState) -> Wrapper {
    let cell = state.cell();
    let initial = attrs_for(&state.palette, HoverPhase::Normal);
    Box::new(move |inner: Renderable| {
        let body: BodyFn = Rc::new(move |attrs: &Attributes, state: &Attributes| {
            let child = inner.render(attrs)?;
            Ok(RenderNode::element("hover", state.clone()).with_child(child))
        });
        let init: InitFn = Rc::new(move |_| Ok(initial.clone()));
        Renderable::Stateful(Stateful::new("hover", RenderPolicy::Pure, cell, init, body))
    })
}
