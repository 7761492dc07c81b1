//! Note visibility toggle handler.

use crate::browser::dom::{Display, Document, NodeId};

/// Class marking a note's toggle control.
pub const TOGGLE_CLASS: &str = "toggle-note";

/// Flips the visibility of note content blocks.
///
/// Controls are enumerated once at attach time; elements gaining the class
/// later are not picked up, matching attach-once page wiring. Each control
/// pairs with its immediately following sibling, the note's content block.
pub struct NoteToggleHandler {
    controls: Vec<NodeId>,
}

impl NoteToggleHandler {
    /// Collects every element carrying the `toggle-note` class.
    ///
    /// Attaching to a page with zero controls succeeds and wires nothing.
    pub fn attach(doc: &Document) -> Self {
        let controls = doc.get_elements_by_class_name(TOGGLE_CLASS);
        tracing::debug!(count = controls.len(), "toggle controls wired");
        Self { controls }
    }

    /// The wired controls, in document order.
    pub fn controls(&self) -> &[NodeId] {
        &self.controls
    }

    /// Handles a click on `control`.
    ///
    /// Flips the inline display of the control's next sibling: `none`
    /// becomes `block`, anything else (including unset) becomes `none`.
    /// Clicks on nodes that were not wired at attach time are ignored, and a
    /// wired control without a sibling is a warned no-op.
    pub fn click(&self, doc: &mut Document, control: NodeId) {
        if !self.controls.contains(&control) {
            tracing::debug!("click on an unwired element ignored");
            return;
        }

        let Some(content) = doc.next_element_sibling(control) else {
            tracing::warn!("toggle control has no content sibling");
            return;
        };

        let element = doc.element_mut(content);
        element.display = match element.display {
            Display::None => Display::Block,
            _ => Display::None,
        };
    }
}
