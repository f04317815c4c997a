//! Show/hide toggles for component example code

use cmc_core::{Document, NodeId};

use crate::config::CodeToggleConfig;

pub fn toggle_controls(doc: &Document, config: &CodeToggleConfig) -> Vec<NodeId> {
    doc.query_class(&config.button_class)
}

/// Code block governed by a toggle control
pub fn code_block_for(doc: &Document, control: NodeId, config: &CodeToggleConfig) -> Option<NodeId> {
    let example = doc.closest_class(control, &config.example_class)?;
    doc.find_descendant(example, |doc, id| doc.has_class(id, &config.block_class))
}

pub fn is_visible(doc: &Document, block: NodeId) -> bool {
    doc.style(block, "display") != Some("none")
}

/// Flip the code block's visibility. Returns whether it is now visible.
pub fn toggle(doc: &mut Document, control: NodeId, config: &CodeToggleConfig) -> Option<bool> {
    let block = code_block_for(doc, control, config)?;
    let show = !is_visible(doc, block);
    doc.set_style(block, "display", if show { "block" } else { "none" });
    let label = if show {
        &config.hide_label
    } else {
        &config.show_label
    };
    doc.set_text_content(control, label);
    Some(show)
}
