//! Copy buttons on code blocks

use cmc_core::{Document, NodeId};

use crate::config::CopyConfig;

/// Every copy button on the page
pub fn copy_buttons(doc: &Document, config: &CopyConfig) -> Vec<NodeId> {
    doc.query_class(&config.button_class)
}

/// Source text of the code block a copy button belongs to
pub fn code_for_button(doc: &Document, button: NodeId, config: &CopyConfig) -> Option<String> {
    let block = doc.closest_class(button, &config.block_class)?;
    let code = doc.find_descendant(block, |doc, id| doc.tag(id) == Some(config.code_tag.as_str()))?;
    Some(doc.text_content(code))
}
