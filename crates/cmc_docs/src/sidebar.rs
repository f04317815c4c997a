//! Mobile sidebar open/close controls

use cmc_core::{Document, NodeId};

use crate::config::SidebarConfig;

pub struct MobileSidebar {
    sidebar: NodeId,
    toggle: Option<NodeId>,
    close: Option<NodeId>,
}

impl MobileSidebar {
    /// Bind to the page. Needs the sidebar plus at least one of its controls.
    pub fn init(doc: &Document, config: &SidebarConfig) -> Option<Self> {
        let sidebar = doc.query_class(&config.sidebar_class).into_iter().next()?;
        let toggle = doc.get_element_by_id(&config.toggle_id);
        let close = doc.get_element_by_id(&config.close_id);
        if toggle.is_none() && close.is_none() {
            return None;
        }
        Some(Self {
            sidebar,
            toggle,
            close,
        })
    }

    pub fn sidebar(&self) -> NodeId {
        self.sidebar
    }

    pub fn toggle_control(&self) -> Option<NodeId> {
        self.toggle
    }

    pub fn close_control(&self) -> Option<NodeId> {
        self.close
    }

    /// Returns whether the sidebar is now open
    pub fn toggle(&self, doc: &mut Document, config: &SidebarConfig) -> bool {
        doc.toggle_class(self.sidebar, &config.open_class)
    }

    pub fn close(&self, doc: &mut Document, config: &SidebarConfig) {
        doc.remove_class(self.sidebar, &config.open_class);
    }

    pub fn is_open(&self, doc: &Document, config: &SidebarConfig) -> bool {
        doc.has_class(self.sidebar, &config.open_class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_sidebar_and_a_control() {
        let config = SidebarConfig::default();
        let mut doc = Document::new();
        let body = doc.body();
        doc.build("aside").class("docs-sidebar").append_to(body);
        assert!(MobileSidebar::init(&doc, &config).is_none());

        doc.build("button").id("sidebar-close").append_to(body);
        let sidebar = MobileSidebar::init(&doc, &config).unwrap();
        assert!(sidebar.toggle_control().is_none());
        assert!(sidebar.close_control().is_some());
    }

    #[test]
    fn test_toggle_and_close() {
        let config = SidebarConfig::default();
        let mut doc = Document::new();
        let body = doc.body();
        doc.build("aside").class("docs-sidebar").append_to(body);
        doc.build("button").id("sidebar-toggle").append_to(body);
        let sidebar = MobileSidebar::init(&doc, &config).unwrap();

        assert!(sidebar.toggle(&mut doc, &config));
        assert!(sidebar.is_open(&doc, &config));
        sidebar.close(&mut doc, &config);
        assert!(!sidebar.is_open(&doc, &config));
        sidebar.close(&mut doc, &config);
        assert!(!sidebar.is_open(&doc, &config));
    }
}
