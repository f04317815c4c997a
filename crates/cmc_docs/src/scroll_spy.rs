//! Sidebar scroll spy
//!
//! Sections are tested against the viewport shrunk by a [`RootMargin`]. Each
//! section that moves into the shrunk viewport makes its sidebar link the
//! active one.

use cmc_core::{Document, NodeId};
use rustc_hash::FxHashMap;

use crate::config::ScrollSpyConfig;

/// Vertical extent of a section relative to the top of the viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f32,
    pub bottom: f32,
}

impl SectionRect {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }
}

/// Insets applied to the viewport before intersection tests
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    pub top_px: f32,
    /// Fraction of the viewport height cut from the bottom
    pub bottom_fraction: f32,
}

impl RootMargin {
    pub fn from_config(config: &ScrollSpyConfig) -> Self {
        Self {
            top_px: config.top_inset_px,
            bottom_fraction: config.bottom_inset_fraction,
        }
    }

    pub fn is_intersecting(&self, rect: SectionRect, viewport_height: f32) -> bool {
        let top = self.top_px;
        let bottom = viewport_height * (1.0 - self.bottom_fraction);
        if bottom <= top {
            return false;
        }
        // Edge contact counts, as with a browser intersection observer
        rect.top <= bottom && rect.bottom >= top
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::from_config(&ScrollSpyConfig::default())
    }
}

/// A change in a section's intersection state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntersectionEntry {
    /// Id of the observed section
    pub target: String,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(target: &str, is_intersecting: bool) -> Self {
        Self {
            target: target.to_string(),
            is_intersecting,
        }
    }
}

pub struct ScrollSpy {
    sections: Vec<(NodeId, String)>,
    links: Vec<NodeId>,
    margin: RootMargin,
    last_state: FxHashMap<NodeId, bool>,
    active: Option<NodeId>,
}

impl ScrollSpy {
    /// Observe every section with an id. `None` if there are none.
    pub fn init(doc: &Document, config: &ScrollSpyConfig) -> Option<Self> {
        let sections: Vec<(NodeId, String)> = doc
            .query_tag(&config.section_tag)
            .into_iter()
            .filter_map(|node| {
                let id = doc.id(node).filter(|id| !id.is_empty())?;
                Some((node, id.to_string()))
            })
            .collect();
        if sections.is_empty() {
            return None;
        }
        let links = doc.query_class(&config.link_class);
        tracing::debug!(
            sections = sections.len(),
            links = links.len(),
            "scroll spy observing"
        );
        Some(Self {
            sections,
            links,
            margin: RootMargin::from_config(config),
            last_state: FxHashMap::default(),
            active: None,
        })
    }

    pub fn sections(&self) -> impl Iterator<Item = &str> + '_ {
        self.sections.iter().map(|(_, id)| id.as_str())
    }

    pub fn margin(&self) -> RootMargin {
        self.margin
    }

    /// Re-measure every section and report the ones whose state changed.
    ///
    /// The first measurement of a section is always reported. Sections that
    /// `measure` cannot place keep their previous state.
    pub fn on_scroll<F>(&mut self, viewport_height: f32, measure: F) -> Vec<IntersectionEntry>
    where
        F: Fn(&str) -> Option<SectionRect>,
    {
        let mut entries = Vec::new();
        for (node, id) in &self.sections {
            let Some(rect) = measure(id) else {
                continue;
            };
            let intersecting = self.margin.is_intersecting(rect, viewport_height);
            if self.last_state.insert(*node, intersecting) != Some(intersecting) {
                entries.push(IntersectionEntry::new(id, intersecting));
            }
        }
        entries
    }

    /// Apply intersection entries in order. The last intersecting one wins.
    pub fn observe(&mut self, doc: &mut Document, entries: &[IntersectionEntry], config: &ScrollSpyConfig) {
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            for &link in &self.links {
                doc.remove_class(link, &config.active_class);
            }
            let href = format!("#{}", entry.target);
            let link = self
                .links
                .iter()
                .copied()
                .find(|&link| doc.attribute(link, "href") == Some(href.as_str()));
            if let Some(link) = link {
                doc.add_class(link, &config.active_class);
            }
            self.active = link;
        }
    }

    pub fn active_link(&self) -> Option<NodeId> {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> (Document, Vec<NodeId>) {
        let mut doc = Document::new();
        let body = doc.body();
        let nav = doc.build("nav").append_to(body);
        let links = ["colors", "typography", "spacing"]
            .iter()
            .map(|id| {
                doc.build("a")
                    .class("sidebar-link")
                    .attr("href", &format!("#{id}"))
                    .append_to(nav)
            })
            .collect();
        for id in ["colors", "typography", "spacing"] {
            doc.build("section").id(id).append_to(body);
        }
        doc.build("section").append_to(body);
        (doc, links)
    }

    #[test]
    fn test_root_margin_insets() {
        let margin = RootMargin::default();
        // Viewport 800 tall: active band is 80..400
        assert!(margin.is_intersecting(SectionRect::new(100.0, 300.0), 800.0));
        assert!(margin.is_intersecting(SectionRect::new(-500.0, 81.0), 800.0));
        // Touching either edge of the band counts
        assert!(margin.is_intersecting(SectionRect::new(-500.0, 80.0), 800.0));
        assert!(margin.is_intersecting(SectionRect::new(400.0, 900.0), 800.0));
        assert!(!margin.is_intersecting(SectionRect::new(-500.0, 79.0), 800.0));
        assert!(!margin.is_intersecting(SectionRect::new(401.0, 900.0), 800.0));
        // Band collapses on tiny viewports
        assert!(!margin.is_intersecting(SectionRect::new(0.0, 1000.0), 150.0));
    }

    #[test]
    fn test_only_sections_with_ids_are_observed() {
        let (doc, _) = page();
        let spy = ScrollSpy::init(&doc, &ScrollSpyConfig::default()).unwrap();
        assert_eq!(spy.sections().collect::<Vec<_>>(), ["colors", "typography", "spacing"]);
        assert!(ScrollSpy::init(&Document::new(), &ScrollSpyConfig::default()).is_none());
    }

    #[test]
    fn test_on_scroll_reports_changes_only() {
        let (doc, _) = page();
        let mut spy = ScrollSpy::init(&doc, &ScrollSpyConfig::default()).unwrap();
        let at = |offset: f32| {
            move |id: &str| {
                let index = match id {
                    "colors" => 0.0,
                    "typography" => 1.0,
                    _ => 2.0,
                };
                let top = index * 600.0 - offset;
                Some(SectionRect::new(top, top + 600.0))
            }
        };

        let first = spy.on_scroll(800.0, at(0.0));
        assert_eq!(
            first,
            vec![
                IntersectionEntry::new("colors", true),
                IntersectionEntry::new("typography", false),
                IntersectionEntry::new("spacing", false),
            ]
        );
        assert!(spy.on_scroll(800.0, at(10.0)).is_empty());
        assert_eq!(
            spy.on_scroll(800.0, at(600.0)),
            vec![
                IntersectionEntry::new("colors", false),
                IntersectionEntry::new("typography", true),
            ]
        );
    }

    #[test]
    fn test_observe_highlights_last_intersecting() {
        let (mut doc, links) = page();
        let config = ScrollSpyConfig::default();
        let mut spy = ScrollSpy::init(&doc, &config).unwrap();

        spy.observe(
            &mut doc,
            &[
                IntersectionEntry::new("colors", true),
                IntersectionEntry::new("spacing", true),
                IntersectionEntry::new("typography", false),
            ],
            &config,
        );
        assert_eq!(spy.active_link(), Some(links[2]));
        assert!(!doc.has_class(links[0], "active"));
        assert!(doc.has_class(links[2], "active"));

        spy.observe(&mut doc, &[IntersectionEntry::new("typography", false)], &config);
        assert!(doc.has_class(links[2], "active"));
    }

    #[test]
    fn test_section_without_link_clears_highlight() {
        let (mut doc, links) = page();
        let body = doc.body();
        doc.build("section").id("orphan").append_to(body);
        let config = ScrollSpyConfig::default();
        let mut spy = ScrollSpy::init(&doc, &config).unwrap();

        spy.observe(&mut doc, &[IntersectionEntry::new("colors", true)], &config);
        spy.observe(&mut doc, &[IntersectionEntry::new("orphan", true)], &config);
        assert_eq!(spy.active_link(), None);
        assert!(links.iter().all(|&link| !doc.has_class(link, "active")));
    }
}
