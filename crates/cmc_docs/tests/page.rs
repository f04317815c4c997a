//! End-to-end behavior of a wired documentation page

use cmc_core::{Document, Event, KeyCode, ManualClock, Modifiers, NodeId};
use cmc_docs::{DocsConfig, DocsPage, IntersectionEntry, MemoryClipboard, SectionRect};

struct Fixture {
    page: DocsPage,
    clock: ManualClock,
    clipboard: MemoryClipboard,
}

struct Hooks {
    search: NodeId,
    results: NodeId,
    copy_btn: NodeId,
    toggle_btn: NodeId,
    code_block: NodeId,
    sidebar: NodeId,
    sidebar_toggle: NodeId,
    sidebar_close: NodeId,
    links: Vec<NodeId>,
    swatch_text: NodeId,
}

const SNIPPET: &str = "<button class=\"btn-primary\">\n  Save\n</button>";

fn docs_page() -> (Document, Hooks) {
    let mut doc = Document::new();
    let body = doc.body();

    let header = doc.build("header").append_to(body);
    let search = doc.build("input").id("docs-search").append_to(header);
    let results = doc.build("div").id("search-results").append_to(header);
    let sidebar_toggle = doc.build("button").id("sidebar-toggle").append_to(header);

    let sidebar = doc.build("aside").class("docs-sidebar").append_to(body);
    let sidebar_close = doc.build("button").id("sidebar-close").append_to(sidebar);
    let mut links = Vec::new();
    for (id, title, category) in [
        ("colors", "Colors", Some("Foundations")),
        ("typography", "Typography", Some("Foundations")),
        ("buttons", "Buttons", Some("Components")),
        ("changelog", "Changelog", None),
    ] {
        links.push(
            doc.build("a")
                .class("sidebar-link")
                .attr("href", &format!("#{id}"))
                .text(title)
                .append_to(sidebar),
        );
        let mut section = doc.build("section").id(id).attr("data-search-title", title);
        if let Some(category) = category {
            section = section.attr("data-search-category", category);
        }
        section.append_to(body);
    }

    let colors = doc.get_element_by_id("colors").unwrap();
    let swatch = doc
        .build("p")
        .text("Use #0891B2 for primary and #FFF for white")
        .append_to(colors);
    let swatch_text = doc.children(swatch)[0];
    doc.build("script")
        .text("window.accent = '#22D3EE';")
        .append_to(body);

    let buttons = doc.get_element_by_id("buttons").unwrap();
    let example = doc.build("div").class("component-example").append_to(buttons);
    let toggle_btn = doc
        .build("button")
        .class("toggle-code")
        .text("Hide Code")
        .append_to(example);
    let code_block = doc.build("div").class("code-block").append_to(example);
    let copy_btn = doc
        .build("button")
        .class("copy-btn")
        .text("Copy")
        .append_to(code_block);
    let pre = doc.build("pre").append_to(code_block);
    doc.build("code").text(SNIPPET).append_to(pre);

    (
        doc,
        Hooks {
            search,
            results,
            copy_btn,
            toggle_btn,
            code_block,
            sidebar,
            sidebar_toggle,
            sidebar_close,
            links,
            swatch_text,
        },
    )
}

fn fixture_with(clipboard: MemoryClipboard) -> (Fixture, Hooks) {
    let (doc, hooks) = docs_page();
    let clock = ManualClock::new();
    let page = DocsPage::init(
        doc,
        Box::new(clipboard.clone()),
        Box::new(clock.clone()),
        DocsConfig::default(),
    );
    (
        Fixture {
            page,
            clock,
            clipboard,
        },
        hooks,
    )
}

fn fixture() -> (Fixture, Hooks) {
    fixture_with(MemoryClipboard::new())
}

fn result_hrefs(page: &DocsPage, results: NodeId) -> Vec<String> {
    page.document()
        .children(results)
        .iter()
        .filter_map(|&item| page.document().attribute(item, "href"))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_every_initializer_finds_its_hooks() {
    let (f, _) = fixture();
    let report = f.page.report();
    assert!(report.search);
    assert_eq!(report.copy_buttons, 1);
    assert!(report.scroll_spy);
    assert!(report.sidebar);
    assert_eq!(report.code_toggles, 1);
    assert_eq!(report.hex_controls, 1);
}

#[test]
fn test_short_query_keeps_panel_closed() {
    let (mut f, h) = fixture();
    for query in ["", "c", " c ", "\t\n"] {
        f.page.dispatch(Event::input(h.search, query));
        assert!(!f.page.document().has_class(h.results, "active"), "{query:?}");
    }
}

#[test]
fn test_query_renders_matches_in_page_order() {
    let (mut f, h) = fixture();
    f.page.dispatch(Event::input(h.search, "FOUND"));
    assert!(f.page.document().has_class(h.results, "active"));
    assert_eq!(result_hrefs(&f.page, h.results), ["#colors", "#typography"]);

    f.page.dispatch(Event::input(h.search, "general"));
    assert_eq!(result_hrefs(&f.page, h.results), ["#changelog"]);

    f.page.dispatch(Event::input(h.search, "x"));
    assert!(!f.page.document().has_class(h.results, "active"));
}

#[test]
fn test_no_results_message() {
    let (mut f, h) = fixture();
    f.page.dispatch(Event::input(h.search, "zebra"));
    let doc = f.page.document();
    assert!(doc.has_class(h.results, "active"));
    assert_eq!(doc.children(h.results).len(), 1);
    assert_eq!(doc.text_content(h.results), "No results found");
}

#[test]
fn test_clicking_a_result_closes_panel() {
    let (mut f, h) = fixture();
    f.page.dispatch(Event::input(h.search, "buttons"));
    let link = f.page.document().children(h.results)[0];
    let title = f.page.document().children(link)[0];

    f.page.dispatch(Event::click(title));
    assert!(!f.page.document().has_class(h.results, "active"));
    assert_eq!(f.page.location_hash(), Some("#buttons"));
}

#[test]
fn test_blur_closes_after_grace_delay() {
    let (mut f, h) = fixture();
    f.page.document_mut().focus(h.search);
    f.page.dispatch(Event::input(h.search, "colors"));
    f.page.dispatch(Event::blur(h.search));

    f.clock.advance(199);
    f.page.tick();
    assert!(f.page.document().has_class(h.results, "active"));

    f.clock.advance(1);
    assert_eq!(f.page.tick(), 1);
    assert!(!f.page.document().has_class(h.results, "active"));
}

#[test]
fn test_meta_k_focuses_search_from_anywhere() {
    let (mut f, h) = fixture();
    let meta = Modifiers::new(false, false, false, true);
    let event = f.page.dispatch(Event::key_down(h.copy_btn, KeyCode::K, meta));
    assert!(event.default_prevented);
    assert_eq!(f.page.document().focused(), Some(h.search));
}

#[test]
fn test_copy_button_copies_code_and_reverts_label() {
    let (mut f, h) = fixture();
    f.page.dispatch(Event::click(h.copy_btn));

    assert_eq!(f.clipboard.contents().as_deref(), Some(SNIPPET));
    let doc = f.page.document();
    assert_eq!(doc.text_content(h.copy_btn), "Copied!");
    assert_eq!(doc.style(h.copy_btn, "color"), Some("#22d3ee"));

    f.clock.advance(1999);
    f.page.tick();
    assert_eq!(f.page.document().text_content(h.copy_btn), "Copied!");

    f.clock.advance(1);
    f.page.tick();
    let doc = f.page.document();
    assert_eq!(doc.text_content(h.copy_btn), "Copy");
    assert_eq!(doc.style(h.copy_btn, "color"), None);
}

#[test]
fn test_copy_fallback_without_accent() {
    let (mut f, h) = fixture_with(MemoryClipboard::legacy_only());
    f.page.dispatch(Event::click(h.copy_btn));

    assert_eq!(f.clipboard.contents().as_deref(), Some(SNIPPET));
    assert_eq!(f.clipboard.legacy_copies(), 1);
    let doc = f.page.document();
    assert!(doc.query_tag("textarea").is_empty());
    assert_eq!(doc.text_content(h.copy_btn), "Copied!");
    assert_eq!(doc.style(h.copy_btn, "color"), None);

    f.clock.advance(2000);
    f.page.tick();
    assert_eq!(f.page.document().text_content(h.copy_btn), "Copy");
}

#[test]
fn test_failed_fallback_still_acknowledges() {
    let clipboard = MemoryClipboard::legacy_only();
    clipboard.set_legacy_available(false);
    let (mut f, h) = fixture_with(clipboard);
    f.page.dispatch(Event::click(h.copy_btn));

    assert_eq!(f.clipboard.contents(), None);
    assert_eq!(f.page.document().text_content(h.copy_btn), "Copied!");
    assert_eq!(f.page.pending_timers(), 1);
}

#[test]
fn test_hex_annotation_wraps_only_six_digit_codes() {
    let (f, h) = fixture();
    let doc = f.page.document();
    assert!(!doc.contains(h.swatch_text));

    let controls = doc.query_class("hex-code-btn");
    assert_eq!(controls.len(), 1);
    assert_eq!(doc.attribute(controls[0], "data-hex"), Some("#0891B2"));
    assert_eq!(
        doc.attribute(controls[0], "title"),
        Some("Click to copy #0891B2")
    );

    let colors = doc.get_element_by_id("colors").unwrap();
    assert!(doc
        .text_content(colors)
        .contains("Use #0891B2 for primary and #FFF for white"));
    let script = doc.query_tag("script")[0];
    assert_eq!(doc.text_content(script), "window.accent = '#22D3EE';");
}

#[test]
fn test_hex_copy_reverts_after_delay() {
    let (mut f, _) = fixture();
    let control = f.page.document().query_class("hex-code-btn")[0];
    let event = f.page.dispatch(Event::click(control));
    assert!(event.default_prevented);
    assert_eq!(f.clipboard.contents().as_deref(), Some("#0891B2"));

    let doc = f.page.document();
    assert_eq!(doc.text_content(control), "Copied!");
    assert_eq!(doc.style(control, "background"), Some("#22d3ee"));
    assert_eq!(doc.style(control, "color"), Some("#000"));

    f.clock.advance(1499);
    f.page.tick();
    assert_eq!(f.page.document().text_content(control), "Copied!");

    f.clock.advance(1);
    f.page.tick();
    let doc = f.page.document();
    assert_eq!(doc.text_content(control), "#0891B2");
    assert_eq!(doc.style(control, "background"), None);
    assert_eq!(doc.style(control, "color"), None);
}

#[test]
fn test_hex_fallback_restores_hex_value() {
    let (mut f, _) = fixture_with(MemoryClipboard::legacy_only());
    let control = f.page.document().query_class("hex-code-btn")[0];
    f.page.dispatch(Event::click(control));
    assert_eq!(f.page.document().text_content(control), "Copied!");

    f.clock.advance(1500);
    f.page.tick();
    assert_eq!(f.page.document().text_content(control), "#0891B2");
}

#[test]
fn test_code_toggle_twice_restores_state() {
    let (mut f, h) = fixture();
    f.page.dispatch(Event::click(h.toggle_btn));
    assert_eq!(f.page.document().style(h.code_block, "display"), Some("none"));
    assert_eq!(f.page.document().text_content(h.toggle_btn), "Show Code");

    f.page.dispatch(Event::click(h.toggle_btn));
    assert_ne!(f.page.document().style(h.code_block, "display"), Some("none"));
    assert_eq!(f.page.document().text_content(h.toggle_btn), "Hide Code");
}

#[test]
fn test_mobile_sidebar() {
    let (mut f, h) = fixture();
    f.page.dispatch(Event::click(h.sidebar_toggle));
    assert!(f.page.document().has_class(h.sidebar, "open"));
    f.page.dispatch(Event::click(h.sidebar_toggle));
    assert!(!f.page.document().has_class(h.sidebar, "open"));

    f.page.dispatch(Event::click(h.sidebar_toggle));
    f.page.dispatch(Event::click(h.sidebar_close));
    assert!(!f.page.document().has_class(h.sidebar, "open"));
}

#[test]
fn test_scroll_spy_follows_sections() {
    let (mut f, h) = fixture();
    let order = ["colors", "typography", "buttons", "changelog"];
    let layout = |offset: f32| {
        move |id: &str| {
            let index = order.iter().position(|s| *s == id)? as f32;
            let top = index * 500.0 - offset;
            Some(SectionRect::new(top, top + 500.0))
        }
    };

    let entries = f.page.on_scroll(900.0, layout(0.0));
    assert_eq!(entries.len(), 4);
    assert!(f.page.document().has_class(h.links[0], "active"));

    f.page.on_scroll(900.0, layout(1000.0));
    let active: Vec<bool> = h
        .links
        .iter()
        .map(|&link| f.page.document().has_class(link, "active"))
        .collect();
    assert_eq!(active, [false, false, true, false]);
}

#[test]
fn test_observe_last_entry_wins() {
    let (mut f, h) = fixture();
    f.page.observe(&[
        IntersectionEntry::new("typography", true),
        IntersectionEntry::new("changelog", true),
    ]);
    assert!(!f.page.document().has_class(h.links[1], "active"));
    assert!(f.page.document().has_class(h.links[3], "active"));
}

#[test]
fn test_retriggered_copy_keeps_both_reverts() {
    let (mut f, h) = fixture();
    f.page.dispatch(Event::click(h.copy_btn));
    f.clock.advance(500);
    f.page.dispatch(Event::click(h.copy_btn));
    assert_eq!(f.page.pending_timers(), 2);

    f.clock.advance(1500);
    f.page.tick();
    // First revert restores the label captured before the first copy
    assert_eq!(f.page.document().text_content(h.copy_btn), "Copy");
    f.clock.advance(500);
    f.page.tick();
    // Second one captured the acknowledgment label
    assert_eq!(f.page.document().text_content(h.copy_btn), "Copied!");
}
