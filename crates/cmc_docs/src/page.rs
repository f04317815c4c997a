//! Documentation page runtime
//!
//! [`DocsPage`] owns the document and every behavior bound to it. Behaviors
//! are wired once by [`DocsPage::init`]; afterwards the host feeds events in
//! through [`DocsPage::dispatch`], scroll measurements through
//! [`DocsPage::on_scroll`], and calls [`DocsPage::tick`] to run expired timers.

use cmc_core::{
    event_types, Clock, Document, Event, EventData, EventDispatcher, KeyCode, Listener, NodeId,
    TimerScheduler,
};
use smallvec::SmallVec;

use crate::clipboard::{acknowledge, copy_text, Clipboard, CopyFeedback};
use crate::code_toggle;
use crate::config::DocsConfig;
use crate::copy;
use crate::hex;
use crate::scroll_spy::{IntersectionEntry, ScrollSpy, SectionRect};
use crate::search::SearchPanel;
use crate::sidebar::MobileSidebar;

/// Deferred work run by [`DocsPage::tick`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Task {
    /// Hide the search results panel
    CloseSearch,
    /// Put a copy control back the way it was before acknowledging
    RestoreControl {
        node: NodeId,
        label: String,
        /// Inline style properties to clear
        clear_styles: SmallVec<[String; 2]>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Handler {
    SearchInput,
    SearchBlur,
    SearchKeyDown,
    SearchShortcut,
    SearchResultSelect,
    CopyCode,
    SidebarToggle,
    SidebarClose,
    ToggleCode,
    CopyHex,
}

/// What [`DocsPage::init`] found on the page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InitReport {
    pub search: bool,
    pub copy_buttons: usize,
    pub scroll_spy: bool,
    pub sidebar: bool,
    pub code_toggles: usize,
    pub hex_controls: usize,
}

pub struct DocsPage {
    document: Document,
    clipboard: Box<dyn Clipboard>,
    timers: TimerScheduler<Task>,
    dispatcher: EventDispatcher<Handler>,
    config: DocsConfig,
    search: Option<SearchPanel>,
    scroll_spy: Option<ScrollSpy>,
    sidebar: Option<MobileSidebar>,
    location_hash: Option<String>,
    report: InitReport,
}

impl DocsPage {
    /// Bind every behavior to the page.
    ///
    /// Initializers run in a fixed order: search, copy buttons, scroll spy,
    /// mobile sidebar, code toggles, hex codes. One whose hooks are missing
    /// is skipped.
    pub fn init(
        document: Document,
        clipboard: Box<dyn Clipboard>,
        clock: Box<dyn Clock>,
        config: DocsConfig,
    ) -> Self {
        let mut page = Self {
            document,
            clipboard,
            timers: TimerScheduler::new(clock),
            dispatcher: EventDispatcher::new(),
            config,
            search: None,
            scroll_spy: None,
            sidebar: None,
            location_hash: None,
            report: InitReport::default(),
        };
        page.init_search();
        page.init_copy_buttons();
        page.init_scroll_spy();
        page.init_sidebar();
        page.init_code_toggle();
        page.init_hex_codes();
        tracing::debug!(
            report = ?page.report,
            handlers = page.dispatcher.len(),
            "docs page initialized"
        );
        page
    }

    fn init_search(&mut self) {
        let Some(panel) = SearchPanel::init(&self.document, &self.config.search) else {
            tracing::debug!("search input or results container missing, search disabled");
            return;
        };
        let input = panel.input();
        self.dispatcher
            .register(input, event_types::INPUT, Handler::SearchInput);
        self.dispatcher
            .register(input, event_types::BLUR, Handler::SearchBlur);
        self.dispatcher
            .register(input, event_types::KEY_DOWN, Handler::SearchKeyDown);
        self.dispatcher
            .register(panel.results(), event_types::CLICK, Handler::SearchResultSelect);
        self.dispatcher
            .register_document(event_types::KEY_DOWN, Handler::SearchShortcut);
        self.search = Some(panel);
        self.report.search = true;
    }

    fn init_copy_buttons(&mut self) {
        let buttons = copy::copy_buttons(&self.document, &self.config.copy);
        for &button in &buttons {
            self.dispatcher
                .register(button, event_types::CLICK, Handler::CopyCode);
        }
        if buttons.is_empty() {
            tracing::debug!("no copy buttons found");
        }
        self.report.copy_buttons = buttons.len();
    }

    fn init_scroll_spy(&mut self) {
        self.scroll_spy = ScrollSpy::init(&self.document, &self.config.scroll_spy);
        if self.scroll_spy.is_none() {
            tracing::debug!("no sections with ids, scroll spy disabled");
        }
        self.report.scroll_spy = self.scroll_spy.is_some();
    }

    fn init_sidebar(&mut self) {
        let Some(sidebar) = MobileSidebar::init(&self.document, &self.config.sidebar) else {
            tracing::debug!("mobile sidebar controls missing");
            return;
        };
        if let Some(toggle) = sidebar.toggle_control() {
            self.dispatcher
                .register(toggle, event_types::CLICK, Handler::SidebarToggle);
        }
        if let Some(close) = sidebar.close_control() {
            self.dispatcher
                .register(close, event_types::CLICK, Handler::SidebarClose);
        }
        self.sidebar = Some(sidebar);
        self.report.sidebar = true;
    }

    fn init_code_toggle(&mut self) {
        let controls = code_toggle::toggle_controls(&self.document, &self.config.code_toggle);
        for &control in &controls {
            self.dispatcher
                .register(control, event_types::CLICK, Handler::ToggleCode);
        }
        self.report.code_toggles = controls.len();
    }

    fn init_hex_codes(&mut self) {
        let controls = hex::annotate_document(&mut self.document, &self.config.hex);
        for &control in &controls {
            self.dispatcher
                .register(control, event_types::CLICK, Handler::CopyHex);
        }
        self.report.hex_controls = controls.len();
    }

    /// Deliver an event to every handler on its bubbling path.
    ///
    /// Returns the event so callers can inspect `default_prevented`.
    pub fn dispatch(&mut self, mut event: Event) -> Event {
        if !self.document.is_connected(event.target) {
            tracing::trace!(event_type = event.event_type, "event target not in document");
            return event;
        }
        let routes = self.dispatcher.route(&self.document, &event);
        for (listener, handler) in routes {
            self.handle(handler, listener, &mut event);
        }
        event
    }

    fn handle(&mut self, handler: Handler, listener: Listener, event: &mut Event) {
        let current = match listener {
            Listener::Node(node) => node,
            Listener::Document => event.target,
        };
        match handler {
            Handler::SearchInput => {
                let EventData::Input { value } = &event.data else {
                    return;
                };
                if let Some(search) = &self.search {
                    self.document
                        .set_attribute(search.input(), "value", value);
                    search.on_input(&mut self.document, value, &self.config.search);
                }
            }
            Handler::SearchBlur => {
                if self.document.focused() == Some(current) {
                    self.document.blur();
                }
                let id = self
                    .timers
                    .schedule(self.config.search.blur_grace_ms, Task::CloseSearch);
                tracing::trace!(?id, "search close scheduled");
            }
            Handler::SearchKeyDown => {
                if event.key().map(|(key, _)| key) == Some(KeyCode::ESCAPE) {
                    if let Some(search) = &self.search {
                        search.close(&mut self.document, &self.config.search);
                    }
                    if self.document.focused() == Some(current) {
                        self.document.blur();
                    }
                }
            }
            Handler::SearchShortcut => {
                let Some((key, modifiers)) = event.key() else {
                    return;
                };
                // Shift turns the key into `K`, which is not the shortcut
                if key == KeyCode::K && modifiers.command_like() && !modifiers.shift() {
                    event.prevent_default();
                    if let Some(search) = &self.search {
                        self.document.focus(search.input());
                    }
                }
            }
            Handler::SearchResultSelect => {
                let Some(search) = &self.search else {
                    return;
                };
                let href = search
                    .selected_href(&self.document, event.target, &self.config.search)
                    .map(str::to_string);
                if let Some(href) = href {
                    search.close(&mut self.document, &self.config.search);
                    self.location_hash = Some(href);
                }
            }
            Handler::CopyCode => self.copy_code(current),
            Handler::CopyHex => {
                event.prevent_default();
                self.copy_hex(current);
            }
            Handler::SidebarToggle => {
                if let Some(sidebar) = &self.sidebar {
                    sidebar.toggle(&mut self.document, &self.config.sidebar);
                }
            }
            Handler::SidebarClose => {
                if let Some(sidebar) = &self.sidebar {
                    sidebar.close(&mut self.document, &self.config.sidebar);
                }
            }
            Handler::ToggleCode => {
                if code_toggle::toggle(&mut self.document, current, &self.config.code_toggle)
                    .is_none()
                {
                    tracing::debug!("toggle control has no code block");
                }
            }
        }
    }

    fn copy_code(&mut self, button: NodeId) {
        let config = &self.config.copy;
        let Some(code) = copy::code_for_button(&self.document, button, config) else {
            tracing::debug!("copy button has no code to copy");
            return;
        };
        let outcome = copy_text(&mut self.document, self.clipboard.as_mut(), &code);
        let accent = [("color", config.accent_color.as_str())];
        let feedback = CopyFeedback {
            ack_label: &config.ack_label,
            accent: &accent,
            fallback_label: &config.idle_label,
            revert_ms: config.revert_ms,
        };
        acknowledge(&mut self.document, &mut self.timers, button, outcome, &feedback);
    }

    fn copy_hex(&mut self, control: NodeId) {
        let config = &self.config.hex;
        let Some(hex) = self
            .document
            .attribute(control, "data-hex")
            .map(str::to_string)
        else {
            return;
        };
        let outcome = copy_text(&mut self.document, self.clipboard.as_mut(), &hex);
        let accent = [
            ("background", config.accent_background.as_str()),
            ("color", config.accent_color.as_str()),
        ];
        let feedback = CopyFeedback {
            ack_label: &config.ack_label,
            accent: &accent,
            fallback_label: &hex,
            revert_ms: config.revert_ms,
        };
        acknowledge(&mut self.document, &mut self.timers, control, outcome, &feedback);
    }

    /// Run every timer whose deadline has passed. Returns how many ran.
    pub fn tick(&mut self) -> usize {
        let tasks = self.timers.take_due();
        let count = tasks.len();
        for task in tasks {
            tracing::trace!(?task, "timer fired");
            self.run_task(task);
        }
        count
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::CloseSearch => {
                if let Some(search) = &self.search {
                    search.close(&mut self.document, &self.config.search);
                }
            }
            Task::RestoreControl {
                node,
                label,
                clear_styles,
            } => {
                if !self.document.is_connected(node) {
                    return;
                }
                self.document.set_text_content(node, &label);
                for property in &clear_styles {
                    self.document.set_style(node, property, "");
                }
            }
        }
    }

    /// Re-measure sections after a scroll and highlight the matching link.
    ///
    /// Returns the intersection changes that were applied.
    pub fn on_scroll<F>(&mut self, viewport_height: f32, measure: F) -> Vec<IntersectionEntry>
    where
        F: Fn(&str) -> Option<SectionRect>,
    {
        let Some(spy) = &mut self.scroll_spy else {
            return Vec::new();
        };
        let entries = spy.on_scroll(viewport_height, measure);
        spy.observe(&mut self.document, &entries, &self.config.scroll_spy);
        entries
    }

    /// Apply intersection entries produced elsewhere
    pub fn observe(&mut self, entries: &[IntersectionEntry]) {
        if let Some(spy) = &mut self.scroll_spy {
            spy.observe(&mut self.document, entries, &self.config.scroll_spy);
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn config(&self) -> &DocsConfig {
        &self.config
    }

    pub fn report(&self) -> &InitReport {
        &self.report
    }

    pub fn search(&self) -> Option<&SearchPanel> {
        self.search.as_ref()
    }

    pub fn scroll_spy(&self) -> Option<&ScrollSpy> {
        self.scroll_spy.as_ref()
    }

    /// Fragment of the last search result followed, like `#colors`
    pub fn location_hash(&self) -> Option<&str> {
        self.location_hash.as_deref()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending_count()
    }

    /// Time on the page clock, in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.timers.now()
    }
}
