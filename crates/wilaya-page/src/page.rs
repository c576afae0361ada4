//! Page bootstrap
//!
//! Wires every behavior of the rankings page to `DOMContentLoaded`, in the
//! order the site expects: grid, search, stat counters, last-update stamp,
//! anchors, navbar.

use crate::timers::{Clock, ManualClock, MonotonicClock, Timers};
use crate::{cosmetics, last_update, render, search, stats, Catalog, DocumentView, PageConfig};
use chrono::NaiveDate;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tracing::info;
use wilaya_dom::{DomEvent, DomEventType};

/// Where the last-update stamp gets its date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Today {
    /// Local calendar date at startup
    #[default]
    Local,
    /// A fixed date
    Fixed(NaiveDate),
}

impl Today {
    pub fn resolve(self) -> NaiveDate {
        match self {
            Self::Local => chrono::Local::now().date_naive(),
            Self::Fixed(date) => date,
        }
    }
}

/// What [`Page::start`] managed to hook up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StartupReport {
    /// Cards in the grid after the first render
    pub cards: usize,
    /// Search field found and hooked
    pub search: bool,
    /// Stat counters started
    pub stats: usize,
    /// Last-update stamp written
    pub last_update: bool,
    /// In-page anchors hooked for smooth scrolling
    pub anchors: usize,
    /// Navbar found and hooked
    pub navbar: bool,
}

/// The rankings page script bound to a view type and a timer clock
pub struct Page<V, C = MonotonicClock> {
    catalog: Catalog,
    config: Rc<PageConfig>,
    timers: Rc<RefCell<Timers<V, C>>>,
    today: Today,
}

impl<V, C> Clone for Page<V, C> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog,
            config: Rc::clone(&self.config),
            timers: Rc::clone(&self.timers),
            today: self.today,
        }
    }
}

impl<V: DocumentView, C: Clock + 'static> Page<V, C> {
    pub fn new(config: PageConfig, clock: C) -> Self {
        Self {
            catalog: Catalog::algeria(),
            config: Rc::new(config),
            timers: Rc::new(RefCell::new(Timers::new(clock))),
            today: Today::Local,
        }
    }

    /// Use a different date source for the last-update stamp
    pub fn with_today(mut self, today: Today) -> Self {
        self.today = today;
        self
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Run [`Page::start`] when the view fires `DOMContentLoaded`
    pub fn install(&self, view: &mut V) {
        let page = self.clone();
        let document = view.document();
        view.add_event_listener(
            document,
            DomEventType::DOMContentLoaded,
            Box::new(move |view: &mut V, _: &mut DomEvent| {
                page.start(view);
            }),
        );
    }

    /// Run every startup behavior against `view` now
    pub fn start(&self, view: &mut V) -> StartupReport {
        let all: Vec<_> = self.catalog.iter().collect();
        let report = StartupReport {
            cards: render::render(view, &self.config, &all),
            search: search::setup_search(view, Rc::clone(&self.config), self.catalog),
            stats: stats::animate_stats(view, &mut *self.timers.borrow_mut(), &self.config),
            last_update: last_update::update_last_update(view, &self.config, self.today.resolve()),
            anchors: cosmetics::setup_smooth_scroll(view),
            navbar: cosmetics::setup_navbar_scroll(view, &self.config),
        };
        info!(
            cards = report.cards,
            search = report.search,
            stats = report.stats,
            anchors = report.anchors,
            navbar = report.navbar,
            "page started"
        );
        report
    }

    /// Fire due stat counter ticks
    pub fn run_due(&self, view: &mut V) -> usize {
        self.timers.borrow_mut().run_due(view)
    }

    /// Time until the next counter tick, if any counter is running
    pub fn time_until_next(&self) -> Option<Duration> {
        self.timers.borrow().time_until_next()
    }

    /// Check whether any counter is still running
    pub fn is_animating(&self) -> bool {
        self.timers.borrow().has_pending()
    }
}

impl<V: DocumentView> Page<V, ManualClock> {
    /// Advance virtual time and fire due ticks
    pub fn advance(&self, view: &mut V, by: Duration) -> usize {
        self.timers.borrow_mut().advance(view, by)
    }

    /// Run every counter to completion on virtual time (bounded by
    /// `max_runs` ticks)
    pub fn settle(&self, view: &mut V, max_runs: usize) -> usize {
        self.timers.borrow_mut().run_until_idle(view, max_runs)
    }
}
