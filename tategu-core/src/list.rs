//! List screen models: multi-select and paging.
//!
//! Filtering and ordering are the caller's business; these models operate
//! on whatever ordered sequence the screen hands them.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use log::debug;

/// Multi-select over the visible rows, keyed by device id.
///
/// Entered by long-pressing a row. While active the rows show checkboxes
/// and the header swaps to the selected count.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    active: bool,
    selected: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, device_id: &str) -> bool {
        self.selected.contains(device_id)
    }

    /// Enter selection mode with the pressed row as the first selection.
    pub fn begin(&mut self, device_id: &str) {
        self.active = true;
        self.selected.clear();
        self.selected.insert(device_id.to_string());
    }

    /// Toggle one row in or out of the selection.
    pub fn toggle(&mut self, device_id: &str) {
        if !self.selected.remove(device_id) {
            self.selected.insert(device_id.to_string());
        }
    }

    /// Select every visible row, or clear when the selected count already
    /// matches the visible count. Selections outside the visible rows are
    /// replaced, not merged.
    pub fn toggle_all_visible<'a>(&mut self, visible_ids: impl Iterator<Item = &'a str>) {
        let visible: Vec<&str> = visible_ids.collect();
        if self.selected.len() == visible.len() {
            self.selected.clear();
        } else {
            self.selected = visible.iter().map(|id| (*id).to_string()).collect();
        }
    }

    /// Leave selection mode, dropping the selection.
    pub fn exit(&mut self) {
        self.active = false;
        self.selected.clear();
    }

    /// Selected ids, sorted for deterministic ordering.
    pub fn selected(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }
}

/// Growing page window over the fitting list.
///
/// Reaching the end of the list requests another page; the page lands
/// after a short delay standing in for fetch latency, during which
/// repeated requests are ignored.
#[derive(Debug, Clone)]
pub struct Pager {
    page_size: usize,
    visible: usize,
    total: usize,
    loading_until: Option<Instant>,
}

impl Pager {
    pub const PAGE_SIZE: usize = 10;
    pub const LOAD_DELAY: Duration = Duration::from_millis(600);

    pub fn new(total: usize) -> Self {
        Self {
            page_size: Self::PAGE_SIZE,
            visible: total.min(Self::PAGE_SIZE),
            total,
            loading_until: None,
        }
    }

    /// Number of rows currently shown.
    pub fn visible_len(&self) -> usize {
        self.visible
    }

    pub fn has_more(&self) -> bool {
        self.visible < self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading_until.is_some()
    }

    /// Ask for the next page. No-op while a load is in flight or when
    /// everything is already visible; returns whether a load started.
    pub fn request_more(&mut self, now: Instant) -> bool {
        if self.loading_until.is_some() || !self.has_more() {
            return false;
        }
        debug!("pager: loading next page ({} of {} visible)", self.visible, self.total);
        self.loading_until = Some(now + Self::LOAD_DELAY);
        true
    }

    /// Land the pending page once its delay has passed.
    ///
    /// Returns whether new rows became visible on this call.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.loading_until {
            Some(deadline) if now >= deadline => {
                self.loading_until = None;
                self.visible = (self.visible + self.page_size).min(self.total);
                debug!("pager: page landed, {} visible", self.visible);
                true
            }
            _ => false,
        }
    }

    /// Back to the first page, dropping any in-flight load.
    pub fn reset(&mut self, total: usize) {
        self.total = total;
        self.visible = total.min(self.page_size);
        self.loading_until = None;
    }
}
