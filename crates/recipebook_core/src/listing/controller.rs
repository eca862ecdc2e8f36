//! Reducer-style listing controller.
//!
//! # Responsibility
//! - Apply input events to `ListingState`.
//! - Emit fetch/alert commands for a driver to execute.
//!
//! # Invariants
//! - Every fetch carries a fresh sequence number; completions for any other
//!   sequence number are discarded without touching state.
//! - Out-of-range page requests change nothing and emit nothing.
//! - Search text is applied only when the debouncer releases it.

use crate::config::RecipeBookConfig;
use crate::listing::debounce::Debouncer;
use crate::listing::event::{FetchRequest, FetchSeq, ListingCommand, ListingEvent};
use crate::listing::pagination::{is_valid_page, paginate};
use crate::listing::state::ListingState;
use crate::model::alert::Alert;
use crate::model::category::Category;
use crate::model::recipe::Recipe;
use crate::remote::source::RetrievalError;
use log::{debug, warn};
use std::time::{Duration, Instant};

/// Owns listing state and turns events into commands.
#[derive(Debug, Clone)]
pub struct ListingController {
    state: ListingState,
    page_size: usize,
    search_debounce: Debouncer<String>,
    last_seq: FetchSeq,
    in_flight: Option<FetchRequest>,
}

impl ListingController {
    /// Creates a controller in the initial loading state.
    pub fn new(page_size: usize, debounce: Duration) -> Self {
        Self {
            state: ListingState::default(),
            page_size: page_size.max(1),
            search_debounce: Debouncer::new(debounce),
            last_seq: 0,
            in_flight: None,
        }
    }

    pub fn from_config(config: &RecipeBookConfig) -> Self {
        Self::new(config.page_size, config.debounce)
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Currently outstanding fetch, if any.
    pub fn in_flight(&self) -> Option<&FetchRequest> {
        self.in_flight.as_ref()
    }

    /// When the pending search text will be released, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.search_debounce.deadline()
    }

    /// Applies one event and returns the commands it produces.
    pub fn handle(&mut self, event: ListingEvent) -> Vec<ListingCommand> {
        match event {
            ListingEvent::Mounted => vec![self.issue_fetch(1)],
            ListingEvent::CategorySelected(category) => self.select_category(category),
            ListingEvent::SearchTextChanged { text, at } => {
                self.search_debounce.push(text, at);
                Vec::new()
            }
            ListingEvent::Tick { at } => match self.search_debounce.poll(at) {
                Some(text) => {
                    self.state.search_query = text;
                    vec![self.issue_fetch(1)]
                }
                None => Vec::new(),
            },
            ListingEvent::Refresh => {
                self.search_debounce.cancel();
                self.state.search_query.clear();
                vec![self.issue_fetch(1)]
            }
            ListingEvent::PageRequested(page) => self.request_page(page),
            ListingEvent::RetrievalCompleted { seq, result } => self.complete(seq, result),
        }
    }

    fn select_category(&mut self, category: Category) -> Vec<ListingCommand> {
        self.state.selected_category = category;
        vec![self.issue_fetch(1)]
    }

    fn request_page(&mut self, page: u32) -> Vec<ListingCommand> {
        if !is_valid_page(page, self.state.total_pages) {
            debug!(
                "event=listing_page module=listing status=ignored page={} total_pages={}",
                page, self.state.total_pages
            );
            return Vec::new();
        }
        vec![self.issue_fetch(page)]
    }

    fn issue_fetch(&mut self, page: u32) -> ListingCommand {
        self.last_seq += 1;
        let request = FetchRequest {
            seq: self.last_seq,
            category: self.state.selected_category,
            search_query: self.state.search_query.clone(),
            page,
        };
        self.state.current_page = page.min(self.state.total_pages).max(1);
        self.state.loading = true;
        self.in_flight = Some(request.clone());
        debug!(
            "event=listing_fetch module=listing status=issued seq={} category={} page={}",
            request.seq, request.category, request.page
        );
        ListingCommand::Fetch(request)
    }

    fn complete(
        &mut self,
        seq: FetchSeq,
        result: Result<Vec<Recipe>, RetrievalError>,
    ) -> Vec<ListingCommand> {
        let request = match self.in_flight.take() {
            Some(request) if request.seq == seq => request,
            other => {
                self.in_flight = other;
                debug!(
                    "event=listing_apply module=listing status=stale seq={} latest_seq={}",
                    seq, self.last_seq
                );
                return Vec::new();
            }
        };

        self.state.loading = false;
        match result {
            Ok(recipes) => {
                let page = paginate(recipes, request.page, self.page_size);
                self.state.total_items = page.total_items;
                self.state.total_pages = page.total_pages;
                self.state.current_page = page.page;
                self.state.recipes = page.items;
                self.state.last_error = None;
                debug!(
                    "event=listing_apply module=listing status=ok seq={} page={} total_pages={} items={}",
                    seq,
                    self.state.current_page,
                    self.state.total_pages,
                    self.state.recipes.len()
                );
                Vec::new()
            }
            Err(err) => {
                warn!(
                    "event=listing_apply module=listing status=error seq={} error_code={}",
                    seq,
                    err.code()
                );
                self.state.recipes.clear();
                self.state.total_items = 0;
                self.state.total_pages = 1;
                self.state.current_page = 1;
                self.state.last_error = Some(err.to_string());
                vec![ListingCommand::Alert(Alert::fetch_failed())]
            }
        }
    }
}

impl Default for ListingController {
    fn default() -> Self {
        Self::from_config(&RecipeBookConfig::default())
    }
}
