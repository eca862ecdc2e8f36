//! Synchronous driver pairing a listing controller with retrieval.
//!
//! # Responsibility
//! - Execute fetch commands emitted by `ListingController` and feed their
//!   outcomes back as completion events.
//! - Collect alerts for the host to display.
//!
//! # Invariants
//! - Each dispatched event is fully settled (no fetch left outstanding)
//!   before `dispatch` returns.

use crate::config::RecipeBookConfig;
use crate::listing::controller::ListingController;
use crate::listing::event::{ListingCommand, ListingEvent};
use crate::listing::state::ListingState;
use crate::listing::view::ListingView;
use crate::model::alert::Alert;
use crate::model::category::Category;
use crate::remote::source::RecipeSource;
use crate::service::recipe_service::RecipeService;
use std::collections::VecDeque;
use std::time::Instant;

/// One mounted listing screen backed by a recipe source.
pub struct ListingSession<S: RecipeSource> {
    controller: ListingController,
    service: RecipeService<S>,
}

impl<S: RecipeSource> ListingSession<S> {
    pub fn new(controller: ListingController, service: RecipeService<S>) -> Self {
        Self {
            controller,
            service,
        }
    }

    /// Builds controller and service settings from `config`.
    pub fn from_config(source: S, config: &RecipeBookConfig) -> Self {
        Self::new(
            ListingController::from_config(config),
            RecipeService::with_price_synthesis(source, config.price_synthesis),
        )
    }

    pub fn state(&self) -> &ListingState {
        self.controller.state()
    }

    pub fn controller(&self) -> &ListingController {
        &self.controller
    }

    pub fn view(&self, username: &str) -> ListingView {
        ListingView::from_state(username, self.controller.state())
    }

    /// Applies `event`, runs resulting fetches, and returns raised alerts.
    pub fn dispatch(&mut self, event: ListingEvent) -> Vec<Alert> {
        let mut alerts = Vec::new();
        let mut queue = VecDeque::from(self.controller.handle(event));

        while let Some(command) = queue.pop_front() {
            match command {
                ListingCommand::Fetch(request) => {
                    let result = self
                        .service
                        .fetch_recipes(request.category, &request.search_query);
                    queue.extend(self.controller.handle(ListingEvent::RetrievalCompleted {
                        seq: request.seq,
                        result,
                    }));
                }
                ListingCommand::Alert(alert) => alerts.push(alert),
            }
        }

        alerts
    }

    pub fn open(&mut self) -> Vec<Alert> {
        self.dispatch(ListingEvent::Mounted)
    }

    pub fn select_category(&mut self, category: Category) -> Vec<Alert> {
        self.dispatch(ListingEvent::CategorySelected(category))
    }

    /// Records a keystroke; nothing is fetched until a later `poll`.
    pub fn search_input(&mut self, text: impl Into<String>, at: Instant) -> Vec<Alert> {
        self.dispatch(ListingEvent::SearchTextChanged {
            text: text.into(),
            at,
        })
    }

    /// Releases debounced search text whose quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Vec<Alert> {
        self.dispatch(ListingEvent::Tick { at: now })
    }

    pub fn refresh(&mut self) -> Vec<Alert> {
        self.dispatch(ListingEvent::Refresh)
    }

    pub fn go_to_page(&mut self, page: u32) -> Vec<Alert> {
        self.dispatch(ListingEvent::PageRequested(page))
    }
}
