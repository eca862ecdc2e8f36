//! Listing input events and output commands.

use crate::model::alert::Alert;
use crate::model::category::Category;
use crate::model::recipe::Recipe;
use crate::remote::source::RetrievalError;
use std::time::Instant;

/// Monotonic fetch sequence number.
pub type FetchSeq = u64;

/// Input delivered to `ListingController::handle`.
#[derive(Debug)]
pub enum ListingEvent {
    /// Screen became visible; triggers the first fetch.
    Mounted,
    CategorySelected(Category),
    /// Raw keystroke result; debounced before it affects state.
    SearchTextChanged { text: String, at: Instant },
    /// Clock tick used to release debounced search text.
    Tick { at: Instant },
    /// Clears search text and refetches the current category.
    Refresh,
    /// 1-based page navigation target.
    PageRequested(u32),
    /// Outcome of a previously emitted `ListingCommand::Fetch`.
    RetrievalCompleted {
        seq: FetchSeq,
        result: Result<Vec<Recipe>, RetrievalError>,
    },
}

/// Retrieval request the driver must execute and report back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: FetchSeq,
    pub category: Category,
    pub search_query: String,
    /// Page to slice once the full filtered set arrives.
    pub page: u32,
}

/// Side effect requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingCommand {
    Fetch(FetchRequest),
    Alert(Alert),
}
