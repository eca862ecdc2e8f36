//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose login and home-listing use-cases to Dart via FRB.
//! - Flatten core view data into plain envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - At most one listing session is open per process.
//! - Search keystrokes are only applied by a later `listing_poll` call.
//! - The listing lock is never held across a network fetch. Sync calls
//!   (`listing_search_input`, `listing_close`) only wait on in-memory updates,
//!   even while a blocking call is fetching.
//! - A completion is applied only to the listing that issued it; results
//!   for a closed or reopened listing are dropped.

use log::{info, warn};
use recipebook_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Alert, Category, CredentialStore, HttpRecipeSource, ListingCommand, ListingController,
    ListingEvent, ListingView, LogLevel, LoginError, RecipeBookConfig, RecipeService,
    RecipeSource,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};
use std::time::Instant;

const LISTING_NOT_OPEN: &str = "listing is not open";
const LISTING_CLOSED: &str = "listing was closed during fetch";

static CREDENTIALS: OnceLock<CredentialStore> = OnceLock::new();
static LISTING: OnceLock<ListingSlot<HttpRecipeSource>> = OnceLock::new();
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

type ListingSlot<S> = Mutex<Option<OpenListing<S>>>;

struct OpenListing<S: RecipeSource> {
    generation: u64,
    username: String,
    controller: ListingController,
    service: Arc<RecipeService<S>>,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Default log level for the current build mode.
#[flutter_rust_bridge::frb(sync)]
pub fn default_log_level() -> String {
    LogLevel::build_default().as_str().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Alert to be shown as a modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertItem {
    pub title: String,
    pub message: String,
}

/// Login outcome envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub ok: bool,
    /// Set on success; passed on to the home screen greeting.
    pub username: Option<String>,
    /// Inline error under the username field.
    pub username_error: Option<String>,
    /// Inline error under the password field.
    pub password_error: Option<String>,
    pub alert: Option<AlertItem>,
}

/// Category picker entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryItem {
    pub id: String,
    pub label: String,
    pub icon: String,
}

/// One recipe grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCardItem {
    pub id: u64,
    pub name: String,
    pub subtitle: String,
    pub image: String,
    pub price_label: String,
    pub quantity_label: String,
}

/// Full home-screen render state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSnapshot {
    /// Whether a listing session is open and the call was applied.
    pub ok: bool,
    pub greeting: String,
    pub selected_category: String,
    pub cards: Vec<RecipeCardItem>,
    pub page_label: String,
    pub current_page: u32,
    pub total_pages: u32,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub loading: bool,
    pub empty_message: Option<String>,
    /// Alerts raised while handling this call.
    pub alerts: Vec<AlertItem>,
    /// Milliseconds until pending search text is due; `None` when idle.
    pub next_poll_ms: Option<u64>,
    /// Diagnostic message; empty on success.
    pub message: String,
}

impl ListingSnapshot {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            greeting: String::new(),
            selected_category: String::new(),
            cards: Vec::new(),
            page_label: String::new(),
            current_page: 1,
            total_pages: 1,
            previous_enabled: false,
            next_enabled: false,
            loading: false,
            empty_message: None,
            alerts: Vec::new(),
            next_poll_ms: None,
            message: message.into(),
        }
    }
}

/// Checks a login form against the built-in allow-list.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Blank fields produce inline errors and no alert.
/// - Unknown pairs produce an `Invalid credentials` alert.
#[flutter_rust_bridge::frb(sync)]
pub fn login(username: String, password: String) -> LoginResponse {
    let store = CREDENTIALS.get_or_init(CredentialStore::demo);
    to_login_response(store.login(&username, &password))
}

/// Lists the category picker entries in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn listing_categories() -> Vec<CategoryItem> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryItem {
            id: category.id().to_owned(),
            label: category.label().to_owned(),
            icon: category.icon().to_owned(),
        })
        .collect()
}

/// Opens (or reopens) the home listing for `username` and loads page 1.
///
/// # FFI contract
/// - Blocking network call; do not invoke on the UI isolate thread.
/// - Replaces any previously open listing.
pub fn listing_open(username: String) -> ListingSnapshot {
    let config = match RecipeBookConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            warn!("event=listing_open module=ffi status=error error_code=config");
            return ListingSnapshot::failure(format!("listing_open failed: {err}"));
        }
    };
    let source = match HttpRecipeSource::from_config(&config) {
        Ok(source) => source,
        Err(err) => {
            warn!(
                "event=listing_open module=ffi status=error error_code={}",
                err.code()
            );
            return ListingSnapshot::failure(format!("listing_open failed: {err}"));
        }
    };

    let snapshot = open_listing(listing_slot(), username, source, &config);
    info!(
        "event=listing_open module=ffi status=ok endpoint={} alerts={}",
        config.endpoint,
        snapshot.alerts.len()
    );
    snapshot
}

/// Selects a category by id (`lunch|dinner|breakfast|dessert`).
///
/// # FFI contract
/// - Blocking network call; do not invoke on the UI isolate thread.
pub fn listing_select_category(category_id: String) -> ListingSnapshot {
    let category = match category_id.parse::<Category>() {
        Ok(category) => category,
        Err(err) => return ListingSnapshot::failure(err.to_string()),
    };
    drive_listing(listing_slot(), ListingEvent::CategorySelected(category))
}

/// Records a search keystroke; the query is applied by a later poll.
///
/// # FFI contract
/// - Sync call, in-memory only; never waits for a fetch in progress.
#[flutter_rust_bridge::frb(sync)]
pub fn listing_search_input(text: String) -> ListingSnapshot {
    drive_listing(
        listing_slot(),
        ListingEvent::SearchTextChanged {
            text,
            at: Instant::now(),
        },
    )
}

/// Applies debounced search text once its quiet period has passed.
pub fn listing_poll() -> ListingSnapshot {
    drive_listing(listing_slot(), ListingEvent::Tick { at: Instant::now() })
}

/// Clears the search text and reloads the current category.
pub fn listing_refresh() -> ListingSnapshot {
    drive_listing(listing_slot(), ListingEvent::Refresh)
}

/// Navigates to a 1-based page; out-of-range pages are ignored.
pub fn listing_go_to_page(page: u32) -> ListingSnapshot {
    drive_listing(listing_slot(), ListingEvent::PageRequested(page))
}

/// Closes the open listing, if any.
///
/// A fetch still running for the closed listing is discarded on return.
#[flutter_rust_bridge::frb(sync)]
pub fn listing_close() {
    *lock_listing(listing_slot()) = None;
}

/// Alert for the login screen's "Forgot Password" link.
#[flutter_rust_bridge::frb(sync)]
pub fn login_forgot_password() -> AlertItem {
    to_alert_item(Alert::forgot_password())
}

fn listing_slot() -> &'static ListingSlot<HttpRecipeSource> {
    LISTING.get_or_init(|| Mutex::new(None))
}

fn lock_listing<S: RecipeSource>(
    slot: &ListingSlot<S>,
) -> MutexGuard<'_, Option<OpenListing<S>>> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn open_listing<S: RecipeSource>(
    slot: &ListingSlot<S>,
    username: String,
    source: S,
    config: &RecipeBookConfig,
) -> ListingSnapshot {
    let open = OpenListing {
        generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
        username,
        controller: ListingController::from_config(config),
        service: Arc::new(RecipeService::with_price_synthesis(
            source,
            config.price_synthesis,
        )),
    };
    *lock_listing(slot) = Some(open);
    drive_listing(slot, ListingEvent::Mounted)
}

/// Applies `event` and settles every fetch it triggers.
///
/// The lock is taken only to update the controller; fetches run unlocked
/// and their completions go back through the controller's sequence check.
fn drive_listing<S: RecipeSource>(
    slot: &ListingSlot<S>,
    event: ListingEvent,
) -> ListingSnapshot {
    let (generation, service, mut queue) = {
        let mut guard = lock_listing(slot);
        let open = match guard.as_mut() {
            Some(open) => open,
            None => return ListingSnapshot::failure(LISTING_NOT_OPEN),
        };
        let commands = open.controller.handle(event);
        (
            open.generation,
            Arc::clone(&open.service),
            VecDeque::from(commands),
        )
    };

    let mut alerts = Vec::new();
    while let Some(command) = queue.pop_front() {
        match command {
            ListingCommand::Fetch(request) => {
                let result = service.fetch_recipes(request.category, &request.search_query);
                let mut guard = lock_listing(slot);
                match guard.as_mut() {
                    Some(open) if open.generation == generation => {
                        queue.extend(open.controller.handle(ListingEvent::RetrievalCompleted {
                            seq: request.seq,
                            result,
                        }));
                    }
                    _ => {
                        info!("event=listing_fetch module=ffi status=dropped reason=closed");
                        return ListingSnapshot::failure(LISTING_CLOSED);
                    }
                }
            }
            ListingCommand::Alert(alert) => alerts.push(alert),
        }
    }

    let guard = lock_listing(slot);
    match guard.as_ref() {
        Some(open) if open.generation == generation => {
            to_snapshot(&open.controller, &open.username, alerts)
        }
        _ => ListingSnapshot::failure(LISTING_CLOSED),
    }
}

fn to_login_response(result: Result<String, LoginError>) -> LoginResponse {
    match result {
        Ok(username) => LoginResponse {
            ok: true,
            username: Some(username),
            username_error: None,
            password_error: None,
            alert: None,
        },
        Err(err) => {
            let alert = err.alert().map(to_alert_item);
            let (username_error, password_error) = match err {
                LoginError::Validation(fields) => (
                    fields.username.map(str::to_owned),
                    fields.password.map(str::to_owned),
                ),
                LoginError::InvalidCredentials => (None, None),
            };
            LoginResponse {
                ok: false,
                username: None,
                username_error,
                password_error,
                alert,
            }
        }
    }
}

fn to_snapshot(
    controller: &ListingController,
    username: &str,
    alerts: Vec<Alert>,
) -> ListingSnapshot {
    let view = ListingView::from_state(username, controller.state());
    let next_poll_ms = controller.next_deadline().map(|deadline| {
        let remaining = deadline.saturating_duration_since(Instant::now());
        u64::try_from(remaining.as_millis()).unwrap_or(u64::MAX)
    });
    ListingSnapshot {
        ok: true,
        greeting: view.greeting,
        selected_category: view.selected_category,
        cards: view
            .cards
            .into_iter()
            .map(|card| RecipeCardItem {
                id: card.id,
                name: card.name,
                subtitle: card.subtitle,
                image: card.image,
                price_label: card.price_label,
                quantity_label: card.quantity_label,
            })
            .collect(),
        page_label: view.pagination.label,
        current_page: view.pagination.current_page,
        total_pages: view.pagination.total_pages,
        previous_enabled: view.pagination.previous_enabled,
        next_enabled: view.pagination.next_enabled,
        loading: view.loading,
        empty_message: view.empty_message,
        alerts: alerts.into_iter().map(to_alert_item).collect(),
        next_poll_ms,
        message: String::new(),
    }
}

fn to_alert_item(alert: Alert) -> AlertItem {
    AlertItem {
        title: alert.title,
        message: alert.message,
    }
}
