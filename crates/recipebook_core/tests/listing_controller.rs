use recipebook_core::{
    Alert, Category, ListingCommand, ListingController, ListingEvent, ListingSession,
    PriceSynthesis, Recipe, RecipeBookConfig, RecipeSource, RetrievalError, RetrievalResult,
    StaticRecipeSource, UpstreamRecipe,
};
use std::cell::Cell;
use std::time::{Duration, Instant};

const QUIET: Duration = Duration::from_millis(300);

fn recipe(id: u64, name: &str) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        image: format!("https://cdn.example/{id}.webp"),
        meal_type: vec!["Dinner".to_string()],
        price: 200,
        quantity: 5,
    }
}

fn dinners(count: u64) -> Vec<Recipe> {
    (1..=count).map(|id| recipe(id, &format!("Dinner {id}"))).collect()
}

fn upstream_dinners(count: u64) -> Vec<UpstreamRecipe> {
    (1..=count)
        .map(|id| UpstreamRecipe {
            id,
            name: format!("Dinner {id}"),
            image: format!("https://cdn.example/{id}.webp"),
            meal_type: Some(vec!["Dinner".to_string()]),
        })
        .collect()
}

fn only_fetch(commands: Vec<ListingCommand>) -> recipebook_core::FetchRequest {
    match commands.as_slice() {
        [ListingCommand::Fetch(request)] => request.clone(),
        other => panic!("expected a single fetch, got {other:?}"),
    }
}

/// Controller with 12 dinners applied and page 1 visible.
fn loaded_dinner_controller() -> ListingController {
    let mut controller = ListingController::new(8, QUIET);
    let request = only_fetch(controller.handle(ListingEvent::CategorySelected(Category::Dinner)));
    controller.handle(ListingEvent::RetrievalCompleted {
        seq: request.seq,
        result: Ok(dinners(12)),
    });
    controller
}

#[test]
fn initial_state_is_loading_lunch_page_one() {
    let mut controller = ListingController::default();
    let state = controller.state();
    assert!(state.loading);
    assert_eq!(state.selected_category, Category::Lunch);
    assert_eq!(state.search_query, "");
    assert_eq!(state.current_page, 1);

    let request = only_fetch(controller.handle(ListingEvent::Mounted));
    assert_eq!(request.category, Category::Lunch);
    assert_eq!(request.page, 1);
}

#[test]
fn twelve_dinners_paginate_into_eight_and_four() {
    let mut controller = loaded_dinner_controller();
    assert_eq!(controller.state().recipes.len(), 8);
    assert_eq!(controller.state().total_pages, 2);
    assert!(!controller.state().loading);

    let request = only_fetch(controller.handle(ListingEvent::PageRequested(2)));
    assert_eq!(request.page, 2);
    assert!(controller.state().loading);
    controller.handle(ListingEvent::RetrievalCompleted {
        seq: request.seq,
        result: Ok(dinners(12)),
    });

    let ids = controller
        .state()
        .recipes
        .iter()
        .map(|recipe| recipe.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![9, 10, 11, 12]);
    assert_eq!(controller.state().current_page, 2);
}

#[test]
fn out_of_range_page_requests_change_nothing() {
    let mut controller = loaded_dinner_controller();
    let before = controller.state().clone();

    assert!(controller.handle(ListingEvent::PageRequested(0)).is_empty());
    assert!(controller.handle(ListingEvent::PageRequested(3)).is_empty());
    assert_eq!(controller.state(), &before);
}

#[test]
fn category_change_resets_to_first_page() {
    let mut controller = loaded_dinner_controller();
    let request = only_fetch(controller.handle(ListingEvent::PageRequested(2)));
    controller.handle(ListingEvent::RetrievalCompleted {
        seq: request.seq,
        result: Ok(dinners(12)),
    });

    let request = only_fetch(controller.handle(ListingEvent::CategorySelected(Category::Dessert)));
    assert_eq!(request.category, Category::Dessert);
    assert_eq!(request.page, 1);
    assert_eq!(controller.state().current_page, 1);
    assert!(controller.state().loading);
}

#[test]
fn empty_result_has_one_page_and_clamps() {
    let mut controller = ListingController::default();
    let request = only_fetch(controller.handle(ListingEvent::Mounted));
    controller.handle(ListingEvent::RetrievalCompleted {
        seq: request.seq,
        result: Ok(Vec::new()),
    });

    let state = controller.state();
    assert!(state.recipes.is_empty());
    assert_eq!(state.total_pages, 1);
    assert_eq!(state.current_page, 1);
    assert!(state.is_empty_result());
}

#[test]
fn shrinking_result_clamps_current_page() {
    let mut controller = loaded_dinner_controller();
    let request = only_fetch(controller.handle(ListingEvent::PageRequested(2)));
    controller.handle(ListingEvent::RetrievalCompleted {
        seq: request.seq,
        result: Ok(dinners(5)),
    });
    assert_eq!(controller.state().current_page, 1);
    assert_eq!(controller.state().total_pages, 1);
    assert_eq!(controller.state().recipes.len(), 5);
}

#[test]
fn failure_raises_alert_and_clears_results() {
    let mut controller = loaded_dinner_controller();
    let request = only_fetch(controller.handle(ListingEvent::Refresh));
    let commands = controller.handle(ListingEvent::RetrievalCompleted {
        seq: request.seq,
        result: Err(RetrievalError::Source("boom".to_string())),
    });

    assert_eq!(commands, vec![ListingCommand::Alert(Alert::fetch_failed())]);
    let state = controller.state();
    assert!(state.recipes.is_empty());
    assert!(!state.loading);
    assert_eq!(state.total_pages, 1);
    assert!(state.last_error.as_deref().unwrap_or("").contains("boom"));
}

#[test]
fn stale_completion_is_discarded() {
    let mut controller = ListingController::new(8, QUIET);
    let dinner = only_fetch(controller.handle(ListingEvent::CategorySelected(Category::Dinner)));
    let dessert = only_fetch(controller.handle(ListingEvent::CategorySelected(Category::Dessert)));
    assert!(dessert.seq > dinner.seq);

    let commands = controller.handle(ListingEvent::RetrievalCompleted {
        seq: dinner.seq,
        result: Ok(dinners(12)),
    });
    assert!(commands.is_empty());
    assert!(controller.state().loading);
    assert!(controller.state().recipes.is_empty());

    controller.handle(ListingEvent::RetrievalCompleted {
        seq: dessert.seq,
        result: Ok(vec![recipe(40, "Tiramisu")]),
    });
    assert!(!controller.state().loading);
    assert_eq!(controller.state().recipes[0].id, 40);
    assert_eq!(controller.state().selected_category, Category::Dessert);
}

#[test]
fn search_text_is_applied_only_after_quiet_period() {
    let mut controller = loaded_dinner_controller();
    let start = Instant::now();

    for (offset_ms, text) in [(0, "p"), (100, "pa"), (200, "pas"), (250, "pasta")] {
        let commands = controller.handle(ListingEvent::SearchTextChanged {
            text: text.to_string(),
            at: start + Duration::from_millis(offset_ms),
        });
        assert!(commands.is_empty());
    }
    assert!(controller
        .handle(ListingEvent::Tick {
            at: start + Duration::from_millis(500),
        })
        .is_empty());
    assert_eq!(controller.state().search_query, "");

    let request = only_fetch(controller.handle(ListingEvent::Tick {
        at: start + Duration::from_millis(550),
    }));
    assert_eq!(request.search_query, "pasta");
    assert_eq!(request.page, 1);
    assert_eq!(controller.state().search_query, "pasta");

    assert!(controller
        .handle(ListingEvent::Tick {
            at: start + Duration::from_secs(2),
        })
        .is_empty());
}

#[test]
fn refresh_clears_query_and_cancels_pending_search() {
    let mut controller = loaded_dinner_controller();
    let start = Instant::now();
    controller.handle(ListingEvent::SearchTextChanged {
        text: "stew".to_string(),
        at: start,
    });
    assert!(controller.next_deadline().is_some());

    let request = only_fetch(controller.handle(ListingEvent::Refresh));
    assert_eq!(request.search_query, "");
    assert_eq!(request.category, Category::Dinner);
    assert!(controller.next_deadline().is_none());
    assert!(controller
        .handle(ListingEvent::Tick { at: start + QUIET })
        .is_empty());
}

struct CountingSource {
    inner: StaticRecipeSource,
    calls: Cell<u32>,
    fail: Cell<bool>,
}

impl RecipeSource for CountingSource {
    fn fetch_all(&self) -> RetrievalResult<Vec<UpstreamRecipe>> {
        self.calls.set(self.calls.get() + 1);
        if self.fail.get() {
            return Err(RetrievalError::Source("offline".to_string()));
        }
        self.inner.fetch_all()
    }
}

#[test]
fn session_refetches_full_set_for_every_page_change() {
    let source = CountingSource {
        inner: StaticRecipeSource::new(upstream_dinners(12)),
        calls: Cell::new(0),
        fail: Cell::new(false),
    };
    let config = RecipeBookConfig {
        price_synthesis: PriceSynthesis::SeededById,
        ..RecipeBookConfig::default()
    };
    let mut session = ListingSession::from_config(&source, &config);

    assert!(session.select_category(Category::Dinner).is_empty());
    assert!(session.go_to_page(2).is_empty());
    assert!(session.go_to_page(3).is_empty());
    assert_eq!(source.calls.get(), 2);
    assert_eq!(session.state().recipes.len(), 4);

    let view = session.view("chef");
    assert_eq!(view.pagination.label, "Page 2 of 2");
    assert!(view.pagination.previous_enabled);
    assert!(!view.pagination.next_enabled);
}

#[test]
fn session_search_with_no_match_shows_empty_state() {
    let source = StaticRecipeSource::new(upstream_dinners(12));
    let mut session = ListingSession::from_config(source, &RecipeBookConfig::default());
    session.select_category(Category::Dinner);

    let start = Instant::now();
    session.search_input("pasta", start);
    assert_eq!(session.state().recipes.len(), 8);
    session.poll(start + QUIET);

    let view = session.view("chef");
    assert!(view.cards.is_empty());
    assert_eq!(view.pagination.total_pages, 1);
    assert!(view.empty_message.is_some());
}

#[test]
fn session_failure_returns_alert_and_stops_loading() {
    let source = CountingSource {
        inner: StaticRecipeSource::new(upstream_dinners(3)),
        calls: Cell::new(0),
        fail: Cell::new(true),
    };
    let mut session = ListingSession::from_config(&source, &RecipeBookConfig::default());

    let alerts = session.open();
    assert_eq!(alerts, vec![Alert::fetch_failed()]);
    assert!(session.state().recipes.is_empty());
    assert!(!session.state().loading);

    source.fail.set(false);
    assert!(session.refresh().is_empty());
    assert!(session.state().last_error.is_none());
}
