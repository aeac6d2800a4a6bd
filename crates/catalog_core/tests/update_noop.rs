mod common;

use catalog_core::{update, AppState, Msg};
use common::{init_logging, submit_query};

#[test]
fn blank_search_changes_nothing_but_the_text() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::QueryChanged("  ".to_string()));
    state.consume_dirty();
    let before = state.clone();

    let (mut next, effects) = update(state, Msg::SearchSubmitted);

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(next, before);
}

#[test]
fn detail_messages_without_a_model_on_screen_are_ignored() {
    init_logging();
    let (mut state, _) = submit_query(AppState::new(), "bert");
    state.consume_dirty();
    let before = state.clone();

    let (state, effects) = update(state, Msg::BaseModelClicked);
    assert!(effects.is_empty());
    let (mut state, effects) = update(state, Msg::DetailRetry);
    assert!(effects.is_empty());

    assert!(!state.consume_dirty());
    assert_eq!(state, before);
}
