use super::*;

fn ids(window: &[DirectoryEntry]) -> Vec<&str> {
    window.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn index_starts_at_zero() {
    assert_eq!(CarouselState::new(featured_members()).index, 0);
}

#[test]
fn one_tick_advances_by_one() {
    let mut state = CarouselState::new(featured_members());
    state.advance();
    assert_eq!(state.index, 1);
}

#[test]
fn five_ticks_over_five_entries_wrap_to_zero() {
    let mut state = CarouselState::new(featured_members());
    for _ in 0..5 {
        state.advance();
    }
    assert_eq!(state.index, 0);
}

#[test]
fn empty_carousel_never_advances() {
    let mut state = CarouselState::default();
    state.advance();
    assert_eq!(state.index, 0);
    assert!(state.visible_window(3).is_empty());
}

// The window is rendered by `DirectoryCarousel`; these pin what it shows.

#[test]
fn visible_window_starts_at_index() {
    let state = CarouselState::new(featured_members());
    assert_eq!(ids(&state.visible_window(3)), vec!["1", "2", "3"]);
}

#[test]
fn visible_window_wraps_past_the_end() {
    let mut state = CarouselState::new(featured_members());
    for _ in 0..4 {
        state.advance();
    }
    assert_eq!(ids(&state.visible_window(3)), vec!["5", "1", "2"]);
}

#[test]
fn short_list_repeats_entries_in_window() {
    let mut members = featured_members();
    members.truncate(2);
    let state = CarouselState::new(members);
    assert_eq!(ids(&state.visible_window(3)), vec!["1", "2", "1"]);
}
