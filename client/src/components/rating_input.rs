//! Five-star rating input with half-star display.

#[cfg(test)]
#[path = "rating_input_test.rs"]
mod rating_input_test;

use leptos::prelude::*;

use crate::state::rating::{RatingSize, RatingState, STAR_COUNT, StarIcon, rating_summary};

const STAR_PATH: &str = "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z";
const HALF_STAR_PATH: &str = "M12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2v15.77z";

/// Star rating. Read-only inputs display the value and ignore pointer input.
#[component]
pub fn RatingInput(
    #[prop(default = 0.0)] initial_rating: f64,
    #[prop(optional)] readonly: bool,
    #[prop(optional)] size: RatingSize,
    #[prop(optional, into)] on_change: Option<Callback<f64>>,
    #[prop(optional)] show_summary: bool,
) -> impl IntoView {
    let state = RwSignal::new(RatingState::new(initial_rating, readonly));

    let stars = move || {
        state
            .get()
            .icons()
            .into_iter()
            .zip(1..=STAR_COUNT)
            .map(|(icon, star)| {
                let on_click = move |_| {
                    let committed = state.try_update(|s| s.click(star)).flatten();
                    if let (Some(value), Some(cb)) = (committed, on_change) {
                        cb.run(value);
                    }
                };
                view! {
                    <span
                        class=star_class(icon, size)
                        on:mouseenter=move |_| state.maybe_update(|s| s.hover(star))
                        on:mouseleave=move |_| state.maybe_update(RatingState::leave)
                        on:click=on_click
                    >
                        <svg viewBox="0 0 24 24" aria-hidden="true">
                            <path d=star_path(icon)></path>
                        </svg>
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <div class=if readonly { "rating" } else { "rating rating--interactive" }>
            {stars}
            <Show when=move || show_summary>
                <span class="rating__summary">{move || rating_summary(state.get().committed)}</span>
            </Show>
        </div>
    }
}

fn star_class(icon: StarIcon, size: RatingSize) -> String {
    let fill = match icon {
        StarIcon::Full => "rating__star rating__star--full",
        StarIcon::Half => "rating__star rating__star--half",
        StarIcon::Empty => "rating__star rating__star--empty",
    };
    format!("{fill} {}", size.class())
}

fn star_path(icon: StarIcon) -> &'static str {
    match icon {
        StarIcon::Half => HALF_STAR_PATH,
        StarIcon::Full | StarIcon::Empty => STAR_PATH,
    }
}
