//! Rotating strip of marketplace members on the home page.

use leptos::prelude::*;

use crate::config::CAROUSEL_WINDOW;
use crate::net::types::DirectoryEntry;
use crate::state::carousel::{CarouselState, featured_members};

/// Shows three members at a time and rotates by one every configured
/// interval. Defaults to the featured member list.
#[component]
pub fn DirectoryCarousel(#[prop(optional)] entries: Option<Vec<DirectoryEntry>>) -> impl IntoView {
    let state = RwSignal::new(CarouselState::new(entries.unwrap_or_else(featured_members)));

    #[cfg(feature = "hydrate")]
    {
        let config = expect_context::<crate::config::ClientConfig>();
        let rotation = crate::util::poll::spawn_poll(config.carousel_interval, false, move |_| {
            state.try_update(CarouselState::advance);
            std::future::ready(())
        });
        on_cleanup(move || rotation.cancel());
    }

    view! {
        <section class="directory-carousel">
            <div class="directory-carousel__header">
                <h2>"Our members"</h2>
                <p>"Some of the pharmacists and suppliers already trading on the platform."</p>
            </div>
            <div class="directory-carousel__grid">
                {move || {
                    state
                        .get()
                        .visible_window(CAROUSEL_WINDOW)
                        .into_iter()
                        .map(|entry| view! { <DirectoryCard entry=entry/> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn DirectoryCard(entry: DirectoryEntry) -> impl IntoView {
    let alt = entry.name.clone();
    view! {
        <div class="directory-card">
            <div class="directory-card__identity">
                <img class="directory-card__avatar" src=entry.image_ref alt=alt/>
                <div>
                    <h3 class="directory-card__name">{entry.name}</h3>
                    <p class="directory-card__role">{entry.role.label()}</p>
                </div>
            </div>
            <p class="directory-card__region">{format!("Wilaya: {}", entry.region)}</p>
        </div>
    }
}
