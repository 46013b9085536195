//! Public landing page with the member directory carousel.

use leptos::prelude::*;

use crate::components::directory_carousel::DirectoryCarousel;
use crate::config::LOGIN_PATH;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-hero">
                <h1>"MedSupply"</h1>
                <p class="home-hero__tagline">
                    "Connecting pharmacies and suppliers across Algeria."
                </p>
                <a href=LOGIN_PATH class="btn btn--primary">"Sign in"</a>
            </section>
            <DirectoryCarousel/>
        </div>
    }
}
