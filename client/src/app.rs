//! Root application component and SSR shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the shared contexts: client configuration, the HTTP client, and
//! the auth state (writer signal plus the read-only accessor handed to
//! guards). On the client it resolves the session once at startup.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::pages::dashboards::{AdminDashboardPage, PharmacistDashboardPage, SupplierDashboardPage};
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::state::auth::{AuthAccessor, AuthState};

/// HTML document shell used by the server renderer.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::default();
    let api = ApiClient::new(&config);
    let auth = RwSignal::new(AuthState::pending());

    provide_context(config);
    provide_context(api.clone());
    provide_context(auth);
    provide_context(AuthAccessor::new(auth));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let state = crate::state::auth::load_auth_state(&api).await;
        auth.set(state);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = api;

    view! {
        <Stylesheet id="leptos" href="/pkg/medsupply.css"/>
        <Title text="MedSupply"/>
        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=AdminDashboardPage/>
                <Route
                    path=(StaticSegment("pharmacist"), StaticSegment("dashboard"))
                    view=PharmacistDashboardPage
                />
                <Route path=(StaticSegment("supplier"), StaticSegment("dashboard")) view=SupplierDashboardPage/>
            </Routes>
        </Router>
    }
}
