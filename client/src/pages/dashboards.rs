//! Role landing dashboards.
//!
//! Each page guards itself with its role and renders inside
//! `DashboardShell`, which supplies the bell, sign-out and the
//! pending-activation notice.

#[cfg(test)]
#[path = "dashboards_test.rs"]
mod dashboards_test;

use leptos::prelude::*;

use crate::components::auth_guard::AuthGuard;
use crate::components::dashboard_shell::DashboardShell;
use crate::components::rating_input::RatingInput;
use crate::net::types::{DirectoryEntry, Role};
use crate::state::auth::AuthAccessor;
use crate::state::carousel::featured_members;
use crate::state::rating::RatingSize;

/// Directory entries with the given role.
pub(crate) fn members_with_role(entries: &[DirectoryEntry], role: Role) -> Vec<DirectoryEntry> {
    entries.iter().filter(|e| e.role == role).cloned().collect()
}

/// `(role label, member count)` rows for the admin summary.
pub(crate) fn member_counts(entries: &[DirectoryEntry]) -> Vec<(&'static str, usize)> {
    [Role::Pharmacist, Role::Supplier]
        .into_iter()
        .map(|role| (role.label(), entries.iter().filter(|e| e.role == role).count()))
        .collect()
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthAccessor>();

    view! {
        <AuthGuard auth=auth required_role=Role::Admin>
            <DashboardShell title="Administration">
                <section class="admin-summary">
                    <h2>"Members"</h2>
                    <ul class="admin-summary__list">
                        {member_counts(&featured_members())
                            .into_iter()
                            .map(|(label, count)| {
                                view! {
                                    <li class="admin-summary__row">
                                        <span>{label}</span>
                                        <strong>{count}</strong>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </DashboardShell>
        </AuthGuard>
    }
}

#[component]
pub fn PharmacistDashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthAccessor>();

    view! {
        <AuthGuard auth=auth required_role=Role::Pharmacist>
            <DashboardShell title="Pharmacy">
                <section class="supplier-list">
                    <h2>"Suppliers"</h2>
                    {members_with_role(&featured_members(), Role::Supplier)
                        .into_iter()
                        .map(supplier_card)
                        .collect_view()}
                </section>
            </DashboardShell>
        </AuthGuard>
    }
}

fn supplier_card(supplier: DirectoryEntry) -> impl IntoView {
    let name = supplier.name.clone();
    let on_change = Callback::new(move |value: f64| {
        leptos::logging::log!("rated {name}: {value}");
    });
    view! {
        <article class="supplier-card">
            <h3 class="supplier-card__name">{supplier.name}</h3>
            <p class="supplier-card__region">{supplier.region}</p>
            <RatingInput on_change=on_change show_summary=true/>
        </article>
    }
}

#[component]
pub fn SupplierDashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthAccessor>();

    view! {
        <AuthGuard auth=auth required_role=Role::Supplier>
            <DashboardShell title="Supplier">
                <section class="supplier-rating">
                    <h2>"Your rating"</h2>
                    <RatingInput readonly=true size=RatingSize::Lg show_summary=true/>
                </section>
            </DashboardShell>
        </AuthGuard>
    }
}
