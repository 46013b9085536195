//! Banner shown to accounts awaiting administrator validation.

#[cfg(test)]
#[path = "registration_notice_test.rs"]
mod registration_notice_test;

use leptos::prelude::*;

use crate::net::types::Role;

#[component]
pub fn RegistrationNotice(role: Role) -> impl IntoView {
    view! {
        <div class="registration-notice" role="alert">
            <svg class="registration-notice__icon" viewBox="0 0 24 24" aria-hidden="true">
                <circle cx="12" cy="12" r="10"></circle>
                <line x1="12" y1="8" x2="12" y2="12"></line>
                <line x1="12" y1="16" x2="12.01" y2="16"></line>
            </svg>
            <div>
                <p class="registration-notice__title">"Your account is awaiting validation"</p>
                <p class="registration-notice__body">{notice_description(role)}</p>
            </div>
        </div>
    }
}

fn notice_description(role: Role) -> String {
    format!(
        "An administrator is reviewing your {} account registration. \
         You will receive a notification as soon as it is activated.",
        role.account_kind()
    )
}
