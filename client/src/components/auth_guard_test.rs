use super::*;

#[test]
fn navigate_options_replace_history() {
    let redirect = Redirect { to: "/login".to_owned(), from: Some("/admin/dashboard".to_owned()), replace: true };
    assert!(navigate_options(&redirect).replace);
}

#[test]
fn navigate_options_keep_push_when_not_replacing() {
    let redirect = Redirect { to: "/".to_owned(), from: None, replace: false };
    assert!(!navigate_options(&redirect).replace);
}
