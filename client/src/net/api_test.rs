use super::*;

fn client(base: &str) -> ApiClient {
    let config = ClientConfig { api_base: base.to_owned(), ..ClientConfig::default() };
    ApiClient::new(&config)
}

#[test]
fn endpoints_are_joined_onto_the_base() {
    let api = client("https://market.example/api");
    assert_eq!(api.session_endpoint(), "https://market.example/api/auth/session");
    assert_eq!(api.login_endpoint(), "https://market.example/api/auth/login");
    assert_eq!(api.logout_endpoint(), "https://market.example/api/auth/logout");
    assert_eq!(api.notifications_endpoint(), "https://market.example/api/notifications/user");
}

#[test]
fn profile_endpoint_formats_expected_path() {
    assert_eq!(client("/api").profile_endpoint("u123"), "/api/profiles/u123");
}

#[test]
fn mark_read_endpoint_formats_expected_path() {
    assert_eq!(client("/api").mark_read_endpoint("n-9"), "/api/notifications/n-9/read");
}

#[test]
fn status_error_maps_401_to_unauthorized() {
    assert_eq!(status_error(401), ApiError::Unauthorized);
    assert_eq!(status_error(500), ApiError::Status(500));
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status(503).to_string(), "request failed with status 503");
    assert_eq!(
        ApiError::MissingField("notifications").to_string(),
        "response is missing `notifications`"
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_build_reports_unavailable() {
    let api = client("/api");
    let result = futures::executor::block_on(api.fetch_notifications());
    assert_eq!(result, Err(ApiError::Unavailable));
    let result = futures::executor::block_on(api.fetch_session());
    assert_eq!(result, Err(ApiError::Unavailable));
}
