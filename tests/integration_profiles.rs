mod common;

use axum::http::StatusCode;
use common::{TEST_LOGO, setup_test_app, test_profile};
use facilityhub_models::{AccountTier, PropertyId, UserId};

#[tokio::test]
async fn test_get_my_profile() {
    let app = setup_test_app();
    let profile = test_profile(AccountTier::PropertyUser, "helpdesk", Some(PropertyId::new()));
    let expected_id = profile.id.to_string();
    let token = app.register(profile);

    let (status, body) = app.get("/api/profiles/me", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], expected_id);
    assert_eq!(body["user_type"], "user");
    assert_eq!(body["user_role"], "helpdesk");
    assert!(body["property_id"].is_string());
}

#[tokio::test]
async fn test_get_my_profile_not_found() {
    let app = setup_test_app();
    let token = app.token_for(UserId::new(), "ghost@facilityhub.test");

    let (status, body) = app.get("/api/profiles/me", Some(&token)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Profile not found");
}

#[tokio::test]
async fn test_profile_service_unavailable_is_server_error() {
    let app = setup_test_app();
    let token = app.register(test_profile(AccountTier::ClientAdmin, "helpdesk", None));
    app.directory.set_profiles_failing(true);

    let (status, _) = app.get("/api/profiles/me", Some(&token)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_own_profile_by_id() {
    let app = setup_test_app();
    let profile = test_profile(AccountTier::ClientAdmin, "fire_officer", None);
    let id = profile.id;
    let token = app.register(profile);

    let (status, body) = app.get(&format!("/api/profiles/{}", id), Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_role"], "fire_officer");
}

#[tokio::test]
async fn test_foreign_profile_requires_org_admin() {
    let app = setup_test_app();
    let other = test_profile(AccountTier::PropertyUser, "store_keeper", None);
    let other_id = other.id;
    app.directory.insert_profile(other);
    let cadmin = app.register(test_profile(AccountTier::ClientAdmin, "property_admin", None));
    let admin = app.register(test_profile(AccountTier::Admin, "admin", None));

    let (status, _) = app
        .get(&format!("/api/profiles/{}", other_id), Some(&cadmin))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .get(&format!("/api/profiles/{}", other_id), Some(&admin))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_role"], "store_keeper");

    let (status, _) = app
        .get(&format!("/api/profiles/{}", UserId::new()), Some(&admin))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_profiles_require_token() {
    let app = setup_test_app();

    let (status, _) = app.get("/api/profiles/me", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_property_lookup_is_public() {
    let app = setup_test_app();
    let property = app.add_property(Some(TEST_LOGO));

    let (status, body) = app
        .get(&format!("/api/properties/{}", property.id), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Tower A");
    assert_eq!(body["logo"], TEST_LOGO);
}

#[tokio::test]
async fn test_unknown_property_is_not_found() {
    let app = setup_test_app();

    let (status, _) = app
        .get(&format!("/api/properties/{}", PropertyId::new()), None)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
