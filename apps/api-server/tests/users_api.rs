//! HTTP integration tests for the `/users` resource and the credential helper.

#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{Value, json};

use scribe_core::ports::{PasswordService, UserRepository};
use scribe_shared::dto::UserResponse;

use common::TestContext;

#[actix_web::test]
async fn test_create_user_returns_public_view() {
    let ctx = TestContext::setup();
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({
            "username": "grace",
            "password": "compilers-4-all",
            "firstName": "Grace",
            "lastName": "Hopper"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("password").is_none());
    assert!(!body.to_string().contains("compilers-4-all"));

    let view: UserResponse = serde_json::from_value(body).unwrap();
    assert_eq!(view.username, "grace");
    assert_eq!(view.first_name, "Grace");
    assert_eq!(view.last_name, "Hopper");

    ctx.teardown().await;
}

#[actix_web::test]
async fn test_stored_password_is_hashed_and_verifiable() {
    let ctx = TestContext::setup();
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "username": "alan", "password": "enigma-1912" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let stored = ctx.users.find_by_username("alan").await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "enigma-1912");
    assert!(!stored.password_hash.contains("enigma-1912"));
    assert_eq!(stored.first_name, "");
    assert_eq!(stored.last_name, "");

    let passwords = &ctx.state.passwords;
    assert!(passwords.verify("enigma-1912", &stored.password_hash).unwrap());
    assert!(!passwords.verify("enigma-1913", &stored.password_hash).unwrap());

    ctx.teardown().await;
}

#[actix_web::test]
async fn test_duplicate_username_is_a_conflict() {
    let ctx = TestContext::setup();
    let app = test_app!(ctx);

    let first = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "username": "ada", "password": "analytical" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, first).await.status(),
        StatusCode::CREATED
    );
    let original = ctx.users.find_by_username("ada").await.unwrap().unwrap();

    let second = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "username": "ada", "password": "different", "firstName": "Imposter" }))
        .to_request();
    let resp = test::call_service(&app, second).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 409);

    assert_eq!(ctx.users.count().await.unwrap(), 1);
    let stored = ctx.users.find_by_username("ada").await.unwrap().unwrap();
    assert_eq!(stored, original);

    ctx.teardown().await;
}

#[actix_web::test]
async fn test_missing_credentials_are_rejected() {
    let ctx = TestContext::setup();
    let app = test_app!(ctx);

    for payload in [
        json!({ "password": "no-username" }),
        json!({ "username": "nopass" }),
        json!({ "username": "   ", "password": "blank-username" }),
        json!({ "username": "emptypass", "password": "" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{payload}");
    }

    assert_eq!(ctx.users.count().await.unwrap(), 0);
}
