//! Integration tests for the account lifecycle and owner upgrades.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_registration_activation_login_flow() {
    let app = helpers::TestApp::new().await;

    let registered = app
        .request(
            "POST",
            "/api/account/registration",
            Some(serde_json::json!({
                "email": "newcomer@test.com",
                "password": "password123",
            })),
            None,
        )
        .await;
    assert_eq!(registered.status, StatusCode::CREATED, "{:?}", registered.body);
    assert_eq!(
        registered.body["data"]["email"].as_str().unwrap(),
        "newcomer@test.com"
    );
    assert!(!registered.body["data"]["is_active"].as_bool().unwrap());

    // Login is refused until the account is activated.
    let early = app
        .request(
            "POST",
            "/api/account/login",
            Some(serde_json::json!({
                "email": "newcomer@test.com",
                "password": "password123",
            })),
            None,
        )
        .await;
    assert_eq!(early.status, StatusCode::UNAUTHORIZED);

    // The activation email job is queued.
    let jobs: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM jobs WHERE job_type = 'activation_email'")
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(jobs, 1);

    let code: String =
        sqlx::query_scalar("SELECT activation_code FROM users WHERE email = $1")
            .bind("newcomer@test.com")
            .fetch_one(&app.db_pool)
            .await
            .unwrap();

    let activated = app
        .request(
            "POST",
            "/api/account/activation",
            Some(serde_json::json!({"code": code})),
            None,
        )
        .await;
    assert_eq!(activated.status, StatusCode::OK);

    let token = app.login("newcomer@test.com", "password123").await;
    let me = app.request("GET", "/api/account/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["email"].as_str().unwrap(), "newcomer@test.com");
    assert!(me.body["data"]["is_active"].as_bool().unwrap());
}

#[tokio::test]
async fn test_registration_duplicate_email_conflicts() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("taken@test.com", "password123", false, false)
        .await;

    let response = app
        .request(
            "POST",
            "/api/account/registration",
            Some(serde_json::json!({
                "email": "taken@test.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_registration_rejects_invalid_input() {
    let app = helpers::TestApp::new().await;

    let bad_email = app
        .request(
            "POST",
            "/api/account/registration",
            Some(serde_json::json!({
                "email": "not-an-email",
                "password": "password123",
            })),
            None,
        )
        .await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_email.body["error"].as_str().unwrap(), "VALIDATION_ERROR");

    let short_password = app
        .request(
            "POST",
            "/api/account/registration",
            Some(serde_json::json!({
                "email": "fine@test.com",
                "password": "short",
            })),
            None,
        )
        .await;
    assert_eq!(short_password.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logout_revokes_the_session() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("leaver@test.com", "password123", false, false)
        .await;
    let token = app.login("leaver@test.com", "password123").await;

    let me = app.request("GET", "/api/account/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);

    let logout = app
        .request("POST", "/api/account/logout", None, Some(&token))
        .await;
    assert_eq!(logout.status, StatusCode::OK);

    // The token itself is still valid JWT, but the session is gone.
    let me = app.request("GET", "/api/account/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_change_password_verifies_the_current_one() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("changer@test.com", "oldpassword", false, false)
        .await;
    let token = app.login("changer@test.com", "oldpassword").await;

    let wrong = app
        .request(
            "POST",
            "/api/account/change_password",
            Some(serde_json::json!({
                "current_password": "guessing",
                "new_password": "newpassword1",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);

    let changed = app
        .request(
            "POST",
            "/api/account/change_password",
            Some(serde_json::json!({
                "current_password": "oldpassword",
                "new_password": "newpassword1",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(changed.status, StatusCode::OK);

    // Old credentials stop working, new ones do.
    let stale = app
        .request(
            "POST",
            "/api/account/login",
            Some(serde_json::json!({
                "email": "changer@test.com",
                "password": "oldpassword",
            })),
            None,
        )
        .await;
    assert_eq!(stale.status, StatusCode::UNAUTHORIZED);
    app.login("changer@test.com", "newpassword1").await;
}

#[tokio::test]
async fn test_password_reset_flow_revokes_sessions() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("forgetful@test.com", "password123", false, false)
        .await;
    let token = app.login("forgetful@test.com", "password123").await;

    let requested = app
        .request(
            "POST",
            "/api/account/password_reset",
            Some(serde_json::json!({"email": "forgetful@test.com"})),
            None,
        )
        .await;
    assert_eq!(requested.status, StatusCode::OK);

    // Unknown emails get the same answer.
    let unknown = app
        .request(
            "POST",
            "/api/account/password_reset",
            Some(serde_json::json!({"email": "nobody@test.com"})),
            None,
        )
        .await;
    assert_eq!(unknown.status, StatusCode::OK);
    assert_eq!(
        unknown.body["data"]["message"],
        requested.body["data"]["message"]
    );

    let jobs: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM jobs WHERE job_type = 'password_reset_email'")
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(jobs, 1);

    let code: String = sqlx::query_scalar("SELECT reset_code FROM users WHERE email = $1")
        .bind("forgetful@test.com")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();

    let confirmed = app
        .request(
            "POST",
            "/api/account/password_reset/confirm",
            Some(serde_json::json!({
                "code": code,
                "new_password": "freshpassword",
            })),
            None,
        )
        .await;
    assert_eq!(confirmed.status, StatusCode::OK);

    // Existing sessions are revoked and the code is single use.
    let me = app.request("GET", "/api/account/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);

    let reused = app
        .request(
            "POST",
            "/api/account/password_reset/confirm",
            Some(serde_json::json!({
                "code": code,
                "new_password": "anotherpassword",
            })),
            None,
        )
        .await;
    assert_eq!(reused.status, StatusCode::BAD_REQUEST);

    app.login("forgetful@test.com", "freshpassword").await;
}

#[tokio::test]
async fn test_owner_upgrade_request_and_approval() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("applicant@test.com", "password123", false, false)
        .await;
    app.create_test_user("staff@test.com", "password123", false, true)
        .await;

    let applicant_token = app.login("applicant@test.com", "password123").await;
    let requested = app
        .request(
            "POST",
            "/api/account/owner",
            Some(serde_json::json!({"message": "I run a small B&B"})),
            Some(&applicant_token),
        )
        .await;
    assert_eq!(requested.status, StatusCode::CREATED);
    assert_eq!(
        requested.body["data"]["message"].as_str().unwrap(),
        "I run a small B&B"
    );
    let request_id = helpers::parse_id(&requested.body["data"]);

    // A second application while one is pending is refused.
    let again = app
        .request(
            "POST",
            "/api/account/owner",
            Some(serde_json::json!({"message": "Asking again"})),
            Some(&applicant_token),
        )
        .await;
    assert_eq!(again.status, StatusCode::CONFLICT);

    // Only staff can see the queue.
    let denied = app
        .request(
            "GET",
            "/api/admin/owner-requests",
            None,
            Some(&applicant_token),
        )
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let staff_token = app.login("staff@test.com", "password123").await;
    let pending = app
        .request("GET", "/api/admin/owner-requests", None, Some(&staff_token))
        .await;
    assert_eq!(pending.status, StatusCode::OK);
    assert_eq!(pending.body["data"].as_array().unwrap().len(), 1);

    let approved = app
        .request(
            "POST",
            "/api/admin/owner-requests/approve",
            Some(serde_json::json!({"request_ids": [request_id]})),
            Some(&staff_token),
        )
        .await;
    assert_eq!(approved.status, StatusCode::OK);
    assert_eq!(
        approved.body["data"][0]["status"].as_str().unwrap(),
        "approved"
    );

    // The decision email is queued for the applicant.
    let jobs: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM jobs WHERE job_type = 'owner_decision_email'")
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(jobs, 1);

    // Owner rights apply on the next login.
    let fresh_token = app.login("applicant@test.com", "password123").await;
    let hotel = app
        .request(
            "POST",
            "/api/hotels",
            Some(serde_json::json!({
                "name": "First Venture",
                "address": "Main street 1",
                "description": "",
                "stars": 3,
            })),
            Some(&fresh_token),
        )
        .await;
    assert_eq!(hotel.status, StatusCode::CREATED, "{:?}", hotel.body);
}

#[tokio::test]
async fn test_rejected_applicant_may_reapply() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("persistent@test.com", "password123", false, false)
        .await;
    app.create_test_user("gatekeeper@test.com", "password123", false, true)
        .await;

    let applicant_token = app.login("persistent@test.com", "password123").await;
    let first = app
        .request(
            "POST",
            "/api/account/owner",
            Some(serde_json::json!({"message": "First try"})),
            Some(&applicant_token),
        )
        .await;
    let request_id = helpers::parse_id(&first.body["data"]);

    let staff_token = app.login("gatekeeper@test.com", "password123").await;
    let rejected = app
        .request(
            "POST",
            "/api/admin/owner-requests/reject",
            Some(serde_json::json!({"request_ids": [request_id]})),
            Some(&staff_token),
        )
        .await;
    assert_eq!(rejected.status, StatusCode::OK);
    assert_eq!(
        rejected.body["data"][0]["status"].as_str().unwrap(),
        "rejected"
    );

    // Rejection re-opens the door.
    let second = app
        .request(
            "POST",
            "/api/account/owner",
            Some(serde_json::json!({"message": "Second try"})),
            Some(&applicant_token),
        )
        .await;
    assert_eq!(second.status, StatusCode::CREATED);

    let status: String =
        sqlx::query_scalar("SELECT status::text FROM owner_requests WHERE id = $1")
            .bind(request_id)
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(status, "pending");
}
