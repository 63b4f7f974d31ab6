//! Integration tests for the booking workflow.

mod helpers;

use http::StatusCode;
use uuid::Uuid;

#[tokio::test]
async fn test_booking_success_updates_room_and_counters() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("owner@test.com", "password123", true, false)
        .await;
    app.create_test_user("guest@test.com", "password123", false, false)
        .await;

    let owner_token = app.login("owner@test.com", "password123").await;
    let hotel_id = app.create_hotel(&owner_token, "Seaside", 4).await;
    let room_id = app.create_room(&owner_token, hotel_id, "101").await;

    let guest_token = app.login("guest@test.com", "password123").await;
    let response = app
        .request(
            "POST",
            &format!("/api/bookings/{room_id}"),
            Some(serde_json::json!({
                "check_in": "2026-09-01",
                "check_out": "2026-09-04",
                "guests": 2,
            })),
            Some(&guest_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    // 3 nights at 100.00 per night.
    assert_eq!(
        response.body["data"]["booking"]["total_cost"]
            .as_str()
            .unwrap(),
        "300.00"
    );
    assert!(
        response.body["data"]["message"]
            .as_str()
            .unwrap()
            .contains("confirmed")
    );

    let bookings_count: i32 =
        sqlx::query_scalar("SELECT bookings_count FROM hotels WHERE id = $1")
            .bind(hotel_id)
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(bookings_count, 1);

    let status: String = sqlx::query_scalar("SELECT status::text FROM rooms WHERE id = $1")
        .bind(room_id)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(status, "booked");

    // The confirmation email job is queued in the same transaction.
    let jobs: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM jobs WHERE job_type = 'booking_confirmation'",
    )
    .fetch_one(&app.db_pool)
    .await
    .unwrap();
    assert_eq!(jobs, 1);
}

#[tokio::test]
async fn test_booking_overlap_conflicts() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("owner2@test.com", "password123", true, false)
        .await;
    app.create_test_user("guest2@test.com", "password123", false, false)
        .await;

    let owner_token = app.login("owner2@test.com", "password123").await;
    let hotel_id = app.create_hotel(&owner_token, "Overlap Inn", 3).await;
    let room_id = app.create_room(&owner_token, hotel_id, "201").await;

    let guest_token = app.login("guest2@test.com", "password123").await;
    let first = app
        .request(
            "POST",
            &format!("/api/bookings/{room_id}"),
            Some(serde_json::json!({
                "check_in": "2026-09-10",
                "check_out": "2026-09-15",
                "guests": 1,
            })),
            Some(&guest_token),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let overlapping = app
        .request(
            "POST",
            &format!("/api/bookings/{room_id}"),
            Some(serde_json::json!({
                "check_in": "2026-09-14",
                "check_out": "2026-09-18",
                "guests": 1,
            })),
            Some(&guest_token),
        )
        .await;
    assert_eq!(overlapping.status, StatusCode::CONFLICT);
    assert_eq!(overlapping.body["error"].as_str().unwrap(), "CONFLICT");

    // A failed attempt must not bump the hotel counter.
    let bookings_count: i32 =
        sqlx::query_scalar("SELECT bookings_count FROM hotels WHERE id = $1")
            .bind(hotel_id)
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(bookings_count, 1);
}

#[tokio::test]
async fn test_booking_back_to_back_same_day_conflicts() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("owner3@test.com", "password123", true, false)
        .await;
    app.create_test_user("guest3@test.com", "password123", false, false)
        .await;

    let owner_token = app.login("owner3@test.com", "password123").await;
    let hotel_id = app.create_hotel(&owner_token, "Edge Hotel", 3).await;
    let room_id = app.create_room(&owner_token, hotel_id, "301").await;

    let guest_token = app.login("guest3@test.com", "password123").await;
    let first = app
        .request(
            "POST",
            &format!("/api/bookings/{room_id}"),
            Some(serde_json::json!({
                "check_in": "2026-10-01",
                "check_out": "2026-10-05",
                "guests": 1,
            })),
            Some(&guest_token),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    // Ranges are inclusive on both ends, so a stay starting on the
    // previous checkout day is still a conflict.
    let touching = app
        .request(
            "POST",
            &format!("/api/bookings/{room_id}"),
            Some(serde_json::json!({
                "check_in": "2026-10-05",
                "check_out": "2026-10-08",
                "guests": 1,
            })),
            Some(&guest_token),
        )
        .await;
    assert_eq!(touching.status, StatusCode::CONFLICT);

    // A fully disjoint range is fine.
    let disjoint = app
        .request(
            "POST",
            &format!("/api/bookings/{room_id}"),
            Some(serde_json::json!({
                "check_in": "2026-10-06",
                "check_out": "2026-10-08",
                "guests": 1,
            })),
            Some(&guest_token),
        )
        .await;
    assert_eq!(disjoint.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_availability_query_reflects_bookings() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("owner7@test.com", "password123", true, false)
        .await;
    app.create_test_user("guest7@test.com", "password123", false, false)
        .await;

    let owner_token = app.login("owner7@test.com", "password123").await;
    let hotel_id = app.create_hotel(&owner_token, "Query Inn", 3).await;
    let room_id = app.create_room(&owner_token, hotel_id, "701").await;

    let free = app
        .request(
            "GET",
            &format!("/api/rooms/{room_id}/availability?check_in=2026-12-01&check_out=2026-12-05"),
            None,
            None,
        )
        .await;
    assert_eq!(free.status, StatusCode::OK);
    assert!(free.body["data"]["available"].as_bool().unwrap());

    let guest_token = app.login("guest7@test.com", "password123").await;
    let booked = app
        .request(
            "POST",
            &format!("/api/bookings/{room_id}"),
            Some(serde_json::json!({
                "check_in": "2026-12-01",
                "check_out": "2026-12-05",
                "guests": 1,
            })),
            Some(&guest_token),
        )
        .await;
    assert_eq!(booked.status, StatusCode::CREATED);

    let taken = app
        .request(
            "GET",
            &format!("/api/rooms/{room_id}/availability?check_in=2026-12-03&check_out=2026-12-07"),
            None,
            None,
        )
        .await;
    assert!(!taken.body["data"]["available"].as_bool().unwrap());

    let later = app
        .request(
            "GET",
            &format!("/api/rooms/{room_id}/availability?check_in=2026-12-06&check_out=2026-12-09"),
            None,
            None,
        )
        .await;
    assert!(later.body["data"]["available"].as_bool().unwrap());
}

#[tokio::test]
async fn test_booking_missing_room_is_not_found() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("guest4@test.com", "password123", false, false)
        .await;
    let token = app.login("guest4@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            &format!("/api/bookings/{}", Uuid::new_v4()),
            Some(serde_json::json!({
                "check_in": "2026-09-01",
                "check_out": "2026-09-02",
                "guests": 1,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_booking_rejects_inverted_dates() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("owner5@test.com", "password123", true, false)
        .await;
    let owner_token = app.login("owner5@test.com", "password123").await;
    let hotel_id = app.create_hotel(&owner_token, "Inverted", 2).await;
    let room_id = app.create_room(&owner_token, hotel_id, "501").await;

    let response = app
        .request(
            "POST",
            &format!("/api/bookings/{room_id}"),
            Some(serde_json::json!({
                "check_in": "2026-09-10",
                "check_out": "2026-09-10",
                "guests": 1,
            })),
            Some(&owner_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_my_bookings_only_shows_own() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("owner6@test.com", "password123", true, false)
        .await;
    app.create_test_user("guest6a@test.com", "password123", false, false)
        .await;
    app.create_test_user("guest6b@test.com", "password123", false, false)
        .await;

    let owner_token = app.login("owner6@test.com", "password123").await;
    let hotel_id = app.create_hotel(&owner_token, "Listing Lodge", 3).await;
    let room_a = app.create_room(&owner_token, hotel_id, "601").await;
    let room_b = app.create_room(&owner_token, hotel_id, "602").await;

    let token_a = app.login("guest6a@test.com", "password123").await;
    let token_b = app.login("guest6b@test.com", "password123").await;

    for (room, token) in [(room_a, &token_a), (room_b, &token_b)] {
        let response = app
            .request(
                "POST",
                &format!("/api/bookings/{room}"),
                Some(serde_json::json!({
                    "check_in": "2026-11-01",
                    "check_out": "2026-11-03",
                    "guests": 1,
                })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app
        .request("GET", "/api/bookings", None, Some(&token_a))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);
}
