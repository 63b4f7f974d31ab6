//! Integration tests for hotel and room management.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_create_hotel_requires_owner_rights() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("plain@test.com", "password123", false, false)
        .await;
    let token = app.login("plain@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/hotels",
            Some(serde_json::json!({
                "name": "No Rights Hotel",
                "address": "Somewhere 1",
                "description": "",
                "stars": 3,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_hotel_crud_lifecycle() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("crud-owner@test.com", "password123", true, false)
        .await;
    let token = app.login("crud-owner@test.com", "password123").await;

    let hotel_id = app.create_hotel(&token, "Lifecycle Grand", 4).await;

    let fetched = app
        .request("GET", &format!("/api/hotels/{hotel_id}"), None, None)
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["name"].as_str().unwrap(), "Lifecycle Grand");
    assert_eq!(fetched.body["data"]["ratings_count"].as_i64().unwrap(), 0);
    assert_eq!(fetched.body["data"]["likes_count"].as_i64().unwrap(), 0);

    let updated = app
        .request(
            "PUT",
            &format!("/api/hotels/{hotel_id}"),
            Some(serde_json::json!({"stars": 5})),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["stars"].as_i64().unwrap(), 5);
    // Untouched fields are preserved.
    assert_eq!(updated.body["data"]["name"].as_str().unwrap(), "Lifecycle Grand");

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/hotels/{hotel_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app
        .request("GET", &format!("/api/hotels/{hotel_id}"), None, None)
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_hotel_mutation_forbidden_for_other_owner() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("owner-a@test.com", "password123", true, false)
        .await;
    app.create_test_user("owner-b@test.com", "password123", true, false)
        .await;

    let token_a = app.login("owner-a@test.com", "password123").await;
    let hotel_id = app.create_hotel(&token_a, "Private Palace", 3).await;

    let token_b = app.login("owner-b@test.com", "password123").await;
    let response = app
        .request(
            "PUT",
            &format!("/api/hotels/{hotel_id}"),
            Some(serde_json::json!({"name": "Taken Over"})),
            Some(&token_b),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_hotel_list_stars_filter_and_search() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("filter-owner@test.com", "password123", true, false)
        .await;
    let token = app.login("filter-owner@test.com", "password123").await;

    app.create_hotel(&token, "Budget Stay", 2).await;
    app.create_hotel(&token, "Luxury Tower", 5).await;
    app.create_hotel(&token, "Luxury Annex", 5).await;

    let five_star = app.request("GET", "/api/hotels?stars=5", None, None).await;
    assert_eq!(five_star.status, StatusCode::OK);
    assert_eq!(five_star.body["data"]["total_items"].as_u64().unwrap(), 2);

    let searched = app
        .request("GET", "/api/hotels?search=budget", None, None)
        .await;
    assert_eq!(searched.status, StatusCode::OK);
    let items = searched.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"].as_str().unwrap(), "Budget Stay");

    let combined = app
        .request("GET", "/api/hotels?stars=5&search=annex", None, None)
        .await;
    assert_eq!(combined.body["data"]["total_items"].as_u64().unwrap(), 1);
}

#[tokio::test]
async fn test_top_hotels_orders_by_bookings_then_rating() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("top-owner@test.com", "password123", true, false)
        .await;
    app.create_test_user("rater@test.com", "password123", false, false)
        .await;
    let owner_token = app.login("top-owner@test.com", "password123").await;

    let quiet = app.create_hotel(&owner_token, "Quiet Corner", 3).await;
    let busy = app.create_hotel(&owner_token, "Busy Central", 3).await;
    let rated = app.create_hotel(&owner_token, "Well Rated", 3).await;

    for (id, count) in [(quiet, 1), (busy, 10), (rated, 1)] {
        sqlx::query("UPDATE hotels SET bookings_count = $2 WHERE id = $1")
            .bind(id)
            .bind(count)
            .execute(&app.db_pool)
            .await
            .unwrap();
    }

    // Tie between 'quiet' and 'rated' on bookings; rating breaks it.
    let rater_token = app.login("rater@test.com", "password123").await;
    let rate = app
        .request(
            "POST",
            &format!("/api/hotels/{rated}/rate"),
            Some(serde_json::json!({"rate": 5})),
            Some(&rater_token),
        )
        .await;
    assert_eq!(rate.status, StatusCode::CREATED);

    let response = app.request("GET", "/api/top-hotels", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let names: Vec<&str> = response.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Busy Central", "Well Rated", "Quiet Corner"]);
}

#[tokio::test]
async fn test_room_mutations_gated_by_hotel_owner() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("room-owner@test.com", "password123", true, false)
        .await;
    app.create_test_user("intruder@test.com", "password123", true, false)
        .await;

    let owner_token = app.login("room-owner@test.com", "password123").await;
    let hotel_id = app.create_hotel(&owner_token, "Room Rights", 3).await;
    let room_id = app.create_room(&owner_token, hotel_id, "101").await;

    let intruder_token = app.login("intruder@test.com", "password123").await;
    let update = app
        .request(
            "PUT",
            &format!("/api/rooms/{room_id}"),
            Some(serde_json::json!({"price_per_night": "999.00"})),
            Some(&intruder_token),
        )
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);

    let delete = app
        .request(
            "DELETE",
            &format!("/api/rooms/{room_id}"),
            None,
            Some(&intruder_token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);

    // The owner can do both.
    let update = app
        .request(
            "PUT",
            &format!("/api/rooms/{room_id}"),
            Some(serde_json::json!({"price_per_night": "150.00"})),
            Some(&owner_token),
        )
        .await;
    assert_eq!(update.status, StatusCode::OK);
}

#[tokio::test]
async fn test_duplicate_room_number_conflicts() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("dup-owner@test.com", "password123", true, false)
        .await;
    let token = app.login("dup-owner@test.com", "password123").await;
    let hotel_id = app.create_hotel(&token, "Dup Rooms", 3).await;
    app.create_room(&token, hotel_id, "101").await;

    let response = app
        .request(
            "POST",
            "/api/rooms",
            Some(serde_json::json!({
                "hotel_id": hotel_id,
                "room_number": "101",
                "room_type": "deluxe",
                "capacity": 2,
                "price_per_night": "200.00",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}
