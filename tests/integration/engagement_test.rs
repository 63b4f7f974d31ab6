//! Integration tests for ratings, likes, favorites, and reviews.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_rating_is_single_shot() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("rate-owner@test.com", "password123", true, false)
        .await;
    app.create_test_user("rate-guest@test.com", "password123", false, false)
        .await;

    let owner_token = app.login("rate-owner@test.com", "password123").await;
    let hotel_id = app.create_hotel(&owner_token, "Ratable", 3).await;

    let guest_token = app.login("rate-guest@test.com", "password123").await;
    let first = app
        .request(
            "POST",
            &format!("/api/hotels/{hotel_id}/rate"),
            Some(serde_json::json!({"rate": 4})),
            Some(&guest_token),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request(
            "POST",
            &format!("/api/hotels/{hotel_id}/rate"),
            Some(serde_json::json!({"rate": 1})),
            Some(&guest_token),
        )
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);

    // The original score stays.
    let rating: i16 = sqlx::query_scalar("SELECT rating FROM hotel_ratings WHERE hotel_id = $1")
        .bind(hotel_id)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(rating, 4);
}

#[tokio::test]
async fn test_rating_out_of_range_rejected() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("range-owner@test.com", "password123", true, false)
        .await;
    let token = app.login("range-owner@test.com", "password123").await;
    let hotel_id = app.create_hotel(&token, "Range Hotel", 3).await;

    let response = app
        .request(
            "POST",
            &format!("/api/hotels/{hotel_id}/rate"),
            Some(serde_json::json!({"rate": 6})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_like_toggle_is_an_involution() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("like-owner@test.com", "password123", true, false)
        .await;
    app.create_test_user("liker@test.com", "password123", false, false)
        .await;

    let owner_token = app.login("like-owner@test.com", "password123").await;
    let hotel_id = app.create_hotel(&owner_token, "Likable", 3).await;

    let liker_token = app.login("liker@test.com", "password123").await;
    let path = format!("/api/hotels/{hotel_id}/like");

    let on = app.request("POST", &path, None, Some(&liker_token)).await;
    assert_eq!(on.status, StatusCode::OK);
    assert!(on.body["data"]["active"].as_bool().unwrap());
    assert_eq!(on.body["data"]["count"].as_i64().unwrap(), 1);

    let off = app.request("POST", &path, None, Some(&liker_token)).await;
    assert!(!off.body["data"]["active"].as_bool().unwrap());
    assert_eq!(off.body["data"]["count"].as_i64().unwrap(), 0);

    let likes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE hotel_id = $1")
        .bind(hotel_id)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(likes, 0);
}

#[tokio::test]
async fn test_favorite_toggle_and_listing() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("fav-owner@test.com", "password123", true, false)
        .await;
    app.create_test_user("fav-guest@test.com", "password123", false, false)
        .await;

    let owner_token = app.login("fav-owner@test.com", "password123").await;
    let hotel_id = app.create_hotel(&owner_token, "Favorable", 3).await;

    let guest_token = app.login("fav-guest@test.com", "password123").await;
    let on = app
        .request(
            "POST",
            &format!("/api/hotels/{hotel_id}/favorite"),
            None,
            Some(&guest_token),
        )
        .await;
    assert!(on.body["data"]["active"].as_bool().unwrap());

    let listed = app
        .request("GET", "/api/favorites", None, Some(&guest_token))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["data"].as_array().unwrap().len(), 1);

    let off = app
        .request(
            "POST",
            &format!("/api/hotels/{hotel_id}/favorite"),
            None,
            Some(&guest_token),
        )
        .await;
    assert!(!off.body["data"]["active"].as_bool().unwrap());

    let listed = app
        .request("GET", "/api/favorites", None, Some(&guest_token))
        .await;
    assert!(listed.body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_review_lifecycle_and_permissions() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("rev-owner@test.com", "password123", true, false)
        .await;
    app.create_test_user("author@test.com", "password123", false, false)
        .await;
    app.create_test_user("bystander@test.com", "password123", false, false)
        .await;
    app.create_test_user("staff@test.com", "password123", false, true)
        .await;

    let owner_token = app.login("rev-owner@test.com", "password123").await;
    let hotel_id = app.create_hotel(&owner_token, "Reviewable", 3).await;

    let author_token = app.login("author@test.com", "password123").await;
    let created = app
        .request(
            "POST",
            &format!("/api/hotels/{hotel_id}/reviews"),
            Some(serde_json::json!({"comment": "Lovely stay"})),
            Some(&author_token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let review_id = helpers::parse_id(&created.body["data"]);

    // Listing is public.
    let listed = app
        .request(
            "GET",
            &format!("/api/hotels/{hotel_id}/reviews"),
            None,
            None,
        )
        .await;
    assert_eq!(listed.body["data"].as_array().unwrap().len(), 1);

    // A bystander cannot edit or delete the review.
    let bystander_token = app.login("bystander@test.com", "password123").await;
    let forbidden = app
        .request(
            "PUT",
            &format!("/api/hotels/{hotel_id}/reviews/{review_id}"),
            Some(serde_json::json!({"comment": "Hijacked"})),
            Some(&bystander_token),
        )
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    // The author can edit their own.
    let edited = app
        .request(
            "PUT",
            &format!("/api/hotels/{hotel_id}/reviews/{review_id}"),
            Some(serde_json::json!({"comment": "Even better on reflection"})),
            Some(&author_token),
        )
        .await;
    assert_eq!(edited.status, StatusCode::OK);

    // Staff can delete anyone's review.
    let staff_token = app.login("staff@test.com", "password123").await;
    let deleted = app
        .request(
            "DELETE",
            &format!("/api/hotels/{hotel_id}/reviews/{review_id}"),
            None,
            Some(&staff_token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
}

#[tokio::test]
async fn test_engagement_requires_authentication() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("anon-owner@test.com", "password123", true, false)
        .await;
    let owner_token = app.login("anon-owner@test.com", "password123").await;
    let hotel_id = app.create_hotel(&owner_token, "Auth Wall", 3).await;

    let response = app
        .request(
            "POST",
            &format!("/api/hotels/{hotel_id}/like"),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
