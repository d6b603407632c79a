//! Integration tests for the booking admission path.

use axum::http::StatusCode;
use tower::ServiceExt;

use crate::helpers;

fn booking_body(room_id: uuid::Uuid, check_in: &str, check_out: &str) -> serde_json::Value {
    serde_json::json!({
        "room_id": room_id,
        "check_in_date": check_in,
        "check_out_date": check_out,
    })
}

#[tokio::test]
async fn test_concurrent_bookings_admit_exactly_one() {
    let Some(app) = helpers::TestApp::new().await else {
        eprintln!("STAYHUB_TEST_DATABASE_URL is not set; skipping");
        return;
    };

    let room_id = app.seed_room().await;
    let alice = app.register_user(&helpers::unique("alice")).await;
    let bob = app.register_user(&helpers::unique("bob")).await;

    let req_a = helpers::json_request(
        "POST",
        "/api/bookings",
        Some(booking_body(room_id, "2026-09-01", "2026-09-04")),
        Some(&alice),
    );
    let req_b = helpers::json_request(
        "POST",
        "/api/bookings",
        Some(booking_body(room_id, "2026-09-01", "2026-09-04")),
        Some(&bob),
    );

    let router_a = app.router.clone();
    let router_b = app.router.clone();
    let task_a = tokio::spawn(async move { router_a.oneshot(req_a).await.unwrap().status() });
    let task_b = tokio::spawn(async move { router_b.oneshot(req_b).await.unwrap().status() });

    let mut statuses = [task_a.await.unwrap(), task_b.await.unwrap()];
    statuses.sort();
    assert_eq!(
        statuses,
        [StatusCode::CREATED, StatusCode::CONFLICT],
        "exactly one of two racing bookings must win"
    );

    let confirmed: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM bookings WHERE room_id = $1 AND status = 'confirmed'",
    )
    .bind(room_id)
    .fetch_one(&app.db_pool)
    .await
    .unwrap();
    assert_eq!(confirmed, 1);
}

#[tokio::test]
async fn test_overlapping_booking_is_rejected_with_conflict() {
    let Some(app) = helpers::TestApp::new().await else {
        eprintln!("STAYHUB_TEST_DATABASE_URL is not set; skipping");
        return;
    };

    let room_id = app.seed_room().await;
    let token = app.register_user(&helpers::unique("carol")).await;

    let first = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(room_id, "2026-10-01", "2026-10-05")),
            Some(&token),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED, "{:?}", first.body);

    let second = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(room_id, "2026-10-03", "2026-10-07")),
            Some(&token),
        )
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT, "{:?}", second.body);
}

#[tokio::test]
async fn test_back_to_back_bookings_are_both_admitted() {
    let Some(app) = helpers::TestApp::new().await else {
        eprintln!("STAYHUB_TEST_DATABASE_URL is not set; skipping");
        return;
    };

    let room_id = app.seed_room().await;
    let token = app.register_user(&helpers::unique("dave")).await;

    // Checkout day is exclusive, so a stay ending on the 4th does not
    // collide with one starting on the 4th.
    let first = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(room_id, "2026-11-01", "2026-11-04")),
            Some(&token),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED, "{:?}", first.body);

    let second = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(room_id, "2026-11-04", "2026-11-07")),
            Some(&token),
        )
        .await;
    assert_eq!(second.status, StatusCode::CREATED, "{:?}", second.body);
}
