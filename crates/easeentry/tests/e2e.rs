// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end conversations through the fully wired assistant.
//!
//! Each test builds an isolated harness with a scripted model and a mock
//! booking service; tests are independent and order-insensitive.

use easeentry_config::{EaseEntryConfig, EmailValidation};
use easeentry_core::types::Role;
use easeentry_test_utils::{MockReply, TestHarness};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn greeting_then_booking_then_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/bookings"))
        .and(body_json(json!({"booking_email": "meera@example.in", "phone": 9812345678_i64, "ticks": 2})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "Booking created"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/bookings/1001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"amount": 200, "booking-email": "meera@example.in", "booking-id": 1001, "validity": "2026-10-19"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut harness = TestHarness::builder()
        .with_booking_url(server.uri())
        .with_replies(vec![
            MockReply::text("Hello! I can book tickets or track a booking."),
            MockReply::tool_call(
                "call_book",
                "do_booking",
                json!({"booking_email": "meera@example.in", "phone": "9812345678", "ticks": 2}),
            ),
            MockReply::text("Booked! Please pay at https://athena-payment.vercel.app/ to get your booking id."),
            MockReply::tool_call("call_track", "get_ticket_info", json!({"ticket_id": "1001"})),
            MockReply::text("Booking 1001: 200 rupees, valid on 2026-10-19."),
        ])
        .build()
        .await
        .unwrap();

    let hello = harness.send("hi").await.unwrap();
    assert!(hello.tool_results.is_empty());

    let booked = harness
        .send("Book 2 tickets, meera@example.in, 9812345678")
        .await
        .unwrap();
    assert!(booked.reply.contains("https://athena-payment.vercel.app/"));
    assert!(!booked.tool_results[0].output.is_error);

    let tracked = harness.send("Track booking 1001").await.unwrap();
    let record: serde_json::Value =
        serde_json::from_str(&tracked.tool_results[0].output.content).unwrap();
    assert_eq!(record["booking_id"], 1001);
    assert_eq!(record["amount"], 200);

    assert_eq!(harness.session.len(), 6);
    assert_eq!(harness.provider.call_count().await, 5);
}

#[tokio::test]
async fn default_system_prompt_is_sent_first() {
    let mut harness = TestHarness::builder()
        .with_booking_url("http://127.0.0.1:1")
        .with_replies(vec![MockReply::text("Each ticket is 100 rupees.")])
        .build()
        .await
        .unwrap();

    harness.send("price?").await.unwrap();

    let requests = harness.provider.requests().await;
    let system = &requests[0].messages[0];
    assert_eq!(system.role, Role::System);
    let prompt = system.content.as_deref().unwrap();
    assert!(prompt.contains("EaseEntry AI"));
    assert!(prompt.contains("https://athena-payment.vercel.app/"));
}

#[tokio::test]
async fn strict_email_mode_blocks_booking_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = EaseEntryConfig::default();
    config.booking.base_url = server.uri();
    config.booking.email_validation = EmailValidation::Strict;

    let mut harness = TestHarness::builder()
        .with_config(config)
        .with_replies(vec![
            MockReply::tool_call(
                "c",
                "do_booking",
                json!({"booking_email": "meera-at-example", "phone": "1", "ticks": 1}),
            ),
            MockReply::text("That email address doesn't look right. Could you check it?"),
        ])
        .build()
        .await
        .unwrap();

    let outcome = harness.send("book 1 for meera-at-example").await.unwrap();
    assert_eq!(
        outcome.tool_results[0].output.content,
        json!({"error": "Invalid email address."}).to_string()
    );
}

#[tokio::test]
async fn provider_outage_then_recovery() {
    let mut harness = TestHarness::builder()
        .with_booking_url("http://127.0.0.1:1")
        .with_replies(vec![
            MockReply::Fail("connection reset".into()),
            MockReply::text("I'm back. How can I help?"),
        ])
        .build()
        .await
        .unwrap();

    assert!(harness.send("hello").await.is_err());
    assert_eq!(harness.session.len(), 1);

    let outcome = harness.send("hello again").await.unwrap();
    assert_eq!(outcome.reply, "I'm back. How can I help?");
    let roles: Vec<Role> = harness.session.turns().iter().map(|t| t.role).collect();
    assert_eq!(roles, vec![Role::User, Role::User, Role::Assistant]);
}
