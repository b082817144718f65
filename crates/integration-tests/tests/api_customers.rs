//! Integration tests for customer, BMI and note endpoints.

use axum::http::StatusCode;
use serde_json::json;

use nutrition_tracker_integration_tests::TestContext;

// ============================================================================
// Customers
// ============================================================================

#[tokio::test]
async fn test_list_starts_empty() {
    let ctx = TestContext::new().await;

    let resp = ctx.get("/api/customers").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, json!([]));
}

#[tokio::test]
async fn test_create_then_fetch_customer() {
    let ctx = TestContext::new().await;

    let created = ctx
        .post_json(
            "/api/customers",
            &json!({"name": "  Ada Lovelace ", "email": " ada@example.com "}),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["name"], "Ada Lovelace");
    assert_eq!(created.body["email"], "ada@example.com");

    let id = created.body["id"].as_str().unwrap();
    assert!(id.starts_with("customer-"));

    let fetched = ctx.get(&format!("/api/customers/{id}")).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);
    assert_eq!(fetched.body["bmiHistory"], json!([]));
    assert_eq!(fetched.body["notes"], json!([]));
}

#[tokio::test]
async fn test_create_defaults_email_to_empty() {
    let ctx = TestContext::new().await;

    let created = ctx.post_json("/api/customers", &json!({"name": "Grace"})).await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["email"], "");
}

#[tokio::test]
async fn test_create_requires_name() {
    let ctx = TestContext::new().await;
    ctx.create_customer("Existing").await;

    for body in [json!({"name": ""}), json!({"name": "   "}), json!({"email": "x@y.z"})] {
        let resp = ctx.post_json("/api/customers", &body).await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST);
        assert_eq!(resp.body, json!({"message": "Name is required."}));
    }

    assert_eq!(ctx.document().customers.len(), 1);
}

#[tokio::test]
async fn test_customers_listed_in_creation_order() {
    let ctx = TestContext::new().await;
    let first = ctx.create_customer("First").await;
    let second = ctx.create_customer("Second").await;
    let third = ctx.create_customer("Third").await;

    let resp = ctx.get("/api/customers").await;
    let ids: Vec<_> = resp
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(ids, [first, second, third]);
}

#[tokio::test]
async fn test_customer_ids_are_unique_under_rapid_creation() {
    let ctx = TestContext::new().await;

    let mut ids = Vec::new();
    for i in 0..20 {
        ids.push(ctx.create_customer(&format!("Customer {i}")).await);
    }
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 20);
}

#[tokio::test]
async fn test_get_unknown_customer() {
    let ctx = TestContext::new().await;

    let resp = ctx.get("/api/customers/customer-404").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.body, json!({"message": "Customer not found."}));
}

#[tokio::test]
async fn test_malformed_json_gets_message_body() {
    let ctx = TestContext::new().await;

    let resp = ctx.post_raw("/api/customers", "{\"name\": ").await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body, json!({"message": "Invalid request body."}));
    assert!(ctx.document().customers.is_empty());
}

#[tokio::test]
async fn test_wrong_field_types_get_generic_message() {
    let ctx = TestContext::new().await;
    let id = ctx.create_customer("Ada").await;
    let before = ctx.raw_document();

    let resp = ctx.post_json("/api/customers", &json!({"name": 42})).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body, json!({"message": "Invalid request body."}));

    let resp = ctx
        .post_json(
            &format!("/api/customers/{id}/bmi"),
            &json!({"heightCm": true, "weightKg": 70}),
        )
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body, json!({"message": "Invalid request body."}));

    let resp = ctx
        .post_json(&format!("/api/customers/{id}/notes"), &json!({"note": ["a"]}))
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body, json!({"message": "Invalid request body."}));

    assert_eq!(ctx.raw_document(), before);
}

// ============================================================================
// BMI entries
// ============================================================================

#[tokio::test]
async fn test_add_bmi_entry() {
    let ctx = TestContext::new().await;
    let id = ctx.create_customer("Ada").await;

    let resp = ctx
        .post_json(
            &format!("/api/customers/{id}/bmi"),
            &json!({"heightCm": 175, "weightKg": 70}),
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["heightCm"], json!(175.0));
    assert_eq!(resp.body["weightKg"], json!(70.0));
    assert_eq!(resp.body["bmi"], json!(22.86));
    let date = resp.body["date"].as_str().unwrap();
    assert_eq!(date.len(), "2024-03-01T12:00:00.000Z".len(), "{date}");
    assert_eq!(&date[19..20], ".");
    assert!(date.ends_with('Z'));

    let customer = ctx.get(&format!("/api/customers/{id}")).await;
    assert_eq!(customer.body["bmiHistory"], json!([resp.body]));
}

#[tokio::test]
async fn test_bmi_entries_append_in_order() {
    let ctx = TestContext::new().await;
    let id = ctx.create_customer("Ada").await;
    let uri = format!("/api/customers/{id}/bmi");

    ctx.post_json(&uri, &json!({"heightCm": 180, "weightKg": 81}))
        .await;
    let second = ctx
        .post_json(&uri, &json!({"heightCm": 180, "weightKg": 90}))
        .await;

    let doc = ctx.document();
    let history = &doc.customers[0].bmi_history;
    assert_eq!(history.len(), 2);
    assert!((history[0].bmi - 25.0).abs() < f64::EPSILON);
    assert!((history[1].bmi - 27.78).abs() < f64::EPSILON);
    assert_eq!(second.body["bmi"], json!(27.78));
}

#[tokio::test]
async fn test_add_bmi_coerces_numeric_strings() {
    let ctx = TestContext::new().await;
    let id = ctx.create_customer("Ada").await;

    let resp = ctx
        .post_json(
            &format!("/api/customers/{id}/bmi"),
            &json!({"heightCm": "160", "weightKg": "55.5"}),
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["heightCm"], json!(160.0));
    assert_eq!(resp.body["weightKg"], json!(55.5));
    assert_eq!(resp.body["bmi"], json!(21.68));
}

#[tokio::test]
async fn test_add_bmi_rounds_exact_quotient() {
    let ctx = TestContext::new().await;
    let id = ctx.create_customer("Ada").await;

    let resp = ctx
        .post_json(
            &format!("/api/customers/{id}/bmi"),
            &json!({"heightCm": 200, "weightKg": 40.9}),
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["bmi"], json!(10.22));
    assert!((ctx.document().customers[0].bmi_history[0].bmi - 10.22).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_add_bmi_requires_both_measurements() {
    let ctx = TestContext::new().await;
    let id = ctx.create_customer("Ada").await;
    let before = ctx.raw_document();

    for body in [
        json!({"heightCm": 170}),
        json!({"weightKg": 70}),
        json!({"heightCm": "", "weightKg": 70}),
        json!({"heightCm": 0, "weightKg": 70}),
        json!({}),
    ] {
        let resp = ctx
            .post_json(&format!("/api/customers/{id}/bmi"), &body)
            .await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(
            resp.body,
            json!({"message": "Height (cm) and weight (kg) are required."})
        );
    }

    assert_eq!(ctx.raw_document(), before);
}

#[tokio::test]
async fn test_add_bmi_rejects_invalid_measurements() {
    let ctx = TestContext::new().await;
    let id = ctx.create_customer("Ada").await;

    for body in [
        json!({"heightCm": "tall", "weightKg": 70}),
        json!({"heightCm": -170, "weightKg": 70}),
    ] {
        let resp = ctx
            .post_json(&format!("/api/customers/{id}/bmi"), &body)
            .await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST, "{body}");
        assert!(resp.body["message"].is_string());
    }

    assert!(ctx.document().customers[0].bmi_history.is_empty());
}

#[tokio::test]
async fn test_add_bmi_unknown_customer() {
    let ctx = TestContext::new().await;
    ctx.create_customer("Ada").await;
    let before = ctx.raw_document();

    let resp = ctx
        .post_json(
            "/api/customers/customer-missing/bmi",
            &json!({"heightCm": 170, "weightKg": 70}),
        )
        .await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.body, json!({"message": "Customer not found."}));
    assert_eq!(ctx.raw_document(), before);
}

// ============================================================================
// Notes
// ============================================================================

#[tokio::test]
async fn test_add_note_entry() {
    let ctx = TestContext::new().await;
    let id = ctx.create_customer("Ada").await;

    let resp = ctx
        .post_json(
            &format!("/api/customers/{id}/notes"),
            &json!({"note": " Slept well ", "recommendation": "More fiber"}),
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["note"], "Slept well");
    assert_eq!(resp.body["recommendation"], "More fiber");
    assert_eq!(resp.body["date"].as_str().unwrap().len(), 24);

    let notes = &ctx.document().customers[0].notes;
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].note, "Slept well");
}

#[tokio::test]
async fn test_add_note_with_only_recommendation() {
    let ctx = TestContext::new().await;
    let id = ctx.create_customer("Ada").await;

    let resp = ctx
        .post_json(
            &format!("/api/customers/{id}/notes"),
            &json!({"recommendation": "Walk daily"}),
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["note"], "");
    assert_eq!(resp.body["recommendation"], "Walk daily");
}

#[tokio::test]
async fn test_add_note_requires_content() {
    let ctx = TestContext::new().await;
    let id = ctx.create_customer("Ada").await;

    for body in [json!({}), json!({"note": "", "recommendation": ""})] {
        let resp = ctx
            .post_json(&format!("/api/customers/{id}/notes"), &body)
            .await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.body,
            json!({"message": "Provide a note or recommendation."})
        );
    }

    assert!(ctx.document().customers[0].notes.is_empty());
}

#[tokio::test]
async fn test_add_note_unknown_customer() {
    let ctx = TestContext::new().await;
    let before = ctx.raw_document();

    let resp = ctx
        .post_json(
            "/api/customers/customer-missing/notes",
            &json!({"note": "hello"}),
        )
        .await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.body, json!({"message": "Customer not found."}));
    assert_eq!(ctx.raw_document(), before);
}

// ============================================================================
// Store failures
// ============================================================================

#[tokio::test]
async fn test_corrupt_store_fails_requests_without_overwriting() {
    let ctx = TestContext::new().await;
    std::fs::write(ctx.data_file(), "{ definitely not json").unwrap();

    let list = ctx.get("/api/customers").await;
    assert_eq!(list.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(list.body, json!({"message": "Internal server error"}));

    let create = ctx.post_json("/api/customers", &json!({"name": "Ada"})).await;
    assert_eq!(create.status, StatusCode::INTERNAL_SERVER_ERROR);

    let ready = ctx.get("/health/ready").await;
    assert_eq!(ready.status, StatusCode::SERVICE_UNAVAILABLE);

    assert_eq!(ctx.raw_document(), "{ definitely not json");
}
