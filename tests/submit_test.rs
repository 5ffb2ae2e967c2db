//! End-to-end submission tests against a mocked webhook.

use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::{client, config_for_mock, spawn_relay, WEBHOOK_PATH};

#[tokio::test]
async fn test_valid_lead_is_forwarded_and_echoed() {
    let webhook = MockServer::start().await;
    let expected = json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "company": "",
        "message": "",
    });

    Mock::given(method("POST"))
        .and(path(WEBHOOK_PATH))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "received": true })))
        .expect(1)
        .mount(&webhook)
        .await;

    let relay = spawn_relay(config_for_mock(&webhook)).await;

    let res = client()
        .post(relay.url("/submit"))
        .json(&json!({ "name": "jane doe", "email": "jane@example.com" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "status": "success",
            "message": "Lead submitted successfully",
            "data": expected,
        })
    );
}

#[tokio::test]
async fn test_optional_fields_are_forwarded() {
    let webhook = MockServer::start().await;
    let expected = json!({
        "name": "Mary-Jane O'Neil",
        "email": "mj@acme.io",
        "company": "Acme",
        "message": "Interested in a demo",
    });

    Mock::given(method("POST"))
        .and(path(WEBHOOK_PATH))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&webhook)
        .await;

    let relay = spawn_relay(config_for_mock(&webhook)).await;

    let res = client()
        .post(relay.url("/submit"))
        .json(&json!({
            "name": "  MARY-JANE o'neil  ",
            "email": "mj@acme.io",
            "company": "Acme",
            "message": "Interested in a demo",
            "source": "landing-page",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"], expected);
}

#[tokio::test]
async fn test_title_cased_name_for_many_inputs() {
    let webhook = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&webhook)
        .await;

    let relay = spawn_relay(config_for_mock(&webhook)).await;
    let client = client();

    for (input, expected) in [
        ("jo", "Jo"),
        ("ANA MARIA", "Ana Maria"),
        ("\tjean-luc picard ", "Jean-Luc Picard"),
        ("o'brien", "O'Brien"),
    ] {
        let res = client
            .post(relay.url("/submit"))
            .json(&json!({ "name": input, "email": "x@example.com" }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200, "input {:?}", input);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["data"]["name"], expected, "input {:?}", input);
    }
}

#[tokio::test]
async fn test_empty_name_is_rejected_without_forwarding() {
    let webhook = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&webhook)
        .await;

    let relay = spawn_relay(config_for_mock(&webhook)).await;
    let client = client();

    for name in ["", "   "] {
        let res = client
            .post(relay.url("/submit"))
            .json(&json!({ "name": name, "email": "a@b.com" }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 422);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["detail"][0]["loc"], json!(["body", "name"]));
    }
}

#[tokio::test]
async fn test_invalid_email_is_rejected_without_forwarding() {
    let webhook = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&webhook)
        .await;

    let relay = spawn_relay(config_for_mock(&webhook)).await;
    let client = client();

    for email in [
        "not-an-email",
        "jo@",
        "@example.com",
        "jo@example",
        "jo example@x.com",
        "Jane <jane@example.com>",
        "jo@[1.2.3.4]",
        "\"jo smith\"@example.com",
    ] {
        let res = client
            .post(relay.url("/submit"))
            .json(&json!({ "name": "Jo", "email": email }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 422, "email {:?}", email);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["detail"][0]["loc"], json!(["body", "email"]));
    }
}

#[tokio::test]
async fn test_email_is_forwarded_in_canonical_form() {
    let webhook = MockServer::start().await;
    let expected = json!({
        "name": "Jo",
        "email": "Jo@example.com",
        "company": "",
        "message": "",
    });
    Mock::given(method("POST"))
        .and(path(WEBHOOK_PATH))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&webhook)
        .await;

    let relay = spawn_relay(config_for_mock(&webhook)).await;
    let res = client()
        .post(relay.url("/submit"))
        .json(&json!({ "name": "jo", "email": "  Jo@EXAMPLE.com " }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["email"], "Jo@example.com");
}

#[tokio::test]
async fn test_missing_fields_are_all_reported() {
    let webhook = MockServer::start().await;
    let relay = spawn_relay(config_for_mock(&webhook)).await;

    let res = client()
        .post(relay.url("/submit"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 422);
    let body: Value = res.json().await.unwrap();
    let locs: Vec<&Value> = body["detail"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| &e["loc"])
        .collect();
    assert_eq!(locs, vec![&json!(["body", "name"]), &json!(["body", "email"])]);
}
