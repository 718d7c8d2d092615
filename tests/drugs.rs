//! Integration tests for the drug endpoints

mod common;

use common::{auth_token, spawn_app};
use serde_json::{json, Value};

fn aspirin() -> Value {
    json!({
        "name": "Aspirin",
        "approved": true,
        "min_dose": 1,
        "max_dose": 10,
        "available_at": "2023-12-31"
    })
}

#[tokio::test]
async fn create_then_get_round_trips_submitted_fields() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let token = auth_token(&app, &client).await;

    let response = client
        .post(&format!("{}/drugs", &app.address))
        .bearer_auth(&token)
        .json(&aspirin())
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(201, response.status().as_u16());

    let created: Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_str().expect("Created drug carried no id");

    let response = client
        .get(&format!("{}/drugs/{}", &app.address, id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());

    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["name"], json!("Aspirin"));
    assert_eq!(fetched["approved"], json!(true));
    assert_eq!(fetched["min_dose"].as_f64(), Some(1.0));
    assert_eq!(fetched["max_dose"].as_f64(), Some(10.0));
    assert_eq!(fetched["available_at"], json!("2023-12-31"));
}

#[tokio::test]
async fn delete_removes_the_record() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let token = auth_token(&app, &client).await;

    let created: Value = client
        .post(&format!("{}/drugs", &app.address))
        .bearer_auth(&token)
        .json(&aspirin())
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Failed to parse response");
    let id = created["id"].as_str().unwrap();

    let response = client
        .delete(&format!("{}/drugs/{}", &app.address, id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());

    let confirmation: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(confirmation["statusCode"], json!(200));
    assert_eq!(confirmation["data"]["affected"], json!(1));
    assert!(confirmation["message"]
        .as_str()
        .unwrap()
        .contains("has been deleted"));

    // The record is gone afterwards
    let response = client
        .get(&format!("{}/drugs/{}", &app.address, id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn list_returns_404_on_empty_table() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let token = auth_token(&app, &client).await;

    let response = client
        .get(&format!("{}/drugs", &app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn list_returns_all_records() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let token = auth_token(&app, &client).await;

    for name in ["Aspirin", "Ibuprofen"] {
        let mut drug = aspirin();
        drug["name"] = json!(name);
        client
            .post(&format!("{}/drugs", &app.address))
            .bearer_auth(&token)
            .json(&drug)
            .send()
            .await
            .expect("Failed to execute request.");
    }

    let response = client
        .get(&format!("{}/drugs", &app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());

    let drugs: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(drugs.as_array().map(|a| a.len()), Some(2));
}

#[tokio::test]
async fn update_patches_only_submitted_fields() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let token = auth_token(&app, &client).await;

    let created: Value = client
        .post(&format!("{}/drugs", &app.address))
        .bearer_auth(&token)
        .json(&aspirin())
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Failed to parse response");
    let id = created["id"].as_str().unwrap();

    let response = client
        .patch(&format!("{}/drugs/{}", &app.address, id))
        .bearer_auth(&token)
        .json(&json!({ "approved": false, "max_dose": 20 }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());

    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["approved"], json!(false));
    assert_eq!(updated["max_dose"].as_f64(), Some(20.0));
    // untouched fields keep their stored values
    assert_eq!(updated["name"], json!("Aspirin"));
    assert_eq!(updated["min_dose"].as_f64(), Some(1.0));
}

#[tokio::test]
async fn update_nonexistent_id_returns_404() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let token = auth_token(&app, &client).await;

    let response = client
        .patch(&format!(
            "{}/drugs/{}",
            &app.address,
            uuid::Uuid::new_v4()
        ))
        .bearer_auth(&token)
        .json(&json!({ "name": "Ibuprofen" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn update_with_empty_body_returns_400() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let token = auth_token(&app, &client).await;

    let created: Value = client
        .post(&format!("{}/drugs", &app.address))
        .bearer_auth(&token)
        .json(&aspirin())
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Failed to parse response");
    let id = created["id"].as_str().unwrap();

    let response = client
        .patch(&format!("{}/drugs/{}", &app.address, id))
        .bearer_auth(&token)
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn delete_nonexistent_id_returns_404() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let token = auth_token(&app, &client).await;

    let response = client
        .delete(&format!(
            "{}/drugs/{}",
            &app.address,
            uuid::Uuid::new_v4()
        ))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn delete_with_malformed_id_returns_400() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let token = auth_token(&app, &client).await;

    let response = client
        .delete(&format!("{}/drugs/not-a-uuid", &app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn create_with_invalid_payload_returns_400() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let token = auth_token(&app, &client).await;

    let mut drug = aspirin();
    drug["min_dose"] = json!(-1);

    let response = client
        .post(&format!("{}/drugs", &app.address))
        .bearer_auth(&token)
        .json(&drug)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());

    let error: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(error["code"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn requests_without_token_are_rejected_before_validation() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    // A well-formed body makes no difference without a token
    let response = client
        .post(&format!("{}/drugs", &app.address))
        .json(&aspirin())
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(401, response.status().as_u16());

    let response = client
        .get(&format!("{}/drugs", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(401, response.status().as_u16());

    let response = client
        .get(&format!("{}/drugs", &app.address))
        .bearer_auth("tampered.token.here")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(401, response.status().as_u16());
}
