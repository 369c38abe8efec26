mod common;

use common::TestApp;
use mongodb::bson::doc;

#[tokio::test]
async fn create_artist_works() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/artists", app.address))
        .json(&serde_json::json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "bio": "Painter from Lisbon",
            "avatar_url": "https://example.com/jane.png",
            "website": "janedoe.art",
            "instagram": "@janedoe"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(reqwest::StatusCode::CREATED, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["name"], "Jane Doe");
    assert_eq!(body["email"], "jane@example.com");
    assert_eq!(body["bio"], "Painter from Lisbon");
    assert_eq!(body["avatar_url"], "https://example.com/jane.png");
    assert_eq!(body["website"], "janedoe.art");
    assert_eq!(body["instagram"], "@janedoe");

    let artist_id = body["id"].as_str().expect("Response has no id");
    assert!(!artist_id.is_empty());

    // Verify the record landed in the store under the returned identity
    let stored = app
        .db
        .artists()
        .find_one(doc! { "_id": artist_id }, None)
        .await
        .unwrap()
        .expect("Artist not found in DB");

    assert_eq!(stored.name, "Jane Doe");
    assert_eq!(stored.email, "jane@example.com");

    app.cleanup().await;
}

#[tokio::test]
async fn create_artist_with_invalid_email_is_rejected() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/artists", app.address))
        .json(&serde_json::json!({
            "name": "Jane Doe",
            "email": "not-an-email"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(reqwest::StatusCode::UNPROCESSABLE_ENTITY, response.status());

    app.cleanup().await;
}

#[tokio::test]
async fn create_artist_with_malformed_avatar_url_is_rejected() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/artists", app.address))
        .json(&serde_json::json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "avatar_url": "not a url"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(reqwest::StatusCode::UNPROCESSABLE_ENTITY, response.status());

    app.cleanup().await;
}

#[tokio::test]
async fn list_artists_includes_created_artist() {
    let app = TestApp::spawn().await;

    let created = app.create_artist("Jane Doe", "jane@example.com").await;
    app.create_artist("John Smith", "john@example.com").await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/artists", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(reqwest::StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let artists = body.as_array().expect("Response is not an array");
    assert_eq!(artists.len(), 2);

    let jane = artists
        .iter()
        .find(|a| a["id"] == created["id"])
        .expect("Created artist missing from list");
    assert_eq!(jane["name"], "Jane Doe");
    assert_eq!(jane["email"], "jane@example.com");
    // Absent optional fields serialize as null
    assert!(jane["bio"].is_null());
    assert!(jane["avatar_url"].is_null());

    app.cleanup().await;
}

#[tokio::test]
async fn list_artists_respects_limit() {
    let app = TestApp::spawn().await;

    for i in 0..3 {
        app.create_artist(&format!("Artist {}", i), &format!("artist{}@example.com", i))
            .await;
    }

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/artists?limit=2", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(reqwest::StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body.as_array().unwrap().len(), 2);

    app.cleanup().await;
}
