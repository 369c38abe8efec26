use gallery_service::config::GalleryConfig;
use gallery_service::services::GalleryDb;
use gallery_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub db: GalleryDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        std::env::set_var("MONGODB_URI", "mongodb://localhost:27017");

        let db_name = format!("gallery_test_{}", Uuid::new_v4());

        let mut config = GalleryConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            db,
            db_name,
        }
    }

    /// Create an artist through the API and return the response body.
    #[allow(dead_code)]
    pub async fn create_artist(&self, name: &str, email: &str) -> serde_json::Value {
        let client = reqwest::Client::new();
        let response = client
            .post(format!("{}/artists", self.address))
            .json(&serde_json::json!({ "name": name, "email": email }))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(reqwest::StatusCode::CREATED, response.status());
        response.json().await.expect("Failed to parse JSON")
    }

    /// Create an artwork through the API and return the response body.
    #[allow(dead_code)]
    pub async fn create_artwork(&self, body: serde_json::Value) -> serde_json::Value {
        let client = reqwest::Client::new();
        let response = client
            .post(format!("{}/artworks", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(reqwest::StatusCode::CREATED, response.status());
        response.json().await.expect("Failed to parse JSON")
    }

    /// Cleanup test resources (drop the test database).
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
