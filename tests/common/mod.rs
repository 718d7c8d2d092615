use std::net::TcpListener;

use pharmatrack::configuration::{get_configuration, DatabaseSettings};
use pharmatrack::startup::run;
use serde_json::json;
use sqlx::{Connection, Executor, PgConnection, PgPool};

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

pub async fn spawn_app() -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_configuration().expect("Failed to read configuration.");
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();
    let connection_pool = configure_database(&configuration.database).await;

    let jwt_config = configuration.jwt.clone();
    let server =
        run(listener, connection_pool.clone(), jwt_config).expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool: connection_pool,
    }
}

pub async fn configure_database(config: &DatabaseSettings) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect(&config.connection_string_without_db())
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(&*format!(r#"CREATE DATABASE "{}";"#, config.database_name))
        .await
        .expect("Failed to create database.");
    // Migrate database
    let connection_pool = PgPool::connect(&config.connection_string())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database.");
    connection_pool
}

/// Signs up a fresh user and logs in, returning a valid bearer token.
#[allow(dead_code)]
pub async fn auth_token(app: &TestApp, client: &reqwest::Client) -> String {
    let email = format!("{}@example.com", uuid::Uuid::new_v4());

    let response = client
        .post(&format!("{}/auth/signup", app.address))
        .json(&json!({
            "name": "Test User",
            "email": email,
            "password": "password123"
        }))
        .send()
        .await
        .expect("Failed to execute signup request.");
    assert_eq!(201, response.status().as_u16());

    let response = client
        .post(&format!("{}/auth/login", app.address))
        .json(&json!({
            "email": email,
            "password": "password123"
        }))
        .send()
        .await
        .expect("Failed to execute login request.");
    assert_eq!(201, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    body["token"]
        .as_str()
        .expect("Login response carried no token")
        .to_string()
}
