use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use org_auth::db::postgres_service::PostgresService;

pub mod client;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

pub struct TestContext {
    pub db: Arc<PostgresService>,
    #[allow(dead_code)]
    pub db_url: String,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres.start().await.expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService")
        );

        TestContext {
            db,
            db_url,
            _container: container,
        }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use serde_json::{json, Value};

    pub fn sample_registration() -> Value {
        json!({
            "firstName": "John",
            "lastName": "Doe",
            "email": "john@example.com",
            "password": "securepassword",
            "phone": "1234567890"
        })
    }

    pub fn registration_with_email(first_name: &str, email: &str) -> Value {
        json!({
            "firstName": first_name,
            "lastName": "Doe",
            "email": email,
            "password": "securepassword"
        })
    }

    pub fn login(email: &str, password: &str) -> Value {
        json!({ "email": email, "password": password })
    }
}
