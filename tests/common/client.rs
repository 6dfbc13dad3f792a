use actix_web::{web, App};
use chrono::Duration;
use entity::user::Model as UserModel;
use std::sync::Arc;
use org_auth::{
    db::postgres_service::PostgresService,
    types::{error::AppError, user::DBUserCreate},
    utils::{password::hash_password, token::TokenService},
};

use super::TEST_JWT_SECRET;

pub struct TestClient {
    pub db: Arc<PostgresService>,
    pub tokens: web::Data<TokenService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient {
            db,
            tokens: web::Data::new(TokenService::new(TEST_JWT_SECRET, Duration::minutes(60))),
        }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(self.tokens.clone())
            .configure(org_auth::routes::configure_routes)
    }

    /// Registers straight through the database layer and returns the user
    /// with a valid access token.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, first_name: &str, email: &str) -> Result<(UserModel, String), AppError> {
        let password_hash = hash_password("securepassword").expect("Failed to hash password");

        let (user, _organisation) = self.db.register_user(DBUserCreate {
            first_name: first_name.to_string(),
            last_name: "Tester".to_string(),
            email: email.to_string(),
            password_hash,
            phone: None,
        }).await?;

        let access_token = self.tokens.issue(&user)?;

        Ok((user, access_token))
    }
}
