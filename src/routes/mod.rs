use crate::types::error::AppError;
use crate::utils::webutils::validate_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod auth;
pub mod health;
pub mod organisation;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = HttpAuthentication::bearer(validate_token);

    // malformed bodies get the same envelope as every other failure
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/register").service(auth::register::register)
    );
    cfg.service(
        web::scope("/login").service(auth::login::login)
    );
    cfg.service(
        web::scope("/organisations")
            .service(organisation::list::list_organisations)
            .service(organisation::get::get_organisation)
            .wrap(user_auth.clone())
    );
    cfg.service(
        web::scope("/users")
            .service(user::get::get_user)
            .wrap(user_auth)
    );
}
