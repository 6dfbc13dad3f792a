use actix_web::{dev::ServiceRequest, web, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::types::error::AppError;
use crate::utils::token::TokenService;

/// Bearer validator for `HttpAuthentication`. Puts the verified claims in
/// the request extensions for `web::ReqData<Claims>`.
pub async fn validate_token(req: ServiceRequest, credentials: BearerAuth) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let verified = match req.app_data::<web::Data<TokenService>>() {
        Some(tokens) => tokens.verify(credentials.token()),
        None => Err(AppError::Internal("token service not configured".to_string())),
    };

    match verified {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(req)
        }
        Err(e) => Err((e.into(), req)),
    }
}
