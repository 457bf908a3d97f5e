use actix_web::{dev::ServiceRequest, error::ErrorUnauthorized, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::config::config;
use crate::utils::token::verify_token;

pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    match verify_token(credentials.token(), &config().jwt_secret) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(req)
        }
        Err(_) => Err((ErrorUnauthorized("Invalid token").into(), req)),
    }
}
