use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

use crate::utils::webutils::validate_token;

pub mod auth;
pub mod expense;
pub mod health;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let expense_auth = HttpAuthentication::bearer(validate_token);

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(web::scope("/register").service(auth::register::register));
    cfg.service(web::scope("/login").service(auth::login::login));
    cfg.service(
        web::scope("/api/expenses")
            .wrap(expense_auth)
            .service(expense::list::list)
            .service(expense::create::create)
            .service(expense::get::get)
            .service(expense::update::update)
            .service(expense::delete::delete),
    );
}
