use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};

use crate::dto::products::ErrorDto;

pub mod products;

/// JSON extractor settings: malformed bodies become `400 {error}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorDto::new(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

/// Register the product API on an application or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(products::create_product)
        .service(products::list_products)
        .service(products::get_product)
        .service(products::update_product)
        .service(products::delete_product);
}
