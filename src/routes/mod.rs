use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::forms::products::{ProductFormError, REQUIRED_FIELDS};
use crate::services::ServiceError;

pub mod main;
pub mod products;

/// Register every endpoint of the catalog API on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig, max_body_size: usize) {
    cfg.app_data(json_config(max_body_size))
        .app_data(query_config())
        .service(main::index)
        .service(main::health)
        .service(main::list_categories)
        .service(products::list_storefront_products)
        .service(products::list_products)
        .service(products::create_product)
        .service(products::get_product)
        .service(products::update_product)
        .service(products::delete_product)
        .default_service(web::to(main::not_found));
}

/// Malformed or oversized JSON bodies are answered with a 400 in the API's error shape.
fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let response = HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
            InternalError::from_response(err, response).into()
        })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
        InternalError::from_response(err, response).into()
    })
}

/// Map a service failure to its HTTP status and JSON body.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Form(ProductFormError::MissingField(field)) => {
            HttpResponse::BadRequest().json(json!({
                "error": "Missing required fields",
                "field": field,
                "required": REQUIRED_FIELDS,
            }))
        }
        ServiceError::Form(err) => {
            HttpResponse::BadRequest().json(json!({ "error": err.to_string() }))
        }
        ServiceError::InvalidId(_) => {
            HttpResponse::BadRequest().json(json!({ "error": "Invalid product ID" }))
        }
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(json!({ "error": "Product not found" }))
        }
        ServiceError::Internal => {
            HttpResponse::InternalServerError().json(json!({ "error": "Internal server error" }))
        }
    }
}
