use actix_web::{HttpRequest, HttpResponse, Responder, get};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

use crate::domain::types::CATALOG_CATEGORIES;

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Product catalog service is running")
}

#[get("/api/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "message": "Product catalog service is running",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// Category names offered by the admin product form.
#[get("/api/categories")]
pub async fn list_categories() -> impl Responder {
    HttpResponse::Ok().json(CATALOG_CATEGORIES)
}

pub async fn not_found(request: HttpRequest) -> impl Responder {
    HttpResponse::NotFound().json(json!({
        "error": "Route not found",
        "path": request.path(),
    }))
}
