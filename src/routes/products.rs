use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::products::{
    CreateProductForm, CreateProductPayload, ProductsQueryParams, UpdateProductForm,
};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::products::{
    create_product as create_product_service, delete_product as delete_product_service,
    get_product as get_product_service, list_products as list_products_service,
    update_product as update_product_service,
};
use crate::services::view::CatalogView;

#[get("/api/products")]
pub async fn list_products(
    params: web::Query<ProductsQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_products_service(&params, CatalogView::Admin, repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => error_response(err),
    }
}

#[get("/api/storefront/products")]
pub async fn list_storefront_products(
    params: web::Query<ProductsQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_products_service(&params, CatalogView::Storefront, repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => error_response(err),
    }
}

#[post("/api/products")]
pub async fn create_product(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateProductForm>,
) -> impl Responder {
    let payload: CreateProductPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match create_product_service(payload, repo.get_ref()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(err) => error_response(err),
    }
}

#[get("/api/products/{product_id}")]
pub async fn get_product(
    product_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_product_service(&product_id, repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err),
    }
}

#[put("/api/products/{product_id}")]
pub async fn update_product(
    product_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateProductForm>,
) -> impl Responder {
    match update_product_service(&product_id, form, repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err),
    }
}

#[delete("/api/products/{product_id}")]
pub async fn delete_product(
    product_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_product_service(&product_id, repo.get_ref()) {
        Ok(deleted) => HttpResponse::Ok().json(deleted),
        Err(err) => error_response(err),
    }
}
