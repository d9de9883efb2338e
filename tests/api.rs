use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use pushkind_catalog::db::establish_connection_pool;
use pushkind_catalog::repository::{DieselRepository, ProductWriter};
use pushkind_catalog::routes;
use serde_json::{Value, json};
use tempfile::NamedTempFile;

mod common;

use common::{new_product, timestamp};

const MAX_BODY_SIZE: usize = 64 * 1024;

macro_rules! init_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo))
                .configure(|cfg| routes::configure(cfg, MAX_BODY_SIZE)),
        )
        .await
    };
}

fn valid_body() -> Value {
    json!({
        "name": "Desk lamp",
        "description": "Adjustable LED lamp",
        "price": 24.99,
        "stock": 0
    })
}

#[actix_web::test]
async fn create_then_get_returns_defaults() {
    let test_db = common::TestDb::new();
    let app = init_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(valid_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;

    assert_eq!(created["name"], "Desk lamp");
    assert_eq!(created["stock"], 0);
    assert_eq!(created["category"], "General");
    assert_eq!(created["isActive"], true);
    assert!(created["imageUrl"].is_null());
    assert!(created["createdAt"].is_string());

    let id = created["id"].as_i64().expect("id should be a number");
    let req = test::TestRequest::get()
        .uri(&format!("/api/products/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn create_rejects_invalid_payloads() {
    let test_db = common::TestDb::new();
    let app = init_app!(DieselRepository::new(test_db.pool()));

    let cases = [
        json!({ "name": "A", "description": "d", "price": 0, "stock": 1 }),
        json!({ "name": "A", "description": "d", "price": 5 }),
        json!({ "name": "A", "description": "d", "price": "5", "stock": 1 }),
        json!({ "name": "A", "description": "d", "price": 5, "stock": -1 }),
    ];

    for body in cases {
        let req = test::TestRequest::post()
            .uri("/api/products")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let error: Value = test::read_body_json(resp).await;
        assert!(error["error"].is_string());
    }

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let products: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(products, json!([]));
}

#[actix_web::test]
async fn missing_fields_list_required_fields() {
    let test_db = common::TestDb::new();
    let app = init_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(json!({ "name": "A" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(
        error["required"],
        json!(["name", "description", "price", "stock"])
    );
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let test_db = common::TestDb::new();
    let app = init_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::post()
        .uri("/api/products")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn oversized_body_is_a_bad_request() {
    let test_db = common::TestDb::new();
    let app = init_app!(DieselRepository::new(test_db.pool()));

    let mut body = valid_body();
    body["description"] = json!("x".repeat(MAX_BODY_SIZE + 1));

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(resp).await;
    assert!(error["error"].is_string());

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let products: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(products, json!([]));
}

#[actix_web::test]
async fn storage_failures_hide_details() {
    // A database without the products table.
    let tempfile = NamedTempFile::new().expect("Failed to create temp file");
    let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
        .expect("Failed to establish SQLite connection.");
    let app = init_app!(DieselRepository::new(pool));

    let requests = [
        test::TestRequest::get().uri("/api/products").to_request(),
        test::TestRequest::get().uri("/api/products/1").to_request(),
        test::TestRequest::post()
            .uri("/api/products")
            .set_json(valid_body())
            .to_request(),
    ];

    for req in requests {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }
}

#[actix_web::test]
async fn list_filters_and_storefront_view() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let visible = repo
        .create_product(&new_product("Novel", "Books", true, timestamp(1)))
        .expect("should create product");
    repo.create_product(&new_product("Atlas", "Books", false, timestamp(2)))
        .expect("should create product");
    let newest = repo
        .create_product(&new_product("Ball", "Sports", false, timestamp(3)))
        .expect("should create product");
    let app = init_app!(repo);

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.as_array().map(Vec::len), Some(3));
    assert_eq!(all[0]["id"], newest.id.get());

    let req = test::TestRequest::get()
        .uri("/api/products?isActive=true")
        .to_request();
    let active: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(active.as_array().map(Vec::len), Some(1));
    assert_eq!(active[0]["id"], visible.id.get());

    let req = test::TestRequest::get()
        .uri("/api/products?category=Books&isActive=false")
        .to_request();
    let hidden_books: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(hidden_books.as_array().map(Vec::len), Some(1));
    assert_eq!(hidden_books[0]["name"], "Atlas");

    let req = test::TestRequest::get()
        .uri("/api/products?category=%20Books%20")
        .to_request();
    let padded: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(padded, json!([]));

    let req = test::TestRequest::get()
        .uri("/api/storefront/products?isActive=false")
        .to_request();
    let storefront: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(storefront.as_array().map(Vec::len), Some(1));
    assert_eq!(storefront[0]["isActive"], true);
}

#[actix_web::test]
async fn get_reports_invalid_and_missing_ids() {
    let test_db = common::TestDb::new();
    let app = init_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::get().uri("/api/products/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"], "Invalid product ID");

    let req = test::TestRequest::get().uri("/api/products/9999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"], "Product not found");
}

#[actix_web::test]
async fn update_is_partial_and_idempotent() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let created = repo
        .create_product(&new_product("Mug", "General", true, timestamp(0)))
        .expect("should create product");
    let app = init_app!(repo);
    let uri = format!("/api/products/{}", created.id);

    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({ "stock": 3 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let first: Value = test::read_body_json(resp).await;
    assert_eq!(first["stock"], 3);
    assert_eq!(first["name"], "Mug");
    assert_eq!(first["price"], 9.99);
    assert_eq!(first["isActive"], true);

    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({ "stock": 3 }))
        .to_request();
    let second: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(first, second);

    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({ "price": "free" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri("/api/products/424242")
        .set_json(json!({ "stock": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri("/api/products/x1")
        .set_json(json!({ "stock": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn delete_confirms_and_second_delete_is_not_found() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let created = repo
        .create_product(&new_product("Kite", "Toys", true, timestamp(0)))
        .expect("should create product");
    let app = init_app!(repo);
    let uri = format!("/api/products/{}", created.id);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "message": "Product deleted successfully", "id": created.id.get() })
    );

    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri("/api/products/abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"], "Invalid product ID");
}

#[actix_web::test]
async fn health_categories_and_unknown_routes() {
    let test_db = common::TestDb::new();
    let app = init_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let health: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(health["status"], "ok");
    assert!(health["timestamp"].is_string());

    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let categories: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(categories[0], "General");
    assert_eq!(categories.as_array().map(Vec::len), Some(8));

    let req = test::TestRequest::get().uri("/api/unknown").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Route not found");
    assert_eq!(body["path"], "/api/unknown");
}
