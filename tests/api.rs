use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use product_service::repository::DieselRepository;
use product_service::routes::configure;

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DieselRepository::new($test_db.pool())))
                .configure(configure),
        )
        .await
    };
}

macro_rules! send {
    ($app:expr, $request:expr) => {{
        let response = test::call_service(&$app, $request.to_request()).await;
        let status = response.status();
        let bytes = test::read_body(response).await;
        let body: Value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response should be JSON")
        };
        (status, body)
    }};
}

#[actix_web::test]
async fn product_lifecycle_scenario() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let (status, created) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/products")
            .set_json(json!({"name": "Pen", "price": 1.5, "category": "Stationery"}))
    );
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("generated id");
    assert_eq!(created["name"], "Pen");
    assert_eq!(created["price"], 1.5);
    assert_eq!(created["category"], "Stationery");
    assert!(created["createdAt"].is_string());
    assert!(created["updatedAt"].is_string());

    let (status, listed) = send!(app, test::TestRequest::get().uri("/api/products"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created.clone()]));

    let (status, updated) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/products/{id}"))
            .set_json(json!({"price": 2.0}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["price"], 2.0);
    assert_eq!(updated["name"], "Pen");
    assert_eq!(updated["category"], "Stationery");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let (status, deleted) = send!(
        app,
        test::TestRequest::delete().uri(&format!("/api/products/{id}"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({"message": "Product deleted successfully"}));

    let (status, missing) = send!(
        app,
        test::TestRequest::get().uri(&format!("/api/products/{id}"))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing, json!({"message": "Product not found"}));
}

#[actix_web::test]
async fn created_product_reads_back_unchanged() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let (_, created) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/products")
            .set_json(json!({"name": "Desk Lamp", "price": 0, "category": "Lighting"}))
    );
    let id = created["id"].as_i64().expect("generated id");

    let (status, fetched) = send!(
        app,
        test::TestRequest::get().uri(&format!("/api/products/{id}"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    assert_eq!(fetched["price"], 0.0);
}

#[actix_web::test]
async fn invalid_creates_are_rejected_without_writes() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let cases = [
        (
            json!({"price": 1.0, "category": "Stationery"}),
            "Product validation failed: name: Product name is required",
        ),
        (
            json!({"name": "Pen", "category": "Stationery"}),
            "Product validation failed: price: Product price is required",
        ),
        (
            json!({"name": "Pen", "price": 1.0}),
            "Product validation failed: category: Product category is required",
        ),
        (
            json!({"name": "Pen", "price": -1.0, "category": "Stationery"}),
            "Product validation failed: price: Price cannot be negative",
        ),
    ];

    for (payload, message) in cases {
        let (status, body) = send!(
            app,
            test::TestRequest::post()
                .uri("/api/products")
                .set_json(payload)
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": message}));
    }

    let (_, listed) = send!(app, test::TestRequest::get().uri("/api/products"));
    assert_eq!(listed, json!([]));
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/products")
            .set_json(json!({"name": "Pen", "price": "cheap", "category": "Stationery"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn unknown_ids_are_not_found() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);
    let not_found = json!({"message": "Product not found"});

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/products/999"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found);

    let (status, body) = send!(
        app,
        test::TestRequest::put()
            .uri("/api/products/999")
            .set_json(json!({"name": "Marker"}))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found);

    let (status, body) = send!(app, test::TestRequest::delete().uri("/api/products/999"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found);
}

#[actix_web::test]
async fn malformed_ids_follow_the_endpoint_failure_status() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/products/abc"));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());

    let (status, _) = send!(
        app,
        test::TestRequest::put()
            .uri("/api/products/abc")
            .set_json(json!({"price": 3.0}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send!(app, test::TestRequest::delete().uri("/api/products/abc"));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn invalid_update_leaves_product_untouched() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let (_, created) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/products")
            .set_json(json!({"name": "Pen", "price": 1.5, "category": "Stationery"}))
    );
    let id = created["id"].as_i64().expect("generated id");

    let (status, body) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/products/{id}"))
            .set_json(json!({"name": "Marker", "price": -2.0}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Validation failed: price: Price cannot be negative"})
    );

    let (_, fetched) = send!(
        app,
        test::TestRequest::get().uri(&format!("/api/products/{id}"))
    );
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn surrounding_whitespace_is_stored_as_sent() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let (status, created) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/products")
            .set_json(json!({"name": "  Pen ", "price": 1.5, "category": "Stationery "}))
    );
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("generated id");

    let (status, fetched) = send!(
        app,
        test::TestRequest::get().uri(&format!("/api/products/{id}"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "  Pen ");
    assert_eq!(fetched["price"], 1.5);
    assert_eq!(fetched["category"], "Stationery ");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/products")
            .set_json(json!({"name": "   ", "price": 1.5, "category": "Stationery"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Product validation failed: name cannot be empty"})
    );
}

#[actix_web::test]
async fn null_update_fields_are_rejected() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let (_, created) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/products")
            .set_json(json!({"name": "Pen", "price": 1.5, "category": "Stationery"}))
    );
    let id = created["id"].as_i64().expect("generated id");

    let cases = [
        (
            json!({"name": null}),
            "Validation failed: name: Product name is required",
        ),
        (
            json!({"price": null}),
            "Validation failed: price: Product price is required",
        ),
        (
            json!({"category": null}),
            "Validation failed: category: Product category is required",
        ),
    ];

    for (payload, message) in cases {
        let (status, body) = send!(
            app,
            test::TestRequest::put()
                .uri(&format!("/api/products/{id}"))
                .set_json(payload)
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": message}));
    }

    let (_, fetched) = send!(
        app,
        test::TestRequest::get().uri(&format!("/api/products/{id}"))
    );
    assert_eq!(fetched, created);
}
