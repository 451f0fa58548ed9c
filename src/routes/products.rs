use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use log::error;

use crate::dto::products::{ErrorDto, MessageDto};
use crate::forms::products::{CreateProductForm, UpdateProductForm};
use crate::repository::DieselRepository;
use crate::services::products::{
    create_product as create_product_service, delete_product as delete_product_service,
    get_product as get_product_service, list_products as list_products_service,
    update_product as update_product_service,
};
use crate::services::{ServiceError, ServiceResult};

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const PRODUCT_DELETED: &str = "Product deleted successfully";

/// Run a synchronous service call on the blocking thread pool.
async fn run_blocking<T, F>(f: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(f).await.unwrap_or_else(|e| {
        error!("Blocking service call failed: {e}");
        Err(ServiceError::Internal)
    })
}

/// Map a service failure onto a response.
///
/// Missing products are always `404 {message}`; every other failure is
/// reported as `{error}` with the endpoint's `failure_status`.
pub fn error_response(err: ServiceError, failure_status: StatusCode) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(MessageDto::new(PRODUCT_NOT_FOUND)),
        err => HttpResponse::build(failure_status).json(ErrorDto::new(err.to_string())),
    }
}

#[post("/api/products")]
pub async fn create_product(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateProductForm>,
) -> impl Responder {
    let repo = repo.into_inner();
    match run_blocking(move || create_product_service(form, repo.as_ref())).await {
        Ok(product) => HttpResponse::Created().json(product),
        Err(err) => error_response(err, StatusCode::BAD_REQUEST),
    }
}

#[get("/api/products")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    let repo = repo.into_inner();
    match run_blocking(move || list_products_service(repo.as_ref())).await {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => error_response(err, StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[get("/api/products/{id}")]
pub async fn get_product(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = id.into_inner();
    let repo = repo.into_inner();
    match run_blocking(move || get_product_service(&id, repo.as_ref())).await {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err, StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[put("/api/products/{id}")]
pub async fn update_product(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateProductForm>,
) -> impl Responder {
    let id = id.into_inner();
    let repo = repo.into_inner();
    match run_blocking(move || update_product_service(&id, form, repo.as_ref())).await {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err, StatusCode::BAD_REQUEST),
    }
}

#[delete("/api/products/{id}")]
pub async fn delete_product(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = id.into_inner();
    let repo = repo.into_inner();
    match run_blocking(move || delete_product_service(&id, repo.as_ref())).await {
        Ok(()) => HttpResponse::Ok().json(MessageDto::new(PRODUCT_DELETED)),
        Err(err) => error_response(err, StatusCode::INTERNAL_SERVER_ERROR),
    }
}
