use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub description: String,
}

/// Body accepted by both create and update. Every field is optional at the
/// JSON level so missing values produce a `400` with a readable message
/// instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

/// A validated payload, ready to be stored.
#[derive(Debug, PartialEq)]
pub struct ValidProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl ProductPayload {
    pub fn validate(self) -> Result<ValidProduct, ServerError> {
        let name = self.name.unwrap_or_default();
        if name.trim().is_empty() {
            return Err(ServerError::Invalid("name required".to_string()));
        }
        let price = match self.price {
            Some(price) if price.is_finite() && price >= 0.0 => price,
            _ => {
                return Err(ServerError::Invalid(
                    "price must be a non-negative number".to_string(),
                ))
            }
        };
        Ok(ValidProduct {
            name,
            price,
            description: self.description.unwrap_or_default(),
        })
    }
}

/// Error responses, always rendered as `{"error": "..."}`.
#[derive(Debug, PartialEq)]
pub enum ServerError {
    NotFound,
    Invalid(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ServerError::NotFound => (StatusCode::NOT_FOUND, "Product not found".to_string()),
            ServerError::Invalid(message) => (StatusCode::BAD_REQUEST, message),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::Invalid(rejection.body_text())
    }
}

/// Products in creation order.
pub type Db = Arc<RwLock<Vec<Product>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Unparsable ids can never match a stored product, so they read as missing.
fn parse_id(raw: &str) -> Result<Uuid, ServerError> {
    Uuid::parse_str(raw).map_err(|_| ServerError::NotFound)
}

async fn list_products(State(db): State<Db>) -> Json<Vec<Product>> {
    let products = db.read().await;
    Json(products.clone())
}

async fn create_product(
    State(db): State<Db>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ServerError> {
    let Json(payload) = payload?;
    let valid = payload.validate()?;
    let product = Product {
        id: Uuid::new_v4(),
        name: valid.name,
        price: valid.price,
        description: valid.description,
    };
    debug!(id = %product.id, "created product");
    db.write().await.push(product.clone());
    Ok((StatusCode::CREATED, Json(product)))
}

async fn get_product(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ServerError> {
    let id = parse_id(&id)?;
    let products = db.read().await;
    products
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or(ServerError::NotFound)
}

async fn update_product(
    State(db): State<Db>,
    Path(id): Path<String>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<Product>, ServerError> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let valid = payload.validate()?;
    let mut products = db.write().await;
    let product = products
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(ServerError::NotFound)?;
    product.name = valid.name;
    product.price = valid.price;
    product.description = valid.description;
    debug!(%id, "updated product");
    Ok(Json(product.clone()))
}

async fn delete_product(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let id = parse_id(&id)?;
    let mut products = db.write().await;
    let index = products
        .iter()
        .position(|p| p.id == id)
        .ok_or(ServerError::NotFound)?;
    products.remove(index);
    debug!(%id, "deleted product");
    Ok(StatusCode::NO_CONTENT)
}
