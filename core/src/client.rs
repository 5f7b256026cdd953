//! Stateless HTTP request builder and response parser for the products API.
//!
//! # Design
//! `ProductClient` holds only the resource URL. Each operation is split into
//! a `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`, so the I/O boundary stays explicit and
//! everything here is testable without a server.
//!
//! Status handling follows the server contract: list and get accept any 2xx,
//! create and update accept any 2xx with a product body, and delete succeeds
//! only on `204 No Content`. Rejected writes read the optional `error` field
//! of the JSON body and fall back to a per-operation message.

use serde::Deserialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Product, ProductId, ProductInput};

const NO_CONTENT: u16 = 204;

/// Synchronous, stateless client for the products API.
#[derive(Debug, Clone)]
pub struct ProductClient {
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl ProductClient {
    /// `base_url` is the products collection itself, e.g.
    /// `https://host/api/products`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: &ProductId) -> String {
        format!("{}/{id}", self.base_url)
    }

    fn json_request(
        &self,
        method: HttpMethod,
        path: String,
        input: &ProductInput,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_list_products(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.base_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_product(&self, id: &ProductId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_product(&self, input: &ProductInput) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, self.base_url.clone(), input)
    }

    pub fn build_update_product(
        &self,
        id: &ProductId,
        input: &ProductInput,
    ) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, self.item_url(id), input)
    }

    pub fn build_delete_product(&self, id: &ProductId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_products(&self, response: HttpResponse) -> Result<Vec<Product>, ApiError> {
        if !response.is_success() {
            return Err(ApiError::Fetch("Failed to fetch products.".to_string()));
        }
        deserialize(&response)
    }

    pub fn parse_get_product(
        &self,
        id: &ProductId,
        response: HttpResponse,
    ) -> Result<Product, ApiError> {
        if response.status == 404 {
            return Err(ApiError::NotFound);
        }
        if !response.is_success() {
            return Err(ApiError::Fetch(format!("Failed to fetch product {id}.")));
        }
        deserialize(&response)
    }

    pub fn parse_create_product(&self, response: HttpResponse) -> Result<Product, ApiError> {
        if !response.is_success() {
            return Err(rejection(&response, || "Failed to create product.".to_string()));
        }
        deserialize(&response)
    }

    pub fn parse_update_product(
        &self,
        id: &ProductId,
        response: HttpResponse,
    ) -> Result<Product, ApiError> {
        if !response.is_success() {
            return Err(rejection(&response, || {
                format!("Failed to update product {id}.")
            }));
        }
        deserialize(&response)
    }

    /// Returns `true` on `204`. Every other status, 2xx included, is a
    /// rejection.
    pub fn parse_delete_product(
        &self,
        id: &ProductId,
        response: HttpResponse,
    ) -> Result<bool, ApiError> {
        if response.status != NO_CONTENT {
            return Err(rejection(&response, || {
                format!("Failed to delete product {id}.")
            }));
        }
        Ok(true)
    }
}

fn deserialize<T: serde::de::DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Build a `Validation` error from a rejected write. An absent, empty or
/// unparsable `error` field falls back to `fallback`.
fn rejection(response: &HttpResponse, fallback: impl FnOnce() -> String) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(fallback);
    ApiError::Validation {
        status: Some(response.status),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Price;

    const BASE: &str = "http://localhost:3000/api/products";

    fn client() -> ProductClient {
        ProductClient::new(BASE)
    }

    fn widget_json(id: u64) -> String {
        format!(r#"{{"id":{id},"name":"Widget","price":9.9,"description":"desc"}}"#)
    }

    #[test]
    fn build_list_products_produces_correct_request() {
        let req = client().build_list_products();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, BASE);
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_product_appends_id() {
        let req = client().build_get_product(&ProductId::Number(12));
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, format!("{BASE}/12"));
    }

    #[test]
    fn build_create_product_produces_correct_request() {
        let input = ProductInput::new("Widget", 9.9, "desc");
        let req = client().build_create_product(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, BASE);
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Widget");
        assert_eq!(body["price"], 9.9);
        assert_eq!(body["description"], "desc");
    }

    #[test]
    fn build_update_product_targets_item() {
        let input = ProductInput::new("Lamp", 20.0, "");
        let req = client()
            .build_update_product(&ProductId::from("abc"), &input)
            .unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, format!("{BASE}/abc"));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Lamp");
    }

    #[test]
    fn build_delete_product_produces_correct_request() {
        let req = client().build_delete_product(&ProductId::Number(3));
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, format!("{BASE}/3"));
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ProductClient::new("http://localhost:3000/api/products/");
        assert_eq!(client.base_url(), BASE);
        assert_eq!(client.build_list_products().path, BASE);
    }

    #[test]
    fn parse_list_products_keeps_server_order() {
        let body = format!("[{},{}]", widget_json(2), widget_json(1));
        let products = client()
            .parse_list_products(HttpResponse::new(200, body))
            .unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, ProductId::Number(2));
        assert_eq!(products[1].id, ProductId::Number(1));
    }

    #[test]
    fn parse_list_products_failure_is_fetch_error() {
        let err = client()
            .parse_list_products(HttpResponse::new(500, r#"{"error":"db down"}"#))
            .unwrap_err();
        assert_eq!(err, ApiError::Fetch("Failed to fetch products.".to_string()));
    }

    #[test]
    fn parse_list_products_bad_json() {
        let err = client()
            .parse_list_products(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_get_product_not_found() {
        let err = client()
            .parse_get_product(&ProductId::Number(9), HttpResponse::new(404, ""))
            .unwrap_err();
        assert_eq!(err, ApiError::NotFound);
    }

    #[test]
    fn parse_create_product_accepts_200_and_201() {
        for status in [200, 201] {
            let product = client()
                .parse_create_product(HttpResponse::new(status, widget_json(1)))
                .unwrap();
            assert_eq!(product.name, "Widget");
            assert_eq!(product.price, Price::new(9.9));
        }
    }

    #[test]
    fn parse_create_product_uses_server_message() {
        let err = client()
            .parse_create_product(HttpResponse::new(400, r#"{"error":"name required"}"#))
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Validation {
                status: Some(400),
                message: "name required".to_string(),
            }
        );
        assert_eq!(err.to_string(), "name required");
    }

    #[test]
    fn parse_create_product_falls_back_without_message() {
        for body in ["", "{}", r#"{"error":""}"#, "<html>oops</html>"] {
            let err = client()
                .parse_create_product(HttpResponse::new(500, body))
                .unwrap_err();
            assert_eq!(err.to_string(), "Failed to create product.", "body {body:?}");
        }
    }

    #[test]
    fn parse_update_product_fallback_names_id() {
        let err = client()
            .parse_update_product(&ProductId::Number(4), HttpResponse::new(500, ""))
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to update product 4.");
    }

    #[test]
    fn parse_delete_product_success() {
        let deleted = client()
            .parse_delete_product(&ProductId::Number(4), HttpResponse::new(204, ""))
            .unwrap();
        assert!(deleted);
    }

    #[test]
    fn parse_delete_product_requires_204() {
        let err = client()
            .parse_delete_product(&ProductId::Number(4), HttpResponse::new(200, "{}"))
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Validation {
                status: Some(200),
                message: "Failed to delete product 4.".to_string(),
            }
        );
    }

    #[test]
    fn parse_delete_product_not_found_carries_message() {
        let err = client()
            .parse_delete_product(
                &ProductId::Number(4),
                HttpResponse::new(404, r#"{"error":"Product not found"}"#),
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "Product not found");
    }
}
