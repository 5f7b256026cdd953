//! `ProductClient` and a `Transport` joined into one call per operation.
//!
//! Every failure is logged at `error` level where it happens, before it is
//! returned.

use tracing::error;

use crate::client::ProductClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Product, ProductId, ProductInput};

#[derive(Debug, Clone)]
pub struct ProductApi<T> {
    client: ProductClient,
    transport: T,
}

impl<T: Transport> ProductApi<T> {
    pub fn new(client: ProductClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &ProductClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn list(&self) -> Result<Vec<Product>, ApiError> {
        let request = self.client.build_list_products();
        self.transport
            .execute(request)
            .map_err(|e| ApiError::Fetch(format!("Failed to fetch products: {e}")))
            .and_then(|response| self.client.parse_list_products(response))
            .inspect_err(|err| error!(%err, "error fetching products"))
    }

    pub fn get(&self, id: &ProductId) -> Result<Product, ApiError> {
        let request = self.client.build_get_product(id);
        self.transport
            .execute(request)
            .map_err(|e| ApiError::Fetch(format!("Failed to fetch product {id}: {e}")))
            .and_then(|response| self.client.parse_get_product(id, response))
            .inspect_err(|err| error!(%id, %err, "error fetching product"))
    }

    pub fn create(&self, input: &ProductInput) -> Result<Product, ApiError> {
        self.client
            .build_create_product(input)
            .and_then(|request| self.send_write(request))
            .and_then(|response| self.client.parse_create_product(response))
            .inspect_err(|err| error!(%err, "error creating product"))
    }

    pub fn update(&self, id: &ProductId, input: &ProductInput) -> Result<Product, ApiError> {
        self.client
            .build_update_product(id, input)
            .and_then(|request| self.send_write(request))
            .and_then(|response| self.client.parse_update_product(id, response))
            .inspect_err(|err| error!(%id, %err, "error updating product"))
    }

    pub fn delete(&self, id: &ProductId) -> Result<bool, ApiError> {
        let request = self.client.build_delete_product(id);
        self.send_write(request)
            .and_then(|response| self.client.parse_delete_product(id, response))
            .inspect_err(|err| error!(%id, %err, "error deleting product"))
    }

    fn send_write(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.transport
            .execute(request)
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
}
