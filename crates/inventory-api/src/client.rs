//! Typed client over the inventory endpoints
//!
//! [`InventoryBackend`] is the seam the application layers program against;
//! [`InventoryClient`] is the HTTP implementation. Tests swap in fakes at
//! the trait boundary.

use async_trait::async_trait;

use crate::http::{ApiClient, ApiError};
use crate::types::{
    Asset, Category, LoginRequest, LoginResponse, Movement, NewAsset, NewCategory, NewWarehouse,
    TransferRequest, Warehouse,
};

/// Operations the inventory backend exposes
#[async_trait]
pub trait InventoryBackend: Send + Sync {
    /// Authenticate with email and password
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// List all assets
    async fn list_assets(&self) -> Result<Vec<Asset>, ApiError>;

    /// Register a new asset
    async fn create_asset(&self, asset: &NewAsset) -> Result<(), ApiError>;

    /// Write off an asset
    async fn decommission_asset(&self, id: i64) -> Result<(), ApiError>;

    /// List all warehouses
    async fn list_warehouses(&self) -> Result<Vec<Warehouse>, ApiError>;

    /// Register a new warehouse
    async fn create_warehouse(&self, warehouse: &NewWarehouse) -> Result<(), ApiError>;

    /// Delete a warehouse
    async fn delete_warehouse(&self, id: i64) -> Result<(), ApiError>;

    /// List all categories
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// Register a new category
    async fn create_category(&self, category: &NewCategory) -> Result<(), ApiError>;

    /// Delete a category
    async fn delete_category(&self, id: i64) -> Result<(), ApiError>;

    /// List movement history, newest first as the backend orders it
    async fn list_movements(&self) -> Result<Vec<Movement>, ApiError>;

    /// Transfer an asset to another warehouse
    async fn transfer_asset(&self, request: &TransferRequest) -> Result<(), ApiError>;

    /// Fetch the general inventory report as PDF bytes
    async fn inventory_report(&self) -> Result<Vec<u8>, ApiError>;
}

/// HTTP implementation of [`InventoryBackend`]
#[derive(Debug, Clone)]
pub struct InventoryClient {
    api: ApiClient,
}

impl InventoryClient {
    /// Wrap an HTTP adapter
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// The underlying HTTP adapter
    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}

#[async_trait]
impl InventoryBackend for InventoryClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.api.post_json("/auth/login", request).await
    }

    async fn list_assets(&self) -> Result<Vec<Asset>, ApiError> {
        self.api.get_json("/activos").await
    }

    async fn create_asset(&self, asset: &NewAsset) -> Result<(), ApiError> {
        self.api.post_unit("/activos", asset).await
    }

    async fn decommission_asset(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("/activos/{id}")).await
    }

    async fn list_warehouses(&self) -> Result<Vec<Warehouse>, ApiError> {
        self.api.get_json("/bodegas").await
    }

    async fn create_warehouse(&self, warehouse: &NewWarehouse) -> Result<(), ApiError> {
        self.api.post_unit("/bodegas", warehouse).await
    }

    async fn delete_warehouse(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("/bodegas/{id}")).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.api.get_json("/categorias").await
    }

    async fn create_category(&self, category: &NewCategory) -> Result<(), ApiError> {
        self.api.post_unit("/categorias", category).await
    }

    async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("/categorias/{id}")).await
    }

    async fn list_movements(&self) -> Result<Vec<Movement>, ApiError> {
        self.api.get_json("/movimientos").await
    }

    async fn transfer_asset(&self, request: &TransferRequest) -> Result<(), ApiError> {
        self.api.post_unit("/movimientos/traslado", request).await
    }

    async fn inventory_report(&self) -> Result<Vec<u8>, ApiError> {
        self.api.get_bytes("/reportes/inventario").await
    }
}
