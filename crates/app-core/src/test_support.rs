//! In-memory backend fake shared by the screen tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use inventory_api::http::ApiError;
use inventory_api::session::SessionUser;
use inventory_api::types::{
    Asset, AssetStatus, Category, LoginRequest, LoginResponse, Movement, NewAsset, NewCategory,
    NewWarehouse, TransferRequest, Warehouse,
};
use inventory_api::InventoryBackend;

#[derive(Default)]
struct Inner {
    assets: Vec<Asset>,
    warehouses: Vec<Warehouse>,
    categories: Vec<Category>,
    movements: Vec<Movement>,
    calls: Vec<String>,
    fail_on: Option<(String, u16, Option<String>)>,
}

/// Scripted [`InventoryBackend`] that records every call and can be told to
/// fail a single operation. Clones share state so tests can inspect calls
/// after handing the fake to a screen.
#[derive(Clone, Default)]
pub struct FakeBackend {
    inner: Arc<Mutex<Inner>>,
}

pub fn asset(id: i64, code: &str, name: &str, status: AssetStatus, value: Option<f64>) -> Asset {
    Asset {
        id,
        code: code.to_string(),
        name: name.to_string(),
        description: None,
        purchase_value: value,
        acquired_at: None,
        status,
        category: None,
        warehouse: None,
    }
}

pub fn warehouse(id: i64, name: &str) -> Warehouse {
    Warehouse { id, name: name.to_string(), location: None }
}

pub fn category(id: i64, name: &str, prefix: &str) -> Category {
    Category { id, name: name.to_string(), prefix: prefix.to_string() }
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fake pre-loaded with a small realistic data set
    pub fn with_sample_data() -> Self {
        let fake = Self::new();
        {
            let mut inner = fake.inner.lock().unwrap();
            inner.assets = vec![
                asset(1, "EQ-001", "Laptop", AssetStatus::Available, Some(1200.0)),
                asset(2, "EQ-002", "Proyector", AssetStatus::Assigned, Some(800.0)),
                asset(3, "EQ-003", "Monitor", AssetStatus::Decommissioned, Some(150.0)),
            ];
            inner.warehouses = vec![warehouse(1, "Bodega Central"), warehouse(2, "Bodega Norte")];
            inner.categories = vec![category(1, "Equipos", "EQ")];
        }
        fake
    }

    /// Make the named operation fail with a server error
    pub fn fail_on(&self, operation: &str, status: u16, message: Option<&str>) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_on = Some((operation.to_string(), status, message.map(str::to_string)));
    }

    /// All operations invoked so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// How many times the named operation was invoked
    pub fn call_count(&self, operation: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|c| *c == operation)
            .count()
    }

    fn record(&self, operation: &str) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(operation.to_string());
        if let Some((op, status, message)) = &inner.fail_on {
            if op == operation {
                return Err(ApiError::Server { status: *status, message: message.clone() });
            }
        }
        Ok(())
    }
}

#[async_trait]
impl InventoryBackend for FakeBackend {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.record("login")?;
        Ok(LoginResponse {
            token: "fake-token".to_string(),
            user: SessionUser {
                name: request.email.clone(),
                extra: serde_json::Value::Null,
            },
        })
    }

    async fn list_assets(&self) -> Result<Vec<Asset>, ApiError> {
        self.record("list_assets")?;
        Ok(self.inner.lock().unwrap().assets.clone())
    }

    async fn create_asset(&self, asset: &NewAsset) -> Result<(), ApiError> {
        self.record("create_asset")?;
        let mut inner = self.inner.lock().unwrap();
        let id = inner.assets.len() as i64 + 1;
        inner.assets.push(Asset {
            id,
            code: asset.codigo.clone(),
            name: asset.nombre.clone(),
            description: asset.descripcion.clone(),
            purchase_value: asset.valor_compra,
            acquired_at: asset.fecha_adquisicion.clone(),
            status: AssetStatus::Available,
            category: None,
            warehouse: None,
        });
        Ok(())
    }

    async fn decommission_asset(&self, id: i64) -> Result<(), ApiError> {
        self.record("decommission_asset")?;
        let mut inner = self.inner.lock().unwrap();
        if let Some(a) = inner.assets.iter_mut().find(|a| a.id == id) {
            a.status = AssetStatus::Decommissioned;
        }
        Ok(())
    }

    async fn list_warehouses(&self) -> Result<Vec<Warehouse>, ApiError> {
        self.record("list_warehouses")?;
        Ok(self.inner.lock().unwrap().warehouses.clone())
    }

    async fn create_warehouse(&self, warehouse: &NewWarehouse) -> Result<(), ApiError> {
        self.record("create_warehouse")?;
        let mut inner = self.inner.lock().unwrap();
        let id = inner.warehouses.len() as i64 + 1;
        inner.warehouses.push(Warehouse {
            id,
            name: warehouse.nombre.clone(),
            location: warehouse.ubicacion.clone(),
        });
        Ok(())
    }

    async fn delete_warehouse(&self, id: i64) -> Result<(), ApiError> {
        self.record("delete_warehouse")?;
        self.inner.lock().unwrap().warehouses.retain(|w| w.id != id);
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.record("list_categories")?;
        Ok(self.inner.lock().unwrap().categories.clone())
    }

    async fn create_category(&self, category: &NewCategory) -> Result<(), ApiError> {
        self.record("create_category")?;
        let mut inner = self.inner.lock().unwrap();
        let id = inner.categories.len() as i64 + 1;
        inner.categories.push(Category {
            id,
            name: category.nombre.clone(),
            prefix: category.prefijo.clone(),
        });
        Ok(())
    }

    async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.record("delete_category")?;
        self.inner.lock().unwrap().categories.retain(|c| c.id != id);
        Ok(())
    }

    async fn list_movements(&self) -> Result<Vec<Movement>, ApiError> {
        self.record("list_movements")?;
        Ok(self.inner.lock().unwrap().movements.clone())
    }

    async fn transfer_asset(&self, request: &TransferRequest) -> Result<(), ApiError> {
        self.record("transfer_asset")?;
        let mut inner = self.inner.lock().unwrap();
        let id = inner.movements.len() as i64 + 1;
        inner.movements.push(Movement {
            id,
            date: "2026-08-30T12:00:00.000Z".to_string(),
            observation: Some(request.observacion.clone()),
            responsible: None,
            details: vec![],
        });
        Ok(())
    }

    async fn inventory_report(&self) -> Result<Vec<u8>, ApiError> {
        self.record("inventory_report")?;
        Ok(b"%PDF-1.4 fake".to_vec())
    }
}
