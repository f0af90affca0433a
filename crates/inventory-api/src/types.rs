//! Wire DTOs for the inventory backend
//!
//! The backend speaks Spanish field names; the serde renames keep the wire
//! format intact while the Rust identifiers stay English. Responses are
//! decoded tolerantly where the backend is loose (monetary values arrive as
//! numbers, numeric strings, or null; unknown asset states must not fail a
//! whole listing).

use serde::{Deserialize, Serialize};

// =============================================================================
// Asset Types
// =============================================================================

/// Lifecycle state of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetStatus {
    /// In a warehouse, available for assignment
    #[serde(rename = "DISPONIBLE")]
    Available,
    /// Assigned to a person or location
    #[serde(rename = "ASIGNADO")]
    Assigned,
    /// Under repair
    #[serde(rename = "REPARACION")]
    InRepair,
    /// Written off
    #[serde(rename = "BAJA")]
    Decommissioned,
    /// A state this build does not know about
    #[serde(other)]
    Unknown,
}

impl AssetStatus {
    /// Whether the asset can still be moved between warehouses
    pub fn is_transferable(&self) -> bool {
        !matches!(self, AssetStatus::Decommissioned)
    }
}

/// An inventoried asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Backend identifier
    pub id: i64,
    /// Unique inventory code
    #[serde(rename = "codigo")]
    pub code: String,
    /// Display name
    #[serde(rename = "nombre")]
    pub name: String,
    /// Free-form description
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    /// Purchase value; tolerates number, numeric string, or null
    #[serde(rename = "valor_compra", default, deserialize_with = "money::deserialize")]
    pub purchase_value: Option<f64>,
    /// Acquisition date, as the backend sends it
    #[serde(rename = "fecha_adquisicion", default)]
    pub acquired_at: Option<String>,
    /// Current lifecycle state
    #[serde(rename = "estado")]
    pub status: AssetStatus,
    /// Category record embedded in listings
    #[serde(rename = "categoria", default)]
    pub category: Option<Category>,
    /// Warehouse record embedded in listings
    #[serde(rename = "bodega", default)]
    pub warehouse: Option<Warehouse>,
}

/// A storage location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    /// Backend identifier
    pub id: i64,
    /// Display name
    #[serde(rename = "nombre")]
    pub name: String,
    /// Physical location
    #[serde(rename = "ubicacion", default)]
    pub location: Option<String>,
}

/// An asset category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Backend identifier
    pub id: i64,
    /// Display name
    #[serde(rename = "nombre")]
    pub name: String,
    /// Code prefix used when generating asset codes
    #[serde(rename = "prefijo")]
    pub prefix: String,
}

// =============================================================================
// Movement Types
// =============================================================================

/// A recorded transfer of one or more assets
///
/// Field names on the wire follow the backend's ORM relation names, which
/// is why the origin and destination warehouse keys are so long.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movement {
    /// Backend identifier
    pub id: i64,
    /// Timestamp of the movement
    #[serde(rename = "fecha")]
    pub date: String,
    /// Operator note attached at transfer time
    #[serde(rename = "observacion", default)]
    pub observation: Option<String>,
    /// User who recorded the movement
    #[serde(rename = "usuarios", default)]
    pub responsible: Option<MovementUser>,
    /// Per-asset lines in this movement
    #[serde(rename = "detalles_movimiento", default)]
    pub details: Vec<MovementDetail>,
}

/// The user embedded in a movement record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementUser {
    /// Full display name
    #[serde(rename = "nombre_completo")]
    pub full_name: String,
}

/// One asset line inside a movement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementDetail {
    /// Backend identifier
    pub id: i64,
    /// The asset that moved
    #[serde(rename = "activos", default)]
    pub asset: Option<AssetRef>,
    /// Where the asset came from
    #[serde(
        rename = "bodegas_detalles_movimiento_bodega_origen_idTobodegas",
        default
    )]
    pub origin: Option<WarehouseRef>,
    /// Where the asset went
    #[serde(
        rename = "bodegas_detalles_movimiento_bodega_destino_idTobodegas",
        default
    )]
    pub destination: Option<WarehouseRef>,
}

/// Minimal asset reference embedded in movement details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetRef {
    /// Inventory code
    #[serde(rename = "codigo")]
    pub code: String,
    /// Display name
    #[serde(rename = "nombre")]
    pub name: String,
}

/// Minimal warehouse reference embedded in movement details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseRef {
    /// Display name
    #[serde(rename = "nombre")]
    pub name: String,
}

// =============================================================================
// Request Types
// =============================================================================

/// Body for creating an asset
#[derive(Debug, Clone, Serialize)]
pub struct NewAsset {
    /// Inventory code
    pub codigo: String,
    /// Display name
    pub nombre: String,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    /// Category to file the asset under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria_id: Option<i64>,
    /// Warehouse receiving the asset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bodega_id: Option<i64>,
    /// Purchase value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_compra: Option<f64>,
    /// Acquisition date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_adquisicion: Option<String>,
}

/// Body for creating a warehouse
#[derive(Debug, Clone, Serialize)]
pub struct NewWarehouse {
    /// Display name
    pub nombre: String,
    /// Physical location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ubicacion: Option<String>,
}

/// Body for creating a category
#[derive(Debug, Clone, Serialize)]
pub struct NewCategory {
    /// Display name
    pub nombre: String,
    /// Code prefix
    pub prefijo: String,
}

/// Body for transferring an asset between warehouses
#[derive(Debug, Clone, Serialize)]
pub struct TransferRequest {
    /// Asset to move
    pub activo_id: i64,
    /// Destination warehouse
    pub bodega_destino_id: i64,
    /// Operator note
    pub observacion: String,
}

// =============================================================================
// Auth Types
// =============================================================================

/// Body for the login endpoint
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Successful login response
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests
    pub token: String,
    /// The authenticated user's display record
    #[serde(rename = "usuario")]
    pub user: crate::session::SessionUser,
}

/// Tolerant deserializer for monetary values
mod money {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
