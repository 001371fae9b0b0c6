// ============================================================================
// EXPORT - Documento de configuración descargable
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigExport {
    pub timestamp: String,
    pub version: String,
    pub database: DatabaseInfo,
    pub apis: ApiSummary,
    pub iot_devices: IotSummary,
    pub routes: RouteSummary,
    pub settings: ExportSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSummary {
    pub google_maps: ApiEntry,
    #[serde(rename = "openAI")]
    pub open_ai: ApiEntry,
    pub whatsapp: ApiEntry,
}

/// Entrada de API: solo `status` es obligatorio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEntry {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IotSummary {
    pub total: u32,
    pub online: u32,
    pub offline: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub active: u32,
    pub optimized: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    pub language: String,
    pub accessibility: bool,
    pub notifications: String,
}
