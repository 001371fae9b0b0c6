// ============================================================================
// EXPORT SERVICE - Descarga del documento de configuración
// ============================================================================
// Construye el JSON de configuración del sistema y lo entrega al navegador
// como un único fichero (Blob + <a download> temporal).
// ============================================================================

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlElement, Url};

use crate::config::CONFIG;
use crate::models::export::{
    ApiEntry, ApiSummary, DatabaseInfo, ExportSettings, IotSummary, RouteSummary,
};
use crate::models::ConfigExport;

const IOT_TOTAL: u32 = 1247;
const IOT_ONLINE: u32 = 1205;
const ACTIVE_ROUTES: u32 = 24;

/// Documento de configuración con el timestamp dado (RFC 3339)
pub fn build_config_export(timestamp: String) -> ConfigExport {
    ConfigExport {
        timestamp,
        version: CONFIG.app_version.clone(),
        database: DatabaseInfo {
            kind: "PostgreSQL".to_string(),
            version: "13.8".to_string(),
        },
        apis: ApiSummary {
            google_maps: ApiEntry {
                status: "connected".to_string(),
                version: Some("v3".to_string()),
                model: None,
            },
            open_ai: ApiEntry {
                status: "connected".to_string(),
                version: None,
                model: Some("gpt-4".to_string()),
            },
            whatsapp: ApiEntry {
                status: "pending".to_string(),
                version: None,
                model: None,
            },
        },
        iot_devices: IotSummary {
            total: IOT_TOTAL,
            online: IOT_ONLINE,
            offline: IOT_TOTAL - IOT_ONLINE,
        },
        routes: RouteSummary {
            active: ACTIVE_ROUTES,
            optimized: true,
        },
        settings: ExportSettings {
            language: "multi".to_string(),
            accessibility: true,
            notifications: "enabled".to_string(),
        },
    }
}

/// JSON con sangría de dos espacios
pub fn export_json(export: &ConfigExport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(export)
}

/// Exporta la configuración actual: serializa y dispara una descarga
pub fn export_config() -> Result<(), JsValue> {
    let export = build_config_export(chrono::Utc::now().to_rfc3339());
    let contents = export_json(&export).map_err(|e| JsValue::from_str(&e.to_string()))?;
    download_json(&CONFIG.export_file_name, &contents)?;
    log::info!("📦 [EXPORT] {} generado ({} bytes)", CONFIG.export_file_name, contents.len());
    Ok(())
}

/// Entrega `contents` como fichero `file_name` de tipo application/json
pub fn download_json(file_name: &str, contents: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("No document"))?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(contents));

    let options = BlobPropertyBag::new();
    options.set_type("application/json");

    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let clicked = click_download_link(&document, &url, file_name);
    // La URL se revoca también cuando el enlace falla
    let revoked = Url::revoke_object_url(&url);
    clicked.and(revoked)
}

fn click_download_link(document: &Document, url: &str, file_name: &str) -> Result<(), JsValue> {
    let body = document.body().ok_or_else(|| JsValue::from_str("No body"))?;

    let anchor = document.create_element("a")?;
    anchor.set_attribute("href", url)?;
    anchor.set_attribute("download", file_name)?;

    body.append_child(&anchor)?;
    if let Some(link) = anchor.dyn_ref::<HtmlElement>() {
        link.click();
    }
    body.remove_child(&anchor)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_has_exactly_the_expected_keys() {
        let export = build_config_export("2024-01-01T00:00:00+00:00".to_string());
        let json = export_json(&export).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["apis", "database", "iotDevices", "routes", "settings", "timestamp", "version"]
        );
    }

    #[test]
    fn nested_values_match_the_published_format() {
        let export = build_config_export("2024-01-01T00:00:00+00:00".to_string());
        let value = serde_json::to_value(&export).unwrap();

        assert_eq!(value["timestamp"], "2024-01-01T00:00:00+00:00");
        assert_eq!(value["version"], "2.1.4");
        assert_eq!(value["database"]["type"], "PostgreSQL");
        assert_eq!(value["apis"]["googleMaps"]["version"], "v3");
        assert_eq!(value["apis"]["openAI"]["model"], "gpt-4");
        assert!(value["apis"]["openAI"].get("version").is_none());
        assert_eq!(value["apis"]["whatsapp"], serde_json::json!({ "status": "pending" }));
        assert_eq!(value["iotDevices"]["offline"], 42);
        assert_eq!(value["routes"]["active"], 24);
        assert_eq!(value["settings"]["notifications"], "enabled");
    }

    #[test]
    fn pretty_print_uses_two_space_indent() {
        let export = build_config_export("t".to_string());
        let json = export_json(&export).unwrap();
        assert!(json.contains("\n  \"timestamp\": \"t\""));
        assert!(json.contains("\n    \"type\": \"PostgreSQL\""));
    }

    #[test]
    fn export_round_trips_through_serde() {
        let export = build_config_export("t".to_string());
        let json = export_json(&export).unwrap();
        let parsed: ConfigExport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, export);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn download_leaves_no_link_behind() {
        let document = web_sys::window().unwrap().document().unwrap();
        download_json("waste-management-config.json", "{}").unwrap();
        assert!(document.query_selector("a[download]").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn export_produces_a_single_download() {
        let document = web_sys::window().unwrap().document().unwrap();
        let before = document.body().unwrap().child_element_count();
        export_config().unwrap();
        assert_eq!(document.body().unwrap().child_element_count(), before);
    }
}
