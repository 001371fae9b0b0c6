// ============================================================================
// SERVICES - Única capa que toca APIs del navegador fuera de los hooks
// ============================================================================

pub mod export_service;
pub mod document_service;

pub use export_service::export_config;
pub use document_service::apply_accessibility;
