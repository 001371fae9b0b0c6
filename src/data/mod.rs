// ============================================================================
// DATA - Datos de muestra en memoria (sin backend)
// ============================================================================

pub mod accessibility;
pub mod admin;
pub mod citizen;
pub mod home;
pub mod insights;
pub mod integration;
