// ============================================================================
// SMARTWASTE PWA - FRONTEND YEW (RUST PURO)
// ============================================================================
// Capas:
// - Views: páginas (estado local de cada página)
// - Components: piezas reutilizables y diálogos
// - ViewModels: validación y reglas de UI, sin DOM
// - Services: SOLO APIs del navegador (descarga, <html>)
// - Data/Models: datos de demostración y tipos compartidos
// ============================================================================

pub mod components;
pub mod config;
pub mod data;
pub mod hooks;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod views;

#[cfg(all(test, target_arch = "wasm32"))]
mod test_support;

use wasm_logger::Config;

use crate::config::CONFIG;
use crate::views::App;

/// Punto de entrada: panic hook, logging y render de la app
pub fn run() {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 {} v{} - Rust + Yew", CONFIG.app_name, CONFIG.app_version);

    yew::Renderer::<App>::new().render();
}
