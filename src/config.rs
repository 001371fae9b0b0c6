use serde::{Deserialize, Serialize};

/// Configuración de la aplicación.
/// Se resuelve en tiempo de compilación (build.rs vuelca el .env a rustc-env).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub app_version: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub toast_config: ToastConfig,
    pub simulation_config: SimulationConfig,
    pub export_file_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "SmartWaste".to_string(),
            app_version: "2.1.4".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            toast_config: ToastConfig::default(),
            simulation_config: SimulationConfig::default(),
            export_file_name: "waste-management-config.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastConfig {
    pub duration_ms: u32,
    pub limit: usize,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: 5000,
            limit: 3,
        }
    }
}

/// Duraciones de las acciones simuladas (no hay backend)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub refresh_delay_ms: u32,
    pub configure_delay_ms: u32,
    pub audio_playback_ms: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            refresh_delay_ms: 1500,
            configure_delay_ms: 2000,
            audio_playback_ms: 3000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            app_name: option_env!("APP_NAME")
                .map(|s| s.to_string())
                .unwrap_or(defaults.app_name),
            app_version: option_env!("APP_VERSION")
                .map(|s| s.to_string())
                .unwrap_or(defaults.app_version),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: option_env!("LOG_LEVEL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.log_level),
            toast_config: ToastConfig {
                duration_ms: option_env!("TOAST_DURATION_MS")
                    .unwrap_or("5000").parse().unwrap_or(5000),
                limit: option_env!("TOAST_LIMIT")
                    .unwrap_or("3").parse().unwrap_or(3),
            },
            simulation_config: SimulationConfig {
                refresh_delay_ms: option_env!("REFRESH_DELAY_MS")
                    .unwrap_or("1500").parse().unwrap_or(1500),
                configure_delay_ms: option_env!("CONFIGURE_DELAY_MS")
                    .unwrap_or("2000").parse().unwrap_or(2000),
                audio_playback_ms: option_env!("AUDIO_PLAYBACK_MS")
                    .unwrap_or("3000").parse().unwrap_or(3000),
            },
            export_file_name: option_env!("EXPORT_FILE_NAME")
                .map(|s| s.to_string())
                .unwrap_or(defaults.export_file_name),
        }
    }

    /// Nivel de log efectivo. Con logging deshabilitado solo pasan errores.
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        match self.log_level.to_lowercase().as_str() {
            "trace" => log::Level::Trace,
            "debug" => log::Level::Debug,
            "warn" => log::Level::Warn,
            "error" => log::Level::Error,
            _ => log::Level::Info,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
