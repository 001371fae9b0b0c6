use crate::models::status::{ConnectionStatus, DeviceStatus, Tone};

/// Categoría de un servicio externo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKind {
    Navigation,
    Ai,
    Database,
    Communication,
    Other,
}

impl ApiKind {
    pub fn label(&self) -> &'static str {
        match self {
            ApiKind::Navigation => "navigation",
            ApiKind::Ai => "ai",
            ApiKind::Database => "database",
            ApiKind::Communication => "communication",
            ApiKind::Other => "custom",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ApiKind::Navigation => "🗺️",
            ApiKind::Ai => "🧠",
            ApiKind::Database => "🗄️",
            ApiKind::Communication => "💬",
            ApiKind::Other => "🌐",
        }
    }
}

/// Conexión API mostrada en el hub de integración.
/// `name` es String porque el usuario puede añadir conexiones desde el formulario.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConnection {
    pub id: u32,
    pub name: String,
    pub kind: ApiKind,
    pub status: ConnectionStatus,
    pub health: u8,
}

/// Dispositivo IoT (contenedor inteligente o tracker GPS)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IotDevice {
    pub id: &'static str,
    pub kind: &'static str,
    pub location: &'static str,
    pub status: DeviceStatus,
    pub battery_level: u8,
    /// None para trackers (no tienen sensor de llenado)
    pub fill_level: Option<u8>,
}

/// Color de la batería: > 50 ok, > 20 aviso, resto crítico
pub fn battery_tone(level: u8) -> Tone {
    if level > 50 {
        Tone::Success
    } else if level > 20 {
        Tone::Warning
    } else {
        Tone::Destructive
    }
}

/// Color del nivel de llenado: < 50 ok, < 80 aviso, resto crítico
pub fn fill_tone(level: u8) -> Tone {
    if level < 50 {
        Tone::Success
    } else if level < 80 {
        Tone::Warning
    } else {
        Tone::Destructive
    }
}

/// Familia de dispositivos desplegados (diálogo IoT)
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceType {
    pub name: &'static str,
    pub count: u32,
    pub description: &'static str,
    pub features: Vec<&'static str>,
    pub status: &'static str,
    pub icon: &'static str,
}

/// Canal de comunicación con la ciudadanía
#[derive(Debug, Clone, PartialEq)]
pub struct CommunicationChannel {
    pub name: &'static str,
    pub users: &'static str,
    pub languages: u8,
    pub description: &'static str,
    pub features: Vec<&'static str>,
    pub icon: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanguageCoverage {
    pub language: &'static str,
    pub users: &'static str,
    pub coverage: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_thresholds() {
        assert_eq!(battery_tone(87), Tone::Success);
        assert_eq!(battery_tone(51), Tone::Success);
        assert_eq!(battery_tone(50), Tone::Warning);
        assert_eq!(battery_tone(21), Tone::Warning);
        assert_eq!(battery_tone(20), Tone::Destructive);
        assert_eq!(battery_tone(15), Tone::Destructive);
    }

    #[test]
    fn fill_thresholds() {
        assert_eq!(fill_tone(0), Tone::Success);
        assert_eq!(fill_tone(49), Tone::Success);
        assert_eq!(fill_tone(50), Tone::Warning);
        assert_eq!(fill_tone(79), Tone::Warning);
        assert_eq!(fill_tone(80), Tone::Destructive);
        assert_eq!(fill_tone(95), Tone::Destructive);
    }
}
