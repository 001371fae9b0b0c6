use crate::models::status::{AlertKind, Priority, ReportStatus, RouteStatus};
use crate::router::Route;

/// Alerta reciente del panel de administración
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alert {
    pub id: u32,
    pub kind: AlertKind,
    pub message: &'static str,
    pub time: &'static str,
}

/// Ruta de recogida
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectionRoute {
    pub id: &'static str,
    pub zone: &'static str,
    pub status: RouteStatus,
    pub efficiency: u8,
    pub trucks: u8,
}

/// Solicitud ciudadana pendiente (vista admin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CitizenRequest {
    pub id: &'static str,
    pub kind: &'static str,
    pub location: &'static str,
    pub priority: Priority,
    pub date: &'static str,
}

/// Reporte enviado por el propio ciudadano
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CitizenReport {
    pub id: &'static str,
    pub kind: &'static str,
    pub location: &'static str,
    pub status: ReportStatus,
    pub date: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecyclingTip {
    pub category: &'static str,
    pub icon: &'static str,
    pub tips: Vec<&'static str>,
}

/// Característica del producto (home + diálogos)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Acceso a un portal desde la home
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Portal {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub route: Route,
    pub button_class: &'static str,
}

/// Opción de un select (valor + etiqueta)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Busca la etiqueta de un valor en una lista de opciones
pub fn option_label(options: &[SelectOption], value: &str) -> Option<&'static str> {
    options.iter().find(|o| o.value == value).map(|o| o.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_label_finds_known_values() {
        let options = [SelectOption::new("low", "Low"), SelectOption::new("high", "High")];
        assert_eq!(option_label(&options, "high"), Some("High"));
        assert_eq!(option_label(&options, "medium"), None);
    }
}
