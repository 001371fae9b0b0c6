use crate::models::status::{AlertKind, ServiceHealth, Tone};

/// Variación de una métrica respecto a un periodo anterior
#[derive(Debug, Clone, PartialEq)]
pub struct Trend {
    pub value: f64,
    pub label: &'static str,
    pub is_positive: bool,
}

impl Trend {
    pub fn positive(value: f64, label: &'static str) -> Self {
        Self { value, label, is_positive: true }
    }

    /// Texto mostrado bajo el valor: "+8% from last week"
    pub fn text(&self) -> String {
        let sign = if self.is_positive { "+" } else { "" };
        format!("{}{}% {}", sign, self.value, self.label)
    }

    pub fn tone(&self) -> Tone {
        if self.is_positive { Tone::Success } else { Tone::Destructive }
    }
}

/// Variante visual de StatCard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatVariant {
    #[default]
    Default,
    Success,
    Warning,
    Accent,
}

impl StatVariant {
    pub fn card_class(&self) -> &'static str {
        match self {
            StatVariant::Success => "stat-card stat-success",
            StatVariant::Warning => "stat-card stat-warning",
            StatVariant::Accent => "stat-card stat-accent",
            StatVariant::Default => "stat-card stat-default",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            StatVariant::Success => "stat-icon text-success",
            StatVariant::Warning => "stat-icon text-warning",
            StatVariant::Accent => "stat-icon text-accent",
            StatVariant::Default => "stat-icon text-primary",
        }
    }
}

/// Tarjeta de métrica del panel de administración
#[derive(Debug, Clone, PartialEq)]
pub struct AdminStat {
    pub title: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub trend: Option<Trend>,
    pub variant: StatVariant,
}

/// Cifra destacada simple (valor + etiqueta)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
    pub is_positive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WasteShare {
    pub category: &'static str,
    pub percentage: u8,
    pub trend: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZonePerformance {
    pub zone: &'static str,
    pub efficiency: u8,
    pub collections: u32,
    pub issues: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyRecommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub priority: crate::models::status::Priority,
    pub impact: &'static str,
}

/// Uso de recurso del sistema (porcentaje)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemMetric {
    pub name: &'static str,
    pub value: u8,
    pub health: ServiceHealth,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceStatus {
    pub name: &'static str,
    pub health: ServiceHealth,
    pub uptime: &'static str,
    pub response: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointMetric {
    pub endpoint: &'static str,
    pub latency: &'static str,
    pub success: &'static str,
    pub errors: u32,
}

impl EndpointMetric {
    /// 0 errores ok, menos de 10 aviso, resto crítico
    pub fn error_tone(&self) -> Tone {
        match self.errors {
            0 => Tone::Success,
            1..=9 => Tone::Warning,
            _ => Tone::Destructive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemAlert {
    pub kind: AlertKind,
    pub message: &'static str,
    pub time: &'static str,
}
