// ============================================================================
// STATUS - Enumeraciones cerradas de estado + tono visual
// ============================================================================

/// Tono visual compartido por badges, puntos y textos de estado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Success,
    Warning,
    Destructive,
    Info,
    Muted,
}

impl Tone {
    pub fn text_class(&self) -> &'static str {
        match self {
            Tone::Primary => "text-primary",
            Tone::Success => "text-success",
            Tone::Warning => "text-warning",
            Tone::Destructive => "text-destructive",
            Tone::Info => "text-info",
            Tone::Muted => "text-muted",
        }
    }

    pub fn dot_class(&self) -> &'static str {
        match self {
            Tone::Primary => "dot bg-primary",
            Tone::Success => "dot bg-success",
            Tone::Warning => "dot bg-warning",
            Tone::Destructive => "dot bg-destructive",
            Tone::Info => "dot bg-info",
            Tone::Muted => "dot bg-muted",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Tone::Primary => "badge badge-primary",
            Tone::Success => "badge badge-success",
            Tone::Warning => "badge badge-warning",
            Tone::Destructive => "badge badge-destructive",
            Tone::Info => "badge badge-info",
            Tone::Muted => "badge badge-secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStatus {
    Active,
    Completed,
    Pending,
}

impl RouteStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RouteStatus::Active => "active",
            RouteStatus::Completed => "completed",
            RouteStatus::Pending => "pending",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            RouteStatus::Active => Tone::Success,
            RouteStatus::Completed => Tone::Info,
            RouteStatus::Pending => Tone::Warning,
        }
    }
}

/// Tipo de alerta (admin + monitor de salud)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Warning,
    Success,
    Info,
}

impl AlertKind {
    pub fn tone(&self) -> Tone {
        match self {
            AlertKind::Warning => Tone::Warning,
            AlertKind::Success => Tone::Success,
            AlertKind::Info => Tone::Info,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AlertKind::Warning => "⚠️",
            AlertKind::Success => "✅",
            AlertKind::Info => "🕒",
        }
    }
}

/// Estado de una conexión API externa
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Pending,
    Error,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Pending => "pending",
            ConnectionStatus::Error => "error",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ConnectionStatus::Connected => Tone::Success,
            ConnectionStatus::Pending => Tone::Warning,
            ConnectionStatus::Error => Tone::Destructive,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "✅",
            ConnectionStatus::Pending => "⚠️",
            ConnectionStatus::Error => "⛔",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    Online,
    Offline,
}

impl DeviceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DeviceStatus::Online => "online",
            DeviceStatus::Offline => "offline",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            DeviceStatus::Online => Tone::Success,
            DeviceStatus::Offline => Tone::Destructive,
        }
    }
}

/// Salud de un servicio interno o de una métrica de sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceHealth {
    Healthy,
    Warning,
    Critical,
}

impl ServiceHealth {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceHealth::Healthy => "Healthy",
            ServiceHealth::Warning => "Warning",
            ServiceHealth::Critical => "Critical",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ServiceHealth::Healthy => Tone::Success,
            ServiceHealth::Warning => Tone::Warning,
            ServiceHealth::Critical => Tone::Destructive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Priority::High => Tone::Destructive,
            Priority::Medium => Tone::Warning,
            Priority::Low => Tone::Success,
        }
    }
}

/// Estado de un reporte ciudadano
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Resolved,
    InProgress,
    Pending,
}

impl ReportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Resolved => "resolved",
            ReportStatus::InProgress => "in-progress",
            ReportStatus::Pending => "pending",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ReportStatus::Resolved => Tone::Success,
            ReportStatus::InProgress => Tone::Warning,
            ReportStatus::Pending => Tone::Info,
        }
    }
}
