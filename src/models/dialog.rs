// ============================================================================
// DIALOG DISCRIMINATORS - Variantes cerradas de contenido de diálogos
// ============================================================================
// El tag string solo existe en los bordes: atributos data-* de los botones
// que abren cada diálogo, y los logs.
// `parse` es total: un tag desconocido devuelve None.
// ============================================================================

/// Integración mostrada por IntegrationDetailsDialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationKind {
    Gemini,
    MongoDb,
    Twilio,
    Slack,
    Export,
    Sync,
}

impl IntegrationKind {
    pub const ALL: [IntegrationKind; 6] = [
        IntegrationKind::Gemini,
        IntegrationKind::MongoDb,
        IntegrationKind::Twilio,
        IntegrationKind::Slack,
        IntegrationKind::Export,
        IntegrationKind::Sync,
    ];

    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "gemini" => Some(IntegrationKind::Gemini),
            "mongodb" => Some(IntegrationKind::MongoDb),
            "twilio" => Some(IntegrationKind::Twilio),
            "slack" => Some(IntegrationKind::Slack),
            "export" => Some(IntegrationKind::Export),
            "sync" => Some(IntegrationKind::Sync),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrationKind::Gemini => "gemini",
            IntegrationKind::MongoDb => "mongodb",
            IntegrationKind::Twilio => "twilio",
            IntegrationKind::Slack => "slack",
            IntegrationKind::Export => "export",
            IntegrationKind::Sync => "sync",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IntegrationKind::Gemini => "Google Gemini AI",
            IntegrationKind::MongoDb => "MongoDB Database",
            IntegrationKind::Twilio => "Twilio SMS",
            IntegrationKind::Slack => "Slack Notifications",
            IntegrationKind::Export => "Export Configuration",
            IntegrationKind::Sync => "Sync All Systems",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            IntegrationKind::Gemini => "🧠",
            IntegrationKind::MongoDb => "🗄️",
            IntegrationKind::Twilio => "💬",
            IntegrationKind::Slack => "#️⃣",
            IntegrationKind::Export => "⬇️",
            IntegrationKind::Sync => "⬆️",
        }
    }
}

/// Acción rápida del panel de administración
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Report,
    Planner,
    Requests,
    Config,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::Report,
        QuickAction::Planner,
        QuickAction::Requests,
        QuickAction::Config,
    ];

    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "report" => Some(QuickAction::Report),
            "planner" => Some(QuickAction::Planner),
            "requests" => Some(QuickAction::Requests),
            "config" => Some(QuickAction::Config),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuickAction::Report => "report",
            QuickAction::Planner => "planner",
            QuickAction::Requests => "requests",
            QuickAction::Config => "config",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            QuickAction::Report => "Generate Report",
            QuickAction::Planner => "Route Planner",
            QuickAction::Requests => "Citizen Requests",
            QuickAction::Config => "System Configuration",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QuickAction::Report => "Generate comprehensive reports and analytics",
            QuickAction::Planner => "AI-powered route optimization and planning",
            QuickAction::Requests => "Manage and respond to citizen requests",
            QuickAction::Config => "Configure system settings and parameters",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            QuickAction::Report => "📊",
            QuickAction::Planner => "📍",
            QuickAction::Requests => "👥",
            QuickAction::Config => "⚙️",
        }
    }

    /// Etiqueta corta del botón en el panel
    pub fn button_label(&self) -> &'static str {
        match self {
            QuickAction::Report => "Generate Report",
            QuickAction::Planner => "Route Planner",
            QuickAction::Requests => "Citizen Requests",
            QuickAction::Config => "System Config",
        }
    }
}

/// Vista del monitor de sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorKind {
    Health,
    Network,
}

impl MonitorKind {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "health" => Some(MonitorKind::Health),
            "network" => Some(MonitorKind::Network),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MonitorKind::Health => "health",
            MonitorKind::Network => "network",
        }
    }
}

/// Diálogo informativo abierto desde una tarjeta de la home
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Showcase {
    AiRoute,
    Iot,
    MultiModal,
    Analytics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integration_tags_are_recognized() {
        for kind in IntegrationKind::ALL {
            assert_eq!(IntegrationKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(IntegrationKind::parse("postgres"), None);
        assert_eq!(IntegrationKind::parse(""), None);
        assert_eq!(IntegrationKind::parse("Gemini"), None);
    }

    #[test]
    fn quick_action_tags_are_recognized() {
        for action in QuickAction::ALL {
            assert_eq!(QuickAction::parse(action.as_str()), Some(action));
        }
        assert_eq!(QuickAction::parse("delete"), None);
    }

    #[test]
    fn monitor_tags_are_recognized() {
        for kind in [MonitorKind::Health, MonitorKind::Network] {
            assert_eq!(MonitorKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(MonitorKind::parse("disk"), None);
    }
}
