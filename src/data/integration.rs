use crate::models::{
    ApiConnection, ApiKind, ConnectionStatus, DeviceStatus, IntegrationKind, IotDevice, Tone,
};

/// Conexiones iniciales del hub. La página las copia a su propio estado.
pub fn api_connections() -> Vec<ApiConnection> {
    vec![
        ApiConnection {
            id: 1,
            name: "Google Maps API".to_string(),
            kind: ApiKind::Navigation,
            status: ConnectionStatus::Connected,
            health: 98,
        },
        ApiConnection {
            id: 2,
            name: "OpenAI GPT-4".to_string(),
            kind: ApiKind::Ai,
            status: ConnectionStatus::Connected,
            health: 95,
        },
        ApiConnection {
            id: 3,
            name: "PostgreSQL".to_string(),
            kind: ApiKind::Database,
            status: ConnectionStatus::Connected,
            health: 100,
        },
        ApiConnection {
            id: 4,
            name: "WhatsApp Business".to_string(),
            kind: ApiKind::Communication,
            status: ConnectionStatus::Pending,
            health: 0,
        },
        ApiConnection {
            id: 5,
            name: "SMS Gateway".to_string(),
            kind: ApiKind::Communication,
            status: ConnectionStatus::Error,
            health: 0,
        },
    ]
}

pub fn iot_devices() -> Vec<IotDevice> {
    vec![
        IotDevice { id: "SB001", kind: "Smart Bin", location: "Downtown Plaza", status: DeviceStatus::Online, battery_level: 87, fill_level: Some(65) },
        IotDevice { id: "SB002", kind: "Smart Bin", location: "Park Avenue", status: DeviceStatus::Online, battery_level: 92, fill_level: Some(23) },
        IotDevice { id: "SB003", kind: "Smart Bin", location: "Industrial Zone", status: DeviceStatus::Offline, battery_level: 15, fill_level: Some(0) },
        IotDevice { id: "TR001", kind: "GPS Tracker", location: "Truck #A1", status: DeviceStatus::Online, battery_level: 78, fill_level: None },
        IotDevice { id: "TR002", kind: "GPS Tracker", location: "Truck #B2", status: DeviceStatus::Online, battery_level: 85, fill_level: None },
    ]
}

/// Botones de "Available Integrations": (etiqueta, integración)
pub const AVAILABLE_INTEGRATIONS: [(&str, IntegrationKind); 4] = [
    ("Google Gemini", IntegrationKind::Gemini),
    ("MongoDB", IntegrationKind::MongoDb),
    ("Twilio SMS", IntegrationKind::Twilio),
    ("Slack", IntegrationKind::Slack),
];

/// Ajustes de comunicación: (nombre, estado, tono)
pub const COMMUNICATION_SETTINGS: [(&str, &str, Tone); 3] = [
    ("Multi-language Support", "Enabled", Tone::Primary),
    ("Accessibility Features", "Active", Tone::Primary),
    ("Offline SMS Fallback", "Needs Configuration", Tone::Muted),
];

/// Ficha de una integración configurable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationProfile {
    pub heading: &'static str,
    pub summary: &'static str,
    pub sections: [(&'static str, &'static [&'static str]); 2],
    /// Campo de credencial: (etiqueta, placeholder)
    pub credential: Option<(&'static str, &'static str)>,
    pub note: Option<&'static str>,
    pub badge: (&'static str, Tone),
}

pub fn integration_profile(kind: IntegrationKind) -> Option<IntegrationProfile> {
    let profile = match kind {
        IntegrationKind::Gemini => IntegrationProfile {
            heading: "Google Gemini AI Integration",
            summary: "Advanced AI capabilities for citizen interactions and predictive analytics",
            sections: [
                (
                    "Capabilities",
                    &[
                        "Natural language processing for citizen queries",
                        "Multilingual support (12 languages)",
                        "Intelligent waste categorization",
                        "Predictive route optimization",
                        "Automated report generation",
                    ],
                ),
                (
                    "Performance Metrics",
                    &[
                        "Query accuracy: 97.3%",
                        "Response time: <2 seconds",
                        "Language detection: 99.1%",
                        "Context understanding: 94.8%",
                    ],
                ),
            ],
            credential: Some(("Gemini API Key", "Enter your Google Gemini API key")),
            note: None,
            badge: ("Connected & Active", Tone::Success),
        },
        IntegrationKind::MongoDb => IntegrationProfile {
            heading: "MongoDB Database Integration",
            summary: "Scalable NoSQL database for waste management data",
            sections: [
                (
                    "Collections",
                    &[
                        "waste_bins (1,247 documents)",
                        "collection_routes (89 documents)",
                        "citizen_reports (5,432 documents)",
                        "vehicle_tracking (45 documents)",
                        "analytics_data (12,890 documents)",
                    ],
                ),
                (
                    "Performance",
                    &[
                        "Database size: 2.3 GB",
                        "Query response: <50ms",
                        "Uptime: 99.9%",
                        "Backup frequency: Daily",
                    ],
                ),
            ],
            credential: None,
            note: Some(
                "MongoDB Atlas cluster configured with auto-scaling, automated backups, \
                 and real-time analytics for optimal performance.",
            ),
            badge: ("Connected & Optimized", Tone::Success),
        },
        IntegrationKind::Twilio => IntegrationProfile {
            heading: "Twilio SMS Integration",
            summary: "Reliable SMS communications for citizen notifications",
            sections: [
                (
                    "SMS Templates",
                    &[
                        "Collection schedule updates",
                        "Emergency overflow alerts",
                        "Pickup confirmations",
                        "Route change notifications",
                        "Service disruption alerts",
                    ],
                ),
                (
                    "Statistics (This Month)",
                    &[
                        "Messages sent: 34,567",
                        "Delivery rate: 98.7%",
                        "Response rate: 23.4%",
                        "Languages: 8 supported",
                    ],
                ),
            ],
            credential: None,
            note: Some(
                "🗑️ Reminder: Waste collection in your area tomorrow at 6 AM. \
                 Please keep bins outside. -City Waste Mgmt",
            ),
            badge: ("Active & Delivering", Tone::Info),
        },
        IntegrationKind::Slack => IntegrationProfile {
            heading: "Slack Integration",
            summary: "Team notifications and operational alerts",
            sections: [
                (
                    "Channels",
                    &[
                        "#waste-alerts (Critical issues)",
                        "#route-updates (Schedule changes)",
                        "#citizen-feedback (User reports)",
                        "#maintenance (Equipment status)",
                        "#analytics (Daily reports)",
                    ],
                ),
                (
                    "Automation",
                    &[
                        "Emergency alert broadcasting",
                        "Daily performance summaries",
                        "Maintenance reminders",
                        "Citizen complaint routing",
                    ],
                ),
            ],
            credential: Some(("Slack Webhook URL", "https://hooks.slack.com/services/...")),
            note: None,
            badge: ("Ready to Connect", Tone::Muted),
        },
        IntegrationKind::Export | IntegrationKind::Sync => return None,
    };
    Some(profile)
}

pub const EXPORT_CONTENTS: [&str; 8] = [
    "System configuration settings",
    "API integration parameters",
    "IoT device configurations",
    "Route optimization settings",
    "User access permissions",
    "Notification templates",
    "Database schema definitions",
    "Security configurations",
];

/// Detalles del paquete exportado: (etiqueta, valor)
pub const EXPORT_DETAILS: [(&str, &str); 4] = [
    ("Format", "JSON"),
    ("Size", "~2.3 MB"),
    ("Encryption", "AES-256"),
    ("Validity", "30 days"),
];

pub const SYNC_OPERATIONS: [&str; 7] = [
    "IoT sensor data synchronization",
    "Route optimization updates",
    "Citizen report processing",
    "Analytics data refresh",
    "Database consistency check",
    "API connection validation",
    "Cache refresh and optimization",
];

pub const SYNC_STATUS: [(&str, &str); 4] = [
    ("Last Sync", "2 hours ago"),
    ("Status", "All systems synchronized"),
    ("Next Auto-Sync", "In 4 hours"),
    ("Sync Duration", "~3-5 minutes"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_ids_are_unique() {
        let mut ids: Vec<u32> = api_connections().iter().map(|c| c.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn only_configurable_integrations_have_a_profile() {
        for kind in IntegrationKind::ALL {
            let system = matches!(kind, IntegrationKind::Export | IntegrationKind::Sync);
            assert_eq!(integration_profile(kind).is_none(), system);
        }
    }
}
