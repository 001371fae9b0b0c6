use crate::models::{Feature, Portal, Showcase, Tone};
use crate::router::Route;

/// Características destacadas, cada una con el diálogo que la amplía
pub fn features() -> Vec<(Feature, Showcase)> {
    vec![
        (
            Feature {
                title: "AI-Powered Route Optimization",
                description: "Machine learning algorithms optimize collection routes for maximum efficiency",
                icon: "📈",
            },
            Showcase::AiRoute,
        ),
        (
            Feature {
                title: "Smart IoT Integration",
                description: "Real-time monitoring of waste bins with fill-level sensors",
                icon: "📍",
            },
            Showcase::Iot,
        ),
        (
            Feature {
                title: "Multi-Modal Communication",
                description: "WhatsApp, SMS, and voice support in multiple local languages",
                icon: "👥",
            },
            Showcase::MultiModal,
        ),
        (
            Feature {
                title: "Comprehensive Analytics",
                description: "Data-driven insights for policy improvement and resource allocation",
                icon: "📊",
            },
            Showcase::Analytics,
        ),
    ]
}

pub fn portals() -> Vec<Portal> {
    vec![
        Portal {
            title: "Admin Dashboard",
            description: "Monitor operations, optimize routes, and generate reports",
            icon: "📊",
            route: Route::Admin,
            button_class: "btn btn-primary",
        },
        Portal {
            title: "Citizen Portal",
            description: "Report issues, schedule pickups, and learn recycling",
            icon: "👥",
            route: Route::Citizen,
            button_class: "btn btn-secondary",
        },
        Portal {
            title: "Integration Hub",
            description: "Manage APIs, IoT devices, and system connections",
            icon: "⚙️",
            route: Route::Integration,
            button_class: "btn btn-outline",
        },
        Portal {
            title: "Accessibility Center",
            description: "Customize experience for inclusive access",
            icon: "♿",
            route: Route::Accessibility,
            button_class: "btn btn-outline",
        },
    ]
}

/// Cifras de la home: (valor, etiqueta, tono)
pub fn headline_stats() -> Vec<(&'static str, &'static str, Tone)> {
    vec![
        ("94.8%", "System Efficiency", Tone::Primary),
        ("1,247", "Smart Bins Connected", Tone::Info),
        ("45.2T", "Waste Processed Daily", Tone::Success),
    ]
}

pub const INCLUSION_POINTS: [&str; 4] = [
    "Multi-language voice and text support",
    "WhatsApp, SMS, and voice communication",
    "Screen reader compatibility",
    "High contrast and adjustable font sizes",
];
