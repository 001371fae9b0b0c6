use crate::models::{
    AdminStat, Alert, AlertKind, CitizenRequest, CollectionRoute, Priority, RouteStatus,
    SelectOption, StatVariant, Trend,
};

pub fn admin_stats() -> Vec<AdminStat> {
    vec![
        AdminStat {
            title: "Active Collection Routes",
            value: "24",
            icon: "🚛",
            trend: Some(Trend::positive(8.0, "from last week")),
            variant: StatVariant::Success,
        },
        AdminStat {
            title: "Smart Bins Online",
            value: "1,247",
            icon: "📍",
            trend: Some(Trend::positive(12.0, "from last month")),
            variant: StatVariant::Default,
        },
        AdminStat {
            title: "Waste Collected Today",
            value: "45.2T",
            icon: "♻️",
            trend: Some(Trend::positive(5.0, "above average")),
            variant: StatVariant::Accent,
        },
        AdminStat {
            title: "Efficiency Score",
            value: "94.8%",
            icon: "📈",
            trend: Some(Trend::positive(2.3, "improvement")),
            variant: StatVariant::Success,
        },
    ]
}

pub fn recent_alerts() -> Vec<Alert> {
    vec![
        Alert { id: 1, kind: AlertKind::Warning, message: "Bin #247 at Park Ave is 95% full", time: "2 min ago" },
        Alert { id: 2, kind: AlertKind::Success, message: "Route optimization saved 15% fuel today", time: "1 hour ago" },
        Alert { id: 3, kind: AlertKind::Info, message: "Scheduled maintenance for Sector 5 bins", time: "3 hours ago" },
    ]
}

pub fn collection_routes() -> Vec<CollectionRoute> {
    vec![
        CollectionRoute { id: "R001", zone: "Downtown", status: RouteStatus::Active, efficiency: 96, trucks: 3 },
        CollectionRoute { id: "R002", zone: "Residential East", status: RouteStatus::Completed, efficiency: 89, trucks: 2 },
        CollectionRoute { id: "R003", zone: "Industrial North", status: RouteStatus::Active, efficiency: 92, trucks: 4 },
        CollectionRoute { id: "R004", zone: "Commercial West", status: RouteStatus::Pending, efficiency: 87, trucks: 2 },
    ]
}

pub fn citizen_requests() -> Vec<CitizenRequest> {
    vec![
        CitizenRequest { id: "CR001", kind: "Bin Overflow", location: "Park Avenue", priority: Priority::High, date: "2 hours ago" },
        CitizenRequest { id: "CR002", kind: "Missed Collection", location: "Downtown Plaza", priority: Priority::Medium, date: "4 hours ago" },
        CitizenRequest { id: "CR003", kind: "Bulk Pickup", location: "Residential East", priority: Priority::Low, date: "1 day ago" },
        CitizenRequest { id: "CR004", kind: "Illegal Dumping", location: "Industrial Zone", priority: Priority::High, date: "6 hours ago" },
    ]
}

pub const REPORT_TYPES: &[SelectOption] = &[
    SelectOption::new("efficiency", "Efficiency Report"),
    SelectOption::new("waste-analysis", "Waste Analysis"),
    SelectOption::new("route-optimization", "Route Optimization"),
    SelectOption::new("citizen-feedback", "Citizen Feedback"),
    SelectOption::new("cost-analysis", "Cost Analysis"),
    SelectOption::new("environmental-impact", "Environmental Impact"),
];

pub const DATE_RANGES: &[SelectOption] = &[
    SelectOption::new("last-week", "Last Week"),
    SelectOption::new("last-month", "Last Month"),
    SelectOption::new("last-quarter", "Last Quarter"),
    SelectOption::new("last-year", "Last Year"),
    SelectOption::new("custom", "Custom Range"),
];

pub const REPORT_FEATURES: [&str; 5] = [
    "Automated data analysis and insights",
    "Interactive charts and visualizations",
    "Export to PDF, Excel, or PowerPoint",
    "Scheduled report delivery via email",
    "Comparative analysis with previous periods",
];

pub const PLANNER_ZONES: &[SelectOption] = &[
    SelectOption::new("all", "All Zones"),
    SelectOption::new("downtown", "Downtown"),
    SelectOption::new("residential", "Residential Areas"),
    SelectOption::new("commercial", "Commercial Districts"),
    SelectOption::new("industrial", "Industrial Zones"),
];

pub const PLANNER_PRIORITIES: &[SelectOption] = &[
    SelectOption::new("fuel", "Fuel Efficiency"),
    SelectOption::new("time", "Time Optimization"),
    SelectOption::new("distance", "Distance Minimization"),
    SelectOption::new("environmental", "Environmental Impact"),
];

pub const COLLECTION_SCHEDULES: &[SelectOption] = &[
    SelectOption::new("daily-6", "Daily at 6:00 AM"),
    SelectOption::new("daily-8", "Daily at 8:00 AM"),
    SelectOption::new("alternate", "Alternate Days"),
    SelectOption::new("custom", "Custom Schedule"),
];

pub const DEFAULT_LANGUAGES: &[SelectOption] = &[
    SelectOption::new("en", "English"),
    SelectOption::new("hi", "Hindi"),
    SelectOption::new("ta", "Tamil"),
    SelectOption::new("te", "Telugu"),
];

pub const ALERT_SETTINGS: [&str; 3] = ["Bin Overflow Alerts", "Route Delays", "Emergency Notifications"];
