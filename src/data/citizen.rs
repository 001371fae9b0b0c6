use crate::models::{CitizenReport, RecyclingTip, ReportStatus, SelectOption};

pub fn recent_reports() -> Vec<CitizenReport> {
    vec![
        CitizenReport { id: "R001", kind: "Overflow", location: "Main St & 5th Ave", status: ReportStatus::Resolved, date: "2 days ago" },
        CitizenReport { id: "R002", kind: "Missed Collection", location: "Park Avenue", status: ReportStatus::InProgress, date: "1 day ago" },
        CitizenReport { id: "R003", kind: "Illegal Dumping", location: "Industrial Zone", status: ReportStatus::Pending, date: "3 hours ago" },
    ]
}

pub fn recycling_tips() -> Vec<RecyclingTip> {
    vec![
        RecyclingTip {
            category: "Plastic",
            icon: "♻️",
            tips: vec!["Clean containers before recycling", "Check recycling numbers 1-7", "Remove caps and lids"],
        },
        RecyclingTip {
            category: "Electronics",
            icon: "⚠️",
            tips: vec!["Never put in regular trash", "Visit certified e-waste centers", "Data wipe before disposal"],
        },
        RecyclingTip {
            category: "Organic",
            icon: "✅",
            tips: vec!["Compost food scraps", "Avoid meat and dairy", "Use brown and green materials"],
        },
    ]
}

pub const ISSUE_TYPES: &[SelectOption] = &[
    SelectOption::new("overflow", "Bin Overflow"),
    SelectOption::new("missed", "Missed Collection"),
    SelectOption::new("illegal", "Illegal Dumping"),
    SelectOption::new("damaged", "Damaged Bin"),
    SelectOption::new("other", "Other Issue"),
];

pub const URGENCY_LEVELS: &[SelectOption] = &[
    SelectOption::new("low", "Low - Can wait a few days"),
    SelectOption::new("medium", "Medium - Should be addressed soon"),
    SelectOption::new("high", "High - Needs immediate attention"),
];

/// Bloques de accesibilidad de la pestaña de contacto: (título, texto)
pub const CONTACT_ACCESSIBILITY: [(&str, &str); 4] = [
    ("Language Support", "Available in local languages including Hindi, Tamil, Bengali, and more"),
    ("Visual Accessibility", "High contrast mode and screen reader compatibility"),
    ("Voice Commands", "Report issues and schedule services using voice"),
    ("Offline Support", "SMS-based services for areas with limited internet"),
];
