use crate::models::{AudioGuide, FeatureGroup, HotlineLanguage, Language};

pub const LANGUAGES: [Language; 10] = [
    Language { code: "en", name: "English", native: "English" },
    Language { code: "hi", name: "Hindi", native: "हिन्दी" },
    Language { code: "ta", name: "Tamil", native: "தமிழ்" },
    Language { code: "bn", name: "Bengali", native: "বাংলা" },
    Language { code: "te", name: "Telugu", native: "తెలుగు" },
    Language { code: "mr", name: "Marathi", native: "मराठी" },
    Language { code: "gu", name: "Gujarati", native: "ગુજરાતી" },
    Language { code: "kn", name: "Kannada", native: "ಕನ್ನಡ" },
    Language { code: "ml", name: "Malayalam", native: "മലയാളം" },
    Language { code: "pa", name: "Punjabi", native: "ਪੰਜਾਬੀ" },
];

pub fn feature_groups() -> Vec<FeatureGroup> {
    vec![
        FeatureGroup {
            title: "Visual Accessibility",
            icon: "👁️",
            features: vec![
                "High contrast mode for better visibility",
                "Adjustable font sizes (12px to 24px)",
                "Color blind friendly color schemes",
                "Screen reader compatibility",
                "Keyboard navigation support",
            ],
        },
        FeatureGroup {
            title: "Audio Accessibility",
            icon: "🔊",
            features: vec![
                "Voice-based issue reporting",
                "Audio feedback for actions",
                "Text-to-speech for notifications",
                "Multi-language voice support",
                "Audio descriptions for visual content",
            ],
        },
        FeatureGroup {
            title: "Motor Accessibility",
            icon: "📱",
            features: vec![
                "Large touch targets (44px minimum)",
                "Voice commands for navigation",
                "Reduced motion preferences",
                "Single-handed operation support",
                "Gesture alternatives",
            ],
        },
        FeatureGroup {
            title: "Cognitive Accessibility",
            icon: "👥",
            features: vec![
                "Simple, clear language",
                "Visual cues and icons",
                "Step-by-step guidance",
                "Error prevention and recovery",
                "Consistent navigation patterns",
            ],
        },
    ]
}

pub const STANDARDS: [&str; 5] = [
    "WCAG 2.1 AA Compliant",
    "Section 508 Compliance",
    "Multi-language Support",
    "Keyboard Navigation",
    "Screen Reader Compatible",
];

// ---------------------------------------------------------------------------
// Canales de contacto alternativos
// ---------------------------------------------------------------------------

pub static HOTLINE_LANGUAGES: [HotlineLanguage; 6] = [
    HotlineLanguage { code: "en", name: "English", phone: "+91 1800-WASTE-EN" },
    HotlineLanguage { code: "hi", name: "Hindi", phone: "+91 1800-WASTE-HI" },
    HotlineLanguage { code: "ta", name: "Tamil", phone: "+91 1800-WASTE-TA" },
    HotlineLanguage { code: "te", name: "Telugu", phone: "+91 1800-WASTE-TE" },
    HotlineLanguage { code: "bn", name: "Bengali", phone: "+91 1800-WASTE-BN" },
    HotlineLanguage { code: "mr", name: "Marathi", phone: "+91 1800-WASTE-MR" },
];

/// Horario del servicio de voz: (etiqueta, valor)
pub const HOTLINE_HOURS: [(&str, &str); 4] = [
    ("Emergency Support", "24/7 Available"),
    ("General Inquiries", "6 AM - 10 PM"),
    ("Average Wait Time", "< 2 minutes"),
    ("Voice Recognition", "AI-Powered"),
];

pub const VOICE_SERVICES: [&str; 6] = [
    "Report waste collection issues",
    "Schedule bulk pickup services",
    "Get recycling guidance",
    "Emergency waste overflow reports",
    "Route schedule inquiries",
    "Accessibility support",
];

pub const WHATSAPP_SUPPORT: [(&str, &str); 3] = [
    ("Support Number", "+91 98765 43210"),
    ("Available", "24/7"),
    ("Languages", "Hindi, English, Tamil"),
];

pub const WHATSAPP_UPDATES: [&str; 4] = [
    "Collection schedule updates",
    "Route change notifications",
    "Emergency alerts",
    "Direct support chat",
];

pub static AUDIO_GUIDES: [AudioGuide; 4] = [
    AudioGuide {
        title: "Waste Segregation Guide",
        duration: "2:34",
        description: "Learn how to properly separate waste at home",
        file: "waste-segregation.mp3",
    },
    AudioGuide {
        title: "Collection Schedule",
        duration: "1:45",
        description: "Understanding your area's collection timings",
        file: "collection-schedule.mp3",
    },
    AudioGuide {
        title: "Emergency Procedures",
        duration: "3:12",
        description: "What to do during waste emergencies",
        file: "emergency-procedures.mp3",
    },
    AudioGuide {
        title: "Recycling Guidelines",
        duration: "4:28",
        description: "Complete guide to recycling different materials",
        file: "recycling-guide.mp3",
    },
];

pub const AUDIO_LANGUAGES: [&str; 8] = [
    "English", "Hindi", "Tamil", "Telugu", "Bengali", "Marathi", "Gujarati", "Punjabi",
];

/// Busca la línea de voz de un código de idioma
pub fn hotline_for(code: &str) -> Option<&'static HotlineLanguage> {
    HOTLINE_LANGUAGES.iter().find(|l| l.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_hotline_language_is_an_interface_language() {
        for hotline in HOTLINE_LANGUAGES.iter() {
            assert!(LANGUAGES.iter().any(|l| l.code == hotline.code));
        }
    }

    #[test]
    fn hotline_lookup() {
        assert_eq!(hotline_for("ta").map(|l| l.phone), Some("+91 1800-WASTE-TA"));
        assert!(hotline_for("pa").is_none());
        assert!(hotline_for("").is_none());
    }
}
