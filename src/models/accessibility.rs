pub const MIN_FONT_SIZE: u8 = 12;
pub const MAX_FONT_SIZE: u8 = 24;
pub const FONT_SIZE_STEP: u8 = 2;
pub const DEFAULT_FONT_SIZE: u8 = 16;

/// Idioma de interfaz disponible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub native: &'static str,
}

/// Idioma de la línea de voz con su número
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotlineLanguage {
    pub code: &'static str,
    pub name: &'static str,
    pub phone: &'static str,
}

/// Grupo de características de accesibilidad
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureGroup {
    pub title: &'static str,
    pub icon: &'static str,
    pub features: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioGuide {
    pub title: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub file: &'static str,
}

/// Preferencias de accesibilidad del usuario (solo en memoria)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilitySettings {
    pub high_contrast: bool,
    pub font_size: u8,
    pub voice_enabled: bool,
    pub screen_reader: bool,
    pub language: String,
    pub color_blind_mode: bool,
    pub reduced_motion: bool,
    pub keyboard_nav: bool,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            high_contrast: false,
            font_size: DEFAULT_FONT_SIZE,
            voice_enabled: false,
            screen_reader: false,
            language: "en".to_string(),
            color_blind_mode: false,
            reduced_motion: false,
            keyboard_nav: true,
        }
    }
}

/// Ajusta un tamaño al rango [12, 24] en pasos de 2 (redondea hacia abajo)
pub fn snap_font_size(px: u32) -> u8 {
    let clamped = px.clamp(MIN_FONT_SIZE as u32, MAX_FONT_SIZE as u32) as u8;
    clamped - (clamped - MIN_FONT_SIZE) % FONT_SIZE_STEP
}

impl AccessibilitySettings {
    pub fn with_font_size(mut self, px: u32) -> Self {
        self.font_size = snap_font_size(px);
        self
    }

    /// Clases CSS que se aplican al elemento raíz del documento
    pub fn root_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.high_contrast {
            classes.push("a11y-high-contrast");
        }
        if self.color_blind_mode {
            classes.push("a11y-color-blind");
        }
        if self.reduced_motion {
            classes.push("a11y-reduced-motion");
        }
        if self.keyboard_nav {
            classes.push("a11y-keyboard-nav");
        }
        classes
    }

    /// Todas las clases que gestiona este módulo (para limpiarlas antes de aplicar)
    pub fn managed_classes() -> [&'static str; 4] {
        [
            "a11y-high-contrast",
            "a11y-color-blind",
            "a11y-reduced-motion",
            "a11y-keyboard-nav",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_is_clamped_and_stepped() {
        assert_eq!(snap_font_size(0), 12);
        assert_eq!(snap_font_size(12), 12);
        assert_eq!(snap_font_size(13), 12);
        assert_eq!(snap_font_size(18), 18);
        assert_eq!(snap_font_size(23), 22);
        assert_eq!(snap_font_size(24), 24);
        assert_eq!(snap_font_size(99), 24);
        for px in 0..40 {
            let size = snap_font_size(px);
            assert!((MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size));
            assert_eq!((size - MIN_FONT_SIZE) % FONT_SIZE_STEP, 0);
        }
    }

    #[test]
    fn defaults_enable_keyboard_navigation_only() {
        let settings = AccessibilitySettings::default();
        assert_eq!(settings.font_size, 16);
        assert_eq!(settings.language, "en");
        assert_eq!(settings.root_classes(), vec!["a11y-keyboard-nav"]);
    }

    #[test]
    fn root_classes_follow_toggles() {
        let settings = AccessibilitySettings {
            high_contrast: true,
            reduced_motion: true,
            keyboard_nav: false,
            ..AccessibilitySettings::default()
        };
        assert_eq!(settings.root_classes(), vec!["a11y-high-contrast", "a11y-reduced-motion"]);
    }
}
