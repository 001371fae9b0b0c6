use crate::data::accessibility::LANGUAGES;
use crate::models::{AccessibilitySettings, Notice};

/// Toggle del panel de ajustes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingToggle {
    HighContrast,
    ColorBlind,
    ReducedMotion,
    VoiceCommands,
    ScreenReader,
    KeyboardNav,
}

impl SettingToggle {
    pub const VISUAL: [SettingToggle; 3] =
        [SettingToggle::HighContrast, SettingToggle::ColorBlind, SettingToggle::ReducedMotion];
    pub const AUDIO: [SettingToggle; 2] = [SettingToggle::VoiceCommands, SettingToggle::ScreenReader];

    pub fn label(&self) -> &'static str {
        match self {
            SettingToggle::HighContrast => "High Contrast Mode",
            SettingToggle::ColorBlind => "Color Blind Friendly",
            SettingToggle::ReducedMotion => "Reduced Motion",
            SettingToggle::VoiceCommands => "Voice Commands",
            SettingToggle::ScreenReader => "Screen Reader Support",
            SettingToggle::KeyboardNav => "Keyboard Navigation",
        }
    }

    pub fn get(&self, settings: &AccessibilitySettings) -> bool {
        match self {
            SettingToggle::HighContrast => settings.high_contrast,
            SettingToggle::ColorBlind => settings.color_blind_mode,
            SettingToggle::ReducedMotion => settings.reduced_motion,
            SettingToggle::VoiceCommands => settings.voice_enabled,
            SettingToggle::ScreenReader => settings.screen_reader,
            SettingToggle::KeyboardNav => settings.keyboard_nav,
        }
    }

    pub fn set(&self, settings: &mut AccessibilitySettings, value: bool) {
        let slot = match self {
            SettingToggle::HighContrast => &mut settings.high_contrast,
            SettingToggle::ColorBlind => &mut settings.color_blind_mode,
            SettingToggle::ReducedMotion => &mut settings.reduced_motion,
            SettingToggle::VoiceCommands => &mut settings.voice_enabled,
            SettingToggle::ScreenReader => &mut settings.screen_reader,
            SettingToggle::KeyboardNav => &mut settings.keyboard_nav,
        };
        *slot = value;
    }
}

pub fn saved_notice(settings: &AccessibilitySettings) -> Notice {
    let language = LANGUAGES
        .iter()
        .find(|l| l.code == settings.language)
        .map(|l| l.name)
        .unwrap_or("English");
    Notice::info(
        "Preferences Saved",
        format!(
            "Accessibility settings applied: {}px text, {} interface.",
            settings.font_size, language
        ),
    )
}

pub fn apply_failed_notice() -> Notice {
    Notice::destructive("Could Not Apply Settings", "The page could not be updated with your preferences.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_write_their_own_field() {
        let mut settings = AccessibilitySettings::default();
        SettingToggle::ColorBlind.set(&mut settings, true);
        SettingToggle::KeyboardNav.set(&mut settings, false);
        assert!(settings.color_blind_mode);
        assert!(!settings.keyboard_nav);
        assert!(SettingToggle::ColorBlind.get(&settings));
        assert!(!SettingToggle::HighContrast.get(&settings));
    }

    #[test]
    fn saved_notice_names_language_and_size() {
        let settings = AccessibilitySettings { language: "ta".into(), ..Default::default() }.with_font_size(20);
        let notice = saved_notice(&settings);
        assert_eq!(notice.title, "Preferences Saved");
        assert_eq!(notice.description, "Accessibility settings applied: 20px text, Tamil interface.");
    }
}
