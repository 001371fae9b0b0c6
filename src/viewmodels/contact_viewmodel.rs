// ============================================================================
// CONTACT VIEWMODEL - Voz, WhatsApp y guías de audio
// ============================================================================

use crate::data::accessibility::hotline_for;
use crate::models::{AudioGuide, Notice};
use crate::viewmodels::validation::ValidationError;

/// "Call Now": exige un idioma de la línea de voz
pub fn voice_call(language_code: &str) -> Result<Notice, ValidationError> {
    let hotline = hotline_for(language_code).ok_or(ValidationError::MissingLanguage)?;
    log::info!("📞 [VOICE] Llamando a la línea {} ({})", hotline.name, hotline.phone);
    Ok(Notice::info(
        "Initiating Call",
        format!("Connecting to {} support at {}", hotline.name, hotline.phone),
    ))
}

/// "Connect WhatsApp": exige un número de teléfono
pub fn whatsapp_connect(phone: &str) -> Result<Notice, ValidationError> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Err(ValidationError::MissingPhone);
    }
    log::info!("💬 [WHATSAPP] Conectado");
    Ok(Notice::info(
        "WhatsApp Connected",
        format!("Connected to WhatsApp support. You'll receive messages at {}", phone),
    ))
}

pub fn play_notice(guide: &AudioGuide) -> Notice {
    Notice::info("Playing Audio Guide", format!("Now playing: {}", guide.file))
}

pub fn download_notice(guide: &AudioGuide) -> Notice {
    Notice::info("Download Started", format!("Downloading {}", guide.title))
}

/// Resultado de una acción de contacto para un diálogo:
/// la notificación y si el diálogo debe cerrarse.
pub fn dialog_outcome(result: Result<Notice, ValidationError>) -> (Notice, bool) {
    match result {
        Ok(notice) => (notice, true),
        Err(err) => (err.into(), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::accessibility::AUDIO_GUIDES;

    #[test]
    fn voice_call_without_language_keeps_dialog_open() {
        let (notice, close) = dialog_outcome(voice_call(""));
        assert!(!close);
        assert!(notice.is_destructive());
        assert_eq!(notice.title, "Language Required");
    }

    #[test]
    fn voice_call_with_language_names_hotline() {
        let (notice, close) = dialog_outcome(voice_call("hi"));
        assert!(close);
        assert_eq!(notice.title, "Initiating Call");
        assert_eq!(notice.description, "Connecting to Hindi support at +91 1800-WASTE-HI");
    }

    #[test]
    fn unknown_language_is_treated_as_missing() {
        assert_eq!(voice_call("xx"), Err(ValidationError::MissingLanguage));
    }

    #[test]
    fn whatsapp_requires_phone() {
        let (notice, close) = dialog_outcome(whatsapp_connect(""));
        assert!(!close);
        assert_eq!(notice.title, "Phone Number Required");

        let (notice, close) = dialog_outcome(whatsapp_connect("+91 99999 11111"));
        assert!(close);
        assert_eq!(
            notice.description,
            "Connected to WhatsApp support. You'll receive messages at +91 99999 11111"
        );
    }

    #[test]
    fn audio_notices_name_the_guide() {
        let guide = &AUDIO_GUIDES[0];
        assert_eq!(play_notice(guide).description, "Now playing: waste-segregation.mp3");
        assert_eq!(download_notice(guide).description, "Downloading Waste Segregation Guide");
    }
}
