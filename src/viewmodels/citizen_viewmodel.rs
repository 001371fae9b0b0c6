// ============================================================================
// CITIZEN VIEWMODEL - Formularios del portal ciudadano
// ============================================================================
// Devuelve valores, la vista decide qué hacer con ellos (toast + reset)
// ============================================================================

use crate::models::Notice;
use crate::viewmodels::validation::{require, ValidationError};

/// Formulario "Report Waste Issue"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportForm {
    pub issue_type: String,
    pub location: String,
    pub description: String,
    pub urgency: String,
}

impl ReportForm {
    /// Solo `location` y `description` son obligatorios
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.location, ValidationError::MissingLocation)?;
        require(&self.description, ValidationError::MissingDescription)?;
        Ok(())
    }

    pub fn submit(&self) -> Result<Notice, ValidationError> {
        self.validate()?;
        log::info!(
            "📝 [CITIZEN] Reporte enviado: tipo='{}' urgencia='{}'",
            self.issue_type,
            self.urgency
        );
        Ok(Notice::info(
            "Report Submitted",
            "Thank you! Your waste issue report has been submitted and will be addressed shortly.",
        ))
    }
}

/// Formulario "Schedule Bulk Pickup" (todos los campos obligatorios)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickupForm {
    pub items: String,
    pub date: String,
    pub address: String,
    pub contact: String,
}

impl PickupForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.items, ValidationError::MissingItems)?;
        require(&self.date, ValidationError::MissingDate)?;
        require(&self.address, ValidationError::MissingAddress)?;
        require(&self.contact, ValidationError::MissingContact)?;
        Ok(())
    }

    pub fn submit(&self) -> Result<Notice, ValidationError> {
        self.validate()?;
        log::info!("🚛 [CITIZEN] Recogida programada para {}", self.date);
        Ok(Notice::info(
            "Pickup Scheduled",
            "Your bulk waste pickup has been scheduled. You'll receive a confirmation shortly.",
        ))
    }
}

/// Resultado de enviar un formulario: el estado siguiente y la notificación.
/// Si falla la validación el formulario queda intacto.
pub fn submit_report(form: &ReportForm) -> (ReportForm, Notice) {
    match form.submit() {
        Ok(notice) => (ReportForm::default(), notice),
        Err(err) => {
            log::warn!("⚠️ [CITIZEN] Reporte inválido: {}", err);
            (form.clone(), err.into())
        }
    }
}

pub fn submit_pickup(form: &PickupForm) -> (PickupForm, Notice) {
    match form.submit() {
        Ok(notice) => (PickupForm::default(), notice),
        Err(err) => {
            log::warn!("⚠️ [CITIZEN] Recogida inválida: {}", err);
            (form.clone(), err.into())
        }
    }
}

pub fn sms_setup_notice() -> Notice {
    Notice::info(
        "SMS Alerts Enabled",
        "Collection schedules and reminders will be sent to your registered mobile number.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_report() -> ReportForm {
        ReportForm {
            issue_type: "overflow".into(),
            location: "Park Avenue".into(),
            description: "Bin is overflowing".into(),
            urgency: "high".into(),
        }
    }

    fn filled_pickup() -> PickupForm {
        PickupForm {
            items: "Old sofa".into(),
            date: "2026-11-02".into(),
            address: "12 Main St".into(),
            contact: "+91 90000 00000".into(),
        }
    }

    #[test]
    fn valid_report_resets_the_form() {
        let (next, notice) = submit_report(&filled_report());
        assert_eq!(next, ReportForm::default());
        assert_eq!(notice.title, "Report Submitted");
        assert!(!notice.is_destructive());
    }

    #[test]
    fn report_type_and_urgency_are_optional() {
        let form = ReportForm { issue_type: String::new(), urgency: String::new(), ..filled_report() };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn missing_location_keeps_form_and_is_reported_first() {
        let form = ReportForm { location: String::new(), description: String::new(), ..filled_report() };
        assert_eq!(form.validate(), Err(ValidationError::MissingLocation));

        let (next, notice) = submit_report(&form);
        assert_eq!(next, form);
        assert!(notice.is_destructive());
    }

    #[test]
    fn missing_description_is_rejected() {
        let form = ReportForm { description: "  ".into(), ..filled_report() };
        assert_eq!(form.validate(), Err(ValidationError::MissingDescription));
    }

    #[test]
    fn pickup_requires_every_field_in_order() {
        assert!(filled_pickup().validate().is_ok());
        assert_eq!(
            PickupForm { items: String::new(), contact: String::new(), ..filled_pickup() }.validate(),
            Err(ValidationError::MissingItems)
        );
        assert_eq!(
            PickupForm { date: String::new(), ..filled_pickup() }.validate(),
            Err(ValidationError::MissingDate)
        );
        assert_eq!(
            PickupForm { address: String::new(), ..filled_pickup() }.validate(),
            Err(ValidationError::MissingAddress)
        );
        assert_eq!(
            PickupForm { contact: String::new(), ..filled_pickup() }.validate(),
            Err(ValidationError::MissingContact)
        );
    }

    #[test]
    fn valid_pickup_resets_the_form() {
        let (next, notice) = submit_pickup(&filled_pickup());
        assert_eq!(next, PickupForm::default());
        assert_eq!(notice.title, "Pickup Scheduled");
    }
}
