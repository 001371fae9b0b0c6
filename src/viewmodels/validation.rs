// ============================================================================
// VALIDATION - Campos obligatorios de los formularios
// ============================================================================

use crate::models::Notice;

/// Campo obligatorio ausente. Un variante por campo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter the location of the issue.")]
    MissingLocation,

    #[error("Please describe the issue.")]
    MissingDescription,

    #[error("Please list the items for pickup.")]
    MissingItems,

    #[error("Please choose a pickup date.")]
    MissingDate,

    #[error("Please enter the pickup address.")]
    MissingAddress,

    #[error("Please enter a contact number.")]
    MissingContact,

    #[error("Please select your preferred language for voice support.")]
    MissingLanguage,

    #[error("Please enter your phone number to connect WhatsApp support.")]
    MissingPhone,

    #[error("Please enter a service name.")]
    MissingServiceName,

    #[error("Please enter the API endpoint.")]
    MissingEndpoint,

    #[error("Please select a report type.")]
    MissingReportType,

    #[error("Please select a date range.")]
    MissingDateRange,
}

impl ValidationError {
    /// Título de la notificación destructiva
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingLanguage => "Language Required",
            ValidationError::MissingPhone => "Phone Number Required",
            _ => "Missing Information",
        }
    }
}

impl From<ValidationError> for Notice {
    fn from(error: ValidationError) -> Self {
        Notice::destructive(error.title(), error.to_string())
    }
}

/// Devuelve `err` si el valor está vacío (ignorando espacios)
pub fn require(value: &str, err: ValidationError) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(err)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_errors_use_dedicated_titles() {
        let notice: Notice = ValidationError::MissingLanguage.into();
        assert!(notice.is_destructive());
        assert_eq!(notice.title, "Language Required");
        assert_eq!(notice.description, "Please select your preferred language for voice support.");

        let notice: Notice = ValidationError::MissingPhone.into();
        assert_eq!(notice.title, "Phone Number Required");
        assert_eq!(notice.description, "Please enter your phone number to connect WhatsApp support.");
    }

    #[test]
    fn form_errors_name_the_field() {
        let notice: Notice = ValidationError::MissingLocation.into();
        assert_eq!(notice.title, "Missing Information");
        assert!(notice.description.contains("location"));
    }

    #[test]
    fn whitespace_counts_as_empty() {
        assert_eq!(require("   ", ValidationError::MissingItems), Err(ValidationError::MissingItems));
        assert_eq!(require(" sofa ", ValidationError::MissingItems), Ok(()));
    }
}
