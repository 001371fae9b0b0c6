// ============================================================================
// ADMIN VIEWMODEL - Generación de informes
// ============================================================================

use crate::data::admin::{DATE_RANGES, REPORT_TYPES};
use crate::models::{option_label, Notice};
use crate::viewmodels::validation::ValidationError;

/// Selección del diálogo "Generate Report"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRequest {
    pub report_type: String,
    pub date_range: String,
}

impl ReportRequest {
    /// Ambos selects deben tener un valor conocido
    pub fn generate(&self) -> Result<Notice, ValidationError> {
        let report = option_label(REPORT_TYPES, &self.report_type)
            .ok_or(ValidationError::MissingReportType)?;
        let range = option_label(DATE_RANGES, &self.date_range)
            .ok_or(ValidationError::MissingDateRange)?;
        log::info!("📊 [ADMIN] Informe '{}' para '{}'", self.report_type, self.date_range);
        Ok(Notice::info(
            "Report Generated",
            format!("{} for {} has been generated successfully.", report, range.to_lowercase()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_names_type_and_range() {
        let request = ReportRequest { report_type: "efficiency".into(), date_range: "last-week".into() };
        let notice = request.generate().unwrap();
        assert_eq!(notice.title, "Report Generated");
        assert_eq!(notice.description, "Efficiency Report for last week has been generated successfully.");
    }

    #[test]
    fn unselected_fields_are_rejected_in_order() {
        assert_eq!(ReportRequest::default().generate(), Err(ValidationError::MissingReportType));
        let request = ReportRequest { report_type: "cost-analysis".into(), date_range: String::new() };
        assert_eq!(request.generate(), Err(ValidationError::MissingDateRange));
    }
}
