// ============================================================================
// INTEGRATION VIEWMODEL - Hub de integraciones
// ============================================================================

use crate::models::{ApiConnection, ApiKind, ConnectionStatus, IntegrationKind, Notice};
use crate::viewmodels::validation::{require, ValidationError};

/// Formulario "Add New Integration"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewIntegrationForm {
    pub name: String,
    pub endpoint: String,
    /// Nunca se registra ni se conserva tras añadir la integración
    pub api_key: String,
}

impl NewIntegrationForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, ValidationError::MissingServiceName)?;
        require(&self.endpoint, ValidationError::MissingEndpoint)?;
        Ok(())
    }

    /// Crea la conexión pendiente con el siguiente id libre
    pub fn to_connection(&self, existing: &[ApiConnection]) -> Result<ApiConnection, ValidationError> {
        self.validate()?;
        let next_id = existing.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Ok(ApiConnection {
            id: next_id,
            name: self.name.trim().to_string(),
            kind: ApiKind::Other,
            status: ConnectionStatus::Pending,
            health: 0,
        })
    }
}

/// Estado siguiente de la página tras enviar el formulario
pub struct AddIntegrationOutcome {
    pub connections: Vec<ApiConnection>,
    pub form: NewIntegrationForm,
    pub notice: Notice,
}

pub fn add_integration(connections: &[ApiConnection], form: &NewIntegrationForm) -> AddIntegrationOutcome {
    match form.to_connection(connections) {
        Ok(connection) => {
            log::info!("➕ [INTEGRATION] Añadida '{}' (id {})", connection.name, connection.id);
            let notice = Notice::info(
                "Integration Added",
                format!("{} has been added and is pending verification.", connection.name),
            );
            let mut next = connections.to_vec();
            next.push(connection);
            AddIntegrationOutcome { connections: next, form: NewIntegrationForm::default(), notice }
        }
        Err(err) => {
            log::warn!("⚠️ [INTEGRATION] Formulario inválido: {}", err);
            AddIntegrationOutcome {
                connections: connections.to_vec(),
                form: form.clone(),
                notice: err.into(),
            }
        }
    }
}

pub fn configured_notice(kind: IntegrationKind) -> Notice {
    Notice::info(
        "Integration Configured",
        format!("{} has been successfully configured and connected.", kind.display_name()),
    )
}

pub fn export_notice() -> Notice {
    Notice::info(
        "Export Started",
        "System configuration export has been initiated. Download will start shortly.",
    )
}

pub fn export_failed_notice() -> Notice {
    Notice::destructive("Export Failed", "The configuration file could not be created.")
}

pub fn sync_notice() -> Notice {
    Notice::info(
        "Sync Initiated",
        "Synchronizing all systems and data. This may take a few minutes.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::integration::api_connections;

    fn form(name: &str, endpoint: &str) -> NewIntegrationForm {
        NewIntegrationForm { name: name.into(), endpoint: endpoint.into(), api_key: "secret".into() }
    }

    #[test]
    fn valid_form_appends_pending_connection_and_resets() {
        let initial = api_connections();
        let outcome = add_integration(&initial, &form("Weather API", "https://api.weather.example"));

        assert_eq!(outcome.connections.len(), initial.len() + 1);
        let added = outcome.connections.last().cloned().unwrap();
        assert_eq!(added.id, 6);
        assert_eq!(added.name, "Weather API");
        assert_eq!(added.status, ConnectionStatus::Pending);
        assert_eq!(added.kind, ApiKind::Other);
        assert_eq!(outcome.form, NewIntegrationForm::default());
        assert!(!outcome.notice.is_destructive());
    }

    #[test]
    fn missing_fields_leave_everything_unchanged() {
        let initial = api_connections();
        let bad = form("", "https://x");
        let outcome = add_integration(&initial, &bad);
        assert_eq!(outcome.connections, initial);
        assert_eq!(outcome.form, bad);
        assert!(outcome.notice.is_destructive());

        assert_eq!(form("Svc", " ").validate(), Err(ValidationError::MissingEndpoint));
    }

    #[test]
    fn first_connection_gets_id_one() {
        let connection = form("A", "B").to_connection(&[]).unwrap();
        assert_eq!(connection.id, 1);
    }

    #[test]
    fn configured_notice_uses_display_name() {
        assert_eq!(
            configured_notice(IntegrationKind::MongoDb).description,
            "MongoDB Database has been successfully configured and connected."
        );
    }
}
