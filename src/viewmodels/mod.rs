pub mod validation;
pub mod citizen_viewmodel;
pub mod contact_viewmodel;
pub mod integration_viewmodel;
pub mod admin_viewmodel;
pub mod accessibility_viewmodel;

pub use validation::ValidationError;
pub use citizen_viewmodel::{PickupForm, ReportForm};
pub use integration_viewmodel::NewIntegrationForm;
pub use admin_viewmodel::ReportRequest;
pub use accessibility_viewmodel::SettingToggle;
