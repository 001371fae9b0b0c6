// ============================================================================
// STATE MODULE - Estado de UI compartido (toasts) y de diálogos
// ============================================================================

pub mod toast_state;
pub mod dialog_state;

pub use toast_state::*;
pub use dialog_state::*;
