pub mod use_simulated_task;
pub mod use_toast;

pub use use_simulated_task::{use_simulated_task, UseSimulatedTaskHandle};
pub use use_toast::{use_toast, ToastContext, ToastProvider};
