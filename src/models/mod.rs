pub mod status;
pub mod notice;
pub mod dialog;
pub mod metrics;
pub mod operations;
pub mod integration;
pub mod accessibility;
pub mod export;

pub use status::*;
pub use notice::{Notice, NoticeVariant};
pub use dialog::{IntegrationKind, MonitorKind, QuickAction, Showcase};
pub use metrics::*;
pub use operations::*;
pub use integration::*;
pub use accessibility::*;
pub use export::ConfigExport;
