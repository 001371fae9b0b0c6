pub mod dialog;
pub mod dialogs;
pub mod navigation;
pub mod progress;
pub mod select;
pub mod stat_card;
pub mod tabs;
pub mod toaster;

pub use dialog::Dialog;
pub use navigation::Navigation;
pub use progress::Progress;
pub use select::Select;
pub use stat_card::StatCard;
pub use tabs::{TabItem, Tabs};
pub use toaster::Toaster;
