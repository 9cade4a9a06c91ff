mod bikeshare_app;
mod menu;
mod pager;
mod prompt;
mod report_ops;
mod session;

pub use bikeshare_app::BikeshareApp;
pub use menu::MenuOption;
pub use pager::display_records;
pub use prompt::{Prompter, INVALID_SELECTION};
pub use report_ops::run_report;
pub use session::Session;
