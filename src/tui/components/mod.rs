// Components module - one render module per panel
//
// Layout, top to bottom:
// - Title bar: App name, spinner while a search runs
// - Input panel: Array and target fields
// - Board panels: One per algorithm, cells plus readouts
// - Chart panel: Step-count comparison
// - Logs panel: System log entries
// - Status bar: Uptime, runs, delay, last event
//
// Each component is a focused, single-responsibility module.

pub mod board_panel;
pub mod chart_panel;
pub mod input_panel;
pub mod logs_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;
