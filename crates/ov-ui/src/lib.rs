//! User interface components for the ocean explorer
//!
//! The control panel drives the synchronizer from the level selector and the
//! year slider; the shell lays out the map, the readouts and the two charts.

pub mod control_panel;
pub mod loader;
pub mod shell;
pub mod theme;

pub use control_panel::ControlPanel;
pub use loader::{loader_message, LoadOverlay};
pub use shell::{ExplorerShell, ExplorerViews};
pub use theme::{apply_theme, Theme};
