//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: Array snapshot as a colored bar chart
//! - [`tree`]: Binary search tree outline with the insertion path highlighted
//! - [`info`]: Algorithm details, metrics, legend and the dataset strip
//! - [`status`]: Status bar with keybindings and playback state
//!
//! Each pane exports a `render_*` function that only reads snapshot data; none
//! of them mutate playback state.

pub mod bars;
pub mod info;
pub mod status;
pub mod tree;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use info::{render_dataset_pane, render_info_pane, InfoRenderData};
pub use status::{render_status_bar, StatusRenderData};
pub use tree::{render_idle_tree_pane, render_tree_pane};
