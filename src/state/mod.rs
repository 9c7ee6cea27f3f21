pub mod mode;
pub mod navigation;
pub mod tree;
pub mod ui;

pub use mode::AppMode;
pub use navigation::{Crumb, NavigationState};
pub use tree::{TreeRow, TreeState};
pub use ui::{Notice, UIState};
