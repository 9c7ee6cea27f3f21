use std::path::PathBuf;

/// A discrete user action, applied by `Axiom::dispatch`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Navigation
    NavigateInto(PathBuf),
    NavigateTo(usize),
    GoBack,
    Refresh,

    // Tree
    Select(PathBuf),
    ToggleExpand(PathBuf),

    // File operations
    Open(PathBuf),
    OpenSelected,
    RequestDelete(PathBuf),
    ConfirmDelete,
    CancelDelete,

    // Pins
    Pin(PathBuf),
    Unpin(String),
    OpenPin(String),

    // UI
    ToggleHidden,
    ToggleTheme,
}
