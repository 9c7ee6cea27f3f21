// UI state - presentation settings and status notices
use crate::style::Theme;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(s) | Notice::Error(s) => s,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

pub struct UIState {
    pub show_hidden: bool,
    pub dirs_only: bool,
    pub theme: Theme,
    pub notice: Option<(Notice, Instant)>,
}

impl UIState {
    pub fn new(theme: Theme, show_hidden: bool, dirs_only: bool) -> Self {
        Self {
            show_hidden,
            dirs_only,
            theme,
            notice: None,
        }
    }

    pub fn set_error(&mut self, message: String) {
        tracing::warn!(%message, "error notice");
        self.notice = Some((Notice::Error(message), Instant::now()));
    }

    pub fn set_info(&mut self, message: String) {
        tracing::info!(%message, "info notice");
        self.notice = Some((Notice::Info(message), Instant::now()));
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notice.as_ref().map(|(n, _)| n)
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.notice {
            if time.elapsed().as_secs() >= timeout_secs {
                self.notice = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_replace_each_other() {
        let mut ui = UIState::new(Theme::Dark, false, false);
        ui.set_info("Pinned a".into());
        ui.set_error("Delete failed".into());
        let notice = ui.current_notice().unwrap();
        assert!(notice.is_error());
        assert_eq!(notice.text(), "Delete failed");
    }

    #[test]
    fn expired_notice_is_cleared() {
        let mut ui = UIState::new(Theme::Dark, false, false);
        ui.set_info("hello".into());
        ui.clear_expired_messages(60);
        assert!(ui.current_notice().is_some());
        ui.clear_expired_messages(0);
        assert!(ui.current_notice().is_none());
    }
}
