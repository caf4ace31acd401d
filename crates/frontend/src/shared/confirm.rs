/// Asks the user to confirm a destructive action.
pub trait ConfirmIntent {
    fn confirm(&self, message: &str) -> bool;
}

/// `window.confirm` dialog
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl ConfirmIntent for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Fixed answer, for tests and for flows that confirm elsewhere
#[derive(Debug, Clone, Copy)]
pub struct AlwaysAnswer(pub bool);

impl ConfirmIntent for AlwaysAnswer {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}
