//! User-facing dialogs.

use tauri::AppHandle;
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};

pub const LINK_PROMPT_TITLE: &str = "Link Detected";
pub const LINK_PROMPT_MESSAGE: &str = "Found a Forms link in your clipboard. Open it?";
pub const ERROR_TITLE: &str = "Error";

/// Asks whether to open a link found on the clipboard. `on_answer` gets `true` for Yes.
pub fn confirm_clipboard_link<F>(app: &AppHandle, on_answer: F)
where
    F: FnOnce(bool) + Send + 'static,
{
    app.dialog()
        .message(LINK_PROMPT_MESSAGE)
        .title(LINK_PROMPT_TITLE)
        .kind(MessageDialogKind::Info)
        .buttons(MessageDialogButtons::OkCancelCustom("Yes".into(), "No".into()))
        .show(on_answer);
}

/// Single-acknowledgement error notice.
pub fn show_error(app: &AppHandle, message: impl Into<String>) {
    app.dialog()
        .message(message)
        .title(ERROR_TITLE)
        .kind(MessageDialogKind::Error)
        .buttons(MessageDialogButtons::Ok)
        .show(|_| {});
}
