//! Tauri IPC commands for frontend communication.

use crate::controller::SessionController;
use crate::error::ShellError;

use af_core::{IdentityRecord, ProbeTrigger, ViewSnapshot};

use std::sync::Arc;

use tauri::{AppHandle, State};
use tracing::{error, info};

/// Called by the frontend after it subscribes to `view-state-changed`.
/// Returns the current snapshot - enables race-free startup handshake.
///
/// The handshake protocol:
/// 1. Frontend subscribes to view-state-changed events
/// 2. Frontend calls frontend_ready (this command)
/// 3. Host responds with the current ViewSnapshot
/// 4. Later transitions arrive as events
#[tauri::command]
pub async fn frontend_ready(
    controller: State<'_, Arc<SessionController>>,
) -> Result<ViewSnapshot, String> {
    info!("Frontend ready notification received");
    Ok(controller.snapshot().await)
}

/// Saves the three identity fields from the setup form.
#[tauri::command]
pub async fn save_identity(
    app: AppHandle,
    controller: State<'_, Arc<SessionController>>,
    roll: String,
    name: String,
    email: String,
) -> Result<ViewSnapshot, String> {
    let record = IdentityRecord::new(roll, name, email);
    controller
        .save_identity(&app, record)
        .await
        .map_err(|e| command_error("save identity", &e))
}

/// Ready -> SetupForm.
#[tauri::command]
pub async fn edit_details(
    app: AppHandle,
    controller: State<'_, Arc<SessionController>>,
) -> Result<ViewSnapshot, String> {
    controller
        .edit_details(&app)
        .await
        .map_err(|e| command_error("edit details", &e))
}

/// Manual "check clipboard now". Always offers a forms link, even one the
/// user declined before.
#[tauri::command]
pub async fn check_clipboard(
    app: AppHandle,
    controller: State<'_, Arc<SessionController>>,
) -> Result<ViewSnapshot, String> {
    let controller = controller.inner().clone();
    controller.probe_clipboard(&app, ProbeTrigger::Manual).await;
    Ok(controller.snapshot().await)
}

/// ActiveSession -> Ready.
#[tauri::command]
pub async fn close_session(
    app: AppHandle,
    controller: State<'_, Arc<SessionController>>,
) -> Result<ViewSnapshot, String> {
    controller
        .close_session(&app)
        .await
        .map_err(|e| command_error("close session", &e))
}

/// Logs a failed command and formats it for the frontend.
///
/// Validation failures are expected user input and are not logged as errors.
pub fn command_error(action: &str, e: &ShellError) -> String {
    match e {
        ShellError::Session(session_error) if session_error.is_validation() => {}
        _ => error!("Failed to {action}: {e}"),
    }
    e.to_command_error()
}
