mod commands;
mod controller;
mod error;
mod link_intake;
mod logging;
mod prompts;
mod surface;
mod surface_sync;

use controller::SessionController;
use link_intake::Subscriptions;
use logging::setup_logging;
use surface::SESSION_WINDOW_LABEL;

#[cfg(test)]
mod tests;

use af_config::Config;
use af_core::FileIdentityStore;

use std::sync::Arc;

use tauri::{Manager, RunEvent, WindowEvent};
use tracing::info;
#[cfg(mobile)]
use tracing::warn;

const MAIN_WINDOW_LABEL: &str = "main";

// Tauri event names (must match frontend constants in main.js)
const EVENT_VIEW_STATE_CHANGED: &str = "view-state-changed";

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let builder = tauri::Builder::default();

    // Desktop only: a second launch (e.g. from a link) forwards its URL as a deep link
    #[cfg(desktop)]
    let builder = builder.plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
        if let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) {
            window.show().ok();
            window.set_focus().ok();
        }
    }));

    // Mobile only: the form loads in the main webview and gets its scripts per page
    #[cfg(mobile)]
    let builder = builder.on_page_load(|webview, payload| {
        use tauri::webview::PageLoadEvent;

        if webview.label() != MAIN_WINDOW_LABEL
            || !matches!(payload.event(), PageLoadEvent::Finished)
        {
            return;
        }

        let app = webview.app_handle().clone();
        let url = payload.url().clone();
        if let Some(controller) = app
            .try_state::<Arc<SessionController>>()
            .map(|state| state.inner().clone())
        {
            tauri::async_runtime::spawn(async move {
                controller.page_loaded(&app, url).await;
            });
        }
    });

    builder
        .plugin(tauri_plugin_deep_link::init())
        .plugin(tauri_plugin_clipboard_manager::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let app_data_dir = app.path().app_data_dir()?;

            // A broken config or logging setup never stops the app
            let config = Config::load_or_default(&app_data_dir);
            if let Err(e) = setup_logging(&app_data_dir, &config.logging) {
                eprintln!("Failed to set up logging: {e}");
            }

            info!("Starting Attendance Autofill v{}", env!("CARGO_PKG_VERSION"));
            info!("Data directory: {:?}", app_data_dir);
            config.log_summary();

            #[cfg(mobile)]
            if let Err(e) = surface::remember_home_page(app.handle()) {
                warn!("{e}");
            }

            let store = Arc::new(FileIdentityStore::with_filename(
                &app_data_dir,
                config.storage.filename.clone(),
            ));
            let controller = Arc::new(SessionController::new(store, config.session.title.clone()));
            app.manage(controller.clone());

            let subscriptions = Subscriptions::subscribe(app.handle(), controller.clone());
            app.manage(subscriptions);

            let app_handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                controller.start(&app_handle).await;
            });

            Ok(())
        })
        .on_window_event(|window, event| {
            let app = window.app_handle().clone();
            let Some(controller) = app
                .try_state::<Arc<SessionController>>()
                .map(|state| state.inner().clone())
            else {
                return;
            };

            match event {
                WindowEvent::Focused(focused) => {
                    let focused = *focused;
                    tauri::async_runtime::spawn(async move {
                        controller.focus_changed(&app, focused).await;
                    });
                }
                WindowEvent::Destroyed if window.label() == SESSION_WINDOW_LABEL => {
                    tauri::async_runtime::spawn(async move {
                        controller.surface_destroyed(&app).await;
                    });
                }
                _ => {}
            }
        })
        .invoke_handler(tauri::generate_handler![
            commands::frontend_ready,
            commands::save_identity,
            commands::edit_details,
            commands::check_clipboard,
            commands::close_session,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| {
            if let RunEvent::Exit = event {
                if let Some(subscriptions) = app_handle.try_state::<Subscriptions>() {
                    subscriptions.release(app_handle);
                }
                info!("Exiting");
            }
        });
}
