mod application;
mod domain;
mod infrastructure;
mod interfaces;

use std::sync::Arc;
use tauri::Manager;
use tracing::error;

use crate::application::use_cases::catalog::CatalogService;
use crate::application::use_cases::summarize::SummarizeUseCase;
use crate::application::use_cases::system_prompt::SystemPromptUseCase;
use crate::infrastructure::clients::{EntrezClient, SummarizerClient};
use crate::infrastructure::config::{AppConfig, ConfigService};
use crate::infrastructure::settings_store::SettingsStore;
use crate::infrastructure::storage::resolve_app_data_dir;
use crate::interfaces::tauri::commands::*;
use crate::interfaces::tauri::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let app_handle = app.handle().clone();

            let app_data_dir = resolve_app_data_dir(&app_handle).map_err(|err| {
                error!(error = %err, "Failed to resolve app data dir");
                err
            })?;

            let app_config = AppConfig::load().unwrap_or_else(|err| {
                error!(error = %err, "Falling back to default configuration");
                AppConfig::default()
            });

            let summarizer = Arc::new(SummarizerClient::new(
                &app_config.summarizer_url,
                &app_config.prompt_api_url,
            ));
            let articles = Arc::new(EntrezClient::new(&app_config.efetch_url));

            let state = AppState {
                catalog: CatalogService::new(),
                summarize_use_case: SummarizeUseCase::new(articles, summarizer.clone()),
                prompt_use_case: SystemPromptUseCase::new(summarizer),
                config_service: ConfigService::new(),
                settings_store: SettingsStore::new(app_data_dir.join("settings.json")),
                app_config,
            };
            app_handle.manage(Arc::new(state));

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            load_catalog,
            catalog_info,
            search_catalog,
            summarize_paper,
            get_system_prompt,
            save_system_prompt,
            get_settings,
            save_settings,
            save_api_key,
            get_api_key,
            delete_api_key,
            list_theme_presets,
            get_theme_preset,
            theme_hsl_to_hex,
            theme_hex_to_hsl
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
