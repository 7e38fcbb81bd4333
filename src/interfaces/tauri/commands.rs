use std::path::PathBuf;
use std::sync::Arc;
use tauri::State;
use tracing::info;

use crate::application::use_cases::catalog::{CatalogInfo, SearchPage};
use crate::application::use_cases::system_prompt::PromptDocument;
use crate::domain::error::{AppError, Result};
use crate::domain::query::SearchQuery;
use crate::domain::settings::{ModelProvider, Settings};
use crate::domain::theme::{self, ThemeColors};
use crate::infrastructure::storage::resolve_bundled_dataset;

use super::state::AppState;

/// Load (or reload) the dataset. An explicit path wins over the configured
/// one, which wins over the bundled `data.csv`.
#[tauri::command]
pub async fn load_catalog(
    app: tauri::AppHandle,
    state: State<'_, Arc<AppState>>,
    path: Option<String>,
) -> Result<CatalogInfo> {
    let dataset = path
        .map(PathBuf::from)
        .or_else(|| state.app_config.dataset_path.clone())
        .or_else(|| resolve_bundled_dataset(&app))
        .ok_or_else(|| {
            AppError::ConfigError("No dataset configured and no bundled data.csv found".to_string())
        })?;

    let info = state.catalog.load_file(&dataset)?;
    info!(rows = info.rows, dataset = %dataset.display(), "Catalog loaded");
    Ok(info)
}

#[tauri::command]
pub async fn catalog_info(state: State<'_, Arc<AppState>>) -> Result<CatalogInfo> {
    Ok(state.catalog.info())
}

/// Run a search and return the requested page of ranked results.
#[tauri::command]
pub async fn search_catalog(
    state: State<'_, Arc<AppState>>,
    query: SearchQuery,
    page: usize,
) -> Result<SearchPage> {
    Ok(state.catalog.search_page(&query, page))
}

/// Download and summarize the paper behind a result link.
#[tauri::command]
pub async fn summarize_paper(state: State<'_, Arc<AppState>>, link: String) -> Result<String> {
    state.summarize_use_case.execute(&link).await
}

#[tauri::command]
pub async fn get_system_prompt(state: State<'_, Arc<AppState>>) -> Result<PromptDocument> {
    state.prompt_use_case.load().await
}

#[tauri::command]
pub async fn save_system_prompt(
    state: State<'_, Arc<AppState>>,
    prompt: String,
    word_count_goal: Option<u32>,
) -> Result<()> {
    state.prompt_use_case.save(&prompt, word_count_goal).await
}

#[tauri::command]
pub async fn get_settings(state: State<'_, Arc<AppState>>) -> Result<Settings> {
    state.settings_store.load()
}

#[tauri::command]
pub async fn save_settings(state: State<'_, Arc<AppState>>, settings: Settings) -> Result<()> {
    state.settings_store.save(&settings)
}

#[tauri::command]
pub async fn save_api_key(
    state: State<'_, Arc<AppState>>,
    provider: ModelProvider,
    key: String,
) -> Result<()> {
    state
        .config_service
        .save_api_key(provider.credential_key(), &key)
}

#[tauri::command]
pub async fn get_api_key(
    state: State<'_, Arc<AppState>>,
    provider: ModelProvider,
) -> Result<String> {
    state.config_service.get_api_key(provider.credential_key())
}

#[tauri::command]
pub async fn delete_api_key(
    state: State<'_, Arc<AppState>>,
    provider: ModelProvider,
) -> Result<()> {
    state
        .config_service
        .delete_api_key(provider.credential_key())
}

#[tauri::command]
pub async fn list_theme_presets() -> Result<Vec<String>> {
    Ok(ThemeColors::preset_names()
        .iter()
        .map(|name| name.to_string())
        .collect())
}

#[tauri::command]
pub async fn get_theme_preset(name: String) -> Result<ThemeColors> {
    ThemeColors::preset(&name)
        .ok_or_else(|| AppError::ConfigError(format!("Unknown theme preset: {}", name)))
}

#[tauri::command]
pub async fn theme_hsl_to_hex(hsl: String) -> Result<String> {
    Ok(theme::hsl_to_hex(&hsl))
}

#[tauri::command]
pub async fn theme_hex_to_hsl(hex: String) -> Result<String> {
    Ok(theme::hex_to_hsl(&hex))
}
