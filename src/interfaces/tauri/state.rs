use crate::application::use_cases::catalog::CatalogService;
use crate::application::use_cases::summarize::SummarizeUseCase;
use crate::application::use_cases::system_prompt::SystemPromptUseCase;
use crate::infrastructure::config::{AppConfig, ConfigService};
use crate::infrastructure::settings_store::SettingsStore;

pub struct AppState {
    pub catalog: CatalogService,
    pub summarize_use_case: SummarizeUseCase,
    pub prompt_use_case: SystemPromptUseCase,
    pub config_service: ConfigService,
    pub settings_store: SettingsStore,
    pub app_config: AppConfig,
}
