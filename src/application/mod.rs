pub mod use_cases;

pub use use_cases::catalog::CatalogService;
pub use use_cases::summarize::SummarizeUseCase;
pub use use_cases::system_prompt::SystemPromptUseCase;
