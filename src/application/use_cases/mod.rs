pub mod catalog;
pub mod fuzzy_index;
pub mod paginate;
pub mod search;
pub mod summarize;
pub mod system_prompt;
