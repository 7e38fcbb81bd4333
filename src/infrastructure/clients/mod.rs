pub mod entrez;
pub mod summarizer;

pub use entrez::EntrezClient;
pub use summarizer::SummarizerClient;
