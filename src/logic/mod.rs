pub mod aggregator;
pub mod extractor;
pub mod fetcher;
pub mod message_senders;
pub mod sources;

/// One headline pulled out of a source page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    /// Always absolute.
    pub link: String,
    pub source: String,
}

/// Outcome of a single fetch + extract attempt against one source.
#[derive(Debug, Clone)]
pub struct SourceResult {
    pub source: String,
    pub items: Vec<NewsItem>,
    pub ok: bool,
}

impl SourceResult {
    pub fn failed(source: impl Into<String>) -> Self {
        SourceResult {
            source: source.into(),
            items: Vec::new(),
            ok: false,
        }
    }
}
