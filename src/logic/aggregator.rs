use std::{collections::HashMap, sync::Arc};

use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::{
    extractor::{Extractor, SourceError},
    fetcher::FetchPage,
    sources::{CategorySources, SourceRule},
    NewsItem, SourceResult,
};
use crate::dialogues::{news, Display, NewsCategory};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NewsError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("News category `{0}` is configured twice")]
    DuplicateCategory(&'static str),

    #[error("News category `{0}` is not configured")]
    UnknownCategory(&'static str),
}

struct SourceFeed {
    rule: SourceRule,
    extractor: Extractor,
}

struct CategoryFeed {
    sources: Vec<SourceFeed>,
    per_source_cap: usize,
    total_cap: usize,
}

pub struct NewsAggregator {
    fetcher: Arc<dyn FetchPage>,
    feeds: HashMap<NewsCategory, CategoryFeed>,
}

impl NewsAggregator {
    /// Compiles every source rule up front; a broken rule fails here, not on the first request.
    pub fn new(
        fetcher: Arc<dyn FetchPage>,
        catalog: Vec<CategorySources>,
    ) -> Result<Self, NewsError> {
        let mut feeds = HashMap::new();
        for entry in catalog {
            let mut sources = Vec::with_capacity(entry.sources.len());
            for rule in entry.sources {
                if Url::parse(&rule.url).is_err() {
                    return Err(SourceError::InvalidUrl {
                        source_name: rule.name.clone(),
                        url: rule.url.clone(),
                    }
                    .into());
                }
                let extractor = Extractor::new(&rule)?;
                sources.push(SourceFeed { rule, extractor });
            }
            let feed = CategoryFeed {
                sources,
                per_source_cap: entry.per_source_cap,
                total_cap: entry.total_cap,
            };
            if feeds.insert(entry.category, feed).is_some() {
                return Err(NewsError::DuplicateCategory(entry.category.id()));
            }
        }
        Ok(NewsAggregator { fetcher, feeds })
    }

    pub fn supports(&self, category: NewsCategory) -> bool {
        self.feeds.contains_key(&category)
    }

    /// Fetches the category's sources one after another and merges what they yield.
    #[instrument(skip_all, fields(category = category.id()))]
    pub async fn collect(&self, category: NewsCategory) -> Result<Vec<NewsItem>, NewsError> {
        let feed = self
            .feeds
            .get(&category)
            .ok_or(NewsError::UnknownCategory(category.id()))?;
        let mut results = Vec::with_capacity(feed.sources.len());
        for source in &feed.sources {
            results.push(self.fetch_source(source, feed.per_source_cap).await);
        }
        let failed: Vec<&str> = results
            .iter()
            .filter(|result| !result.ok)
            .map(|result| result.source.as_str())
            .collect();
        if !failed.is_empty() {
            warn!(?failed, sources = results.len(), "Some news sources are unavailable");
        }
        let items = merge(results, feed.total_cap);
        info!(items = items.len(), "News collected");
        Ok(items)
    }

    pub async fn aggregate(&self, category: NewsCategory) -> Result<Display, NewsError> {
        let items = self.collect(category).await?;
        Ok(news::digest(category, &items))
    }

    async fn fetch_source(&self, source: &SourceFeed, cap: usize) -> SourceResult {
        let name = source.extractor.source();
        let markup = match self.fetcher.fetch(&source.rule.url).await {
            Ok(markup) => markup,
            Err(err) => {
                warn!(source = name, url = %source.rule.url, error = ?err, "Failed to fetch news source");
                return SourceResult::failed(name);
            }
        };
        let items = source.extractor.extract(&markup, cap);
        if items.is_empty() {
            warn!(source = name, "No news extracted from source");
        } else {
            debug!(source = name, items = items.len(), "News source read");
        }
        SourceResult {
            source: name.to_owned(),
            items,
            ok: true,
        }
    }
}

/// Concatenates results in the order given and keeps the first `total_cap` items.
pub fn merge(results: impl IntoIterator<Item = SourceResult>, total_cap: usize) -> Vec<NewsItem> {
    results
        .into_iter()
        .flat_map(|result| result.items)
        .take(total_cap)
        .collect()
}
