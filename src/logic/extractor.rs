use itertools::Itertools;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::trace;
use url::Url;

use super::{
    sources::{LinkRule, SourceRule},
    NewsItem,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Source `{source_name}` has no {kind} selectors")]
    NoSelectors {
        source_name: String,
        kind: &'static str,
    },

    #[error("Source `{source_name}` has invalid selector `{selector}`: {reason}")]
    InvalidSelector {
        source_name: String,
        selector: String,
        reason: String,
    },

    #[error("Source `{source_name}` has invalid origin `{origin}`")]
    InvalidOrigin { source_name: String, origin: String },

    #[error("Source `{source_name}` has invalid url `{url}`")]
    InvalidUrl { source_name: String, url: String },
}

/// Compiled form of a [`SourceRule`].
#[derive(Debug)]
pub struct Extractor {
    source: String,
    origin: Url,
    items: Selector,
    titles: Selector,
    anchor: Selector,
    link: LinkRule,
}

impl Extractor {
    pub fn new(rule: &SourceRule) -> Result<Self, SourceError> {
        let origin = Url::parse(&rule.origin).map_err(|_| SourceError::InvalidOrigin {
            source_name: rule.name.clone(),
            origin: rule.origin.clone(),
        })?;
        Ok(Extractor {
            source: rule.name.clone(),
            origin,
            items: selector_group(&rule.name, "item", &rule.item_selectors)?,
            titles: selector_group(&rule.name, "title", &rule.title_selectors)?,
            anchor: selector_group(&rule.name, "anchor", &["a[href]".to_owned()])?,
            link: rule.link,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Pulls at most `max_items` headlines out of `markup`, in document order.
    ///
    /// Items without a title or a usable link are skipped; they never stop
    /// the rest of the page from being read.
    pub fn extract(&self, markup: &str, max_items: usize) -> Vec<NewsItem> {
        let document = Html::parse_document(markup);
        document
            .select(&self.items)
            .filter_map(|item| self.extract_item(item))
            .take(max_items)
            .collect()
    }

    fn extract_item(&self, item: ElementRef<'_>) -> Option<NewsItem> {
        let title = item
            .select(&self.titles)
            .map(|element| element.text().flat_map(str::split_whitespace).join(" "))
            .find(|title| !title.is_empty());
        let Some(title) = title else {
            trace!(source = %self.source, "Skipping item without title");
            return None;
        };
        let Some(link) = self.link_of(item) else {
            trace!(source = %self.source, %title, "Skipping item without link");
            return None;
        };
        Some(NewsItem {
            title,
            link: link.into(),
            source: self.source.clone(),
        })
    }

    fn link_of(&self, item: ElementRef<'_>) -> Option<Url> {
        let href = match self.link {
            LinkRule::ItemHref => item.value().attr("href"),
            LinkRule::FirstAnchor => item
                .select(&self.anchor)
                .next()
                .and_then(|anchor| anchor.value().attr("href")),
        }?
        .trim();
        if href.is_empty() {
            return None;
        }
        self.origin
            .join(href)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
    }
}

/// The list is matched as one CSS selector group, so an element matching any
/// entry is taken once, in document order.
fn selector_group(
    source: &str,
    kind: &'static str,
    selectors: &[String],
) -> Result<Selector, SourceError> {
    if selectors.is_empty() {
        return Err(SourceError::NoSelectors {
            source_name: source.to_owned(),
            kind,
        });
    }
    let group = selectors.join(", ");
    Selector::parse(&group).map_err(|err| SourceError::InvalidSelector {
        source_name: source.to_owned(),
        selector: group.clone(),
        reason: err.to_string(),
    })
}
