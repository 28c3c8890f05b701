//! Where news comes from and how each page is read.
//!
//! Selector lists are ordered the way the sites evolved: older class names
//! stay next to the current ones, and either may match. When a site changes
//! its markup again the source silently yields nothing.

use crate::dialogues::NewsCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRule {
    /// The matched item is itself the anchor.
    ItemHref,
    /// First anchor with an `href` inside the item.
    FirstAnchor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRule {
    pub name: String,
    pub url: String,
    /// Base for relative links.
    pub origin: String,
    pub item_selectors: Vec<String>,
    pub title_selectors: Vec<String>,
    pub link: LinkRule,
}

impl SourceRule {
    pub fn new(name: &str, url: &str, origin: &str, link: LinkRule) -> Self {
        SourceRule {
            name: name.to_owned(),
            url: url.to_owned(),
            origin: origin.to_owned(),
            item_selectors: Vec::new(),
            title_selectors: Vec::new(),
            link,
        }
    }

    pub fn items(mut self, selectors: &[&str]) -> Self {
        self.item_selectors = selectors.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn titles(mut self, selectors: &[&str]) -> Self {
        self.title_selectors = selectors.iter().map(|s| s.to_string()).collect();
        self
    }
}

#[derive(Debug, Clone)]
pub struct CategorySources {
    pub category: NewsCategory,
    pub sources: Vec<SourceRule>,
    pub per_source_cap: usize,
    pub total_cap: usize,
}

pub fn ria() -> SourceRule {
    SourceRule::new("RIA Новости", "https://ria.ru/", "https://ria.ru", LinkRule::ItemHref)
        .items(&["a.cell-list__item-link", "a.list-item__content"])
        .titles(&[".cell-list__item-title", ".list-item__title"])
}

pub fn tass() -> SourceRule {
    SourceRule::new("ТАСС", "https://tass.ru/", "https://tass.ru", LinkRule::FirstAnchor)
        .items(&[".news-line__item", ".news-card"])
        .titles(&[".news-line__item-title", ".news-card__title"])
}

pub fn belpressa() -> SourceRule {
    SourceRule::new(
        "БелПресса",
        "https://www.belpressa.ru/news/",
        "https://www.belpressa.ru",
        LinkRule::FirstAnchor,
    )
    .items(&[".news-list-item", ".news-item"])
    .titles(&["h2", ".news-title", ".title"])
}

pub fn belru() -> SourceRule {
    SourceRule::new(
        "Бел.Ру",
        "https://www.bel.ru/news/",
        "https://www.bel.ru",
        LinkRule::FirstAnchor,
    )
    .items(&[".news-item", ".article-item"])
    .titles(&[".news-title", ".title", "h3"])
}

pub fn default_catalog() -> Vec<CategorySources> {
    vec![
        CategorySources {
            category: NewsCategory::Federal,
            sources: vec![ria(), tass()],
            per_source_cap: 3,
            total_cap: 6,
        },
        CategorySources {
            category: NewsCategory::Regional,
            sources: vec![belpressa(), belru()],
            per_source_cap: 4,
            total_cap: 8,
        },
    ]
}
