pub mod support;

use republic_info_bot::logic::{
    extractor::{Extractor, SourceError},
    sources::{self, default_catalog, LinkRule, SourceRule},
};
use support::markup::{ria_page, tass_page};

fn example_rule() -> SourceRule {
    SourceRule::new(
        "Example",
        "https://example.org/news/",
        "https://example.org",
        LinkRule::FirstAnchor,
    )
    .items(&[".item", ".legacy-item"])
    .titles(&[".title", "h2"])
}

fn page(body: &str) -> String {
    format!("<html><body>{body}</body></html>")
}

#[test]
fn relative_links_become_absolute() {
    let extractor = Extractor::new(&example_rule()).unwrap();
    let markup = page(
        r#"<div class="item"><a href="/news/1"><span class="title">First</span></a></div>
           <div class="item"><span class="title">Second</span><a href="https://cdn.example.net/x">x</a></div>"#,
    );

    let items = extractor.extract(&markup, 10);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].link, "https://example.org/news/1");
    assert_eq!(items[0].title, "First");
    assert_eq!(items[0].source, "Example");
    assert_eq!(items[1].link, "https://cdn.example.net/x");
}

#[test]
fn anchor_items_use_their_own_href() {
    let extractor = Extractor::new(&sources::ria()).unwrap();
    let items = extractor.extract(&ria_page(2), 5);

    let links: Vec<_> = items.iter().map(|item| item.link.as_str()).collect();
    assert_eq!(
        links,
        ["https://ria.ru/2025/ria-1.html", "https://ria.ru/2025/ria-2.html"]
    );
}

#[test]
fn either_generation_of_class_names_matches_in_document_order() {
    let extractor = Extractor::new(&sources::tass()).unwrap();
    let markup = page(
        r#"<div class="news-card"><a href="/a"><h4 class="news-card__title">Card</h4></a></div>
           <div class="news-line__item"><a href="/b"><span class="news-line__item-title">Line</span></a></div>"#,
    );

    let titles: Vec<_> = extractor
        .extract(&markup, 5)
        .into_iter()
        .map(|item| item.title)
        .collect();
    assert_eq!(titles, ["Card", "Line"]);
}

#[test]
fn items_without_title_or_link_are_skipped() {
    let extractor = Extractor::new(&example_rule()).unwrap();
    let markup = page(
        r#"<div class="item"><a href="/1"><span class="title">  </span></a></div>
           <div class="item"><span class="title">No link</span></div>
           <div class="item"><a href="javascript:void(0)"><span class="title">Script</span></a></div>
           <div class="legacy-item"><h2>Kept</h2><a href="/4">more</a></div>"#,
    );

    let items = extractor.extract(&markup, 10);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Kept");
    assert_eq!(items[0].link, "https://example.org/4");
}

#[test]
fn cap_counts_kept_items() {
    let extractor = Extractor::new(&example_rule()).unwrap();
    let markup = page(
        r#"<div class="item"><span class="title">No link</span></div>
           <div class="item"><a href="/1"><span class="title">One</span></a></div>
           <div class="item"><a href="/2"><span class="title">Two</span></a></div>
           <div class="item"><a href="/3"><span class="title">Three</span></a></div>"#,
    );

    let titles: Vec<_> = extractor
        .extract(&markup, 2)
        .into_iter()
        .map(|item| item.title)
        .collect();
    assert_eq!(titles, ["One", "Two"]);
}

#[test]
fn titles_have_whitespace_collapsed() {
    let extractor = Extractor::new(&example_rule()).unwrap();
    let markup = page(
        "<div class=\"item\"><a href=\"/1\"><span class=\"title\">\n  Breaking:\n   <b>big</b>   news </span></a></div>",
    );

    let items = extractor.extract(&markup, 1);
    assert_eq!(items[0].title, "Breaking: big news");
}

#[test]
fn extraction_is_idempotent() {
    let extractor = Extractor::new(&sources::tass()).unwrap();
    let markup = tass_page(4);

    assert_eq!(extractor.extract(&markup, 3), extractor.extract(&markup, 3));
}

#[test]
fn unrelated_markup_yields_nothing() {
    let extractor = Extractor::new(&sources::belru()).unwrap();
    assert!(extractor
        .extract("<html><body><p>Сайт на обслуживании</p></body></html>", 4)
        .is_empty());
    assert!(extractor.extract("", 4).is_empty());
}

#[test]
fn broken_rules_fail_to_compile() {
    let invalid = example_rule().items(&["div[["]);
    assert!(matches!(
        Extractor::new(&invalid),
        Err(SourceError::InvalidSelector { .. })
    ));

    let empty = example_rule().titles(&[]);
    assert!(matches!(
        Extractor::new(&empty),
        Err(SourceError::NoSelectors { kind: "title", .. })
    ));

    let mut relative_origin = example_rule();
    relative_origin.origin = "example.org".into();
    assert!(matches!(
        Extractor::new(&relative_origin),
        Err(SourceError::InvalidOrigin { .. })
    ));
}

#[test]
fn default_sources_compile() {
    for category in default_catalog() {
        assert!(category.per_source_cap <= category.total_cap);
        for rule in &category.sources {
            Extractor::new(rule).unwrap();
        }
    }
}
