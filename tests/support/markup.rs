//! Minimal pages shaped like the ones the real sources serve.

pub fn ria_page(count: usize) -> String {
    let items: String = (1..=count)
        .map(|i| {
            format!(
                r#"<div class="cell-list__item">
                     <a class="cell-list__item-link" href="/2025/ria-{i}.html">
                       <span class="cell-list__item-title">RIA headline {i}</span>
                     </a>
                   </div>"#
            )
        })
        .collect();
    format!("<html><body><main>{items}</main></body></html>")
}

pub fn tass_page(count: usize) -> String {
    let items: String = (1..=count)
        .map(|i| {
            format!(
                r#"<div class="news-line__item">
                     <a href="/politika/{i}">
                       <span class="news-line__item-title">TASS headline {i}</span>
                     </a>
                   </div>"#
            )
        })
        .collect();
    format!("<html><body>{items}</body></html>")
}

pub fn generic_page(item_class: &str, prefix: &str, count: usize) -> String {
    let items: String = (1..=count)
        .map(|i| {
            format!(
                r#"<article class="{item_class}">
                     <h3 class="title">{prefix} {i}</h3>
                     <a href="/news/{i}">Подробнее</a>
                   </article>"#
            )
        })
        .collect();
    format!("<html><body>{items}</body></html>")
}
