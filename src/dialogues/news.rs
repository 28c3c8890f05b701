use teloxide::utils::html;

use super::{Action, Button, Display, Keyboard, NewsCategory, ScreenId};
use crate::logic::NewsItem;

pub fn heading(category: NewsCategory) -> &'static str {
    match category {
        NewsCategory::Federal => "🇷🇺 <b>ФЕДЕРАЛЬНЫЕ НОВОСТИ</b>",
        NewsCategory::Regional => "🏙️ <b>НОВОСТИ БЕЛГОРОДА И ОБЛАСТИ</b>",
    }
}

pub fn unavailable_text(category: NewsCategory) -> &'static str {
    match category {
        NewsCategory::Federal => "❌ Не удалось загрузить федеральные новости. Попробуйте позже.",
        NewsCategory::Regional => "❌ Не удалось загрузить новости Белгорода. Попробуйте позже.",
    }
}

/// Shown in place of the pressed menu while sources are being fetched.
pub fn loading(category: NewsCategory) -> Display {
    Display::new(match category {
        NewsCategory::Federal => "📡 Загружаю федеральные новости...",
        NewsCategory::Regional => "📡 Загружаю новости Белгорода...",
    })
}

fn keyboard(category: NewsCategory) -> Keyboard {
    vec![
        vec![Button::new("🔄 Обновить", Action::News(category))],
        vec![Button::new("📰 Все новости", Action::Open(ScreenId::NewsHome))],
        vec![Button::new("🔄 Главное меню", Action::HOME)],
    ]
}

pub fn digest(category: NewsCategory, items: &[NewsItem]) -> Display {
    if items.is_empty() {
        return Display::new(unavailable_text(category)).with_keyboard(keyboard(category));
    }
    let mut text = format!("{}\n\n", heading(category));
    for (idx, item) in items.iter().enumerate() {
        text.push_str(&format!(
            "{}. [{}] {}\n   🔗 <a href=\"{}\">Читать</a>\n\n",
            idx + 1,
            html::escape(&item.source),
            html::escape(&item.title),
            html::escape(&item.link),
        ));
    }
    Display::new(text.trim_end())
        .with_keyboard(keyboard(category))
        .with_link_preview(true)
}
