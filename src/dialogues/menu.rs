use teloxide::utils::html;

use super::{Action, Button, Caller, Display, Keyboard, NewsCategory, RenderFn, ScreenId};

pub const CHANNEL: &str = "@republic_inform";
pub const DEVELOPER: &str = "@Alex_De_White";

pub fn screens() -> Vec<(ScreenId, RenderFn)> {
    vec![
        (ScreenId::Home, home as RenderFn),
        (ScreenId::Books, books as RenderFn),
        (ScreenId::Programs, programs as RenderFn),
        (ScreenId::Resources, resources as RenderFn),
        (ScreenId::Help, help as RenderFn),
        (ScreenId::Settings, settings as RenderFn),
        (ScreenId::Profile, profile as RenderFn),
        (ScreenId::NewsHome, news_home as RenderFn),
    ]
}

fn open(label: &str, screen: ScreenId) -> Vec<Button> {
    vec![Button::new(label, Action::Open(screen))]
}

fn main_menu() -> Vec<Button> {
    vec![Button::new("🔄 Главное меню", Action::HOME)]
}

fn restart() -> Vec<Button> {
    vec![Button::new("🔄 Перезапустить бота", Action::HOME)]
}

pub fn home(caller: &Caller) -> Display {
    let keyboard: Keyboard = vec![
        open("📚 Книжная библиотека", ScreenId::Books),
        open("💻 Программы для ПК", ScreenId::Programs),
        open("🔗 Полезные ресурсы", ScreenId::Resources),
        open("📰 Новости", ScreenId::NewsHome),
        restart(),
    ];
    Display::new(format!(
        "🚀 Привет, {}!\n\
         Я Средний Научный Бот канала <b>Республика Информация</b>, Фёдор Семёныч!🤖\n\n\
         Используйте команды:\n\
         /books - доступ к книжной библиотеке\n\
         /programs - программы для ПК\n\
         /resources - полезные ресурсы\n\
         /news - свежие новости\n\
         /help - помощь по боту\n\
         /profile - ваш профиль\n\n\
         📢 Основной канал: {CHANNEL}",
        html::escape(caller.display_name()),
    ))
    .with_keyboard(keyboard)
}

pub fn books(_caller: &Caller) -> Display {
    Display::new(format!(
        "📚 <b>Книжный раздел Республика</b>\n\n\
         • <a href='https://disk.yandex.ru/d/BX1xA5UCNxz3YA'>Основная библиотека</a> - 5000+ книг\n\
         • <a href='https://disk.yandex.ru/d/d5cAK6TBCJSa_Q'>Добавить новую книгу</a> (требуется регистрация)\n\
         • <a href='https://disk.yandex.ru/d/BX1xA5UCNxz3YA?sort=modified'>Новинки</a> - последние добавленные книги\n\n\
         🔐 <i>Для доступа к книгам требуется пароль от архива</i>\n\
         💡 Пароль можно получить в основном канале: {CHANNEL}"
    ))
    .with_keyboard(vec![
        open("💻 Программы для ПК", ScreenId::Programs),
        open("🔗 Полезные ресурсы", ScreenId::Resources),
        main_menu(),
    ])
}

pub fn programs(_caller: &Caller) -> Display {
    Display::new(
        "💻 <b>Полезные программы для ПК</b>\n\n\
         • <a href='https://diakov.net/'>Diakov.net</a> - проверенные программы и репаки\n\
         • <a href='https://repack.me/'>Repack.me</a> - репаки игр и программ\n\
         • <a href='https://rutracker.org/'>RuTracker</a> - торрент-трекер\n\
         • <a href='https://www.softportal.com/'>SoftPortal</a> - софт портал\n\n\
         ⚠️ <i>Скачивайте программы только из проверенных источников!</i>",
    )
    .with_keyboard(vec![
        open("📚 Книжная библиотека", ScreenId::Books),
        open("🔗 Полезные ресурсы", ScreenId::Resources),
        main_menu(),
    ])
}

pub fn resources(_caller: &Caller) -> Display {
    Display::new(
        "🔗 <b>Полезные ресурсы</b>\n\n\
         🎓 <b>Образование:</b>\n\
         • <a href='https://stepik.org/'>Stepik</a> - онлайн-курсы\n\
         • <a href='https://openedu.ru/'>Открытое образование</a>\n\
         • <a href='https://arzamas.academy/'>Арзамас</a> - гуманитарные курсы\n\n\
         📚 <b>Книги:</b>\n\
         • <a href='https://flibusta.is/'>Флибуста</a> - электронная библиотека\n\
         • <a href='https://libgen.is/'>LibGen</a> - научная литература\n\n\
         💻 <b>IT и программирование:</b>\n\
         • <a href='https://github.com/'>GitHub</a> - код и проекты\n\
         • <a href='https://stackoverflow.com/'>Stack Overflow</a> - помощь программистам\n\
         • <a href='https://habr.com/'>Habr</a> - IT-сообщество\n\n\
         🛠️ <b>Инструменты:</b>\n\
         • <a href='https://notion.so/'>Notion</a> - организация работы\n\
         • <a href='https://trello.com/'>Trello</a> - управление проектами",
    )
    .with_keyboard(vec![
        open("📚 Книжная библиотека", ScreenId::Books),
        open("💻 Программы для ПК", ScreenId::Programs),
        main_menu(),
    ])
}

pub fn help(_caller: &Caller) -> Display {
    Display::new(format!(
        "ℹ️ <b>Помощь по боту Фёдор Семёныч</b>\n\n\
         📚 <u>Основные команды</u>:\n\
         /start - начать работу с ботом\n\
         /books - доступ к книжной библиотеке\n\
         /programs - программы для ПК\n\
         /resources - полезные ресурсы\n\
         /news - свежие новости\n\
         /profile - ваш профиль\n\
         /settings - настройки бота\n\n\
         📰 <u>Источники новостей</u>:\n\
         • RIA Новости, ТАСС - федеральные\n\
         • БелПресса, Бел.Ру - Белгород\n\
         🔄 Новости обновляются при каждом запросе\n\n\
         🔗 <u>Полезные ссылки</u>:\n\
         • Основной канал: {CHANNEL}\n\
         • Разработчик: {DEVELOPER}\n\
         • Техническая поддержка: {DEVELOPER}\n\n\
         💡 По всем вопросам обращайтесь к разработчику"
    ))
    .with_keyboard(vec![
        open("📚 Книги", ScreenId::Books),
        open("💻 Программы", ScreenId::Programs),
        open("🔗 Ресурсы", ScreenId::Resources),
        open("📰 Новости", ScreenId::NewsHome),
        restart(),
    ])
}

pub fn settings(_caller: &Caller) -> Display {
    Display::new(
        "⚙️ <b>Настройки бота</b>\n\n\
         🔔 Уведомления: включены\n\
         🌐 Язык: русский\n\
         🛡️ Безопасность: стандартная\n\n\
         ⚡ Дополнительные настройки в разработке",
    )
    .with_keyboard(vec![
        open("📚 Книги", ScreenId::Books),
        open("💻 Программы", ScreenId::Programs),
        main_menu(),
    ])
}

pub fn profile(caller: &Caller) -> Display {
    let username = caller
        .username
        .as_deref()
        .map(|username| html::escape(&format!("@{username}")))
        .unwrap_or_else(|| "не установлен".to_owned());
    Display::new(format!(
        "👤 <b>Ваш профиль</b>\n\n\
         🆔 ID: {}\n\
         👤 Имя: {}\n\
         🔗 Username: {}\n\n\
         ⭐ Статус: стандартный пользователь\n\
         🎁 Премиум: не активен",
        html::code_inline(&caller.id.to_string()),
        html::escape(caller.display_name()),
        username,
    ))
    .with_keyboard(vec![
        open("📚 Книги", ScreenId::Books),
        open("💻 Программы", ScreenId::Programs),
        main_menu(),
    ])
}

pub fn news_home(_caller: &Caller) -> Display {
    Display::new(
        "📰 <b>Новости</b>\n\n\
         Я предоставляю актуальные новости:\n\
         • 🇷🇺 Федеральные новости России\n\
         • 🏙️ Новости Белгорода и области\n\n\
         Выберите категорию новостей:",
    )
    .with_keyboard(vec![
        vec![Button::new(
            "🇷🇺 Федеральные новости",
            Action::News(NewsCategory::Federal),
        )],
        vec![Button::new(
            "🏙️ Новости Белгорода",
            Action::News(NewsCategory::Regional),
        )],
        open("ℹ️ Помощь", ScreenId::Help),
        main_menu(),
    ])
}
