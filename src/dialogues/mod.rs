//! Screens the bot can show and the buttons that move between them.
//!
//! Every screen is a pure function of the caller; there is no per-user state
//! between updates. Buttons carry a typed [`Action`] whose string id is what
//! travels through Telegram as callback data.

pub mod menu;
pub mod news;

use std::{collections::HashMap, fmt, str::FromStr};

use thiserror::Error;

/// Telegram rejects callback data longer than this.
pub const MAX_CALLBACK_DATA: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Home,
    Books,
    Programs,
    Resources,
    Help,
    Settings,
    Profile,
    NewsHome,
}

impl ScreenId {
    pub const ALL: [ScreenId; 8] = [
        ScreenId::Home,
        ScreenId::Books,
        ScreenId::Programs,
        ScreenId::Resources,
        ScreenId::Help,
        ScreenId::Settings,
        ScreenId::Profile,
        ScreenId::NewsHome,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ScreenId::Home => "start",
            ScreenId::Books => "books",
            ScreenId::Programs => "programs",
            ScreenId::Resources => "resources",
            ScreenId::Help => "help",
            ScreenId::Settings => "settings",
            ScreenId::Profile => "profile",
            ScreenId::NewsHome => "news",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewsCategory {
    Federal,
    Regional,
}

impl NewsCategory {
    pub const ALL: [NewsCategory; 2] = [NewsCategory::Federal, NewsCategory::Regional];

    pub fn id(&self) -> &'static str {
        match self {
            NewsCategory::Federal => "federal_news",
            NewsCategory::Regional => "regional_news",
        }
    }
}

/// What a button press or a command asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Open(ScreenId),
    News(NewsCategory),
}

impl Action {
    pub const HOME: Action = Action::Open(ScreenId::Home);

    pub fn id(&self) -> &'static str {
        match self {
            Action::Open(screen) => screen.id(),
            Action::News(category) => category.id(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown action `{0}`")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    /// Accepts the current ids as well as the ones older keyboards were sent with.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = match s.trim().trim_start_matches('/') {
            "refresh_news" => "news",
            "belgorod_news" => "regional_news",
            other => other,
        };
        ScreenId::ALL
            .into_iter()
            .find(|screen| screen.id() == id)
            .map(Action::Open)
            .or_else(|| {
                NewsCategory::ALL
                    .into_iter()
                    .find(|category| category.id() == id)
                    .map(Action::News)
            })
            .ok_or_else(|| UnknownAction(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: Action,
}

impl Button {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Button {
            label: label.into(),
            action,
        }
    }
}

pub type Keyboard = Vec<Vec<Button>>;

/// Text (HTML markup) plus the inline keyboard sent under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    pub text: String,
    pub keyboard: Keyboard,
    pub link_preview: bool,
}

impl Display {
    pub fn new(text: impl Into<String>) -> Self {
        Display {
            text: text.into(),
            keyboard: Vec::new(),
            link_preview: false,
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = keyboard;
        self
    }

    pub fn with_link_preview(mut self, enabled: bool) -> Self {
        self.link_preview = enabled;
        self
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.keyboard.iter().flatten()
    }

    pub fn leads_home(&self) -> bool {
        self.buttons().any(|button| button.action == Action::HOME)
    }
}

/// Who pressed the button or sent the command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller {
    pub id: u64,
    pub full_name: Option<String>,
    pub username: Option<String>,
}

impl Caller {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("пользователь")
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Screen `{0}` is registered twice")]
    DuplicateScreen(&'static str),

    #[error("Screen `{0}` is not registered")]
    UnknownScreen(&'static str),

    #[error("Screen `{0}` renders empty text")]
    EmptyText(&'static str),

    #[error("Screen `{0}` has no button leading home")]
    NoWayHome(&'static str),

    #[error("Button `{label}` on `{origin}` leads to unresolvable action `{action}`")]
    UnresolvableAction {
        origin: &'static str,
        label: String,
        action: &'static str,
    },
}

pub type RenderFn = fn(&Caller) -> Display;

/// Fixed table of screens, checked once when it is built.
pub struct ScreenRegistry {
    screens: HashMap<ScreenId, RenderFn>,
}

impl ScreenRegistry {
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_screens(menu::screens())
    }

    pub fn with_screens(
        table: impl IntoIterator<Item = (ScreenId, RenderFn)>,
    ) -> Result<Self, RegistryError> {
        let mut screens = HashMap::new();
        for (screen, render) in table {
            if screens.insert(screen, render).is_some() {
                return Err(RegistryError::DuplicateScreen(screen.id()));
            }
        }
        let registry = ScreenRegistry { screens };
        registry.validate()?;
        Ok(registry)
    }

    pub fn contains(&self, screen: ScreenId) -> bool {
        self.screens.contains_key(&screen)
    }

    pub fn render(&self, screen: ScreenId, caller: &Caller) -> Result<Display, RegistryError> {
        let render = self
            .screens
            .get(&screen)
            .ok_or(RegistryError::UnknownScreen(screen.id()))?;
        Ok(render(caller))
    }

    /// Checks a display produced outside the registry (news digests) against it.
    pub fn check_display(
        &self,
        origin: &'static str,
        display: &Display,
        is_known_news: impl Fn(NewsCategory) -> bool,
    ) -> Result<(), RegistryError> {
        if display.text.trim().is_empty() {
            return Err(RegistryError::EmptyText(origin));
        }
        if !display.leads_home() {
            return Err(RegistryError::NoWayHome(origin));
        }
        for button in display.buttons() {
            let resolves = match button.action {
                Action::Open(target) => self.contains(target),
                Action::News(category) => is_known_news(category),
            };
            let id = button.action.id();
            let round_trips = id.parse::<Action>().ok() == Some(button.action);
            if !resolves || id.len() > MAX_CALLBACK_DATA || !round_trips {
                return Err(RegistryError::UnresolvableAction {
                    origin,
                    label: button.label.clone(),
                    action: id,
                });
            }
        }
        Ok(())
    }

    /// News categories referenced by buttons on registered screens.
    pub fn news_links(&self) -> Vec<(&'static str, NewsCategory)> {
        let caller = Caller::default();
        let mut links = Vec::new();
        for (screen, render) in &self.screens {
            for button in render(&caller).buttons() {
                if let Action::News(category) = button.action {
                    links.push((screen.id(), category));
                }
            }
        }
        links
    }

    fn validate(&self) -> Result<(), RegistryError> {
        if !self.contains(ScreenId::Home) {
            return Err(RegistryError::UnknownScreen(ScreenId::Home.id()));
        }
        let caller = Caller::default();
        for (screen, render) in &self.screens {
            // News targets are checked by whoever owns the news sources.
            self.check_display(screen.id(), &render(&caller), |_| true)?;
        }
        Ok(())
    }
}
