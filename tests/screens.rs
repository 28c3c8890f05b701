pub mod support;

use republic_info_bot::dialogues::{
    menu, Action, Button, Caller, Display, NewsCategory, RegistryError, RenderFn, ScreenId,
    ScreenRegistry,
};

fn bare_home(_caller: &Caller) -> Display {
    Display::new("home").with_keyboard(vec![vec![Button::new("home", Action::HOME)]])
}

fn dead_end(_caller: &Caller) -> Display {
    Display::new("nowhere to go")
}

#[test]
fn every_screen_renders_text_and_leads_home() {
    let registry = ScreenRegistry::new().unwrap();
    let caller = support::caller();
    for screen in ScreenId::ALL {
        let display = registry.render(screen, &caller).unwrap();
        assert!(!display.text.trim().is_empty(), "{screen:?} has empty text");
        assert!(display.leads_home(), "{screen:?} has no home button");
    }
}

#[test]
fn start_greets_caller_and_offers_restart() {
    let registry = ScreenRegistry::new().unwrap();
    let display = registry.render(ScreenId::Home, &support::caller()).unwrap();

    assert!(display.text.starts_with("🚀 Привет, Фёдор Иванов!"));
    let restart = display
        .buttons()
        .find(|button| button.label.contains("Перезапустить"))
        .expect("restart button");
    assert_eq!(restart.action, Action::HOME);
    assert_eq!(restart.action.id(), "start");
}

#[test]
fn greeting_falls_back_for_anonymous_caller() {
    let display = menu::home(&Caller::default());
    assert!(display.text.starts_with("🚀 Привет, пользователь!"));
}

#[test]
fn profile_escapes_caller_supplied_text() {
    let caller = Caller {
        id: 5,
        full_name: Some("<script>".into()),
        username: None,
    };
    let display = menu::profile(&caller);

    assert!(display.text.contains("&lt;script&gt;"));
    assert!(!display.text.contains("<script>"));
    assert!(display.text.contains("<code>5</code>"));
    assert!(display.text.contains("Username: не установлен"));
}

#[test]
fn link_lists_disable_previews() {
    let caller = Caller::default();
    for display in [menu::books(&caller), menu::programs(&caller), menu::resources(&caller)] {
        assert!(!display.link_preview);
    }
}

#[test]
fn action_ids_parse_back_including_legacy_ones() {
    for screen in ScreenId::ALL {
        assert_eq!(screen.id().parse::<Action>(), Ok(Action::Open(screen)));
    }
    for category in NewsCategory::ALL {
        assert_eq!(category.id().parse::<Action>(), Ok(Action::News(category)));
    }
    assert_eq!("/books".parse::<Action>(), Ok(Action::Open(ScreenId::Books)));
    assert_eq!("refresh_news".parse::<Action>(), Ok(Action::Open(ScreenId::NewsHome)));
    assert_eq!(
        "belgorod_news".parse::<Action>(),
        Ok(Action::News(NewsCategory::Regional))
    );
    assert!("unknown_action".parse::<Action>().is_err());
}

#[test]
fn news_home_offers_both_categories() {
    let actions: Vec<Action> = menu::news_home(&Caller::default())
        .buttons()
        .map(|button| button.action)
        .collect();
    assert!(actions.contains(&Action::News(NewsCategory::Federal)));
    assert!(actions.contains(&Action::News(NewsCategory::Regional)));
}

#[test]
fn registry_rejects_screen_without_way_home() {
    let table = [
        (ScreenId::Home, bare_home as RenderFn),
        (ScreenId::Books, dead_end as RenderFn),
    ];
    let err = ScreenRegistry::with_screens(table).err().unwrap();
    assert_eq!(err, RegistryError::NoWayHome("books"));
}

#[test]
fn registry_rejects_button_to_unregistered_screen() {
    let err = ScreenRegistry::with_screens([(ScreenId::Home, menu::home as RenderFn)])
        .err()
        .unwrap();
    assert!(matches!(
        err,
        RegistryError::UnresolvableAction { origin: "start", .. }
    ));
}

#[test]
fn registry_requires_home() {
    let err = ScreenRegistry::with_screens([(ScreenId::Books, menu::books as RenderFn)])
        .err()
        .unwrap();
    assert_eq!(err, RegistryError::UnknownScreen("start"));
}

#[test]
fn registry_rejects_duplicates() {
    let table = [
        (ScreenId::Home, bare_home as RenderFn),
        (ScreenId::Home, bare_home as RenderFn),
    ];
    let err = ScreenRegistry::with_screens(table).err().unwrap();
    assert_eq!(err, RegistryError::DuplicateScreen("start"));
}

#[test]
fn unregistered_screen_fails_to_render() {
    let registry = ScreenRegistry::with_screens([(ScreenId::Home, bare_home as RenderFn)]).unwrap();
    assert_eq!(
        registry.render(ScreenId::Profile, &Caller::default()),
        Err(RegistryError::UnknownScreen("profile"))
    );
}
