use std::sync::Arc;

use themegate_themes::*;

fn allow_list() -> ThemeAllowList {
    ThemeAllowList::new(["light", "dark"])
}

#[test]
fn test_switch_to_dark_redirects_home() {
    let switcher = ThemeSwitcher::new(allow_list(), Arc::new(RouteTable::new()));
    let active = ActiveTheme::new();

    let redirect = switcher
        .switch(&StaticRequest::for_theme("dark"), &active)
        .unwrap();

    assert_eq!(redirect.location(), FALLBACK_REDIRECT);
    assert_eq!(active.name().as_deref(), Some("dark"));
}

#[test]
fn test_switch_to_purple_fails() {
    let switcher = ThemeSwitcher::new(allow_list(), Arc::new(RouteTable::new()));
    let active = ActiveTheme::new();

    let err = switcher
        .switch(&StaticRequest::for_theme("purple"), &active)
        .unwrap_err();

    assert!(matches!(err, ThemeError::UnknownTheme(ref name) if name == "purple"));
    assert_eq!(active.name(), None);
}

#[test]
fn test_custom_url_generator() {
    struct Prefixed;

    impl UrlGenerator for Prefixed {
        fn generate(&self, route: &str) -> Result<String> {
            Ok(format!("/app/{}", route))
        }
    }

    let switcher = ThemeSwitcher::new(allow_list(), Arc::new(Prefixed))
        .with_default_route(Some("dashboard".to_string()));

    let redirect = switcher
        .switch(&StaticRequest::for_theme("light"), &ActiveTheme::new())
        .unwrap();

    assert_eq!(redirect.location(), "/app/dashboard");
}

#[test]
fn test_cookie_is_attached_only_when_configured() {
    let plain = ThemeSwitcher::new(allow_list(), Arc::new(RouteTable::new()));
    let persisted = plain
        .clone()
        .with_cookie(Some(CookieOptions::new("theme")));

    let request = StaticRequest::for_theme("light");
    assert!(plain
        .switch(&request, &ActiveTheme::new())
        .unwrap()
        .cookie()
        .is_none());

    let (_, cookie) = persisted
        .switch(&request, &ActiveTheme::new())
        .unwrap()
        .into_parts();
    let cookie = cookie.expect("cookie should be attached");
    assert_eq!(cookie.name(), "theme");
    assert_eq!(cookie.value(), "light");
}
