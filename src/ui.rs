use crate::config::StoreConfig;
use crate::preferences::ThemePreference;
use crate::store::{RecordStore, SupabaseStore};
use crate::theme::theme_definition;
use crate::types::ThemeMode;
use crate::views::{MessageBoard, ServerInfo};
use dioxus::prelude::*;
use std::sync::Arc;

const SITE_CSS: &str = include_str!("../assets/site.css");

/// Shared state every page can reach: the theme and the record store.
#[derive(Clone)]
pub struct AppContext {
    pub theme: Signal<ThemeMode>,
    pub preference: ThemePreference,
    pub store: Arc<dyn RecordStore>,
}

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        ServerInfo {},
        #[route("/message-board")]
        MessageBoard {},
}

#[component]
pub fn App() -> Element {
    let preference = use_hook(ThemePreference::platform_default);
    let theme = use_signal(|| preference.initialize());

    use_context_provider(|| AppContext {
        theme,
        preference: preference.clone(),
        store: Arc::new(SupabaseStore::new(StoreConfig::load())),
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Shell() -> Element {
    let context = use_context::<AppContext>();
    rsx! {
        ThemeStyles { theme: context.theme }
        div { class: "app-container",
            Navbar {}
            main { class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        style { dangerous_inner_html: SITE_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn Navbar() -> Element {
    let mut menu_open = use_signal(|| false);
    let menu_icon = if menu_open() { "✕" } else { "☰" };

    rsx! {
        nav { class: "navbar",
            div { class: "nav-content",
                Link { class: "brand", to: Route::ServerInfo {}, "JBpotato" }
                div { class: "nav-links",
                    NavLinks { on_navigate: move |_| menu_open.set(false) }
                    ThemeToggle {}
                }
                button {
                    class: "menu-button",
                    r#type: "button",
                    aria_label: "菜单",
                    onclick: move |_| menu_open.set(!menu_open()),
                    "{menu_icon}"
                }
            }
            if menu_open() {
                div { class: "mobile-menu",
                    NavLinks { on_navigate: move |_| menu_open.set(false) }
                    ThemeToggle {}
                }
            }
        }
    }
}

#[component]
fn NavLinks(on_navigate: EventHandler<()>) -> Element {
    rsx! {
        Link {
            class: "nav-link",
            active_class: "active",
            to: Route::ServerInfo {},
            onclick: move |_| on_navigate.call(()),
            "服务器信息"
        }
        Link {
            class: "nav-link",
            active_class: "active",
            to: Route::MessageBoard {},
            onclick: move |_| on_navigate.call(()),
            "留言板"
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let AppContext {
        mut theme,
        preference,
        ..
    } = use_context::<AppContext>();
    let definition = theme_definition(theme());

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            title: definition.toggle_label,
            aria_label: definition.toggle_label,
            onclick: move |_| {
                let next = preference.toggle(theme());
                theme.set(next);
            },
            "{definition.toggle_icon}"
        }
    }
}
