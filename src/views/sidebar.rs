use crate::routes::Route;
use crate::ui::AppState;
use dioxus::prelude::*;

const NAV_ITEMS: [(&str, &str, Route); 4] = [
    ("🏠", "Home", Route::Home),
    ("📚", "Login", Route::Login),
    ("🎨", "Colors", Route::Colors),
    ("🔁", "Counter", Route::Message),
];

#[component]
pub fn SidebarPanel() -> Element {
    let state = use_context::<AppState>();
    let mut sidebar = state.sidebar;
    let mut store = state.store;

    let panel = sidebar.read().state();
    let show_labels = panel.shows_labels();

    let search = store.read().state().search_query.clone();
    let current = store.read().state().current_chat_id.clone();
    let recent: Vec<(String, String, bool)> = store
        .read()
        .filtered_chats()
        .into_iter()
        .map(|chat| {
            let active = current.as_deref() == Some(chat.id.as_str());
            (chat.id.clone(), chat.title.clone(), active)
        })
        .collect();

    rsx! {
        div {
            class: format_args!("sidebar-backdrop {}", if panel.is_open { "visible" } else { "" }),
            aria_hidden: "true",
            onclick: move |_| sidebar.with_mut(|s| s.close()),
        }
        aside {
            class: format_args!(
                "sidebar {} {}",
                if panel.collapsed { "narrow" } else { "wide" },
                if panel.is_open { "open" } else { "" },
            ),
            role: "complementary",
            aria_label: "Primary sidebar",
            div {
                div { class: "sidebar-header",
                    div { class: "hstack",
                        div { class: "brand-mark", "i" }
                        if show_labels {
                            span { class: "brand-name", "Inteliq" }
                        }
                    }
                    div { class: "hstack",
                        button {
                            class: "btn btn-ghost",
                            aria_label: "Toggle collapse",
                            onclick: move |_| sidebar.with_mut(|s| s.toggle_collapsed()),
                            if panel.collapsed { "›" } else { "‹" }
                        }
                        button {
                            class: "btn btn-ghost close-btn",
                            aria_label: "Close sidebar",
                            onclick: move |_| sidebar.with_mut(|s| s.close()),
                            "✕"
                        }
                    }
                }
                nav { class: "sidebar-nav",
                    for (icon, label, route) in NAV_ITEMS {
                        button {
                            key: "{label}",
                            class: "nav-item",
                            onclick: move |_| state.navigate(route),
                            span { class: "nav-icon", "{icon}" }
                            if show_labels {
                                span { class: "nav-label", "{label}" }
                            }
                        }
                    }
                }
                if show_labels {
                    div { class: "sidebar-section",
                        p { class: "section-title", "Recent Chats" }
                        input {
                            class: "search-input",
                            r#type: "search",
                            placeholder: "Search chats",
                            value: "{search}",
                            oninput: move |ev| store.with_mut(|s| s.set_search_query(ev.value())),
                        }
                        for (id, title, active) in recent {
                            button {
                                key: "{id}",
                                class: if active { "recent-chat active" } else { "recent-chat" },
                                onclick: move |_| {
                                    store.with_mut(|s| s.set_current_chat(Some(id.clone())));
                                    sidebar.with_mut(|s| s.close());
                                },
                                "{title}"
                            }
                        }
                    }
                }
            }
            div { class: "sidebar-footer",
                div { class: format_args!("profile {}", if panel.collapsed { "centered" } else { "" }),
                    div { class: "avatar", "AR" }
                    if show_labels {
                        div { class: "profile-details",
                            div { class: "profile-name", "Asha Rao" }
                            div { class: "hstack",
                                button { class: "action-btn", "Profile" }
                                button {
                                    class: "action-btn",
                                    onclick: move |_| state.navigate(Route::Login),
                                    "Sign out"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
