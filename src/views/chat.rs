use crate::attachments::FileHandle;
use crate::composer::{KeyAction, QUICK_PROMPTS};
use crate::config;
use crate::sidebar::{Point, Rect, Sidebar, SidebarEvent, SidebarLayout};
use crate::types::{Key as CoreKey, KeyPress, Message, Role};
use crate::ui::{AppState, DismissHost};
use crate::views::SidebarPanel;
use dioxus::prelude::*;

const COMPOSER_INPUT_ID: &str = "composer-input";

fn key_press(ev: &KeyboardEvent) -> KeyPress {
    let key = match ev.key() {
        Key::Enter => CoreKey::Enter,
        Key::Escape => CoreKey::Escape,
        _ => CoreKey::Other,
    };
    KeyPress {
        key,
        shift: ev.modifiers().contains(Modifiers::SHIFT),
    }
}

/// The panel hugs the left edge at full height; only its width changes.
fn panel_bounds(width_px: u32) -> Rect {
    Rect::new(0.0, 0.0, width_px as f64, f64::INFINITY)
}

/// Mouse and touch share one click-away path.
fn pointer_down(mut sidebar: Signal<Sidebar<DismissHost>>, at: Point) {
    sidebar.with_mut(|s| {
        s.set_bounds(panel_bounds(s.state().width_px()));
        s.handle(SidebarEvent::PointerDown(at));
    });
}

#[component]
pub fn ChatView() -> Element {
    let state = use_context::<AppState>();
    let mut sidebar = state.sidebar;
    let dismiss_armed = state.dismiss_armed;

    let mut viewport_px = use_signal(|| None::<u32>);

    let sidebar_state = sidebar.read().state();
    // Overlay until the first resize event reports the real width.
    let layout = SidebarLayout::for_viewport(
        viewport_px().unwrap_or(0),
        config::current().sidebar_breakpoint_px,
    );
    let root_class = format!(
        "app-shell {} {} {}",
        match layout {
            SidebarLayout::Overlay => "layout-overlay",
            SidebarLayout::Pinned => "layout-pinned",
        },
        if sidebar_state.is_open { "sidebar-open" } else { "" },
        if sidebar_state.collapsed { "sidebar-collapsed" } else { "" },
    );
    let root_style = format!("--sidebar-width: {}px;", sidebar_state.width_px());
    let main_style = format!("margin-left: {}px;", layout.content_offset_px(&sidebar_state));

    rsx! {
        div {
            class: "{root_class}",
            style: "{root_style}",
            tabindex: "-1",
            onresize: move |ev| {
                if let Ok(size) = ev.get_border_box_size() {
                    viewport_px.set(Some(size.width.max(0.0) as u32));
                }
            },
            onkeydown: move |ev| {
                if dismiss_armed() {
                    let press = key_press(&ev);
                    sidebar.with_mut(|s| s.handle_key(press));
                }
            },
            onmousedown: move |ev| {
                if dismiss_armed() {
                    let at = ev.client_coordinates();
                    pointer_down(sidebar, Point::new(at.x, at.y));
                }
            },
            ontouchstart: move |ev| {
                if !dismiss_armed() {
                    return;
                }
                if let Some(touch) = ev.touches().first() {
                    let at = touch.client_coordinates();
                    pointer_down(sidebar, Point::new(at.x, at.y));
                }
            },
            SidebarPanel {}
            main { class: "chat-main", style: "{main_style}",
                ChatHeader {}
                MessageList {}
                ComposerBar {}
            }
        }
    }
}

#[component]
fn ChatHeader() -> Element {
    let state = use_context::<AppState>();
    let mut sidebar = state.sidebar;
    let mut store = state.store;
    let mut composer = state.composer;

    rsx! {
        header { class: "chat-header",
            div { class: "hstack",
                button {
                    class: "btn btn-ghost hamburger",
                    aria_label: "Open sidebar",
                    onclick: move |_| sidebar.with_mut(|s| s.open()),
                    "☰"
                }
                h1 { class: "chat-title", "ChatGPT 4" }
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| {
                    store.with_mut(|store| {
                        composer.with_mut(|c| c.start_new_chat(store));
                    });
                },
                "New Chat"
            }
        }
    }
}

#[component]
fn MessageList() -> Element {
    let state = use_context::<AppState>();
    let mut store = state.store;
    let mut composer = state.composer;

    let messages: Vec<Message> = store
        .read()
        .current_chat()
        .map(|chat| chat.messages.clone())
        .unwrap_or_default();

    if messages.is_empty() {
        return rsx! {
            section { class: "chat-content",
                div { class: "hero",
                    p { class: "hero-greeting", "👋 Hi there! What do you want to learn today?" }
                    div { class: "quick-prompts",
                        for prompt in QUICK_PROMPTS {
                            button {
                                key: "{prompt}",
                                class: "quick-card",
                                onclick: move |_| {
                                    store.with_mut(|store| {
                                        composer.with_mut(|c| c.pick_quick_prompt(prompt, store));
                                    });
                                },
                                div { class: "quick-badge", "✦" }
                                p { "{prompt}" }
                            }
                        }
                    }
                }
            }
        };
    }

    rsx! {
        section { class: "chat-content",
            div { id: "chat-list", class: "chat-list",
                for msg in messages {
                    div {
                        key: "{msg.id}",
                        class: format_args!("message-row {}", msg.role.as_str()),
                        div { class: "message-stack",
                            div { class: format_args!("bubble {}", msg.role.as_str()), "{msg.text}" }
                            if let Some(ts) = msg.display_time() {
                                div {
                                    class: format_args!(
                                        "message-meta {}",
                                        match msg.role { Role::User => "align-end", Role::Assistant => "align-start" }
                                    ),
                                    span { class: "message-timestamp", "{ts}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ComposerBar() -> Element {
    let state = use_context::<AppState>();
    let mut store = state.store;
    let mut composer = state.composer;
    let mut height_px = use_signal(|| composer.peek().config().min_height_px);

    // Re-measure the textarea whenever the draft changed, and restore focus
    // after a send.
    use_effect(move || {
        let (resize, focus) = {
            let current = composer.read();
            (current.needs_resize(), current.needs_focus())
        };
        if !resize && !focus {
            return;
        }
        composer.with_mut(|c| {
            c.take_resize_request();
            c.take_focus_request();
        });
        if resize {
            spawn(async move {
                let js = format!(
                    "const el = document.getElementById('{COMPOSER_INPUT_ID}'); \
                     if (!el) return 0; el.style.height = 'auto'; return el.scrollHeight;"
                );
                if let Ok(value) = document::eval(&js).await {
                    let measured = value.as_f64().unwrap_or(0.0).max(0.0) as u32;
                    height_px.set(composer.peek().fit_height(measured));
                }
            });
        }
        if focus {
            let _ = document::eval(&format!("document.getElementById('{COMPOSER_INPUT_ID}')?.focus();"));
        }
    });

    let snapshot = composer.read();
    let draft = snapshot.input().to_string();
    let attachments: Vec<_> = snapshot.attachments().iter().cloned().collect();
    let can_send = snapshot.can_send();
    drop(snapshot);

    rsx! {
        footer { class: "composer",
            div { class: "composer-inner",
                if !attachments.is_empty() {
                    div { class: "attachment-row",
                        for attachment in attachments {
                            span { key: "{attachment.id}", class: "tag-pill",
                                "{attachment.file.name}"
                                button {
                                    class: "action-btn",
                                    aria_label: "Remove attachment",
                                    onclick: move |_| composer.with_mut(|c| c.remove_attachment(attachment.id)),
                                    "✕"
                                }
                            }
                        }
                        button {
                            class: "action-btn",
                            onclick: move |_| composer.with_mut(|c| c.clear_attachments()),
                            "Clear"
                        }
                    }
                }
                div { class: "hstack composer-row",
                    label { class: "btn btn-ghost attach-btn", title: "Attach files",
                        "📎"
                        input {
                            r#type: "file",
                            multiple: true,
                            style: "display: none;",
                            onchange: move |ev| async move {
                                let Some(engine) = ev.files() else {
                                    return;
                                };
                                let mut picked = Vec::new();
                                for name in engine.files() {
                                    let size = engine.file_size(&name).await;
                                    let mut handle = FileHandle::named(name);
                                    handle.size = size;
                                    picked.push(handle);
                                }
                                composer.with_mut(|c| c.add_files(picked));
                            },
                        }
                    }
                    textarea {
                        id: COMPOSER_INPUT_ID,
                        rows: "1",
                        placeholder: "Ask me a question...",
                        style: "height: {height_px}px;",
                        value: "{draft}",
                        autofocus: true,
                        oninput: move |ev| composer.with_mut(|c| c.set_input(ev.value())),
                        onkeydown: move |ev| {
                            let press = key_press(&ev);
                            let action = store.with_mut(|store| {
                                composer.with_mut(|c| c.handle_key(press, store))
                            });
                            if action == KeyAction::Submit {
                                ev.prevent_default();
                            }
                        },
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: !can_send,
                        onclick: move |_| {
                            store.with_mut(|store| {
                                composer.with_mut(|c| c.send(store));
                            });
                        },
                        "➤"
                    }
                }
                p { class: "composer-hint", "Press Enter to send, Shift+Enter for a new line." }
            }
        }
    }
}
