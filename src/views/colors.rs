use crate::palette::{Contrast, PaletteState, SWATCHES};
use crate::routes::Route;
use crate::ui::AppState;
use dioxus::prelude::*;

#[component]
pub fn ColorsView() -> Element {
    let app = use_context::<AppState>();
    let mut palette = use_signal(PaletteState::default);
    let current = palette();

    let back_class = match current.contrast {
        Contrast::Light => "back-btn on-dark",
        Contrast::Dark => "back-btn on-light",
    };

    rsx! {
        div {
            class: "colors-page",
            style: "background: {current.background}; color: {current.contrast.text_color()};",
            div { class: "colors-toolbar",
                button {
                    class: "{back_class}",
                    aria_label: "Go back",
                    onclick: move |_| app.navigate(Route::Home),
                    "← Back"
                }
            }
            h1 { class: "colors-title", "Color Buttons" }
            div { class: "swatch-grid",
                for swatch in SWATCHES {
                    button {
                        key: "{swatch.name}",
                        class: "swatch",
                        aria_label: "Select {swatch.name}",
                        style: "background: {swatch.background}; color: {swatch.contrast.text_color()}; --hover: {swatch.hover};",
                        onclick: move |_| {
                            palette.with_mut(|p| p.select(swatch.name));
                        },
                        "{swatch.name}"
                    }
                }
            }
            p { class: "colors-selected",
                "Selected background: "
                span { class: "mono", "{current.background}" }
            }
        }
    }
}
