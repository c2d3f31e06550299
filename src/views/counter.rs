use crate::counter::RenderCounter;
use dioxus::prelude::*;

#[component]
pub fn CounterView() -> Element {
    // Clicks land in a non-reactive slot; only "Render" publishes them.
    let clicks = use_hook(|| std::rc::Rc::new(std::cell::RefCell::new(RenderCounter::default())));
    let mut shown = use_signal(|| 0u64);

    let recorder = clicks.clone();
    let publisher = clicks.clone();

    rsx! {
        div { class: "counter-page",
            button {
                class: "btn",
                onclick: move |_| recorder.borrow_mut().increment(),
                "Increment ref (UI won’t change)"
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| {
                    let mut counter = publisher.borrow_mut();
                    counter.render();
                    shown.set(counter.shown());
                },
                "Force render to show: {shown}"
            }
        }
    }
}
