use crate::auth::HttpAuthService;
use crate::composer::Composer;
use crate::config;
use crate::routes::Route;
use crate::sidebar::{ListenerHost, Sidebar, SidebarEvent};
use crate::store::ChatStore;
use crate::views::{ChatView, ColorsView, CounterView, LoginView, SignupView};
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Arms the page-level escape/click-away handlers while the sidebar drawer
/// is open.
#[derive(Clone, Copy)]
pub struct DismissHost {
    armed: Signal<bool>,
}

pub struct DismissGuard {
    armed: Signal<bool>,
}

impl Drop for DismissGuard {
    fn drop(&mut self) {
        // The signal may already be gone when the whole app is torn down.
        if let Ok(mut armed) = self.armed.try_write() {
            *armed = false;
        }
    }
}

impl ListenerHost for DismissHost {
    type Subscription = DismissGuard;

    fn subscribe(&mut self) -> DismissGuard {
        self.armed.set(true);
        DismissGuard { armed: self.armed }
    }
}

/// Shared handles every page reads from context.
#[derive(Clone, Copy)]
pub struct AppState {
    pub route: Signal<Route>,
    pub store: Signal<ChatStore>,
    pub composer: Signal<Composer>,
    pub sidebar: Signal<Sidebar<DismissHost>>,
    pub dismiss_armed: Signal<bool>,
}

impl AppState {
    pub fn navigate(mut self, route: Route) {
        self.route.set(route);
        self.sidebar.with_mut(|sidebar| sidebar.handle(SidebarEvent::Navigate));
    }
}

#[component]
pub fn App() -> Element {
    let settings = config::current();
    let dismiss_armed = use_signal(|| false);
    let state = AppState {
        route: use_signal(Route::default),
        store: use_signal(ChatStore::new),
        composer: use_signal(|| Composer::new(settings.composer)),
        sidebar: use_signal(|| Sidebar::new(DismissHost { armed: dismiss_armed })),
        dismiss_armed,
    };
    use_context_provider(|| state);
    use_context_provider(|| HttpAuthService::new(settings.api_base.clone()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        RoutePanels { route: state.route }
    }
}

#[component]
fn RoutePanels(route: Signal<Route>) -> Element {
    match route() {
        Route::Home | Route::Chat => rsx! { ChatView {} },
        Route::Login => rsx! { LoginView {} },
        Route::Signup => rsx! { SignupView {} },
        Route::Colors => rsx! { ColorsView {} },
        Route::Message => rsx! { CounterView {} },
    }
}
