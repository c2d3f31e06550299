//! Sidebar panel state.
//!
//! Two independent flags: `is_open` drives the mobile overlay drawer and
//! `collapsed` switches the desktop rail between wide and narrow. While the
//! drawer is open the sidebar holds a dismissal subscription (escape key and
//! click-away); the subscription is a guard that is released as soon as the
//! drawer closes or the [`Sidebar`] is dropped.

use crate::types::{Key, KeyPress};
use tracing::debug;

pub const WIDE_WIDTH_PX: u32 = 256;
pub const NARROW_WIDTH_PX: u32 = 64;
pub const DEFAULT_BREAKPOINT_PX: u32 = 1024;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SidebarEvent {
    Open,
    Close,
    Escape,
    /// Mouse down or touch start anywhere on the page.
    PointerDown(Point),
    Navigate,
    ToggleCollapsed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub is_open: bool,
    pub collapsed: bool,
}

impl SidebarState {
    pub fn width_px(&self) -> u32 {
        if self.collapsed {
            NARROW_WIDTH_PX
        } else {
            WIDE_WIDTH_PX
        }
    }

    /// Labels are hidden on the narrow rail; only icons and the avatar stay.
    pub fn shows_labels(&self) -> bool {
        !self.collapsed
    }

    /// `bounds` is the panel's on-screen rectangle, when known. Without it a
    /// pointer event cannot be judged to be outside and is ignored.
    pub fn transition(self, event: SidebarEvent, bounds: Option<Rect>) -> Self {
        let mut next = self;
        match event {
            SidebarEvent::Open => next.is_open = true,
            SidebarEvent::Close | SidebarEvent::Escape | SidebarEvent::Navigate => {
                next.is_open = false
            }
            SidebarEvent::PointerDown(point) => {
                if self.is_open && bounds.is_some_and(|rect| !rect.contains(point)) {
                    next.is_open = false;
                }
            }
            SidebarEvent::ToggleCollapsed => next.collapsed = !self.collapsed,
        }
        next
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarLayout {
    /// Below the breakpoint: a drawer drawn over the content.
    Overlay,
    /// At or above the breakpoint: always visible, pushing content aside.
    Pinned,
}

impl SidebarLayout {
    pub fn for_viewport(width_px: u32, breakpoint_px: u32) -> Self {
        if width_px < breakpoint_px {
            SidebarLayout::Overlay
        } else {
            SidebarLayout::Pinned
        }
    }

    pub fn is_visible(self, state: &SidebarState) -> bool {
        match self {
            SidebarLayout::Overlay => state.is_open,
            SidebarLayout::Pinned => true,
        }
    }

    pub fn content_offset_px(self, state: &SidebarState) -> u32 {
        match self {
            SidebarLayout::Overlay => 0,
            SidebarLayout::Pinned => state.width_px(),
        }
    }
}

/// Source of the page-wide listeners used to dismiss the drawer. The
/// returned subscription stays active until dropped.
pub trait ListenerHost {
    type Subscription;

    fn subscribe(&mut self) -> Self::Subscription;
}

pub struct Sidebar<H: ListenerHost> {
    state: SidebarState,
    bounds: Option<Rect>,
    host: H,
    subscription: Option<H::Subscription>,
}

impl<H: ListenerHost> Sidebar<H> {
    pub fn new(host: H) -> Self {
        Self {
            state: SidebarState::default(),
            bounds: None,
            host,
            subscription: None,
        }
    }

    pub fn state(&self) -> SidebarState {
        self.state
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    pub fn is_listening(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn handle(&mut self, event: SidebarEvent) {
        let dismissal = matches!(event, SidebarEvent::Escape | SidebarEvent::PointerDown(_));
        if dismissal && !self.is_listening() {
            return;
        }
        self.state = self.state.transition(event, self.bounds);
        self.sync_subscription();
    }

    /// Routes a key press; only Escape matters, and only while listening.
    pub fn handle_key(&mut self, press: KeyPress) {
        if press.key == Key::Escape {
            self.handle(SidebarEvent::Escape);
        }
    }

    pub fn open(&mut self) {
        self.handle(SidebarEvent::Open);
    }

    pub fn close(&mut self) {
        self.handle(SidebarEvent::Close);
    }

    pub fn toggle_collapsed(&mut self) {
        self.handle(SidebarEvent::ToggleCollapsed);
    }

    fn sync_subscription(&mut self) {
        match (self.state.is_open, self.subscription.is_some()) {
            (true, false) => {
                debug!("sidebar dismissal listeners attached");
                self.subscription = Some(self.host.subscribe());
            }
            (false, true) => {
                debug!("sidebar dismissal listeners detached");
                self.subscription = None;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct CountingHost {
        active: Rc<Cell<i32>>,
    }

    struct Guard(Rc<Cell<i32>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    impl ListenerHost for CountingHost {
        type Subscription = Guard;

        fn subscribe(&mut self) -> Guard {
            self.active.set(self.active.get() + 1);
            Guard(self.active.clone())
        }
    }

    fn panel() -> Rect {
        Rect::new(0.0, 0.0, WIDE_WIDTH_PX as f64, 800.0)
    }

    #[test]
    fn collapse_toggle_is_an_involution() {
        let start = SidebarState::default();
        let once = start.transition(SidebarEvent::ToggleCollapsed, None);
        assert!(once.collapsed);
        assert_eq!(once.width_px(), NARROW_WIDTH_PX);
        assert!(!once.shows_labels());
        assert_eq!(once.transition(SidebarEvent::ToggleCollapsed, None), start);
    }

    #[test]
    fn dismissals_close_an_open_panel() {
        let open = SidebarState::default().transition(SidebarEvent::Open, None);
        for event in [
            SidebarEvent::Close,
            SidebarEvent::Escape,
            SidebarEvent::Navigate,
            SidebarEvent::PointerDown(Point::new(600.0, 10.0)),
        ] {
            assert!(!open.transition(event, Some(panel())).is_open, "{event:?}");
        }
    }

    #[test]
    fn pointer_inside_panel_keeps_it_open() {
        let open = SidebarState::default().transition(SidebarEvent::Open, None);
        let next = open.transition(SidebarEvent::PointerDown(Point::new(20.0, 20.0)), Some(panel()));
        assert!(next.is_open);
        let unknown = open.transition(SidebarEvent::PointerDown(Point::new(600.0, 20.0)), None);
        assert!(unknown.is_open);
    }

    #[test]
    fn layout_switches_at_breakpoint() {
        let state = SidebarState::default();
        assert_eq!(SidebarLayout::for_viewport(1023, 1024), SidebarLayout::Overlay);
        assert_eq!(SidebarLayout::for_viewport(1024, 1024), SidebarLayout::Pinned);
        assert!(!SidebarLayout::Overlay.is_visible(&state));
        assert!(SidebarLayout::Pinned.is_visible(&state));
        assert_eq!(SidebarLayout::Pinned.content_offset_px(&state), WIDE_WIDTH_PX);
        assert_eq!(SidebarLayout::Overlay.content_offset_px(&state), 0);
    }

    #[test]
    fn listeners_follow_open_state() {
        let host = CountingHost::default();
        let active = host.active.clone();
        let mut sidebar = Sidebar::new(host);
        sidebar.set_bounds(panel());

        sidebar.open();
        assert_eq!(active.get(), 1);
        sidebar.open();
        assert_eq!(active.get(), 1);

        sidebar.handle_key(KeyPress::new(Key::Escape));
        assert!(!sidebar.state().is_open);
        assert_eq!(active.get(), 0);
    }

    #[test]
    fn dropping_an_open_sidebar_releases_listeners() {
        let host = CountingHost::default();
        let active = host.active.clone();
        {
            let mut sidebar = Sidebar::new(host);
            sidebar.open();
            assert!(sidebar.is_listening());
            assert_eq!(active.get(), 1);
        }
        assert_eq!(active.get(), 0);
    }
}
