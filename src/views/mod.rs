pub mod auth;
pub mod chat;
pub mod colors;
pub mod counter;
pub mod sidebar;

pub use auth::{LoginView, SignupView};
pub use chat::ChatView;
pub use colors::ColorsView;
pub use counter::CounterView;
pub use sidebar::SidebarPanel;
