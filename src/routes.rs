#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    Login,
    Signup,
    Chat,
    Colors,
    Message,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Login,
        Route::Signup,
        Route::Chat,
        Route::Colors,
        Route::Message,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Chat => "/chat",
            Route::Colors => "/colorPage",
            Route::Message => "/message",
        }
    }

    /// Unknown paths land on the home page.
    pub fn from_path(path: &str) -> Self {
        Route::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .unwrap_or_default()
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home | Route::Chat => "Chat",
            Route::Login => "Login",
            Route::Signup => "Sign Up",
            Route::Colors => "Color Buttons",
            Route::Message => "Render Counter",
        }
    }
}
