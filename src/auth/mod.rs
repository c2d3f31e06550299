/// Login and signup for Inteliq
///
/// Forms are validated locally before anything goes over the network. A
/// valid form becomes one request to the auth service, and the service
/// answer becomes either a redirect or an inline error message.
///
/// # Architecture
///
/// - `validate` - Form fields and the local checks
/// - `service` - The `AuthService` seam and its HTTP implementation
/// - `controller` - Loading/error state and submission for one form
///
/// # Usage
///
/// ```rust,no_run
/// use inteliq::auth::{HttpAuthService, LoginController, SubmitOutcome};
///
/// # async fn example() {
/// let service = HttpAuthService::new("http://localhost:5000");
/// let mut login = LoginController::new();
/// login.form.email = "me@example.com".into();
/// login.form.password = "secret1".into();
/// if let SubmitOutcome::Redirect(route) = login.submit(&service).await {
///     println!("go to {}", route.path());
/// }
/// # }
/// ```
mod controller;
mod service;
mod validate;

pub use controller::{
    AuthFormController, LoginController, SignupController, SubmitOutcome, failure_message,
};
pub use service::{
    AuthError, AuthRequest, AuthResponse, AuthService, HttpAuthService, LOGIN_PATH,
    LoginRequest, REGISTER_PATH, RegisterRequest,
};
pub use validate::{CredentialForm, LoginForm, SignupForm, ValidationError, is_valid_email};
