use super::service::{AuthError, AuthRequest, AuthResponse, AuthService};
use super::validate::{CredentialForm, LoginForm, SignupForm, ValidationError};
use crate::routes::Route;
use tracing::{info, warn};

const GENERIC_FAILURE: &str = "Something went wrong.";

pub type LoginController = AuthFormController<LoginForm>;
pub type SignupController = AuthFormController<SignupForm>;

type SuccessCallback = Box<dyn FnMut(&AuthResponse)>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent.
    Invalid(ValidationError),
    /// A request is already in flight.
    Busy,
    /// The service refused or could not be reached. Carries the message
    /// now shown on the form.
    Failed(String),
    Redirect(Route),
}

/// Text shown for a request that never produced a usable response.
pub fn failure_message(err: &AuthError) -> String {
    if let Some(message) = err.service_message() {
        return message.to_string();
    }
    let text = err.to_string();
    if text.trim().is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        text
    }
}

/// State behind one login or signup form.
///
/// Submission is split into [`begin`](Self::begin) and
/// [`finish`](Self::finish) so a UI can release its state borrow while the
/// request is in flight; [`submit`](Self::submit) runs both around the call.
pub struct AuthFormController<F: CredentialForm> {
    pub form: F,
    error: Option<String>,
    loading: bool,
    show_password: bool,
    redirect: Route,
    on_success: Option<SuccessCallback>,
}

impl<F: CredentialForm + Default> AuthFormController<F> {
    pub fn new() -> Self {
        Self::with_form(F::default())
    }
}

impl<F: CredentialForm + Default> Default for AuthFormController<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: CredentialForm> AuthFormController<F> {
    pub fn with_form(form: F) -> Self {
        Self {
            form,
            error: None,
            loading: false,
            show_password: false,
            redirect: F::DEFAULT_REDIRECT,
            on_success: None,
        }
    }

    pub fn redirect_to(mut self, route: Route) -> Self {
        self.redirect = route;
        self
    }

    pub fn on_success(mut self, callback: impl FnMut(&AuthResponse) + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Validates the form and, if it passes, marks the form as loading and
    /// returns the request to send. Any early exit is returned as `Err`.
    pub fn begin(&mut self) -> Result<AuthRequest, SubmitOutcome> {
        if self.loading {
            return Err(SubmitOutcome::Busy);
        }
        self.error = None;
        if let Err(err) = self.form.validate() {
            self.error = Some(err.to_string());
            return Err(SubmitOutcome::Invalid(err));
        }
        self.loading = true;
        Ok(self.form.to_request())
    }

    pub fn finish(&mut self, result: Result<AuthResponse, AuthError>) -> SubmitOutcome {
        self.loading = false;
        match result {
            Ok(response) if response.success => {
                info!(route = self.redirect.path(), "auth succeeded");
                if let Some(callback) = self.on_success.as_mut() {
                    callback(&response);
                }
                SubmitOutcome::Redirect(self.redirect)
            }
            Ok(response) => {
                let message = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| F::FAILURE_FALLBACK.to_string());
                info!(%message, "auth refused");
                self.fail(message)
            }
            Err(err) => {
                warn!(error = %err, "auth request failed");
                self.fail(failure_message(&err))
            }
        }
    }

    pub async fn submit<S: AuthService + ?Sized>(&mut self, service: &S) -> SubmitOutcome {
        let request = match self.begin() {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };
        let result = request.send(service).await;
        self.finish(result)
    }

    fn fail(&mut self, message: String) -> SubmitOutcome {
        self.error = Some(message.clone());
        SubmitOutcome::Failed(message)
    }
}
