use super::service::{AuthRequest, LoginRequest, RegisterRequest};
use crate::routes::Route;
use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_PASSWORD_CHARS: usize = 6;
pub const MIN_NAME_CHARS: usize = 2;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

/// Messages are shown to the user verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your full name.")]
    NameTooShort,

    #[error("Please enter a valid email.")]
    InvalidEmail,

    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,

    #[error("Passwords do not match.")]
    PasswordMismatch,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn check_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// A form that can be checked locally and turned into an auth request.
pub trait CredentialForm {
    /// Shown when the service refuses without saying why.
    const FAILURE_FALLBACK: &'static str;
    /// Where a successful submission lands unless overridden.
    const DEFAULT_REDIRECT: Route;

    fn validate(&self) -> Result<(), ValidationError>;

    fn to_request(&self) -> AuthRequest;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl CredentialForm for LoginForm {
    const FAILURE_FALLBACK: &'static str = "Login failed.";
    const DEFAULT_REDIRECT: Route = Route::Home;

    fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        check_password(&self.password)
    }

    fn to_request(&self) -> AuthRequest {
        AuthRequest::Login(LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

impl CredentialForm for SignupForm {
    const FAILURE_FALLBACK: &'static str = "Signup failed.";
    const DEFAULT_REDIRECT: Route = Route::Login;

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().chars().count() < MIN_NAME_CHARS {
            return Err(ValidationError::NameTooShort);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        check_password(&self.password)?;
        if self.password != self.confirm {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }

    fn to_request(&self) -> AuthRequest {
        AuthRequest::Register(RegisterRequest {
            user_name: self.name.trim().to_string(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("ab.co"));
        assert!(!is_valid_email("a@bco"));
        assert!(!is_valid_email("a @b.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn login_checks_email_before_password() {
        let form = LoginForm {
            email: "nope".into(),
            password: "123".into(),
        };
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));

        let form = LoginForm {
            email: "me@example.com".into(),
            password: "12345".into(),
        };
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort));
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters."
        );
    }

    #[test]
    fn signup_check_order() {
        let mut form = SignupForm {
            name: " A ".into(),
            email: "bad".into(),
            password: "1".into(),
            confirm: "2".into(),
        };
        assert_eq!(form.validate(), Err(ValidationError::NameTooShort));
        form.name = "Asha".into();
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
        form.email = "asha@example.com".into();
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort));
        form.password = "secret1".into();
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
        form.confirm = "secret1".into();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn signup_request_trims_name() {
        let form = SignupForm {
            name: "  Asha Rao ".into(),
            email: "asha@example.com".into(),
            password: "secret1".into(),
            confirm: "secret1".into(),
        };
        match form.to_request() {
            AuthRequest::Register(request) => assert_eq!(request.user_name, "Asha Rao"),
            other => panic!("unexpected request {other:?}"),
        }
    }
}
