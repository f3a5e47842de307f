use crate::shared::core::notice::Notice;
use crate::shared::core::primitives::now_millis;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("please enter both username and password")]
    MissingCredentials,

    #[error("nobody is signed in")]
    NotSignedIn,

    #[error("logout was not requested")]
    LogoutNotRequested,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub username: String,
    pub signed_in_at: i64,
}

/// Checks the sign-in form. Credentials are not verified against anything;
/// any filled-in form is granted a session.
pub fn decide_login(form: &LoginForm) -> Result<Session, LoginError> {
    let username = form.username.trim();
    if username.is_empty() || form.password.trim().is_empty() {
        return Err(LoginError::MissingCredentials);
    }
    Ok(Session {
        username: username.to_string(),
        signed_in_at: now_millis(),
    })
}

/// Who is signed in, and whether a logout is waiting on confirmation.
#[derive(Debug, Clone, Default)]
pub struct SessionController {
    session: Option<Session>,
    logout_requested: bool,
}

impl SessionController {
    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_logout_requested(&self) -> bool {
        self.logout_requested
    }

    /// Signing in again replaces the current session.
    pub fn login(&mut self, form: &LoginForm) -> Result<&Session, LoginError> {
        let session = decide_login(form)?;
        info!(username = %session.username, "signed in");
        self.logout_requested = false;
        Ok(&*self.session.insert(session))
    }

    /// First step of signing out. Nothing ends until [`confirm_logout`] runs.
    ///
    /// [`confirm_logout`]: SessionController::confirm_logout
    pub fn request_logout(&mut self) -> Result<Notice, LoginError> {
        if self.session.is_none() {
            return Err(LoginError::NotSignedIn);
        }
        self.logout_requested = true;
        Ok(Notice::new("Logout", "Are you sure you want to logout?"))
    }

    pub fn cancel_logout(&mut self) {
        self.logout_requested = false;
    }

    /// Ends the session and hands it back.
    pub fn confirm_logout(&mut self) -> Result<Session, LoginError> {
        if !self.logout_requested {
            return Err(LoginError::LogoutNotRequested);
        }
        self.logout_requested = false;
        let session = self.session.take().ok_or(LoginError::NotSignedIn)?;
        info!(username = %session.username, "signed out");
        Ok(session)
    }
}


#[cfg(test)]
mod session_controller_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> SessionController {
        let mut controller = SessionController::default();
        controller
            .login(&LoginForm {
                username: "jsmith".into(),
                password: "secret".into(),
            })
            .unwrap();
        controller
    }

    #[rstest]
    fn it_should_end_the_session_only_after_confirmation(mut before_each: SessionController) {
        let prompt = before_each.request_logout().unwrap();
        assert_eq!(prompt, Notice::new("Logout", "Are you sure you want to logout?"));
        assert!(before_each.current().is_some());

        let ended = before_each.confirm_logout().unwrap();
        assert_eq!(ended.username, "jsmith");
        assert_eq!(before_each.current(), None);
        assert!(!before_each.is_logout_requested());
    }

    #[rstest]
    fn it_should_keep_the_session_when_logout_is_cancelled(mut before_each: SessionController) {
        before_each.request_logout().unwrap();
        before_each.cancel_logout();
        assert_eq!(
            before_each.confirm_logout(),
            Err(LoginError::LogoutNotRequested)
        );
        assert_eq!(before_each.current().map(|s| s.username.as_str()), Some("jsmith"));
    }

    #[rstest]
    fn it_should_refuse_to_log_out_when_signed_out() {
        let mut controller = SessionController::default();
        assert_eq!(controller.request_logout(), Err(LoginError::NotSignedIn));
        assert_eq!(controller.confirm_logout(), Err(LoginError::LogoutNotRequested));
    }
}
