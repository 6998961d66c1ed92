//! Login/register flow state machine.
//!
//! Mirrors the two-tab authentication screen: one tab for logging in, one
//! for creating the account. Each tab owns its own field set and switching
//! tabs deliberately leaves the fields as they were. The flow mutates its
//! owned state and hands back plain values; rendering is someone else's job.

use log::{debug, info};

use crate::{
    validate_login, validate_registration, CogsError, RecordStore, Result, User, UserService,
};

/// The two tabs of the authentication screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

/// Field set owned by the login tab
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

/// Field set owned by the register tab
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// State of the login/register screen.
///
/// Starts on the login tab with empty fields.
#[derive(Debug, Default)]
pub struct AuthFlow {
    tab: AuthTab,
    pub login: LoginFields,
    pub register: RegisterFields,
}

impl AuthFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently active tab
    pub fn tab(&self) -> AuthTab {
        self.tab
    }

    /// Switches tabs. Fields of both tabs are preserved across switches.
    pub fn switch_to(&mut self, tab: AuthTab) {
        debug!("Switching auth tab to {:?}", tab);
        self.tab = tab;
    }

    /// Validates the login fields and checks them against the stored
    /// credential.
    ///
    /// On success the login fields are cleared and the stored user is
    /// returned. Any failure carries a user-facing message and leaves the
    /// fields untouched; validation failures never reach the record store.
    pub fn submit_login<S: RecordStore>(&mut self, service: &UserService<S>) -> Result<User> {
        validate_login(&self.login.email, &self.login.password)?;

        if !service.is_valid_login(&self.login.email, &self.login.password) {
            return Err(CogsError::Validation {
                message: "Incorrect email or password.".to_string(),
            });
        }

        let user = service.get_user().ok_or_else(|| CogsError::ApplicationError {
            message: "User record disappeared between validation and load".to_string(),
        })?;

        info!("Login succeeded for {}", user.email);
        self.login = LoginFields::default();
        Ok(user)
    }

    /// Validates the registration fields and saves the credential record,
    /// overwriting any previous account.
    ///
    /// Returns the saved user. Validation failures carry a user-facing
    /// message; only a store-level write failure surfaces as anything else.
    pub fn submit_register<S: RecordStore>(&mut self, service: &UserService<S>) -> Result<User> {
        validate_registration(
            &self.register.name,
            &self.register.email,
            &self.register.password,
            &self.register.confirm_password,
        )?;

        let user = User {
            name: self.register.name.clone(),
            email: self.register.email.clone(),
            password: self.register.password.clone(),
        };

        service.save_user(&user)?;
        info!("Registered account for {}", user.email);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn service() -> UserService<MemoryStore> {
        UserService::new(MemoryStore::new())
    }

    #[test]
    fn starts_on_login_tab() {
        assert_eq!(AuthFlow::new().tab(), AuthTab::Login);
    }

    #[test]
    fn switching_tabs_preserves_both_field_sets() {
        let mut flow = AuthFlow::new();
        flow.login.email = "ana@example.com".to_string();
        flow.register.name = "Ana".to_string();

        flow.switch_to(AuthTab::Register);
        flow.switch_to(AuthTab::Login);

        assert_eq!(flow.login.email, "ana@example.com");
        assert_eq!(flow.register.name, "Ana");
    }

    #[test]
    fn register_then_login_round_trip() {
        let service = service();
        let mut flow = AuthFlow::new();

        flow.register = RegisterFields {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
        };
        let registered = flow.submit_register(&service).unwrap();
        assert_eq!(registered.name, "Ana");

        flow.login.email = "ana@example.com".to_string();
        flow.login.password = "secret123".to_string();
        let logged_in = flow.submit_login(&service).unwrap();

        assert_eq!(logged_in, registered);
    }

    #[test]
    fn successful_login_clears_the_login_fields() {
        let service = service();
        service
            .save_user(&User {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .unwrap();

        let mut flow = AuthFlow::new();
        flow.login.email = "ana@example.com".to_string();
        flow.login.password = "secret123".to_string();
        flow.submit_login(&service).unwrap();

        assert_eq!(flow.login, LoginFields::default());
    }

    #[test]
    fn failed_login_keeps_the_fields_and_reports_a_message() {
        let service = service();
        let mut flow = AuthFlow::new();
        flow.login.email = "ana@example.com".to_string();
        flow.login.password = "wrongpass".to_string();

        let err = flow.submit_login(&service).unwrap_err();

        assert_eq!(err.to_string(), "Incorrect email or password.");
        assert_eq!(flow.login.password, "wrongpass");
    }

    #[test]
    fn login_validation_failure_never_touches_the_store() {
        let service = service();
        let mut flow = AuthFlow::new();
        flow.login.email = "no-at-sign".to_string();
        flow.login.password = "secret123".to_string();

        let err = flow.submit_login(&service).unwrap_err();
        assert!(matches!(err, CogsError::Validation { .. }));
    }

    #[test]
    fn register_with_mismatched_passwords_is_rejected() {
        let service = service();
        let mut flow = AuthFlow::new();
        flow.register = RegisterFields {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret124".to_string(),
        };

        assert!(flow.submit_register(&service).is_err());
        assert!(service.get_user().is_none());
    }

    #[test]
    fn register_overwrites_the_previous_account() {
        let service = service();
        let mut flow = AuthFlow::new();

        flow.register = RegisterFields {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
        };
        flow.submit_register(&service).unwrap();

        flow.register.email = "other@example.com".to_string();
        flow.submit_register(&service).unwrap();

        assert_eq!(service.get_user().unwrap().email, "other@example.com");
    }
}
