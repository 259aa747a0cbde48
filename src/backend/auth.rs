/// Admin gate
///
/// A deliberately simple credential check against the configured username
/// and password, holding a logged-in flag for the session. This only gates
/// access to the management surface; it is not an authentication framework.
use crate::config::AppConfig;

#[derive(Debug, Clone)]
pub struct AdminGate {
    user: String,
    pass: String,
    logged_in: bool,
}

impl AdminGate {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            user: config.admin_user.clone(),
            pass: config.admin_pass.clone(),
            logged_in: false,
        }
    }

    /// Check credentials; on success the session stays logged in until
    /// `logout` is called.
    pub fn try_login(&mut self, user: &str, pass: &str) -> bool {
        if user == self.user && pass == self.pass {
            self.logged_in = true;
            tracing::info!("admin logged in");
        } else {
            tracing::warn!("rejected admin login attempt");
        }
        self.logged_in
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> AdminGate {
        AdminGate::from_config(&AppConfig::default())
    }

    #[test]
    fn test_accepts_configured_credentials() {
        let mut gate = gate();
        assert!(gate.try_login("admin", "123456"));
        assert!(gate.is_logged_in());
    }

    #[test]
    fn test_rejects_wrong_password_and_stays_logged_out() {
        let mut gate = gate();
        assert!(!gate.try_login("admin", "wrong"));
        assert!(!gate.is_logged_in());
    }

    #[test]
    fn test_logout_clears_the_session() {
        let mut gate = gate();
        gate.try_login("admin", "123456");
        gate.logout();
        assert!(!gate.is_logged_in());
    }
}
