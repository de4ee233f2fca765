use std::fmt;

/// The four screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    /// Timed splash shown at launch.
    #[default]
    Welcome,
    Login,
    Register,
    Dashboard,
}

impl ScreenId {
    pub fn name(self) -> &'static str {
        match self {
            ScreenId::Welcome => "Welcome",
            ScreenId::Login => "Login",
            ScreenId::Register => "Register",
            ScreenId::Dashboard => "Dashboard",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
