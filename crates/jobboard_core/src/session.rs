/// Display name used when the backend did not supply one.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// Credentials of a signed-in user, created at login and dropped at logout.
///
/// The value is passed explicitly to whoever needs it (request headers, the
/// view); nothing reads it from ambient storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub token: String,
    pub user_id: Option<String>,
    pub display_name: Option<String>,
}

impl SessionContext {
    /// Returns `None` when there is no token, i.e. the caller is anonymous.
    pub fn from_parts(
        token: Option<String>,
        user_id: Option<String>,
        display_name: Option<String>,
    ) -> Option<Self> {
        let token = token.filter(|token| !token.trim().is_empty())?;
        Some(Self {
            token,
            user_id: user_id.filter(|id| !id.is_empty()),
            display_name: display_name.filter(|name| !name.is_empty()),
        })
    }

    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(DEFAULT_DISPLAY_NAME)
    }
}
