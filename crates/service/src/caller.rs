/// Identity capability of one request.
///
/// Persistence is only available to callers with an identity; anonymous
/// callers still get answers, but nothing is saved or read back for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller {
    user_id: Option<String>,
}

impl Caller {
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user_id: None }
    }

    /// A caller acting as `user_id`. Blank ids are treated as anonymous.
    #[must_use]
    pub fn user(user_id: impl Into<String>) -> Self {
        Self::from_optional(Some(user_id.into()))
    }

    #[must_use]
    pub fn from_optional(user_id: Option<String>) -> Self {
        let user_id = user_id.map(|id| id.trim().to_owned()).filter(|id| !id.is_empty());
        Self { user_id }
    }

    #[must_use]
    pub const fn has_identity(&self) -> bool {
        self.user_id.is_some()
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}
