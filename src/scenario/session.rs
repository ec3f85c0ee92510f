/// Per-user state threaded from `create_owner` into `create_pet`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionState {
    owner_id: Option<String>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    pub fn set_owner_id(&mut self, owner_id: String) {
        self.owner_id = Some(owner_id);
    }

    /// Removes the held owner so it is never reused by a later iteration.
    pub fn take_owner_id(&mut self) -> Option<String> {
        self.owner_id.take()
    }
}
