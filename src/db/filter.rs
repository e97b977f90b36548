use chrono::{DateTime, Utc};

/// Query filter for `find`; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub id: Option<String>,
    pub secret_id: Option<String>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
}

impl ItemFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_secret(secret_id: impl Into<String>) -> Self {
        Self::default().secret(secret_id)
    }

    pub fn by_id(id: impl Into<String>) -> Self {
        Self::default().id(id)
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn secret(mut self, secret_id: impl Into<String>) -> Self {
        self.secret_id = Some(secret_id.into());
        self
    }

    /// Inclusive lower bound on `createdAt`
    pub fn created_after(mut self, at: DateTime<Utc>) -> Self {
        self.created_after = Some(at);
        self
    }

    /// Exclusive upper bound on `createdAt`
    pub fn created_before(mut self, at: DateTime<Utc>) -> Self {
        self.created_before = Some(at);
        self
    }
}
