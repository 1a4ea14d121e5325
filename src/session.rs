use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Role {
    Admin,
    User,
}

string_vocab!(Role {
    Admin => "ADMIN",
    User => "USER",
});

/// Who is asking. Built once per request by the host and passed down to
/// every query; nothing in this crate keeps session state of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Identity from the OAuth provider (a Discord user id).
    pub discord_id: String,
    pub role: Role,
}

impl RequestContext {
    pub fn new(discord_id: impl Into<String>, role: Role) -> Self {
        Self {
            discord_id: discord_id.into(),
            role,
        }
    }

    pub fn player(discord_id: impl Into<String>) -> Self {
        Self::new(discord_id, Role::User)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
