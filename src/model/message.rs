use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Label shown next to a message in the chat view.
    pub fn speaker(&self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "Assistant",
        }
    }
}

/// One transcript entry. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_round_trips_through_lowercase_labels() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::from_str("assistant").unwrap(), Role::Assistant);
        assert!(Role::from_str("system").is_err());
    }

    #[test]
    fn message_serializes_role_in_lowercase() {
        let value = serde_json::to_value(Message::user("Who was late?")).unwrap();
        assert_eq!(value["role"], "user");
        assert_eq!(value["content"], "Who was late?");
    }
}
