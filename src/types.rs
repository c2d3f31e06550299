use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

pub const DEFAULT_CHAT_TITLE: &str = "New Chat";

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    /// Valid in the model, but nothing in the app produces assistant
    /// messages yet.
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub text: String,
    pub created_at: OffsetDateTime,
}

impl Message {
    /// Wall-clock label shown under the bubble, in local time when the
    /// offset is known.
    pub fn display_time(&self) -> Option<String> {
        let mut datetime = self.created_at;
        if let Ok(offset) = UtcOffset::current_local_offset() {
            datetime = datetime.to_offset(offset);
        }
        datetime.format(MESSAGE_TIME_FORMAT).ok()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chat {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
    pub created_at: OffsetDateTime,
}

impl Chat {
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// The subset of keyboard input the composer and sidebar react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub fn with_shift(key: Key) -> Self {
        Self { key, shift: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"assistant\"").unwrap(),
            Role::Assistant
        );
    }

    #[test]
    fn display_time_uses_twelve_hour_clock() {
        let message = Message {
            id: "m1".into(),
            role: Role::User,
            text: "hi".into(),
            created_at: datetime!(2024-03-01 15:04 UTC),
        };
        let label = message.display_time().unwrap();
        assert!(label.ends_with("AM") || label.ends_with("PM"));
        assert_eq!(label.len(), "03:04 PM".len());
    }
}
