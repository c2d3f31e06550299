//! Chat session store.
//!
//! State changes go through [`ChatAction`]s. [`ChatStore::dispatch`] queues an
//! action and drains the queue in order, stamping each action with a fresh id
//! and timestamp before handing it to the pure [`reduce`] function.

use crate::types::{Chat, DEFAULT_CHAT_TITLE, Message, Role};
use std::collections::VecDeque;
use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// Most recent chat first.
    pub chats: Vec<Chat>,
    pub current_chat_id: Option<String>,
    pub search_query: String,
}

/// Options for a new chat. Empty strings count as "not supplied".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewChat {
    pub id: Option<String>,
    pub title: Option<String>,
}

impl NewChat {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: Some(title.into()),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMessage {
    pub chat_id: String,
    pub text: String,
    pub role: Role,
}

impl NewMessage {
    pub fn user(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            role: Role::User,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatAction {
    CreateChat(NewChat),
    SendMessage(NewMessage),
    SetSearch(String),
    /// Not checked against the chat list.
    SetCurrent(Option<String>),
}

/// Identity and time handed to the reducer for the action being applied.
#[derive(Clone, Debug, PartialEq)]
pub struct Stamp {
    pub id: String,
    pub at: OffsetDateTime,
}

pub fn reduce(mut state: SessionState, action: ChatAction, stamp: Stamp) -> SessionState {
    match action {
        ChatAction::CreateChat(NewChat { id, title }) => {
            let id = non_empty(id).unwrap_or(stamp.id);
            let title = non_empty(title).unwrap_or_else(|| DEFAULT_CHAT_TITLE.to_string());
            debug!(chat_id = %id, %title, "create chat");
            state.chats.insert(
                0,
                Chat {
                    id: id.clone(),
                    title,
                    messages: Vec::new(),
                    created_at: stamp.at,
                },
            );
            state.current_chat_id = Some(id);
        }
        ChatAction::SendMessage(NewMessage { chat_id, text, role }) => {
            match state.chats.iter_mut().find(|chat| chat.id == chat_id) {
                Some(chat) => chat.messages.push(Message {
                    id: stamp.id,
                    role,
                    text,
                    created_at: stamp.at,
                }),
                None => debug!(%chat_id, "message for unknown chat ignored"),
            }
        }
        ChatAction::SetSearch(query) => state.search_query = query,
        ChatAction::SetCurrent(chat_id) => state.current_chat_id = chat_id,
    }
    state
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub trait IdSource {
    fn next_id(&mut self) -> String;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[derive(Debug, Default)]
pub struct ChatStore<I = UuidIds> {
    state: SessionState,
    queue: VecDeque<ChatAction>,
    ids: I,
}

impl ChatStore<UuidIds> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: IdSource> ChatStore<I> {
    pub fn with_ids(ids: I) -> Self {
        Self {
            state: SessionState::default(),
            queue: VecDeque::new(),
            ids,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn dispatch(&mut self, action: ChatAction) {
        self.queue.push_back(action);
        while let Some(next) = self.queue.pop_front() {
            let stamp = Stamp {
                id: self.ids.next_id(),
                at: OffsetDateTime::now_utc(),
            };
            let state = std::mem::take(&mut self.state);
            self.state = reduce(state, next, stamp);
        }
    }

    /// Creates a chat at the head of the list, makes it current and returns
    /// its id.
    pub fn create_chat(&mut self, new_chat: NewChat) -> String {
        self.dispatch(ChatAction::CreateChat(new_chat));
        // The create was the last action drained, so it is the current chat.
        self.state.current_chat_id.clone().unwrap_or_default()
    }

    pub fn send_message(&mut self, message: NewMessage) {
        self.dispatch(ChatAction::SendMessage(message));
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.dispatch(ChatAction::SetSearch(query.into()));
    }

    pub fn set_current_chat(&mut self, chat_id: Option<String>) {
        self.dispatch(ChatAction::SetCurrent(chat_id));
    }

    pub fn chats(&self) -> &[Chat] {
        &self.state.chats
    }

    pub fn chat(&self, chat_id: &str) -> Option<&Chat> {
        self.state.chats.iter().find(|chat| chat.id == chat_id)
    }

    pub fn current_chat(&self) -> Option<&Chat> {
        self.state
            .current_chat_id
            .as_deref()
            .and_then(|id| self.chat(id))
    }

    /// Chats whose title contains the search query, ignoring case.
    pub fn filtered_chats(&self) -> Vec<&Chat> {
        let query = self.state.search_query.trim().to_lowercase();
        self.state
            .chats
            .iter()
            .filter(|chat| query.is_empty() || chat.title.to_lowercase().contains(&query))
            .collect()
    }
}
