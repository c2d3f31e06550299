//! Draft text, staged attachments and the send path into the chat store.

use crate::attachments::{AttachmentSet, FileHandle};
use crate::store::{ChatStore, IdSource, NewChat, NewMessage};
use crate::types::{Key, KeyPress};
use tracing::debug;

pub const QUICK_PROMPTS: [&str; 3] = [
    "Give me a concise summary of this meeting transcript",
    "Write a product description for a minimalist smartwatch",
    "Provide a polite response to a customer asking for a refund",
];

pub const DEFAULT_MIN_HEIGHT_PX: u32 = 40;
pub const DEFAULT_MAX_HEIGHT_PX: u32 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComposerConfig {
    pub min_height_px: u32,
    pub max_height_px: u32,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            min_height_px: DEFAULT_MIN_HEIGHT_PX,
            max_height_px: DEFAULT_MAX_HEIGHT_PX,
        }
    }
}

/// What the input surface should do with a key press after the composer has
/// seen it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Let the platform apply its default behavior (e.g. insert a newline).
    PassThrough,
    /// The composer submitted; the default must be suppressed.
    Submit,
}

pub fn classify_key(press: KeyPress) -> KeyAction {
    match press {
        KeyPress {
            key: Key::Enter,
            shift: false,
        } => KeyAction::Submit,
        _ => KeyAction::PassThrough,
    }
}

/// Text of the message produced from a draft, or `None` when there is
/// nothing to send.
pub fn compose_summary(text: &str, attachments: usize) -> Option<String> {
    let trimmed = text.trim();
    match (trimmed.is_empty(), attachments) {
        (true, 0) => None,
        (false, 0) => Some(trimmed.to_string()),
        (true, count) => Some(format!("(sent {count} attachments)")),
        (false, count) => Some(format!("{trimmed} (sent {count} attachments)")),
    }
}

#[derive(Clone, Debug, Default)]
pub struct Composer {
    input: String,
    attachments: AttachmentSet,
    config: ComposerConfig,
    resize_pending: bool,
    focus_requested: bool,
}

impl Composer {
    pub fn new(config: ComposerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn attachments(&self) -> &AttachmentSet {
        &self.attachments
    }

    pub fn config(&self) -> ComposerConfig {
        self.config
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.resize_pending = true;
    }

    pub fn add_files<I>(&mut self, files: I) -> Vec<u64>
    where
        I: IntoIterator<Item = FileHandle>,
    {
        self.attachments.add_files(files)
    }

    pub fn remove_attachment(&mut self, id: u64) {
        self.attachments.remove(id);
    }

    pub fn clear_attachments(&mut self) {
        self.attachments.clear();
    }

    /// Whether there is anything `send` would emit.
    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty() || !self.attachments.is_empty()
    }

    /// Appends the draft to the current chat and resets the composer.
    ///
    /// A chat is created first when none is current, or when the current id
    /// no longer names a chat. Returns the text that was sent, or `None` when
    /// the draft was empty and nothing changed.
    pub fn send<I: IdSource>(&mut self, store: &mut ChatStore<I>) -> Option<String> {
        let summary = compose_summary(&self.input, self.attachments.len())?;
        let chat_id = match store.current_chat().map(|chat| chat.id.clone()) {
            Some(id) => id,
            None => store.create_chat(NewChat::default()),
        };
        debug!(%chat_id, attachments = self.attachments.len(), "sending draft");
        store.send_message(NewMessage::user(chat_id, summary.clone()));

        self.input.clear();
        self.attachments.clear();
        self.resize_pending = true;
        self.focus_requested = true;
        Some(summary)
    }

    pub fn handle_key<I: IdSource>(&mut self, press: KeyPress, store: &mut ChatStore<I>) -> KeyAction {
        let action = classify_key(press);
        if action == KeyAction::Submit {
            self.send(store);
        }
        action
    }

    pub fn pick_quick_prompt<I: IdSource>(
        &mut self,
        prompt: &str,
        store: &mut ChatStore<I>,
    ) -> Option<String> {
        self.set_input(prompt);
        self.send(store)
    }

    /// Opens a fresh chat and resets the draft. Returns the new chat id.
    pub fn start_new_chat<I: IdSource>(&mut self, store: &mut ChatStore<I>) -> String {
        self.input.clear();
        self.attachments.clear();
        self.resize_pending = true;
        self.focus_requested = true;
        store.create_chat(NewChat::default())
    }

    pub fn needs_resize(&self) -> bool {
        self.resize_pending
    }

    pub fn needs_focus(&self) -> bool {
        self.focus_requested
    }

    /// True once per draft change; the surface re-measures its content
    /// height when this fires.
    pub fn take_resize_request(&mut self) -> bool {
        std::mem::take(&mut self.resize_pending)
    }

    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    /// Content height bounded by the configured range. A maximum below the
    /// minimum yields the minimum.
    pub fn fit_height(&self, content_px: u32) -> u32 {
        content_px
            .min(self.config.max_height_px)
            .max(self.config.min_height_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_attachments() {
        assert_eq!(compose_summary("  ", 0), None);
        assert_eq!(compose_summary(" hi ", 0).as_deref(), Some("hi"));
        assert_eq!(
            compose_summary("", 3).as_deref(),
            Some("(sent 3 attachments)")
        );
        assert_eq!(
            compose_summary("Hello", 2).as_deref(),
            Some("Hello (sent 2 attachments)")
        );
    }

    #[test]
    fn only_plain_enter_submits() {
        assert_eq!(classify_key(KeyPress::new(Key::Enter)), KeyAction::Submit);
        assert_eq!(
            classify_key(KeyPress::with_shift(Key::Enter)),
            KeyAction::PassThrough
        );
        assert_eq!(classify_key(KeyPress::new(Key::Other)), KeyAction::PassThrough);
    }

    #[test]
    fn fit_height_is_bounded() {
        let composer = Composer::new(ComposerConfig {
            min_height_px: 40,
            max_height_px: 120,
        });
        assert_eq!(composer.fit_height(10), 40);
        assert_eq!(composer.fit_height(80), 80);
        assert_eq!(composer.fit_height(900), 120);
    }

    #[test]
    fn fit_height_survives_inverted_bounds() {
        let composer = Composer::new(ComposerConfig {
            min_height_px: 40,
            max_height_px: 20,
        });
        assert_eq!(composer.fit_height(0), 40);
        assert_eq!(composer.fit_height(30), 40);
        assert_eq!(composer.fit_height(500), 40);
    }

    #[test]
    fn resize_requested_once_per_change() {
        let mut composer = Composer::default();
        assert!(!composer.take_resize_request());
        composer.set_input("a");
        composer.set_input("ab");
        assert!(composer.take_resize_request());
        assert!(!composer.take_resize_request());
    }

    #[test]
    fn empty_draft_leaves_store_untouched() {
        let mut store = ChatStore::new();
        let mut composer = Composer::default();
        composer.set_input("   ");
        assert_eq!(composer.send(&mut store), None);
        assert!(store.chats().is_empty());
        assert!(!composer.take_focus_request());
    }

    #[test]
    fn send_creates_a_chat_when_none_is_current() {
        let mut store = ChatStore::new();
        let mut composer = Composer::default();
        composer.set_input("hi");
        assert_eq!(composer.send(&mut store).as_deref(), Some("hi"));
        assert_eq!(store.chats().len(), 1);
        assert_eq!(store.current_chat().unwrap().messages[0].text, "hi");
    }

    #[test]
    fn send_with_stale_current_id_opens_a_new_chat() {
        let mut store = ChatStore::new();
        store.set_current_chat(Some("gone".into()));
        let mut composer = Composer::default();
        composer.set_input("still here");

        assert_eq!(composer.send(&mut store).as_deref(), Some("still here"));
        let chat = store.current_chat().expect("a chat was created");
        assert_ne!(chat.id, "gone");
        assert_eq!(chat.messages[0].text, "still here");
    }

    #[test]
    fn new_chat_resets_draft() {
        let mut store = ChatStore::new();
        let mut composer = Composer::default();
        composer.set_input("draft");
        composer.add_files([FileHandle::named("a.png")]);

        let id = composer.start_new_chat(&mut store);
        assert_eq!(composer.input(), "");
        assert!(composer.attachments().is_empty());
        assert_eq!(store.state().current_chat_id.as_deref(), Some(id.as_str()));
        assert!(composer.take_focus_request());
    }
}
