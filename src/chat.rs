use crate::model::{ChatMessage, ChatRole};
use crate::tutor;
use std::sync::mpsc::{Receiver, TryRecvError, channel};

pub const WELCOME_TEXT: &str = "Hello! I'm your exam Copilot. I can explain complex topics, \
solve PYQs, or generate a study plan for you.";

/// Turn-based tutor transcript. Strictly sequential: one outstanding call
/// at a time, replies delivered over a channel polled each frame.
pub struct TutorChat {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    seed: Option<String>,
    pending: bool,
    reply_rx: Option<Receiver<String>>,
}

impl Default for TutorChat {
    fn default() -> Self {
        Self::new()
    }
}

impl TutorChat {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::welcome(WELCOME_TEXT)],
            input: String::new(),
            seed: None,
            pending: false,
            reply_rx: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending
    }

    /// Queues a query fired the next time the chat surface is shown.
    /// Overwrites any earlier unconsumed seed.
    pub fn set_seed(&mut self, query: impl Into<String>) {
        self.seed = Some(query.into());
    }

    /// Consumed exactly once; later visibility toggles get `None`.
    pub fn take_seed(&mut self) -> Option<String> {
        self.seed.take()
    }

    /// Validates and records the user turn. Returns the accepted query, or
    /// `None` for blank input or while a reply is outstanding — in either
    /// case the transcript is untouched.
    pub fn begin_turn(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() || self.pending {
            return None;
        }
        self.messages.push(ChatMessage::user(text));
        self.pending = true;
        Some(text.to_string())
    }

    pub fn deliver_reply(&mut self, text: String) {
        self.messages.push(ChatMessage::model(text));
        self.pending = false;
        self.reply_rx = None;
    }

    /// Starts a turn and dispatches the tutor call on a worker thread.
    /// Returns whether the turn was accepted.
    pub fn send(&mut self, text: &str) -> bool {
        let Some(query) = self.begin_turn(text) else {
            return false;
        };
        let (tx, rx) = channel();
        self.reply_rx = Some(rx);
        std::thread::spawn(move || {
            let _ = tx.send(tutor::generate_study_help(&query));
        });
        true
    }

    /// Drains at most one reply per call. A worker that died without
    /// sending still produces a visible fallback message.
    pub fn poll_reply(&mut self) -> bool {
        let Some(rx) = self.reply_rx.as_ref() else {
            return false;
        };
        match rx.try_recv() {
            Ok(reply) => {
                self.deliver_reply(reply);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.deliver_reply(tutor::GENERIC_FALLBACK.to_string());
                true
            }
        }
    }

    pub fn model_message_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == ChatRole::Model)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_one_welcome_message() {
        let chat = TutorChat::new();
        assert_eq!(chat.messages.len(), 1);
        assert_eq!(chat.messages[0].role, ChatRole::Model);
        assert!(!chat.is_busy());
    }

    #[test]
    fn blank_input_is_a_no_op() {
        let mut chat = TutorChat::new();
        assert_eq!(chat.begin_turn(""), None);
        assert_eq!(chat.begin_turn("   \n\t"), None);
        assert_eq!(chat.messages.len(), 1);
        assert!(!chat.is_busy());
    }

    #[test]
    fn second_turn_while_busy_is_dropped() {
        let mut chat = TutorChat::new();
        assert_eq!(chat.begin_turn("Explain NAT").as_deref(), Some("Explain NAT"));
        assert!(chat.is_busy());
        assert_eq!(chat.begin_turn("Explain OSPF"), None);
        // only welcome + the first user turn
        assert_eq!(chat.messages.len(), 2);
        assert_eq!(chat.messages[1].role, ChatRole::User);
    }

    #[test]
    fn failed_call_yields_exactly_one_fallback_reply() {
        let mut chat = TutorChat::new();
        chat.begin_turn("Explain NAT");
        chat.deliver_reply(tutor::GENERIC_FALLBACK.to_string());

        assert!(!chat.is_busy());
        assert_eq!(chat.model_message_count(), 2); // welcome + fallback
        assert_eq!(chat.messages.last().unwrap().text, tutor::GENERIC_FALLBACK);

        // the next turn is accepted again
        assert!(chat.begin_turn("Explain OSPF").is_some());
    }

    #[test]
    fn dead_worker_still_produces_a_visible_reply() {
        let mut chat = TutorChat::new();
        chat.begin_turn("Explain NAT");
        let (tx, rx) = channel::<String>();
        chat.reply_rx = Some(rx);
        drop(tx);

        assert!(chat.poll_reply());
        assert!(!chat.is_busy());
        assert_eq!(chat.messages.last().unwrap().text, tutor::GENERIC_FALLBACK);
    }

    #[test]
    fn seed_is_consumed_exactly_once() {
        let mut chat = TutorChat::new();
        chat.set_seed("Explain the OSI model");
        assert_eq!(chat.take_seed().as_deref(), Some("Explain the OSI model"));
        assert_eq!(chat.take_seed(), None);
        assert_eq!(chat.take_seed(), None);
    }

    #[test]
    fn turn_input_is_trimmed_before_recording() {
        let mut chat = TutorChat::new();
        let accepted = chat.begin_turn("  Explain NAT  ").unwrap();
        assert_eq!(accepted, "Explain NAT");
        assert_eq!(chat.messages[1].text, "Explain NAT");
    }
}
