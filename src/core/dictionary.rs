//! Message dictionary: the ten fixed gesture sequences
//!
//! Matching is whole-sequence equality, first entry wins in declaration
//! order. A buffer that diverges from every entry can only grow; nothing is
//! recovered until reset.

use tracing::debug;
use crate::types::{MessageIndex, Symbol};
use crate::MESSAGE_COUNT;

use crate::types::Symbol::{NegX as O, NegY as G, NegZ as V, PosX as R, PosY as Y, PosZ as B};

/// The messages, lengths 4-7, letters named after colors
pub const MESSAGES: [&[Symbol]; MESSAGE_COUNT] = [
    &[B, B, Y, G, G, R, B],
    &[O, Y, B, O, O, B, O],
    &[G, O, G, Y, B],
    &[B, Y, Y, B, B, G, Y],
    &[V, G, R, V, G, R],
    &[R, Y, V, O, O],
    &[O, R, R, B, R],
    &[V, O, Y, G, B, B, R],
    &[R, O, R, V, Y, Y, R],
    &[R, R, B, G, R, R],
];

/// Lookup over the fixed message table
#[derive(Debug, Clone, Copy)]
pub struct MessageDictionary {
    messages: &'static [&'static [Symbol]; MESSAGE_COUNT],
}

impl Default for MessageDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageDictionary {
    pub fn new() -> Self {
        Self { messages: &MESSAGES }
    }

    /// Symbols of one message
    pub fn entry(&self, index: MessageIndex) -> &'static [Symbol] {
        self.messages[index.get()]
    }

    /// All messages with their indices
    pub fn iter(&self) -> impl Iterator<Item = (MessageIndex, &'static [Symbol])> + '_ {
        self.messages
            .iter()
            .enumerate()
            .filter_map(|(i, m)| MessageIndex::new(i).map(|index| (index, *m)))
    }

    /// First message exactly equal to `buffer`. Empty never matches.
    pub fn find(&self, buffer: &[Symbol]) -> Option<MessageIndex> {
        if buffer.is_empty() {
            return None;
        }
        self.iter()
            .find(|(_, message)| *message == buffer)
            .map(|(index, _)| index)
    }

    /// Like `find`, but a match consumes the buffer
    pub fn match_and_consume(&self, buffer: &mut Vec<Symbol>) -> Option<MessageIndex> {
        let matched = self.find(buffer);
        if let Some(index) = matched {
            debug!(%index, len = buffer.len(), "buffer consumed");
            buffer.clear();
        }
        matched
    }

    /// Whether some message starts with `buffer`, i.e. it can still match
    pub fn has_prefix(&self, buffer: &[Symbol]) -> bool {
        self.messages.iter().any(|m| m.starts_with(buffer))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_MESSAGE_LEN, MIN_MESSAGE_LEN};

    #[test]
    fn test_message_lengths() {
        for message in MESSAGES.iter() {
            assert!((MIN_MESSAGE_LEN..=MAX_MESSAGE_LEN).contains(&message.len()));
        }
    }

    #[test]
    fn test_exact_match() {
        let dict = MessageDictionary::new();
        let buffer = vec![B, B, Y, G, G, R, B];
        assert_eq!(dict.find(&buffer), MessageIndex::new(0));
    }

    #[test]
    fn test_one_short_does_not_match() {
        let dict = MessageDictionary::new();
        assert_eq!(dict.find(&[B, B, Y, G, G, R]), None);
    }

    #[test]
    fn test_empty_never_matches() {
        assert_eq!(MessageDictionary::new().find(&[]), None);
    }

    #[test]
    fn test_every_entry_finds_itself() {
        let dict = MessageDictionary::new();
        for (index, message) in dict.iter() {
            assert_eq!(dict.find(message), Some(index));
        }
    }

    #[test]
    fn test_consume_clears_only_on_match() {
        let dict = MessageDictionary::new();
        let mut buffer = vec![O, R, R, B];
        assert_eq!(dict.match_and_consume(&mut buffer), None);
        assert_eq!(buffer.len(), 4);

        buffer.push(R);
        assert_eq!(dict.match_and_consume(&mut buffer), MessageIndex::new(6));
        assert!(buffer.is_empty());
        assert_eq!(dict.match_and_consume(&mut buffer), None);
    }

    #[test]
    fn test_longer_than_entry_does_not_match() {
        let dict = MessageDictionary::new();
        // message6 plus a trailing symbol
        assert_eq!(dict.find(&[O, R, R, B, R, R]), None);
    }

    #[test]
    fn test_prefix_viability() {
        let dict = MessageDictionary::new();
        assert!(dict.has_prefix(&[]));
        assert!(dict.has_prefix(&[B, Y, Y]));
        // nothing starts with -y -y
        assert!(!dict.has_prefix(&[G, G]));
    }
}
