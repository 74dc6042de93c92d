//! Prefix trie over lowercase ASCII letters
//!
//! A 26-ary prefix tree where each node holds a fixed array of child slots,
//! one per letter `a..=z`, giving O(1) indexed child access at the cost of
//! fixed memory per node regardless of branching factor.
//!
//! Deletion is *soft*: removing a word clears its end-of-word flag but never
//! prunes nodes, so the tree only grows structurally. Memory for deleted
//! words is not reclaimed.
//!
//! Words must consist solely of lowercase ASCII letters. Mutating with any
//! other character returns [`TrieError::InvalidCharacter`]; queries treat
//! such words as absent, since they can never be stored.
//!
//! # Time Complexity
//!
//! All operations are O(k) in the word/prefix length k, except
//! [`Trie::words_with_prefix`], which is O(k + s) for a matched subtree of
//! size s.
//!
//! # Example
//!
//! ```rust
//! use indexed_collections::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("car").unwrap();
//! trie.insert("card").unwrap();
//!
//! assert!(trie.contains("car"));
//! assert!(!trie.contains("ca")); // prefix only, not a stored word
//! assert!(trie.starts_with("ca"));
//!
//! assert!(trie.remove("car"));
//! assert!(!trie.contains("car"));
//! assert!(trie.contains("card"));
//! ```

use std::fmt;

use smallvec::SmallVec;

/// Number of child slots per node, one per letter `a..=z`
const ALPHABET_SIZE: usize = 26;

/// Error type for trie operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieError {
    /// The word contained a character outside `a..=z`
    InvalidCharacter(char),
}

impl fmt::Display for TrieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrieError::InvalidCharacter(c) => {
                write!(f, "character {c:?} is not a lowercase ASCII letter")
            }
        }
    }
}

impl std::error::Error for TrieError {}

/// Maps a letter to its child-slot index, `None` outside `a..=z`
fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some(c as usize - 'a' as usize)
    } else {
        None
    }
}

/// Maps a child-slot index back to its letter
///
/// Callers only pass indices produced by iterating the child array, so the
/// cast cannot leave ASCII range.
fn index_letter(i: usize) -> char {
    (b'a' + i as u8) as char
}

#[derive(Debug)]
struct Node {
    children: [Option<Box<Node>>; ALPHABET_SIZE],
    is_word: bool,
}

impl Node {
    fn new() -> Self {
        Node {
            children: std::array::from_fn(|_| None),
            is_word: false,
        }
    }

    /// Depth-first collection of every word below this node
    ///
    /// `current` holds the letters spelled so far from the collection root;
    /// visiting children in slot order makes the output lexicographic.
    fn collect_words(&self, current: &mut String, words: &mut Vec<String>) {
        if self.is_word {
            words.push(current.clone());
        }
        for (i, child) in self.children.iter().enumerate() {
            if let Some(child) = child {
                current.push(index_letter(i));
                child.collect_words(current, words);
                current.pop();
            }
        }
    }
}

/// A prefix tree storing words of lowercase ASCII letters
///
/// The trie owns its root node, and each node exclusively owns its children.
/// Nodes are created lazily along insertion paths and are never freed;
/// [`Trie::remove`] only clears the end-of-word flag.
#[derive(Debug)]
pub struct Trie {
    root: Node,
    len: usize,
}

impl Trie {
    /// Creates a new empty trie
    pub fn new() -> Self {
        Trie {
            root: Node::new(),
            len: 0,
        }
    }

    /// Returns the number of live (inserted and not removed) words
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no words are live
    ///
    /// Note that a trie emptied via [`Trie::remove`] still holds its nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a word, returning `Ok(true)` if it was not already present
    ///
    /// The whole word is validated before any node is created, so a failed
    /// insert leaves the trie unchanged.
    pub fn insert(&mut self, word: &str) -> Result<bool, TrieError> {
        let path = Self::encode(word)?;
        let mut node = &mut self.root;
        for &idx in path.iter() {
            let child = node.children[idx as usize].get_or_insert_with(|| Box::new(Node::new()));
            node = child.as_mut();
        }
        if node.is_word {
            return Ok(false);
        }
        node.is_word = true;
        self.len += 1;
        Ok(true)
    }

    /// Returns true if `word` was inserted and not since removed
    ///
    /// A path that exists only as a prefix of longer words is not a hit.
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).map_or(false, |node| node.is_word)
    }

    /// Returns true if any inserted word starts with `prefix`
    ///
    /// End-of-word status is irrelevant here, so words that were soft-removed
    /// still keep their prefixes reachable. The empty prefix always matches.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Soft-removes a word, returning `true` if it was live
    ///
    /// Returns `false` if the path does not exist or exists only as a prefix.
    /// Nodes are never pruned, even when a removal leaves a branch childless
    /// and non-terminal.
    pub fn remove(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for c in word.chars() {
            let idx = match letter_index(c) {
                Some(idx) => idx,
                None => return false,
            };
            node = match node.children[idx].as_deref_mut() {
                Some(child) => child,
                None => return false,
            };
        }
        if !node.is_word {
            return false;
        }
        node.is_word = false;
        self.len -= 1;
        true
    }

    /// Collects every live word starting with `prefix`, in lexicographic order
    ///
    /// Returns an empty vector if the prefix path does not exist. The empty
    /// prefix enumerates the whole trie.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut words = Vec::new();
        let node = match self.walk(prefix) {
            Some(node) => node,
            None => return words,
        };
        let mut current = String::from(prefix);
        node.collect_words(&mut current, &mut words);
        words
    }

    /// Follows the path spelling `word`, if it exists
    fn walk(&self, word: &str) -> Option<&Node> {
        let mut node = &self.root;
        for c in word.chars() {
            let idx = letter_index(c)?;
            node = node.children[idx].as_deref()?;
        }
        Some(node)
    }

    /// Validates a word and maps it to child-slot indices
    fn encode(word: &str) -> Result<SmallVec<[u8; 24]>, TrieError> {
        word.chars()
            .map(|c| {
                letter_index(c)
                    .map(|idx| idx as u8)
                    .ok_or(TrieError::InvalidCharacter(c))
            })
            .collect()
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_with(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word).unwrap();
        }
        trie
    }

    #[test]
    fn test_basic_operations() {
        let trie = trie_with(&["cat", "car", "card", "apple", "app", "application"]);

        assert_eq!(trie.len(), 6);
        assert!(trie.contains("cat"));
        assert!(trie.contains("car"));
        assert!(trie.contains("card"));
        assert!(!trie.contains("ca")); // prefix only
        assert!(!trie.contains("cow"));

        assert!(trie.starts_with("ca"));
        assert!(trie.starts_with("app"));
        assert!(!trie.starts_with("co"));
    }

    #[test]
    fn test_empty_trie() {
        let trie = Trie::new();

        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert!(!trie.contains("a"));
        assert!(!trie.starts_with("a"));
        assert!(trie.starts_with(""));
        assert!(trie.words_with_prefix("").is_empty());
    }

    #[test]
    fn test_reinsert_returns_false() {
        let mut trie = Trie::new();

        assert_eq!(trie.insert("dog"), Ok(true));
        assert_eq!(trie.insert("dog"), Ok(false));
        assert_eq!(trie.len(), 1);

        assert!(trie.remove("dog"));
        assert_eq!(trie.insert("dog"), Ok(true));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_invalid_character_rejected() {
        let mut trie = Trie::new();

        assert_eq!(
            trie.insert("ApPle"),
            Err(TrieError::InvalidCharacter('A'))
        );
        assert_eq!(
            trie.insert("naïve"),
            Err(TrieError::InvalidCharacter('ï'))
        );
        // Failed inserts build no path at all
        assert!(trie.is_empty());
        assert!(!trie.starts_with("a"));
        assert!(!trie.starts_with("na"));

        // Queries treat unstorable words as absent
        assert!(!trie.contains("ApPle"));
        assert!(!trie.starts_with("A"));
        assert!(!trie.remove("ApPle"));
        assert!(trie.words_with_prefix("A").is_empty());
    }

    #[test]
    fn test_remove_is_soft() {
        let mut trie = trie_with(&["app", "apple"]);

        assert!(trie.remove("app"));
        assert!(!trie.contains("app"));
        assert!(trie.contains("apple"));
        // The deleted word's path survives as a prefix
        assert!(trie.starts_with("app"));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_remove_missing_or_prefix_only() {
        let mut trie = trie_with(&["apple"]);

        assert!(!trie.remove("nonexistent"));
        assert!(!trie.remove("app")); // exists as a path, never inserted
        assert!(trie.contains("apple"));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_soft_removed_path_remains_reachable() {
        let mut trie = trie_with(&["solo"]);

        assert!(trie.remove("solo"));
        assert!(trie.is_empty());
        // Soft delete never prunes, so the dead branch still answers prefixes
        assert!(trie.starts_with("sol"));
        assert!(trie.starts_with("solo"));
        assert!(!trie.contains("solo"));
        assert!(trie.words_with_prefix("s").is_empty());
    }

    #[test]
    fn test_words_with_prefix_sorted() {
        let trie = trie_with(&["cat", "car", "card", "apple", "app", "application"]);

        assert_eq!(
            trie.words_with_prefix("app"),
            vec!["app", "apple", "application"]
        );
        assert_eq!(trie.words_with_prefix("ca"), vec!["car", "card", "cat"]);
        assert_eq!(trie.words_with_prefix("card"), vec!["card"]);
        assert!(trie.words_with_prefix("z").is_empty());
    }

    #[test]
    fn test_words_with_prefix_skips_removed() {
        let mut trie = trie_with(&["app", "apple", "application"]);

        assert!(trie.remove("apple"));
        assert_eq!(trie.words_with_prefix("app"), vec!["app", "application"]);
    }

    #[test]
    fn test_empty_prefix_enumerates_everything() {
        let trie = trie_with(&["b", "a", "ab"]);

        assert_eq!(trie.words_with_prefix(""), vec!["a", "ab", "b"]);
    }

    #[test]
    fn test_empty_word_round_trip() {
        let mut trie = Trie::new();

        // The empty word is a valid zero-length path ending at the root
        assert_eq!(trie.insert(""), Ok(true));
        assert!(trie.contains(""));
        assert_eq!(trie.words_with_prefix(""), vec![""]);
        assert!(trie.remove(""));
        assert!(!trie.contains(""));
    }

    #[test]
    fn test_error_display() {
        let err = TrieError::InvalidCharacter('7');
        assert_eq!(err.to_string(), "character '7' is not a lowercase ASCII letter");
    }
}
