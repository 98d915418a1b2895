//! Longest-match trie over the operator/punctuation alphabet.
//!
//! Mirrors the fixed-alphabet trie the reference lexer builds once at
//! startup and walks for every symbol-looking byte: each byte of input
//! advances one edge, and the deepest node reached that carries a token
//! kind wins. `"+=",` for instance, out-matches `"+"` because the walk
//! keeps going past the first byte as long as an edge exists.

use crate::token::TokenKind;

/// The alphabet of bytes that can start or continue an operator/punctuation
/// token. `"` is deliberately absent: a quote always starts a string and is
/// dispatched before symbol scanning ever runs.
pub const SYMBOL_ALPHABET: &[u8] = b"+-*/|=&><%!^()[],~";

fn alphabet_index(byte: u8) -> Option<usize> {
    SYMBOL_ALPHABET.iter().position(|&b| b == byte)
}

#[derive(Debug, Default)]
struct TrieNode {
    children: [Option<u32>; 18],
    terminal: Option<TokenKind>,
}

/// An arena-backed trie keyed on [`SYMBOL_ALPHABET`].
#[derive(Debug)]
pub struct OperatorTrie {
    nodes: Vec<TrieNode>,
}

impl OperatorTrie {
    /// Builds the trie with every operator and punctuation token the
    /// language defines, including the `=`-suffixed compound-assign forms.
    pub fn new() -> Self {
        let mut trie = Self {
            nodes: vec![TrieNode::default()],
        };
        use TokenKind::*;
        let entries: &[(&[u8], TokenKind)] = &[
            (b"+", Add),
            (b"-", Sub),
            (b"*", Mul),
            (b"/", Div),
            (b"//", IntDiv),
            (b"%", Mod),
            (b"^", Pow),
            (b"~", BitNot),
            (b"&", BitAnd),
            (b"|", BitOr),
            (b"+=", AddEq),
            (b"-=", SubEq),
            (b"*=", MulEq),
            (b"/=", DivEq),
            (b"//=", IntDivEq),
            (b"%=", ModEq),
            (b"^=", PowEq),
            (b"&=", BitAndEq),
            (b"|=", BitOrEq),
            (b"==", Eq),
            (b"!=", NotEq),
            (b"<", Lt),
            (b"<=", Le),
            (b">", Gt),
            (b">=", Ge),
            (b"&&", And),
            (b"||", Or),
            (b"!", Not),
            (b"<<", Shl),
            (b">>", Shr),
            (b"++", Inc),
            (b"--", Dec),
            (b"=", Assign),
            (b"(", LParen),
            (b")", RParen),
            (b"[", LBracket),
            (b"]", RBracket),
            (b",", Comma),
        ];
        for (text, kind) in entries {
            trie.insert(text, *kind);
        }
        trie
    }

    fn insert(&mut self, text: &[u8], kind: TokenKind) {
        let mut node = 0usize;
        for &byte in text {
            let idx = alphabet_index(byte).expect("operator byte outside SYMBOL_ALPHABET");
            node = match self.nodes[node].children[idx] {
                Some(next) => next as usize,
                None => {
                    self.nodes.push(TrieNode::default());
                    let next = self.nodes.len() as u32 - 1;
                    self.nodes[node].children[idx] = Some(next);
                    next as usize
                }
            };
        }
        self.nodes[node].terminal = Some(kind);
    }

    /// Walks `bytes` as far as the trie allows, returning the longest
    /// matched `(kind, byte_length)` pair seen along the way, or `None` if
    /// not even the first byte matches anything.
    pub fn longest_match(&self, bytes: &[u8]) -> Option<(TokenKind, usize)> {
        let mut node = 0usize;
        let mut best = None;
        for (i, &byte) in bytes.iter().enumerate() {
            let Some(idx) = alphabet_index(byte) else {
                break;
            };
            let Some(next) = self.nodes[node].children[idx] else {
                break;
            };
            node = next as usize;
            if let Some(kind) = self.nodes[node].terminal {
                best = Some((kind, i + 1));
            }
        }
        best
    }
}

impl Default for OperatorTrie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_match_prefers_longer_operator() {
        let trie = OperatorTrie::new();
        assert_eq!(trie.longest_match(b"+=x"), Some((TokenKind::AddEq, 2)));
        assert_eq!(trie.longest_match(b"+x"), Some((TokenKind::Add, 1)));
    }

    #[test]
    fn int_div_out_matches_div() {
        let trie = OperatorTrie::new();
        assert_eq!(trie.longest_match(b"//="), Some((TokenKind::IntDivEq, 3)));
        assert_eq!(trie.longest_match(b"//"), Some((TokenKind::IntDiv, 2)));
        assert_eq!(trie.longest_match(b"/"), Some((TokenKind::Div, 1)));
    }

    #[test]
    fn single_char_punctuation() {
        let trie = OperatorTrie::new();
        assert_eq!(trie.longest_match(b"("), Some((TokenKind::LParen, 1)));
        assert_eq!(trie.longest_match(b","), Some((TokenKind::Comma, 1)));
    }

    #[test]
    fn no_match_returns_none() {
        let trie = OperatorTrie::new();
        assert_eq!(trie.longest_match(b"x"), None);
    }
}
