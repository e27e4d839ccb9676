//! Splits raw text into checkable words and the bytes around them.
//!
//! Text is handled as bytes, so input in any encoding passes through. A
//! separator is an ASCII whitespace or ASCII punctuation byte. Every maximal run
//! of other bytes is a word candidate: it becomes [`Token::Word`] when it is
//! made of ASCII letters only, [`Token::Skipped`] when it holds digits or other
//! bytes, and [`Token::Overlong`] when it exceeds the length limit.
//! Concatenating the bytes of all tokens gives back the input exactly.

/// A slice of the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A word to spell-check.
    Word(&'a str),
    /// A run containing digits or other non-letters. Counted, never corrected.
    Skipped(&'a [u8]),
    /// A run longer than the word limit. Neither counted nor corrected.
    Overlong(&'a [u8]),
    /// Whitespace or punctuation.
    Separator(&'a [u8]),
}

impl<'a> Token<'a> {
    /// The input bytes this token covers.
    pub fn as_bytes(&self) -> &'a [u8] {
        match self {
            Token::Word(s) => s.as_bytes(),
            Token::Skipped(b) | Token::Overlong(b) | Token::Separator(b) => b,
        }
    }

    /// Whether the token counts as a word of the text.
    pub fn is_word_run(&self) -> bool {
        matches!(self, Token::Word(_) | Token::Skipped(_))
    }
}

fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b.is_ascii_punctuation()
}

/// Iterator over the tokens of a text, with their byte offsets.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    text: &'a [u8],
    position: usize,
    max_word_length: usize,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer that accepts words up to `max_word_length` bytes.
    pub fn new(text: &'a [u8], max_word_length: usize) -> Self {
        Tokenizer {
            text,
            position: 0,
            max_word_length,
        }
    }

    fn classify(&self, run: &'a [u8]) -> Token<'a> {
        if run.len() > self.max_word_length {
            return Token::Overlong(run);
        }
        if !run.iter().all(u8::is_ascii_alphabetic) {
            return Token::Skipped(run);
        }
        // ASCII letters are always valid UTF-8
        match std::str::from_utf8(run) {
            Ok(word) => Token::Word(word),
            Err(_) => Token::Skipped(run),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    /// Byte offset of the token and the token itself.
    type Item = (usize, Token<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.position;
        let rest = &self.text[start..];
        let &first = rest.first()?;

        if is_separator(first) {
            self.position += 1;
            return Some((start, Token::Separator(&rest[..1])));
        }

        let end = rest
            .iter()
            .position(|&b| is_separator(b))
            .unwrap_or(rest.len());
        self.position += end;

        Some((start, self.classify(&rest[..end])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &[u8]) -> Vec<Token<'_>> {
        Tokenizer::new(text, 45).map(|(_, token)| token).collect()
    }

    #[test]
    fn test_words_and_separators() {
        assert_eq!(
            tokens(b"Hello, world!"),
            vec![
                Token::Word("Hello"),
                Token::Separator(b","),
                Token::Separator(b" "),
                Token::Word("world"),
                Token::Separator(b"!"),
            ]
        );
    }

    #[test]
    fn test_apostrophe_splits_words() {
        assert_eq!(
            tokens(b"don't"),
            vec![Token::Word("don"), Token::Separator(b"'"), Token::Word("t")]
        );
    }

    #[test]
    fn test_skipped_runs() {
        assert_eq!(
            tokens("abc123 café".as_bytes()),
            vec![
                Token::Skipped(b"abc123"),
                Token::Separator(b" "),
                Token::Skipped("café".as_bytes()),
            ]
        );
    }

    #[test]
    fn test_latin1_bytes_are_skipped() {
        assert_eq!(
            tokens(b"caf\xe9 ok"),
            vec![
                Token::Skipped(b"caf\xe9"),
                Token::Separator(b" "),
                Token::Word("ok"),
            ]
        );
    }

    #[test]
    fn test_long_runs_are_overlong() {
        let result: Vec<_> = Tokenizer::new(b"abcdef ab1 abc", 5)
            .map(|(_, t)| t)
            .collect();
        assert_eq!(
            result,
            vec![
                Token::Overlong(b"abcdef"),
                Token::Separator(b" "),
                Token::Skipped(b"ab1"),
                Token::Separator(b" "),
                Token::Word("abc"),
            ]
        );
        assert!(!result[0].is_word_run());
        assert!(result[2].is_word_run());
        assert!(result[4].is_word_run());
    }

    #[test]
    fn test_trailing_word_and_offsets() {
        let result: Vec<_> = Tokenizer::new(b"a\nbc", 45).collect();
        assert_eq!(
            result,
            vec![
                (0, Token::Word("a")),
                (1, Token::Separator(b"\n")),
                (2, Token::Word("bc")),
            ]
        );
    }

    #[test]
    fn test_reassembles_input() {
        let mut text = "  The quick, brown fox (42 jumps) — über\tlazy dogs.\n"
            .as_bytes()
            .to_vec();
        text.push(0xff);
        let rebuilt: Vec<u8> = tokens(&text)
            .iter()
            .flat_map(|t| t.as_bytes().iter().copied())
            .collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokens(b"").is_empty());
    }
}
