/*!
 * Word/whitespace tokenization.
 *
 * Splits text into maximal runs of whitespace and non-whitespace. No case or
 * punctuation normalization happens here: concatenating the tokens always
 * reproduces the input exactly.
 */

/// Kind of a token run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Maximal run of non-whitespace characters (punctuation included)
    Word,
    /// Maximal run of whitespace characters
    Whitespace,
}

/// A slice of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Borrowed token text
    pub text: &'a str,
    /// Whether this run is a word or whitespace
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Tokenize text into alternating word and whitespace runs.
///
/// The empty string yields no tokens.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut run_start = 0;
    let mut run_kind: Option<TokenKind> = None;

    for (idx, ch) in text.char_indices() {
        let kind = if ch.is_whitespace() {
            TokenKind::Whitespace
        } else {
            TokenKind::Word
        };

        match run_kind {
            Some(current) if current == kind => {}
            Some(current) => {
                tokens.push(Token {
                    text: &text[run_start..idx],
                    kind: current,
                });
                run_start = idx;
                run_kind = Some(kind);
            }
            None => run_kind = Some(kind),
        }
    }

    if let Some(kind) = run_kind {
        tokens.push(Token {
            text: &text[run_start..],
            kind,
        });
    }

    tokens
}
