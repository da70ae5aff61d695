/// A character cursor over an expression string.
///
/// `TextCursor` provides the scanning service the tokenizer is built on:
/// peeking at the current character, advancing, skipping whitespace, and
/// extracting substrings by character range. Positions are 0-based character
/// indices, which is also the unit used for error columns.
#[derive(Debug)]
pub struct TextCursor {
    chars:    Vec<char>,
    position: usize,
}

impl TextCursor {
    /// Creates a cursor positioned at the first character of `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars:    text.chars().collect(),
               position: 0, }
    }

    /// Returns the character at the current position, or `None` at the end of
    /// input.
    ///
    /// # Example
    /// ```
    /// use numera::util::cursor::TextCursor;
    ///
    /// let cursor = TextCursor::new("ab");
    /// assert_eq!(cursor.peek(), Some('a'));
    /// ```
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Returns the current 0-based position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` once the cursor has moved past the last character.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Moves the cursor one character ahead.
    ///
    /// Advancing past the end of input is permitted and leaves the cursor at
    /// the end position.
    pub fn advance(&mut self) {
        if self.position < self.chars.len() {
            self.position += 1;
        }
    }

    /// Moves the cursor past any whitespace at the current position.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Extracts the substring spanning the character range `start..end`.
    ///
    /// # Example
    /// ```
    /// use numera::util::cursor::TextCursor;
    ///
    /// let cursor = TextCursor::new("sin(x)");
    /// assert_eq!(cursor.extract(0, 3), "sin");
    /// ```
    #[must_use]
    pub fn extract(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }
}
