//! A byte cursor over document text.

/// Position in a borrowed string with peek/advance operations.
///
/// Every returned slice borrows from the underlying text. Positions only
/// ever land on char boundaries because every search is for ASCII tokens.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Text from the current position to the end.
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Returns true once all input is consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// True at the start of the text or right after a line break.
    pub fn at_line_start(&self) -> bool {
        self.pos == 0 || self.text[..self.pos].ends_with('\n')
    }

    /// Checks whether the remaining input begins with `token`.
    pub fn starts_with(&self, token: &str) -> bool {
        self.rest().starts_with(token)
    }

    /// Moves forward by `n` bytes, stopping at the end of input.
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.text.len());
    }

    /// Consumes up to the next line break and returns the text before it.
    /// The line break itself is consumed but not returned.
    pub fn take_line(&mut self) -> &'a str {
        let rest = self.rest();
        match rest.find('\n') {
            Some(idx) => {
                self.pos += idx + 1;
                &rest[..idx]
            }
            None => {
                self.pos = self.text.len();
                rest
            }
        }
    }

    /// Consumes everything before the next `terminator`, then the terminator.
    /// Without a terminator the whole remainder is returned.
    pub fn take_until(&mut self, terminator: &str) -> &'a str {
        let rest = self.rest();
        match rest.find(terminator) {
            Some(idx) => {
                self.pos += idx + terminator.len();
                &rest[..idx]
            }
            None => {
                self.pos = self.text.len();
                rest
            }
        }
    }

    /// Consumes text up to, but not including, the first line break that is
    /// followed by a non-whitespace character. A line break followed by the
    /// end of input does not stop the scan.
    pub fn take_indented(&mut self) -> &'a str {
        let rest = self.rest();
        if self.at_line_start() && starts_with_non_whitespace(rest) {
            return "";
        }

        let mut search_from = 0;
        while let Some(idx) = rest[search_from..].find('\n') {
            let newline = search_from + idx;
            if starts_with_non_whitespace(&rest[newline + 1..]) {
                self.pos += newline;
                return &rest[..newline];
            }
            search_from = newline + 1;
        }

        self.pos = self.text.len();
        rest
    }

    /// Moves to the next line start whose text begins with `token`.
    ///
    /// Returns false and moves to the end of input when there is none.
    pub fn skip_to_line_starting_with(&mut self, token: &str) -> bool {
        if self.at_line_start() && self.starts_with(token) {
            return true;
        }

        let needle = format!("\n{}", token);
        match self.rest().find(&needle) {
            Some(idx) => {
                self.pos += idx + 1;
                true
            }
            None => {
                self.pos = self.text.len();
                false
            }
        }
    }
}

fn starts_with_non_whitespace(text: &str) -> bool {
    text.chars().next().is_some_and(|c| !c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_line() {
        let mut cursor = Cursor::new("first\nsecond");
        assert_eq!(cursor.take_line(), "first");
        assert_eq!(cursor.rest(), "second");
        assert_eq!(cursor.take_line(), "second");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_take_until_consumes_terminator() {
        let mut cursor = Cursor::new("code\n```\nafter");
        assert_eq!(cursor.take_until("\n```"), "code");
        assert_eq!(cursor.rest(), "\nafter");
    }

    #[test]
    fn test_take_until_missing_terminator() {
        let mut cursor = Cursor::new("no fence here");
        assert_eq!(cursor.take_until("\n```"), "no fence here");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_take_indented_leaves_line_break() {
        let mut cursor = Cursor::new("    a\n\n    b\nprose");
        assert_eq!(cursor.take_indented(), "    a\n\n    b");
        assert_eq!(cursor.rest(), "\nprose");
    }

    #[test]
    fn test_take_indented_trailing_line_break() {
        let mut cursor = Cursor::new("    a\n");
        assert_eq!(cursor.take_indented(), "    a\n");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_take_indented_empty_at_prose() {
        let mut cursor = Cursor::new("prose");
        assert_eq!(cursor.take_indented(), "");
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_skip_to_line_start() {
        let mut cursor = Cursor::new("text ###### no\n###### yes");
        assert!(cursor.skip_to_line_starting_with("###### "));
        assert_eq!(cursor.rest(), "###### yes");
    }

    #[test]
    fn test_skip_matches_at_document_start() {
        let mut cursor = Cursor::new("###### first");
        assert!(cursor.skip_to_line_starting_with("###### "));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_skip_not_found() {
        let mut cursor = Cursor::new("just prose\nmore prose");
        assert!(!cursor.skip_to_line_starting_with("###### "));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_advance_clamps() {
        let mut cursor = Cursor::new("ab");
        cursor.advance(10);
        assert!(cursor.is_at_end());
        assert!(!cursor.starts_with("a"));
    }
}
