//! Statement splitting and transactionality classification.
//!
//! A migration body is split into individual statements on `;` boundaries.
//! The splitter is a character-level scanner, not a SQL parser: it only
//! tracks enough state to know when a `;` is real — string literals
//! (`'...'` with `''` escapes), quoted identifiers (`"..."`), line comments
//! (`-- ...`) and block comments (`/* ... */`) never terminate a statement.
//!
//! Each statement is then classified by an explicit annotation: a comment
//! carrying the [`NON_TRANSACTIONAL_MARKER`] opts the statement out of the
//! migration transaction. Comments stay attached to the statement that
//! follows them, so the conventional form is a marker line directly above
//! the statement:
//!
//! ```sql
//! -- non-transactional
//! PRAGMA foreign_keys = ON;
//! ```
//!
//! The marker only counts inside a comment. SQL that merely mentions the
//! word in a string literal stays transactional.

/// Marker that opts a statement out of the migration transaction.
///
/// Intended for PRAGMAs and DDL that SQLite will not execute inside a
/// transaction. Marked statements run eagerly and unconditionally; their
/// effects survive a failure of the rest of the migration, so they should be
/// idempotent or safe to apply early.
pub const NON_TRANSACTIONAL_MARKER: &str = "non-transactional";

/// A migration body partitioned into execution groups.
///
/// Source order is preserved within each group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statements {
    /// Statements executed eagerly, outside any transaction.
    pub non_transactional: Vec<String>,
    /// Statements executed inside the migration transaction.
    pub transactional: Vec<String>,
}

impl Statements {
    /// Split a raw migration body and classify each statement.
    ///
    /// Fragments are trimmed; fragments with no content outside comments
    /// (a trailing comment block, stray whitespace) are discarded.
    pub fn split(sql: &str) -> Self {
        let mut groups = Self::default();
        let mut chars = sql.char_indices().peekable();
        let mut start = 0;
        let mut has_content = false;
        let mut marked = false;

        while let Some((i, c)) = chars.next() {
            match c {
                ';' => {
                    groups.push(&sql[start..i], has_content, marked);
                    start = i + 1;
                    has_content = false;
                    marked = false;
                }
                '\'' | '"' => {
                    has_content = true;
                    // Doubled quotes are escapes, not terminators.
                    while let Some((_, d)) = chars.next() {
                        if d == c {
                            if chars.peek().is_some_and(|&(_, e)| e == c) {
                                chars.next();
                            } else {
                                break;
                            }
                        }
                    }
                }
                '-' if chars.peek().is_some_and(|&(_, d)| d == '-') => {
                    chars.next();
                    let text_start = i + 2;
                    let mut text_end = sql.len();
                    for (j, d) in chars.by_ref() {
                        if d == '\n' {
                            text_end = j;
                            break;
                        }
                    }
                    if sql[text_start..text_end].contains(NON_TRANSACTIONAL_MARKER) {
                        marked = true;
                    }
                }
                '/' if chars.peek().is_some_and(|&(_, d)| d == '*') => {
                    chars.next();
                    let text_start = i + 2;
                    let mut text_end = sql.len();
                    while let Some((j, d)) = chars.next() {
                        if d == '*' && chars.peek().is_some_and(|&(_, e)| e == '/') {
                            text_end = j;
                            chars.next();
                            break;
                        }
                    }
                    if sql[text_start..text_end].contains(NON_TRANSACTIONAL_MARKER) {
                        marked = true;
                    }
                }
                c if !c.is_whitespace() => has_content = true,
                _ => {}
            }
        }

        groups.push(&sql[start..], has_content, marked);
        groups
    }

    /// Total number of statements across both groups.
    pub fn len(&self) -> usize {
        self.non_transactional.len() + self.transactional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, fragment: &str, has_content: bool, marked: bool) {
        let statement = fragment.trim();
        if statement.is_empty() || !has_content {
            return;
        }
        if marked {
            self.non_transactional.push(statement.to_string());
        } else {
            self.transactional.push(statement.to_string());
        }
    }
}
