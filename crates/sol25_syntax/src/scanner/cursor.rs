//! Line cursor with push-back.
//!
//! The structural scanner consumes source one line at a time, but a single line can hold several structural units
//! (`class Main { run [ x := 1. ] }`). Whatever follows a completed unit is pushed back as a synthetic line and is
//! the next thing the scanner sees.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based number of the physical line this text comes from.
    pub number: usize,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct LineCursor {
    pending: VecDeque<SourceLine>,
    /// Number of the last line handed out, for end-of-input diagnostics.
    last_number: usize,
}

impl LineCursor {
    pub fn new(source: &str) -> Self {
        let pending = source
            .lines()
            .enumerate()
            .map(|(i, text)| SourceLine {
                number: i + 1,
                text: text.to_string(),
            })
            .collect();
        Self {
            pending,
            last_number: 0,
        }
    }

    pub fn next_line(&mut self) -> Option<SourceLine> {
        let line = self.pending.pop_front()?;
        self.last_number = line.number;
        Some(line)
    }

    /// Queue `text` to be returned by the next [`next_line`](Self::next_line) call.
    pub fn push_back(&mut self, number: usize, text: impl Into<String>) {
        self.pending.push_front(SourceLine {
            number,
            text: text.into(),
        });
    }

    pub fn last_number(&self) -> usize {
        self.last_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_lines_in_order_with_numbers() {
        let mut cursor = LineCursor::new("a\nb\r\nc");
        let numbers: Vec<_> = std::iter::from_fn(|| cursor.next_line())
            .map(|l| (l.number, l.text))
            .collect();
        assert_eq!(
            numbers,
            vec![(1, "a".to_string()), (2, "b".to_string()), (3, "c".to_string())]
        );
    }

    #[test]
    fn pushed_back_text_comes_next() {
        let mut cursor = LineCursor::new("first\nsecond");
        let first = cursor.next_line().unwrap();
        cursor.push_back(first.number, "rest");
        let again = cursor.next_line().unwrap();
        assert_eq!(again.text, "rest");
        assert_eq!(again.number, 1);
        assert_eq!(cursor.next_line().map(|l| (l.number, l.text)), Some((2, "second".to_string())));
    }

    #[test]
    fn last_number_tracks_consumption() {
        let mut cursor = LineCursor::new("a\nb");
        assert_eq!(cursor.last_number(), 0);
        cursor.next_line();
        cursor.next_line();
        assert_eq!(cursor.last_number(), 2);
        assert!(cursor.next_line().is_none());
    }
}
