//! Lightweight `**emphasis**` parsing for service-generated text.
//!
//! Only paired double-asterisk markers are recognised. An unpaired marker is
//! kept as literal text. Lines are split on `\n` and a trailing `\r` dropped.

#[cfg(test)]
#[path = "emphasis_test.rs"]
mod emphasis_test;

const MARKER: &str = "**";

/// A run of text that is either plain or strong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub strong: bool,
}

impl Span {
    #[must_use]
    pub fn plain(text: &str) -> Self {
        Self { text: text.to_owned(), strong: false }
    }

    #[must_use]
    pub fn strong(text: &str) -> Self {
        Self { text: text.to_owned(), strong: true }
    }
}

/// Split `text` into lines of spans.
#[must_use]
pub fn parse(text: &str) -> Vec<Vec<Span>> {
    text.split('\n')
        .map(|line| parse_line(line.strip_suffix('\r').unwrap_or(line)))
        .collect()
}

/// Split one line on paired markers. Empty spans are dropped and adjacent
/// plain runs are merged.
#[must_use]
pub fn parse_line(line: &str) -> Vec<Span> {
    let parts: Vec<&str> = line.split(MARKER).collect();
    let last = parts.len() - 1;
    let mut spans: Vec<Span> = Vec::new();

    for (idx, part) in parts.iter().enumerate() {
        // Odd parts sit between an opening and a closing marker, unless the
        // line ran out of markers and this is the dangling tail.
        let inside = idx % 2 == 1;
        let (text, strong) = if inside && idx < last {
            ((*part).to_owned(), true)
        } else if inside {
            (format!("{MARKER}{part}"), false)
        } else {
            ((*part).to_owned(), false)
        };
        push_span(&mut spans, text, strong);
    }
    spans
}

fn push_span(spans: &mut Vec<Span>, text: String, strong: bool) {
    if text.is_empty() {
        return;
    }
    if !strong {
        if let Some(prev) = spans.last_mut().filter(|s| !s.strong) {
            prev.text.push_str(&text);
            return;
        }
    }
    spans.push(Span { text, strong });
}
