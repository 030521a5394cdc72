//! Notation text → tokens.
//!
//! Lenient by default: any piece that matches no rule becomes a freeform token
//! holding its uppercased text. [`parse_detailed`] reports those pieces and
//! [`parse_strict`] rejects them.
//!
//! Rules are tried first-match-wins, in this order: `7`/`9` followed by a
//! separate `jc`, `~` split, `/` split, trailing `,` split, exact `jc`,
//! `j[...]`, `j.`, bare `j`, `dl.`, `d.`, `w.`, `[...]`, embedded `X[...]`,
//! literal connectors, then compound decode. Reordering changes observable
//! results.
//!
//! Prefixes and brackets are peeled in a loop and digit runs are decoded
//! iteratively, so nesting depth does not grow with input length.

use combo_core::{
    ComboConfig, ComboError, ComboSequence, Connector, Decoded, Direction, InputToken, JumpCancel, Modifier,
    Movement, NotationConfig, Result,
};

/// Best-effort parse; unknown text is passed through verbatim.
pub fn parse(notation: &str) -> ComboSequence {
    parse_detailed(notation).into_value()
}

/// Parse and report which pieces fell back to freeform passthrough.
pub fn parse_detailed(notation: &str) -> Decoded<ComboSequence> {
    let mut decoder = Decoder::default();
    let words: Vec<&str> = notation.split_whitespace().collect();

    let mut i = 0;
    while i < words.len() {
        let word = words[i];
        let pairs_with_jc = matches!(word, "7" | "9")
            && words.get(i + 1).is_some_and(|w| w.eq_ignore_ascii_case("jc"));
        if pairs_with_jc {
            let jc = if word == "7" { JumpCancel::UpBack } else { JumpCancel::UpForward };
            decoder.emit(InputToken::JumpCancel(jc));
            i += 2;
            continue;
        }
        decoder.word(word);
        i += 1;
    }

    if !decoder.unmatched.is_empty() {
        tracing::debug!(unmatched = ?decoder.unmatched, "notation passed through verbatim");
    }
    Decoded::new(decoder.tokens.into(), decoder.unmatched)
}

/// Parse, failing with [`ComboError::Format`] if anything was unrecognized.
pub fn parse_strict(notation: &str) -> Result<ComboSequence> {
    match parse_detailed(notation) {
        Decoded::Exact(tokens) => Ok(tokens),
        Decoded::Fallback { unmatched, .. } => Err(ComboError::Format {
            notation: notation.to_string(),
            unmatched,
        }),
    }
}

/// Parse honoring the configured mode.
pub fn parse_with(notation: &str, config: &NotationConfig) -> Result<ComboSequence> {
    if config.strict {
        parse_strict(notation)
    } else {
        Ok(parse(notation))
    }
}

/// Convenience over [`parse_with`] taking the full config.
pub fn import(notation: &str, config: &ComboConfig) -> Result<ComboSequence> {
    parse_with(notation, &config.notation)
}

#[derive(Default)]
struct Decoder {
    tokens: Vec<InputToken>,
    unmatched: Vec<String>,
}

impl Decoder {
    fn emit(&mut self, token: InputToken) {
        self.tokens.push(token);
    }

    fn modifier(&mut self, m: Modifier) {
        self.emit(InputToken::Modifier(m));
    }

    /// Decode one whitespace-free word: `~` splits first, then `/`.
    fn word(&mut self, word: &str) {
        for (n, part) in word.split('~').enumerate() {
            if n > 0 {
                self.emit(InputToken::Connector(Connector::Chain));
            }
            for (m, alt) in part.split('/').enumerate() {
                if m > 0 {
                    self.emit(InputToken::Connector(Connector::Or));
                }
                self.unit(alt);
            }
        }
    }

    /// Decode a word with no `~` or `/`. Trailing commas split off first.
    fn unit(&mut self, word: &str) {
        let base = word.trim_end_matches(',');
        self.prefixed(base);
        for _ in base.len()..word.len() {
            self.emit(InputToken::Connector(Connector::Comma));
        }
    }

    /// Strip modifier prefixes and bracket wrappers in a loop, then decode
    /// what is left.
    fn prefixed(&mut self, word: &str) {
        let mut rest = word;
        loop {
            if rest.is_empty() {
                return;
            }

            if rest.eq_ignore_ascii_case("jc") {
                return self.emit(InputToken::JumpCancel(JumpCancel::Bare));
            }

            if let Some(inner) = rest.strip_prefix("j[").and_then(|w| w.strip_suffix(']')) {
                self.modifier(Modifier::Air);
                self.modifier(Modifier::Hold);
                rest = inner;
                continue;
            }

            if let Some(r) = strip_any(rest, &["j.", "J."]).or_else(|| strip_any(rest, &["j", "J"])) {
                self.modifier(Modifier::Air);
                rest = r;
                continue;
            }

            if let Some(r) = strip_any(rest, &["dl.", "DL.", "d.", "D."]) {
                self.modifier(Modifier::Delay);
                rest = r;
                continue;
            }

            if let Some(r) = strip_any(rest, &["w.", "W."]) {
                self.modifier(Modifier::Whiff);
                rest = r;
                continue;
            }

            if let Some(inner) = rest.strip_prefix('[').and_then(|w| w.strip_suffix(']')) {
                self.modifier(Modifier::Hold);
                rest = inner;
                continue;
            }

            if rest.ends_with(']') {
                if let Some(open) = rest.find('[') {
                    self.bracket_prefix(&rest[..open]);
                    self.modifier(Modifier::Hold);
                    rest = &rest[open + 1..rest.len() - 1];
                    continue;
                }
            }

            return match rest {
                "+" => self.emit(InputToken::Connector(Connector::Plus)),
                ">" => self.emit(InputToken::Connector(Connector::Then)),
                "OR" | "or" => self.emit(InputToken::Connector(Connector::Or)),
                _ => self.compound(rest),
            };
        }
    }

    /// Text before an embedded `[`. A digit run is a motion of plain
    /// directions, never jump cancels; a neutral right before the bracket is
    /// elided.
    fn bracket_prefix(&mut self, prefix: &str) {
        if prefix.is_empty() || !prefix.bytes().all(|b| matches!(b, b'1'..=b'9')) {
            return self.prefixed(prefix);
        }
        let last = prefix.len() - 1;
        for (n, c) in prefix.char_indices() {
            if let Some(d) = Direction::from_digit(c) {
                if !(n == last && d.is_neutral()) {
                    self.emit(InputToken::Direction(d));
                }
            }
        }
    }

    /// Decode a word with no prefix or bracket structure.
    fn compound(&mut self, word: &str) {
        let base = word.trim_end_matches(',');
        if base.len() != word.len() {
            self.compound(base);
            for _ in base.len()..word.len() {
                self.emit(InputToken::Connector(Connector::Comma));
            }
            return;
        }

        match word {
            "" => return,
            "66" => return self.emit(InputToken::Movement(Movement::Dash)),
            "44" => return self.emit(InputToken::Movement(Movement::BackDash)),
            "7" => return self.emit(InputToken::JumpCancel(JumpCancel::UpBack)),
            "9" => return self.emit(InputToken::JumpCancel(JumpCancel::UpForward)),
            _ => {}
        }

        let mut rest = word;
        loop {
            if let Some(jc) = jump_cancel(rest) {
                return self.emit(InputToken::JumpCancel(jc));
            }

            let mut chars = rest.chars();
            let (first, tail) = match (chars.next().and_then(Direction::from_digit), chars.as_str()) {
                (Some(d), tail) if !tail.is_empty() => (d, tail),
                _ => return self.lookup(rest),
            };

            // Neutral is elided only right before a non-direction.
            let next_is_direction = tail.starts_with(|c: char| matches!(c, '1'..='9'));
            if !first.is_neutral() || next_is_direction {
                self.emit(InputToken::Direction(first));
            }

            match tail {
                "66" => return self.emit(InputToken::Movement(Movement::Dash)),
                "44" => return self.emit(InputToken::Movement(Movement::BackDash)),
                _ => {}
            }
            if let Some(d) = single_direction(tail) {
                return self.emit(InputToken::Direction(d));
            }
            rest = tail;
        }
    }

    fn lookup(&mut self, text: &str) {
        match InputToken::from_glyph(text) {
            Some(token) => self.emit(token),
            None => {
                let token = InputToken::from_canonical(&text.to_uppercase());
                if let InputToken::Other(_) = token {
                    self.unmatched.push(text.to_string());
                }
                self.emit(token);
            }
        }
    }
}

/// `7jc` / `9jc` written as one word, in any case.
fn jump_cancel(word: &str) -> Option<JumpCancel> {
    let head = word.len().checked_sub(2).filter(|&n| n > 0)?;
    if !word.is_char_boundary(head) || !word[head..].eq_ignore_ascii_case("jc") {
        return None;
    }
    match &word[..head] {
        "7" => Some(JumpCancel::UpBack),
        "9" => Some(JumpCancel::UpForward),
        _ => None,
    }
}

fn single_direction(text: &str) -> Option<Direction> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Direction::from_digit(c),
        _ => None,
    }
}

fn strip_any<'a>(word: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes.iter().find_map(|p| word.strip_prefix(p))
}
