//! Tokens → notation text.
//!
//! Single left-to-right scan. Each step renders one *unit*: a modifier chain
//! (`j.6H`, `d.[H]`, `j[2S1]`), a direction fused with its button (`2M`,
//! `6[H]`), or a standalone glyph. Connectors render between units and `~`
//! fuses the previous unit with the next one.

use combo_core::{Connector, InputToken, Modifier};
use regex::Regex;
use std::sync::LazyLock;

static RE_MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Render a token sequence as notation. Never fails.
pub fn serialize(tokens: &[InputToken]) -> String {
    let mut segments: Vec<String> = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        match &tokens[i] {
            InputToken::Connector(Connector::Chain) => {
                let lhs = segments.pop().unwrap_or_default();
                match tokens.get(i + 1) {
                    Some(next) if !next.is_connector() => {
                        let (rhs, used) = render_unit(tokens, i + 1);
                        segments.push(format!("{lhs}~{}", rhs.unwrap_or_default()));
                        i += 1 + used;
                    }
                    _ => {
                        segments.push(format!("{lhs}~"));
                        i += 1;
                    }
                }
            }
            t if t.is_connector() => {
                segments.push(t.glyph().into_owned());
                i += 1;
            }
            _ => {
                let (unit, used) = render_unit(tokens, i);
                if let Some(unit) = unit {
                    segments.push(unit);
                }
                i += used;
            }
        }
    }

    let joined = segments.concat();
    RE_MULTI_SPACE.replace_all(&joined, " ").trim().to_string()
}

/// Render the unit starting at `i`. Returns the text (if anything survives)
/// and the number of tokens consumed, always at least one.
///
/// Modifier chains and held directions accumulate into one prefix/suffix
/// pair around the final operand. A chain with nothing to
/// apply to (end of input or a connector) is dropped; if it sits inside a held
/// direction, the direction is kept without its brackets.
fn render_unit(tokens: &[InputToken], i: usize) -> (Option<String>, usize) {
    let mut open = String::new();
    let mut close = String::new();
    let mut fallback: Option<String> = None;
    let mut j = i;

    let text = loop {
        let token = &tokens[j];

        if let Some(modifier) = token.modifier() {
            if modifier == Modifier::Air && tokens.get(j + 1) == Some(&HOLD) {
                open.push_str("j[");
                close.push(']');
                j += 2;
            } else {
                match modifier.prefix() {
                    Some(p) => {
                        open.push_str(p);
                        open.push('.');
                    }
                    None => {
                        open.push('[');
                        close.push(']');
                    }
                }
                j += 1;
            }
            if !operand_at(tokens, j) {
                return (fallback, j - i);
            }
            continue;
        }

        if let InputToken::Direction(_) | InputToken::JumpCancel(_) = token {
            // Consecutive directions form one motion (`236H`).
            let run = tokens[j..]
                .iter()
                .take_while(|t| matches!(t, InputToken::Direction(_)))
                .count()
                .max(1);
            let last = j + run - 1;
            let lead: String = tokens[j..last].iter().map(InputToken::glyph).collect();
            let direction = &tokens[last];

            match tokens.get(last + 1) {
                Some(next) if *next == HOLD && operand_at(tokens, last + 2) => {
                    fallback = Some(format!("{open}{lead}{}{close}", direction.glyph()));
                    open.push_str(&lead);
                    if !direction.is_neutral() {
                        open.push_str(&direction.glyph());
                    }
                    open.push('[');
                    close.push(']');
                    j = last + 2;
                    continue;
                }
                Some(next) if next.merges_after_direction() => {
                    j = last + 2;
                    break format!("{lead}{}", fuse(direction, next));
                }
                _ => {
                    j = last + 1;
                    break format!("{lead}{}", direction.glyph());
                }
            }
        }

        j += 1;
        break token.glyph().into_owned();
    };

    (Some(format!("{open}{text}{close}")), j - i)
}

const HOLD: InputToken = InputToken::Modifier(Modifier::Hold);

fn operand_at(tokens: &[InputToken], i: usize) -> bool {
    tokens.get(i).is_some_and(|t| !t.is_connector())
}

fn fuse(direction: &InputToken, button: &InputToken) -> String {
    if direction.is_neutral() {
        button.glyph().into_owned()
    } else {
        format!("{}{}", direction.glyph(), button.glyph())
    }
}
