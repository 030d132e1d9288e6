//! Annotated rendering of edit scripts
//!
//! Every output line starts with a marker saying whether it was retained,
//! deleted or inserted:
//!
//! ```text
//! 📎 fn main() {
//! ❌     old();
//! ✅     new();
//! 📎 }
//! ```
//!
//! Delete and insert spans always end their last line so the next span
//! starts on a fresh line. Scripts that are not line aligned can still leave
//! a marker glued to the end of a line; a repair pass moves such markers to
//! the start of their line.

use crate::op::Operation;
use crate::patch::SourceCursor;
use crate::script::EditScript;

// =============================================================================
// RenderConfig
// =============================================================================

/// Marker for retained lines.
pub const RETAIN_MARKER: &str = "📎";
/// Marker for deleted lines.
pub const DELETE_MARKER: &str = "❌";
/// Marker for inserted lines.
pub const INSERT_MARKER: &str = "✅";

/// Configuration for annotated rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub retain: String,
    pub delete: String,
    pub insert: String,
    /// Move markers stuck mid-line to the start of the line.
    ///
    /// Only safe when the markers cannot occur in ordinary text.
    pub repair_misplaced: bool,
}

impl RenderConfig {
    /// Emoji markers with the repair pass on (the default).
    pub fn emoji() -> Self {
        Self {
            retain: RETAIN_MARKER.to_string(),
            delete: DELETE_MARKER.to_string(),
            insert: INSERT_MARKER.to_string(),
            repair_misplaced: true,
        }
    }

    /// Unified-diff style `" "`, `"-"`, `"+"` markers, no repair pass.
    pub fn ascii() -> Self {
        Self {
            retain: " ".to_string(),
            delete: "-".to_string(),
            insert: "+".to_string(),
            repair_misplaced: false,
        }
    }

    fn markers(&self) -> [&str; 3] {
        [&self.retain, &self.delete, &self.insert]
    }

    /// The marker prefix `line` starts with, if any.
    fn leading_marker(&self, line: &str) -> Option<&str> {
        self.markers()
            .into_iter()
            .find(|marker| line.strip_prefix(marker).is_some_and(|rest| rest.starts_with(' ')))
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::emoji()
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Render `script` against `source` with the default emoji markers.
pub fn render_ascii(script: &EditScript, source: &str) -> String {
    render_with(script, source, &RenderConfig::default())
}

/// Render `script` against `source` with custom markers.
pub fn render_with(script: &EditScript, source: &str, config: &RenderConfig) -> String {
    render_ops(script.ops(), source, config)
}

pub(crate) fn render_ops(ops: &[Operation], source: &str, config: &RenderConfig) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    let mut cursor = SourceCursor::new(source);

    for op in ops {
        match op {
            Operation::Retain(n) => {
                prefix_lines(&mut out, cursor.take(*n), &config.retain);
            }
            Operation::Delete(n) => {
                let text = cursor.take(*n);
                if !text.is_empty() {
                    prefix_lines(&mut out, text, &config.delete);
                    end_line(&mut out);
                }
            }
            Operation::Insert(text) => {
                if !text.is_empty() {
                    prefix_lines(&mut out, text, &config.insert);
                    end_line(&mut out);
                }
            }
        }
    }

    if out.ends_with('\n') {
        out.pop();
    }

    if config.repair_misplaced {
        repair_markers(&out, config)
    } else {
        out
    }
}

/// Append `text` with `marker` in front of every line.
fn prefix_lines(out: &mut String, text: &str, marker: &str) {
    for line in text.split_inclusive('\n') {
        out.push_str(marker);
        out.push(' ');
        out.push_str(line);
    }
}

fn end_line(out: &mut String) {
    if !out.ends_with('\n') {
        out.push('\n');
    }
}

// =============================================================================
// Marker repair
// =============================================================================

/// Move markers glued to the end of a word to the start of their line.
///
/// Lines that already start with a marker are left alone. In other lines, a
/// marker right after an ASCII letter, digit or closing bracket is removed
/// and the first such marker becomes the line prefix.
fn repair_markers(text: &str, config: &RenderConfig) -> String {
    text.split('\n')
        .map(|line| repair_line(line, config))
        .collect::<Vec<_>>()
        .join("\n")
}

fn repair_line(line: &str, config: &RenderConfig) -> String {
    if config.leading_marker(line).is_some() {
        return line.to_string();
    }

    let mut cleaned = String::with_capacity(line.len());
    let mut first: Option<&str> = None;
    let mut rest = line;

    while let Some(c) = rest.chars().next() {
        let after = &rest[c.len_utf8()..];
        let glued = if is_word_end(c) {
            config.markers().into_iter().find(|marker| after.starts_with(marker))
        } else {
            None
        };

        cleaned.push(c);
        match glued {
            Some(marker) => {
                first.get_or_insert(marker);
                rest = &after[marker.len()..];
            }
            None => rest = after,
        }
    }

    match first {
        Some(marker) => format!("{marker} {cleaned}"),
        None => cleaned,
    }
}

#[inline]
fn is_word_end(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ')' | '}' | ']')
}

// =============================================================================
// Marker stripping
// =============================================================================

/// Recover the destination view from rendered output.
///
/// Deleted lines are dropped and the retain/insert markers removed. The
/// renderer drops the final newline, so the result matches the destination
/// without its trailing `'\n'`.
pub fn strip_markers(rendered: &str, config: &RenderConfig) -> String {
    rendered
        .split('\n')
        .filter_map(|line| {
            let marker = config.leading_marker(line)?;
            if marker == config.delete {
                return None;
            }
            Some(&line[marker.len() + 1..])
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::Algorithm;
    use crate::diff::create_diff;

    #[test]
    fn test_render_line_change() {
        let src = "a\nb\nc\n";
        let script = create_diff(src, "a\nx\nc\n", Algorithm::FastBoundary);
        assert_eq!(render_ascii(&script, src), "📎 a\n❌ b\n✅ x\n📎 c");
    }

    #[test]
    fn test_render_ascii_markers() {
        let src = "a\nb\n";
        let script = create_diff(src, "a\nc\n", Algorithm::FastBoundary);
        assert_eq!(render_with(&script, src, &RenderConfig::ascii()), "  a\n- b\n+ c");
    }

    #[test]
    fn test_render_terminates_unterminated_spans() {
        let src = "Hello, world!";
        let script = create_diff(src, "Hello, Swift!", Algorithm::FastBoundary);
        assert_eq!(render_ascii(&script, src), "❌ Hello, world!\n✅ Hello, Swift!");
    }

    #[test]
    fn test_render_empty() {
        let script = create_diff("", "", Algorithm::OptimalLine);
        assert_eq!(render_ascii(&script, ""), "");
    }

    #[test]
    fn test_render_unaligned_script() {
        let ops = [Operation::retain(1), Operation::insert("X"), Operation::retain(1)];
        let out = render_ops(&ops, "ab", &RenderConfig::default());
        assert_eq!(out, "📎 a✅ X\n📎 b");
    }

    #[test]
    fn test_repair_moves_glued_marker() {
        let repaired = repair_line("foo✅ bar", &RenderConfig::default());
        assert_eq!(repaired, "✅ foo bar");

        let repaired = repair_line("call(x)❌ ; y]📎", &RenderConfig::default());
        assert_eq!(repaired, "❌ call(x) ; y]");
    }

    #[test]
    fn test_repair_leaves_marked_lines() {
        let line = "📎 value❌ here";
        assert_eq!(repair_line(line, &RenderConfig::default()), line);
    }

    #[test]
    fn test_repair_ignores_markers_after_punctuation() {
        let line = "say: ✅ ok";
        assert_eq!(repair_line(line, &RenderConfig::default()), line);
    }

    #[test]
    fn test_strip_markers_reconstructs_destination() {
        let src = "keep\ndrop\nkeep too\n";
        let dst = "keep\nnew\nkeep too\nextra\n";
        for alg in Algorithm::ALL {
            let script = create_diff(src, dst, alg);
            let config = RenderConfig::default();
            let rendered = render_with(&script, src, &config);
            assert_eq!(strip_markers(&rendered, &config), dst.trim_end_matches('\n'), "{alg}");
        }
    }

    #[test]
    fn test_strip_markers_ascii() {
        let config = RenderConfig::ascii();
        assert_eq!(strip_markers("  a\n- b\n+ c", &config), "a\nc");
    }
}
