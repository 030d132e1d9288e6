//! Property-based tests for diff creation, application and rendering.

use linediff::{
    apply_diff, apply_diff_checked, apply_diff_strict, apply_ops, consolidate, create_diff,
    create_diff_with_config, render_with, strip_markers, Algorithm, DiffConfig, DiffError,
    Operation, RenderConfig,
};
use proptest::prelude::*;

// =============================================================================
// Test helpers
// =============================================================================

/// Lines drawn from a small pool so documents share content.
fn document() -> impl Strategy<Value = String> {
    let line = prop::sample::select(vec![
        "", "a", "b", "c", "fn x() {}", "    }", "é", "日本語", "let y = 1;",
    ]);
    (prop::collection::vec(line, 0..12), any::<bool>()).prop_map(|(lines, trailing)| {
        let mut doc = lines.join("\n");
        if trailing && !lines.is_empty() {
            doc.push('\n');
        }
        doc
    })
}

/// A document and an edited copy of it.
fn document_pair() -> impl Strategy<Value = (String, String)> {
    prop_oneof![
        (document(), document()),
        document().prop_flat_map(|doc| {
            let lines: Vec<String> = doc.split_inclusive('\n').map(str::to_string).collect();
            let len = lines.len();
            (Just(lines), prop::collection::vec(any::<bool>(), len), document()).prop_map(
                |(lines, keep, extra)| {
                    let mut edited: String = lines
                        .iter()
                        .zip(&keep)
                        .filter(|(_, keep)| **keep)
                        .map(|(line, _)| line.as_str())
                        .collect();
                    edited.push_str(&extra);
                    (lines.concat(), edited)
                },
            )
        }),
    ]
}

fn arbitrary_op() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (0usize..4).prop_map(Operation::retain),
        (0usize..4).prop_map(Operation::delete),
        "[ab\n]{0,3}".prop_map(Operation::insert),
    ]
}

fn retained_lines(rendered: &str, config: &RenderConfig) -> usize {
    let prefix = format!("{} ", config.retain);
    rendered.split('\n').filter(|line| line.starts_with(&prefix)).count()
}

// =============================================================================
// Creation and application
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every strategy reproduces the destination.
    #[test]
    fn apply_reproduces_destination((src, dst) in document_pair()) {
        for alg in Algorithm::ALL {
            let script = create_diff(&src, &dst, alg);
            prop_assert_eq!(apply_diff(&src, &script), dst.as_str(), "{}", alg);
        }
    }

    /// Retain and delete lengths cover the source exactly.
    #[test]
    fn scripts_cover_source_exactly((src, dst) in document_pair()) {
        for alg in Algorithm::ALL {
            let script = create_diff(&src, &dst, alg);
            prop_assert_eq!(script.source_span(), src.chars().count());
            prop_assert_eq!(apply_diff_strict(&src, &script).ok(), Some(dst.clone()));
        }
    }

    /// Strategy output has no empty operations and no adjacent operations of
    /// the same kind.
    #[test]
    fn scripts_are_consolidated((src, dst) in document_pair()) {
        for alg in Algorithm::ALL {
            let script = create_diff(&src, &dst, alg);
            prop_assert!(script.ops().iter().all(|op| !op.is_empty()));
            for pair in script.ops().windows(2) {
                prop_assert_ne!(pair[0].kind(), pair[1].kind());
            }
        }
    }

    /// Identical inputs yield a single retain, or nothing for empty text.
    #[test]
    fn identical_inputs_retain_everything(doc in document()) {
        for alg in Algorithm::ALL {
            let script = create_diff(&doc, &doc, alg);
            if doc.is_empty() {
                prop_assert!(script.is_empty());
            } else {
                prop_assert_eq!(script.ops(), &[Operation::retain(doc.chars().count())][..]);
            }
        }
    }

    /// The LCS strategy keeps at least as many lines as any other strategy.
    #[test]
    fn optimal_retains_most_lines((src, dst) in document_pair()) {
        let config = RenderConfig::default();
        let best = retained_lines(
            &render_with(&create_diff(&src, &dst, Algorithm::OptimalLine), &src, &config),
            &config,
        );
        for alg in [Algorithm::FastBoundary, Algorithm::SimpleBoundary, Algorithm::GreedyLine] {
            let other = retained_lines(&render_with(&create_diff(&src, &dst, alg), &src, &config), &config);
            prop_assert!(best >= other, "{}: {} > {}", alg, other, best);
        }
    }

    /// Any lookahead produces a correct greedy script.
    #[test]
    fn greedy_lookahead_is_correct((src, dst) in document_pair(), lookahead in 0usize..8) {
        let config = DiffConfig::new(Algorithm::GreedyLine).with_lookahead(lookahead).with_verify(true);
        let script = create_diff_with_config(&src, &dst, &config);
        prop_assert!(script.meta().is_accurate());
    }

    /// Checked apply refuses a different source.
    #[test]
    fn checked_apply_rejects_other_sources((src, dst) in document_pair(), other in document()) {
        let script = create_diff(&src, &dst, Algorithm::OptimalLine);
        let result = apply_diff_checked(&other, &script);
        if other == src {
            prop_assert_eq!(result.ok(), Some(dst));
        } else {
            let is_mismatch = matches!(result, Err(DiffError::SourceMismatch { .. }));
            prop_assert!(is_mismatch);
        }
    }
}

// =============================================================================
// Consolidation
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Consolidation is idempotent and never changes what a script does.
    #[test]
    fn consolidation_is_idempotent_and_preserving(
        ops in prop::collection::vec(arbitrary_op(), 0..16),
        src in "[ab\n]{0,20}",
    ) {
        let once = consolidate(ops.clone());
        let twice = consolidate(once.clone());
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(apply_ops(&src, &once), apply_ops(&src, &ops));
    }
}

// =============================================================================
// Rendering
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Stripping markers from a rendering gives back the destination, minus
    /// its final newline.
    #[test]
    fn strip_markers_recovers_destination((src, dst) in document_pair()) {
        let expected = dst.strip_suffix('\n').unwrap_or(&dst);
        for config in [RenderConfig::emoji(), RenderConfig::ascii()] {
            for alg in Algorithm::ALL {
                let script = create_diff(&src, &dst, alg);
                let rendered = render_with(&script, &src, &config);
                prop_assert_eq!(strip_markers(&rendered, &config), expected, "{}", alg);
            }
        }
    }
}

// =============================================================================
// Wire format
// =============================================================================

#[cfg(feature = "codec")]
proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// A decoded script applies exactly like the script it was encoded from.
    #[test]
    fn decoded_scripts_apply_identically((src, dst) in document_pair()) {
        for alg in Algorithm::ALL {
            let script = create_diff(&src, &dst, alg);
            let decoded = linediff::from_base64(&linediff::to_base64(&script).unwrap()).unwrap();
            prop_assert_eq!(decoded.algorithm(), alg);
            prop_assert_eq!(apply_diff_checked(&src, &decoded).ok(), Some(dst.clone()));
        }
    }
}

// =============================================================================
// Boundary cases
// =============================================================================

#[test]
fn empty_and_unterminated_inputs() {
    let cases = [
        ("", ""),
        ("", "\n"),
        ("\n", ""),
        ("a", "a\n"),
        ("a\n", "a"),
        ("a\nb", "a\nc"),
        ("\n\n", "\n\n\n"),
    ];
    for alg in Algorithm::ALL {
        for (src, dst) in cases {
            let script = create_diff(src, dst, alg);
            assert_eq!(apply_diff_strict(src, &script).unwrap(), dst, "{alg}: {src:?} -> {dst:?}");
        }
    }
}
