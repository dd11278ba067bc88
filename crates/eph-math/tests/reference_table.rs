//! Regression table of activity vectors at thresholds 0.8 and 0.3.
//!
//! Lengths must match exactly. Scores are compared with the same tolerance
//! as `numpy.isclose` (relative 1e-5, absolute 1e-8).

use eph_math::{compute, CoreVariant, VariantSet};

struct Case {
    activity: Vec<f64>,
    threshold: f64,
    /// Left, middle, right, sorted.
    lengths: [usize; 4],
    scores: [f64; 4],
}

/// `n` zero bins with a single unit bin at `at`.
fn spike(n: usize, at: usize) -> Vec<f64> {
    let mut v = vec![0.0; n];
    v[at] = 1.0;
    v
}

/// `v` with `width` unit bins added on each side.
fn padded(v: Vec<f64>, width: usize) -> Vec<f64> {
    let mut out = vec![1.0; width];
    out.extend(v);
    out.extend(std::iter::repeat_n(1.0, width));
    out
}

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-8 + 1e-5 * expected.abs()
}

fn table() -> Vec<Case> {
    vec![
        Case {
            activity: vec![1.0],
            threshold: 0.8,
            lengths: [1, 1, 1, 1],
            scores: [0.0, 0.0, 0.0, 0.0],
        },
        Case {
            activity: vec![1.0],
            threshold: 0.3,
            lengths: [1, 1, 1, 1],
            scores: [0.0, 0.0, 0.0, 0.0],
        },
        Case {
            activity: vec![1.0, 0.0],
            threshold: 0.8,
            lengths: [1, 1, 2, 1],
            scores: [0.375, 0.375, 0.0, 0.375],
        },
        Case {
            activity: vec![1.0, 0.0],
            threshold: 0.3,
            lengths: [1, 1, 2, 1],
            scores: [0.0, 0.0, 0.0, 0.0],
        },
        Case {
            activity: vec![0.0, 1.0],
            threshold: 0.8,
            lengths: [2, 1, 1, 1],
            scores: [0.0, 0.375, 0.375, 0.375],
        },
        Case {
            activity: vec![0.0, 1.0],
            threshold: 0.3,
            lengths: [2, 1, 1, 1],
            scores: [0.0, 0.0, 0.0, 0.0],
        },
        Case {
            activity: vec![0.5, 0.5],
            threshold: 0.8,
            lengths: [2, 2, 2, 2],
            scores: [0.0, 0.0, 0.0, 0.0],
        },
        Case {
            activity: vec![0.5, 0.5],
            threshold: 0.3,
            lengths: [1, 1, 1, 1],
            scores: [0.0, 0.0, 0.0, 0.0],
        },
        Case {
            activity: vec![0.7, 0.3],
            threshold: 0.8,
            lengths: [2, 2, 2, 2],
            scores: [0.0, 0.0, 0.0, 0.0],
        },
        Case {
            activity: vec![0.7, 0.3],
            threshold: 0.3,
            lengths: [1, 1, 1, 1],
            scores: [0.0, 0.0, 0.0, 0.0],
        },
        Case {
            activity: vec![1.0, 0.0, 0.0, 0.0],
            threshold: 0.8,
            lengths: [1, 1, 4, 1],
            scores: [0.6875, 0.6875, 0.0, 0.6875],
        },
        Case {
            activity: vec![1.0, 0.0, 0.0, 0.0],
            threshold: 0.3,
            lengths: [1, 1, 4, 1],
            scores: [1.0 / 6.0, 1.0 / 6.0, 0.0, 1.0 / 6.0],
        },
        Case {
            activity: vec![0.0, 0.0, 0.0, 1.0],
            threshold: 0.8,
            lengths: [4, 1, 1, 1],
            scores: [0.0, 0.6875, 0.6875, 0.6875],
        },
        Case {
            activity: vec![0.0, 0.0, 0.0, 1.0],
            threshold: 0.3,
            lengths: [4, 1, 1, 1],
            scores: [0.0, 1.0 / 6.0, 1.0 / 6.0, 1.0 / 6.0],
        },
        Case {
            activity: vec![0.0, 1.0, 0.0, 1.0],
            threshold: 0.8,
            lengths: [4, 3, 3, 2],
            scores: [0.0, 0.0625, 0.0625, 0.375],
        },
        Case {
            activity: vec![0.0, 1.0, 0.0, 1.0],
            threshold: 0.3,
            lengths: [2, 1, 1, 1],
            scores: [0.0, 1.0 / 6.0, 1.0 / 6.0, 1.0 / 6.0],
        },
        Case {
            activity: vec![1.0, 1.0, 1.0, 1.0],
            threshold: 0.8,
            lengths: [4, 4, 4, 4],
            scores: [0.0, 0.0, 0.0, 0.0],
        },
        Case {
            activity: vec![1.0, 1.0, 1.0, 1.0],
            threshold: 0.3,
            lengths: [2, 2, 2, 2],
            scores: [0.0, 0.0, 0.0, 0.0],
        },
        Case {
            activity: vec![1.0, 1.0, 0.0, 0.0],
            threshold: 0.8,
            lengths: [2, 2, 4, 2],
            scores: [0.375, 0.375, 0.0, 0.375],
        },
        Case {
            activity: vec![1.0, 1.0, 0.0, 0.0],
            threshold: 0.3,
            lengths: [1, 1, 3, 1],
            scores: [1.0 / 6.0, 1.0 / 6.0, 0.0, 1.0 / 6.0],
        },
        Case {
            activity: vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            threshold: 0.8,
            lengths: [1, 1, 10, 1],
            scores: [0.875, 0.875, 0.0, 0.875],
        },
        Case {
            activity: vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            threshold: 0.3,
            lengths: [1, 1, 10, 1],
            scores: [2.0 / 3.0, 2.0 / 3.0, 0.0, 2.0 / 3.0],
        },
        Case {
            activity: vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            threshold: 0.8,
            lengths: [5, 1, 6, 1],
            scores: [0.375, 0.875, 0.25, 0.875],
        },
        Case {
            activity: vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            threshold: 0.3,
            lengths: [5, 1, 6, 1],
            scores: [0.0, 2.0 / 3.0, 0.0, 2.0 / 3.0],
        },
        Case {
            activity: vec![0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            threshold: 0.8,
            lengths: [3, 1, 8, 1],
            scores: [0.625, 0.875, 0.0, 0.875],
        },
        Case {
            activity: vec![0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            threshold: 0.3,
            lengths: [3, 1, 8, 1],
            scores: [0.0, 2.0 / 3.0, 0.0, 2.0 / 3.0],
        },
        Case {
            activity: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            threshold: 0.8,
            lengths: [4, 1, 7, 1],
            scores: [0.5, 0.875, 0.125, 0.875],
        },
        Case {
            activity: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            threshold: 0.3,
            lengths: [4, 1, 7, 1],
            scores: [0.0, 2.0 / 3.0, 0.0, 2.0 / 3.0],
        },
        Case {
            activity: vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
            threshold: 0.8,
            lengths: [8, 1, 3, 1],
            scores: [0.0, 0.875, 0.625, 0.875],
        },
        Case {
            activity: vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
            threshold: 0.3,
            lengths: [8, 1, 3, 1],
            scores: [0.0, 2.0 / 3.0, 0.0, 2.0 / 3.0],
        },
        Case {
            activity: vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            threshold: 0.8,
            lengths: [9, 1, 2, 1],
            scores: [0.0, 0.875, 0.75, 0.875],
        },
        Case {
            activity: vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            threshold: 0.3,
            lengths: [9, 1, 2, 1],
            scores: [0.0, 2.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0],
        },
        Case {
            activity: vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
            threshold: 0.8,
            lengths: [10, 1, 1, 1],
            scores: [0.0, 0.875, 0.875, 0.875],
        },
        Case {
            activity: vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
            threshold: 0.3,
            lengths: [10, 1, 1, 1],
            scores: [0.0, 2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0],
        },
        Case {
            activity: vec![0.1; 10],
            threshold: 0.8,
            lengths: [8, 8, 8, 8],
            scores: [0.0, 0.0, 0.0, 0.0],
        },
        Case {
            activity: vec![0.1; 10],
            threshold: 0.3,
            lengths: [3, 3, 3, 3],
            scores: [0.0, 0.0, 0.0, 0.0],
        },
        Case {
            activity: vec![0.0, 0.0, 0.0, 0.2, 0.55, 0.0, 0.15, 0.1, 0.0, 0.0],
            threshold: 0.8,
            lengths: [7, 4, 6, 3],
            scores: [0.125, 0.5, 0.25, 0.625],
        },
        Case {
            activity: vec![0.0, 0.0, 0.0, 0.2, 0.55, 0.0, 0.15, 0.1, 0.0, 0.0],
            threshold: 0.3,
            lengths: [5, 1, 6, 1],
            scores: [0.0, 2.0 / 3.0, 0.0, 2.0 / 3.0],
        },
        Case {
            activity: spike(10_000, 5_000),
            threshold: 0.8,
            lengths: [5001, 1, 5000, 1],
            scores: [0.374875, 0.999875, 0.375, 0.999875],
        },
        Case {
            activity: spike(10_000, 5_000),
            threshold: 0.3,
            lengths: [5001, 1, 5000, 1],
            scores: [0.0, 2999.0 / 3000.0, 0.0, 2999.0 / 3000.0],
        },
        Case {
            activity: vec![1.0; 10_000],
            threshold: 0.8,
            lengths: [8000, 8000, 8000, 8000],
            scores: [0.0, 0.0, 0.0, 0.0],
        },
        Case {
            activity: vec![1.0; 10_000],
            threshold: 0.3,
            lengths: [3000, 3000, 3000, 3000],
            scores: [0.0, 0.0, 0.0, 0.0],
        },
        Case {
            activity: padded(vec![0.0; 9_996], 2),
            threshold: 0.8,
            lengths: [10000, 10000, 10000, 4],
            scores: [0.0, 0.0, 0.0, 0.9995],
        },
        Case {
            activity: padded(vec![0.0; 9_996], 2),
            threshold: 0.3,
            lengths: [2, 9998, 2, 2],
            scores: [1499.0 / 1500.0, 0.0, 1499.0 / 1500.0, 1499.0 / 1500.0],
        },
        Case {
            activity: padded(spike(9_999, 4_999), 1),
            threshold: 0.8,
            lengths: [10001, 10001, 10001, 3],
            scores: [0.0, 0.0, 0.0, 39989.0 / 40004.0],
        },
        Case {
            activity: padded(spike(9_999, 4_999), 1),
            threshold: 0.3,
            lengths: [1, 1, 1, 1],
            scores: [29993.0 / 30003.0, 29993.0 / 30003.0, 29993.0 / 30003.0, 29993.0 / 30003.0],
        },    ]
}

#[test]
fn reference_table() {
    let cases = table();
    assert_eq!(cases.len(), 46);

    for (i, case) in cases.iter().enumerate() {
        let report = compute(&case.activity, case.threshold, VariantSet::all())
            .unwrap_or_else(|e| panic!("case {i}: {e}"));

        for (slot, variant) in CoreVariant::ALL.into_iter().enumerate() {
            let measure = report
                .results
                .get(variant)
                .unwrap_or_else(|| panic!("case {i}: {variant} missing"));
            assert_eq!(
                measure.length, case.lengths[slot],
                "case {i} (t = {}): {variant} length",
                case.threshold
            );
            assert!(
                close(measure.score, case.scores[slot]),
                "case {i} (t = {}): {variant} score {} != {}",
                case.threshold,
                measure.score,
                case.scores[slot]
            );
        }
    }
}

#[test]
fn helpers_build_expected_shapes() {
    let v = padded(spike(5, 2), 1);
    assert_eq!(v, vec![1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
}
