//! Pieces module - shape table with pre-authored rotation variants
//!
//! Rotation is a table lookup, not geometry: every kind owns an ordered list
//! of patterns and rotating a piece substitutes the next pattern in the list.
//! Patterns are trimmed to their bounding box and are placed with their
//! top-left corner at the piece anchor.

use crate::types::ShapeKind;

/// A rotation variant, row-major, 1 = filled
pub type Pattern = &'static [&'static [u8]];

const I_VARIANTS: &[Pattern] = &[
    &[&[1, 1, 1, 1]],
    &[&[1], &[1], &[1], &[1]],
];

const O_VARIANTS: &[Pattern] = &[&[&[1, 1], &[1, 1]]];

const T_VARIANTS: &[Pattern] = &[
    &[&[0, 1, 0], &[1, 1, 1]],
    &[&[1, 0], &[1, 1], &[1, 0]],
    &[&[1, 1, 1], &[0, 1, 0]],
    &[&[0, 1], &[1, 1], &[0, 1]],
];

const S_VARIANTS: &[Pattern] = &[
    &[&[0, 1, 1], &[1, 1, 0]],
    &[&[1, 0], &[1, 1], &[0, 1]],
];

const Z_VARIANTS: &[Pattern] = &[
    &[&[1, 1, 0], &[0, 1, 1]],
    &[&[0, 1], &[1, 1], &[1, 0]],
];

const J_VARIANTS: &[Pattern] = &[
    &[&[1, 0, 0], &[1, 1, 1]],
    &[&[1, 1], &[1, 0], &[1, 0]],
    &[&[1, 1, 1], &[0, 0, 1]],
    &[&[0, 1], &[0, 1], &[1, 1]],
];

const L_VARIANTS: &[Pattern] = &[
    &[&[0, 0, 1], &[1, 1, 1]],
    &[&[1, 0], &[1, 0], &[1, 1]],
    &[&[1, 1, 1], &[1, 0, 0]],
    &[&[1, 1], &[0, 1], &[0, 1]],
];

/// All rotation variants of a kind, spawn orientation first
pub fn variants(kind: ShapeKind) -> &'static [Pattern] {
    match kind {
        ShapeKind::I => I_VARIANTS,
        ShapeKind::O => O_VARIANTS,
        ShapeKind::T => T_VARIANTS,
        ShapeKind::S => S_VARIANTS,
        ShapeKind::Z => Z_VARIANTS,
        ShapeKind::J => J_VARIANTS,
        ShapeKind::L => L_VARIANTS,
    }
}

pub fn variant_count(kind: ShapeKind) -> usize {
    variants(kind).len()
}

/// Variant for a rotation index (wraps cyclically)
pub fn variant(kind: ShapeKind, rotation: usize) -> Pattern {
    let table = variants(kind);
    table[rotation % table.len()]
}

/// Orientation used when a piece spawns
pub fn spawn_pattern(kind: ShapeKind) -> Pattern {
    variant(kind, 0)
}

/// Bounding box of a pattern as (height, width)
pub fn pattern_size(pattern: Pattern) -> (usize, usize) {
    let width = pattern.iter().map(|row| row.len()).max().unwrap_or(0);
    (pattern.len(), width)
}

/// Widest spawn orientation across all kinds
pub fn max_spawn_width() -> usize {
    ShapeKind::ALL
        .iter()
        .map(|&kind| pattern_size(spawn_pattern(kind)).1)
        .max()
        .unwrap_or(0)
}

/// Tallest variant across all kinds and rotations
pub fn max_variant_height() -> usize {
    ShapeKind::ALL
        .iter()
        .flat_map(|&kind| variants(kind).iter())
        .map(|&pattern| pattern_size(pattern).0)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(pattern: Pattern) -> usize {
        pattern
            .iter()
            .map(|row| row.iter().filter(|&&v| v != 0).count())
            .sum()
    }

    #[test]
    fn every_variant_has_four_cells() {
        for kind in ShapeKind::ALL {
            for (i, &pattern) in variants(kind).iter().enumerate() {
                assert_eq!(filled(pattern), 4, "{:?} variant {}", kind, i);
            }
        }
    }

    #[test]
    fn variants_are_rectangular_and_trimmed() {
        for kind in ShapeKind::ALL {
            for &pattern in variants(kind) {
                let (h, w) = pattern_size(pattern);
                assert!(pattern.iter().all(|row| row.len() == w));
                // No empty border rows or columns.
                assert!(pattern[0].iter().any(|&v| v != 0));
                assert!(pattern[h - 1].iter().any(|&v| v != 0));
                assert!(pattern.iter().any(|row| row[0] != 0));
                assert!(pattern.iter().any(|row| row[w - 1] != 0));
            }
        }
    }

    #[test]
    fn variant_counts_match_symmetry() {
        assert_eq!(variant_count(ShapeKind::I), 2);
        assert_eq!(variant_count(ShapeKind::O), 1);
        assert_eq!(variant_count(ShapeKind::T), 4);
        assert_eq!(variant_count(ShapeKind::S), 2);
        assert_eq!(variant_count(ShapeKind::Z), 2);
        assert_eq!(variant_count(ShapeKind::J), 4);
        assert_eq!(variant_count(ShapeKind::L), 4);
    }

    #[test]
    fn variant_index_wraps() {
        assert_eq!(variant(ShapeKind::T, 4), variant(ShapeKind::T, 0));
        assert_eq!(variant(ShapeKind::I, 3), variant(ShapeKind::I, 1));
    }

    #[test]
    fn extreme_sizes() {
        assert_eq!(max_spawn_width(), 4);
        assert_eq!(max_variant_height(), 4);
        assert_eq!(pattern_size(spawn_pattern(ShapeKind::I)), (1, 4));
    }
}
