//! Offset-corrected alignment of computed and reference trajectories
//!
//! The computed trajectory stores the initial condition at index 0; the
//! reference trajectory starts at the first recorded step and carries no
//! initial-condition entry. Reference index k therefore corresponds to
//! computed index k + 1. Getting this offset wrong corrupts every comparison
//! downstream, so it lives in exactly one place: [`align`].

use std::ops::Range;

use crate::trajectory::Trajectory;

/// Index-aligned window over a computed/reference trajectory pair
///
/// Both series have the same length, and element i of each corresponds to
/// aligned step `steps().start + i`. In the original computed trajectory that
/// sample sits one index later, at `steps().start + i + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedWindow {
    start: usize,
    end: usize,
    computed: Trajectory,
    reference: Trajectory,
}

impl AlignedWindow {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Absolute aligned step indices of the window, for labeling
    pub fn steps(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Computed samples over the window
    pub fn computed(&self) -> &Trajectory {
        &self.computed
    }

    /// Reference samples over the window
    pub fn reference(&self) -> &Trajectory {
        &self.reference
    }
}

/// Reconcile two trajectories of differing length and index origin
///
/// 1. Drop index 0 of `computed` (the initial condition), so that both
///    series now start at the same physical step.
/// 2. Truncate both to the common length N = min(len(reference),
///    len(computed) - 1). Silent by design.
/// 3. Clamp the requested signed `window` to [0, N). A window that is empty
///    after clamping is valid and yields an empty result.
pub fn align(computed: &Trajectory, reference: &Trajectory, window: Range<i64>) -> AlignedWindow {
    let n = reference.len().min(computed.len().saturating_sub(1));

    let start = window.start.clamp(0, n as i64) as usize;
    let end = window.end.clamp(0, n as i64) as usize;

    if start >= end {
        return AlignedWindow {
            start,
            end: start,
            computed: Trajectory::new(),
            reference: Trajectory::new(),
        };
    }

    AlignedWindow {
        start,
        end,
        // Shift by one to skip the initial condition.
        computed: computed.slice(start + 1..end + 1),
        reference: reference.slice(start..end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::State;

    /// Trajectory whose x component equals the index, offset by `base`
    fn indexed(len: usize, base: f64) -> Trajectory {
        (0..len)
            .map(|i| State::new(base + i as f64, 0.0, 0.0))
            .collect()
    }

    #[test]
    fn test_common_length_is_min_of_reference_and_computed_minus_one() {
        let computed = indexed(101, 0.0);
        let reference = indexed(250, 0.0);

        let w = align(&computed, &reference, 0..i64::MAX);
        assert_eq!(w.len(), 100);
        assert_eq!(w.steps(), 0..100);

        let w = align(&computed, &indexed(40, 0.0), 0..i64::MAX);
        assert_eq!(w.len(), 40);
    }

    #[test]
    fn test_computed_window_skips_initial_condition() {
        let computed = indexed(11, 100.0);
        let reference = indexed(10, 0.0);

        let w = align(&computed, &reference, 0..10);
        // Aligned step 0 is computed index 1, never index 0.
        assert_eq!(w.computed()[0].x, 101.0);
        assert_eq!(w.reference()[0].x, 0.0);
        // Last aligned sample: computed index 10 vs reference index 9.
        assert_eq!(w.computed()[9].x, 110.0);
        assert_eq!(w.reference()[9].x, 9.0);
    }

    #[test]
    fn test_window_clamping() {
        let computed = indexed(101, 0.0);
        let reference = indexed(100, 0.0);

        let w = align(&computed, &reference, -5..1_000_000);
        assert_eq!(w.steps(), 0..100);
        assert_eq!(w.len(), 100);
    }

    #[test]
    fn test_inverted_window_is_empty_not_an_error() {
        let computed = indexed(101, 0.0);
        let reference = indexed(100, 0.0);

        let w = align(&computed, &reference, 80..10);
        assert!(w.is_empty());
        assert_eq!(w.computed().len(), 0);
        assert_eq!(w.reference().len(), 0);
    }

    #[test]
    fn test_sub_window_carries_absolute_indices() {
        let computed = indexed(101, 0.0);
        let reference = indexed(100, 0.0);

        let w = align(&computed, &reference, 30..40);
        assert_eq!(w.steps(), 30..40);
        assert_eq!(w.computed()[0].x, 31.0);
        assert_eq!(w.reference()[0].x, 30.0);
    }

    #[test]
    fn test_empty_computed_trajectory() {
        let computed = Trajectory::new();
        let reference = indexed(10, 0.0);

        let w = align(&computed, &reference, 0..10);
        assert!(w.is_empty());
    }
}
