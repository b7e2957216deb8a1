//! Triangle-wave mirroring with incremental cursor state.
//!
//! [`reflect`] folds any out-of-domain coordinate back into range by
//! bouncing off both boundaries (the boundary value is duplicated, so the
//! reflected sequence for `len..2*len-1` is the reversed in-domain
//! sequence). [`MirrorExpWindowing`] keeps a mirrored cursor synchronized
//! with a parent position through single-step events, so sequential
//! out-of-domain traversal never recomputes the reflection from scratch.

use num_traits::Float;
use smallvec::SmallVec;
use tessera_core::{NdSource, Pos, Result};
use tracing::trace;

use crate::window::ExpWindow;

/// Jump magnitude beyond which incremental stepping loses to a fresh
/// reflection computation.
pub const INCREMENTAL_STEP_LIMIT: i64 = 10;

/// Reflect `position` into the domain `[min, min + len - 1]` by bouncing
/// off both boundaries.
///
/// The reflection duplicates the boundary value: `min - 1` maps to `min`,
/// `min + len` maps to the last coordinate, and the wave repeats with
/// period `2 * len`. A singleton domain reflects everything onto `min`.
///
/// # Examples
///
/// ```
/// use tessera_oob::reflect;
///
/// assert_eq!(reflect(-1, 0, 5), 0);
/// assert_eq!(reflect(5, 0, 5), 4);
/// assert_eq!(reflect(-5, 0, 5), 4);
/// assert_eq!(reflect(2, 0, 5), 2);
/// ```
pub fn reflect(position: i64, min: i64, len: usize) -> i64 {
    if len == 1 {
        return min;
    }
    let len = len as i64;
    let period = 2 * len;
    let r = (position - min).rem_euclid(period);
    min + if r < len { r } else { period - 1 - r }
}

/// Mirrored boundary extension with exponential edge windowing.
///
/// Holds the mirrored cursor position, per-dimension direction flags, and
/// the synthesized value for the parent cursor's current (out-of-domain)
/// position. The value is the source sample at the mirrored position
/// scaled by the product of per-dimension window weights at the mirrored
/// coordinates.
///
/// The direction flag of a dimension records whether the mirrored cursor
/// currently moves with (`+1`) or against (`-1`) the parent cursor; it
/// flips exactly when the mirrored cursor reverses at a domain extreme,
/// where it holds its coordinate for one step (the boundary value is
/// duplicated by the reflection). This makes a unit step O(1) in the
/// mirror geometry.
pub struct MirrorExpWindowing<'a, S: NdSource>
where
    S::Elem: Float,
{
    source: &'a S,
    window: ExpWindow<S::Elem>,
    mirrored: Pos,
    direction: SmallVec<[i8; 6]>,
    value: S::Elem,
}

impl<'a, S: NdSource> MirrorExpWindowing<'a, S>
where
    S::Elem: Float,
{
    /// Create a strategy over `source` with per-dimension fade fractions.
    ///
    /// # Errors
    ///
    /// Propagates the window construction errors: rank mismatch or fade
    /// fractions outside `(0, 1]`.
    pub fn new(source: &'a S, fade: &[f64]) -> Result<Self> {
        let window = ExpWindow::new(source.interval(), fade)?;
        let n = source.num_dimensions();
        Ok(Self {
            source,
            window,
            mirrored: source.interval().min_slice().iter().copied().collect(),
            direction: SmallVec::from_elem(1, n),
            value: S::Elem::zero(),
        })
    }

    /// The window used for weighting.
    pub fn window(&self) -> &ExpWindow<S::Elem> {
        &self.window
    }

    /// The mirrored in-bounds position for the parent's current position.
    ///
    /// Meaningful after the first event.
    pub fn mirrored_position(&self) -> &[i64] {
        &self.mirrored
    }

    /// The synthesized value for the parent's current position.
    ///
    /// Meaningful after the first event.
    pub fn value(&self) -> S::Elem {
        self.value
    }

    /// The parent cursor just left the domain (or jumped while outside):
    /// recompute the mirrored position and directions from scratch.
    pub fn on_enter_outside(&mut self, position: &[i64]) {
        let interval = self.source.interval();
        debug_assert_eq!(position.len(), interval.num_dimensions());
        for d in 0..interval.num_dimensions() {
            let min = interval.min(d);
            let len = interval.dimension(d);
            self.mirrored[d] = reflect(position[d], min, len);
            self.direction[d] = if len == 1 {
                1
            } else {
                let r = (position[d] - min).rem_euclid(2 * len as i64);
                if r < len as i64 {
                    1
                } else {
                    -1
                }
            };
        }
        self.refresh_value();
    }

    /// The parent cursor moved one step in dimension `d` while outside.
    ///
    /// Advances or retreats the mirrored coordinate, holding it for one
    /// step (and flipping the direction) at the two extremes.
    pub fn on_step(&mut self, d: usize, forward: bool) {
        let interval = self.source.interval();
        let lo = interval.min(d);
        let hi = interval.max(d);
        let with_parent = self.direction[d] > 0;
        let towards_max = with_parent == forward;
        if towards_max {
            if self.mirrored[d] == hi {
                self.direction[d] = -self.direction[d];
            } else {
                self.mirrored[d] += 1;
            }
        } else if self.mirrored[d] == lo {
            self.direction[d] = -self.direction[d];
        } else {
            self.mirrored[d] -= 1;
        }
        self.refresh_value();
    }

    /// The parent cursor moved `steps` in dimension `d` while outside.
    ///
    /// Applies unit steps up to [`INCREMENTAL_STEP_LIMIT`]; beyond that a
    /// fresh reflection computation is cheaper.
    pub fn on_jump(&mut self, steps: i64, d: usize, position: &[i64]) {
        if steps.abs() > INCREMENTAL_STEP_LIMIT {
            trace!(steps, d, "mirror jump beyond incremental limit, recomputing");
            self.on_enter_outside(position);
            return;
        }
        for _ in 0..steps.abs() {
            self.on_step(d, steps > 0);
        }
    }

    fn refresh_value(&mut self) {
        let interval = self.source.interval();
        let sample = self
            .source
            .at(&self.mirrored)
            .expect("mirrored position lies inside the source interval");
        let mut weight = S::Elem::one();
        for d in 0..interval.num_dimensions() {
            let offset = (self.mirrored[d] - interval.min(d)) as usize;
            weight = weight * self.window.weight(d, offset);
        }
        self.value = sample * weight;
    }
}

impl<'a, S: NdSource> Clone for MirrorExpWindowing<'a, S>
where
    S::Elem: Float,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            window: self.window.clone(),
            mirrored: self.mirrored.clone(),
            direction: self.direction.clone(),
            value: self.value,
        }
    }
}

impl<'a, S: NdSource> std::fmt::Debug for MirrorExpWindowing<'a, S>
where
    S::Elem: Float + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MirrorExpWindowing")
            .field("mirrored", &self.mirrored)
            .field("direction", &self.direction)
            .field("value", &self.value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::DenseGrid;

    #[test]
    fn test_reflect_identities() {
        // Just outside either end duplicates the boundary.
        assert_eq!(reflect(-1, 0, 5), 0);
        assert_eq!(reflect(5, 0, 5), 4);
        // A full length outside lands on the far boundary.
        assert_eq!(reflect(-5, 0, 5), 4);
        // In-domain positions are untouched.
        for p in 0..5 {
            assert_eq!(reflect(p, 0, 5), p);
        }
    }

    #[test]
    fn test_reflect_reversed_sequence() {
        let n = 7i64;
        let mirrored: Vec<i64> = (n..2 * n).map(|p| reflect(p, 0, n as usize)).collect();
        let reversed: Vec<i64> = (0..n).rev().collect();
        assert_eq!(mirrored, reversed);
        // The wave repeats with period 2n.
        for p in -20..20 {
            assert_eq!(reflect(p, 0, n as usize), reflect(p + 2 * n, 0, n as usize));
        }
    }

    #[test]
    fn test_reflect_nonzero_min() {
        assert_eq!(reflect(9, 10, 5), 10);
        assert_eq!(reflect(15, 10, 5), 14);
        assert_eq!(reflect(12, 10, 5), 12);
    }

    #[test]
    fn test_reflect_singleton() {
        for p in -5..5 {
            assert_eq!(reflect(p, 0, 1), 0);
        }
    }

    #[test]
    fn test_incremental_steps_follow_reflection() {
        let grid = DenseGrid::from_shape_fn(&[5], |pos| pos[0] as f64).unwrap();
        let mut mirror = MirrorExpWindowing::new(&grid, &[0.5]).unwrap();

        mirror.on_enter_outside(&[5]);
        assert_eq!(mirror.mirrored_position(), &[4]);

        // Walking further out retraces the domain in reverse, bounces at 0,
        // and walks forward again.
        let mut position = 5i64;
        for _ in 0..12 {
            position += 1;
            mirror.on_step(0, true);
            assert_eq!(mirror.mirrored_position()[0], reflect(position, 0, 5));
        }

        // And back.
        for _ in 0..12 {
            position -= 1;
            mirror.on_step(0, false);
            assert_eq!(mirror.mirrored_position()[0], reflect(position, 0, 5));
        }
    }

    #[test]
    fn test_jump_matches_unit_steps() {
        let grid = DenseGrid::from_shape_fn(&[6], |pos| (pos[0] * pos[0]) as f64).unwrap();
        let mut stepped = MirrorExpWindowing::new(&grid, &[0.5]).unwrap();
        let mut jumped = stepped.clone();

        stepped.on_enter_outside(&[6]);
        jumped.on_enter_outside(&[6]);

        for _ in 0..7 {
            stepped.on_step(0, true);
        }
        jumped.on_jump(7, 0, &[13]);
        assert_eq!(stepped.mirrored_position(), jumped.mirrored_position());
        assert_eq!(stepped.value(), jumped.value());

        // Beyond the limit the jump recomputes from the supplied position.
        jumped.on_jump(20, 0, &[33]);
        assert_eq!(jumped.mirrored_position()[0], reflect(33, 0, 6));
    }
}
