//! Boundary-extension strategies and the extended access wrapper.
//!
//! [`BoundaryExtension`] is a closed set of strategy variants dispatched
//! through three movement events; [`ExtendedAccess`] wraps a source into a
//! cursor over all of ℤⁿ, delegating in-domain reads to the source and
//! out-of-domain reads to the strategy. Callers consume the wrapper purely
//! through the generic [`NdAccess`] contract.

use num_traits::Float;
use smallvec::SmallVec;
use tessera_core::{NdAccess, NdSource, Pos, Result};

use crate::mirror::MirrorExpWindowing;

/// A boundary-extension strategy bound to a source.
///
/// New strategies are added by extending this enum; each variant reacts to
/// the three movement events and exposes the synthesized value for the
/// parent cursor's current out-of-domain position.
pub enum BoundaryExtension<'a, S: NdSource>
where
    S::Elem: Float,
{
    /// Mirrored sampling with exponential edge windowing.
    MirrorExpWindowing(MirrorExpWindowing<'a, S>),
}

impl<'a, S: NdSource> BoundaryExtension<'a, S>
where
    S::Elem: Float,
{
    /// The parent cursor just left the domain (or repositioned outside).
    pub fn on_enter_outside(&mut self, position: &[i64]) {
        match self {
            BoundaryExtension::MirrorExpWindowing(mirror) => mirror.on_enter_outside(position),
        }
    }

    /// The parent cursor made a unit step in dimension `d` while outside.
    pub fn on_step(&mut self, d: usize, forward: bool) {
        match self {
            BoundaryExtension::MirrorExpWindowing(mirror) => mirror.on_step(d, forward),
        }
    }

    /// The parent cursor moved `steps` in dimension `d` while outside.
    pub fn on_jump(&mut self, steps: i64, d: usize, position: &[i64]) {
        match self {
            BoundaryExtension::MirrorExpWindowing(mirror) => mirror.on_jump(steps, d, position),
        }
    }

    /// The synthesized value for the parent cursor's current position.
    pub fn value(&self) -> S::Elem {
        match self {
            BoundaryExtension::MirrorExpWindowing(mirror) => mirror.value(),
        }
    }
}

impl<'a, S: NdSource> Clone for BoundaryExtension<'a, S>
where
    S::Elem: Float,
{
    fn clone(&self) -> Self {
        match self {
            BoundaryExtension::MirrorExpWindowing(mirror) => {
                BoundaryExtension::MirrorExpWindowing(mirror.clone())
            }
        }
    }
}

impl<'a, S: NdSource> std::fmt::Debug for BoundaryExtension<'a, S>
where
    S::Elem: Float + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryExtension::MirrorExpWindowing(mirror) => {
                f.debug_tuple("MirrorExpWindowing").field(mirror).finish()
            }
        }
    }
}

/// A cursor over all of ℤⁿ extending a bounded source.
///
/// Inside the source's interval, [`get`](NdAccess::get) samples the source
/// directly; outside, it returns the bound strategy's synthesized value.
/// Per-dimension out-of-bounds flags keep every unit step O(1).
///
/// Cloning (or [`copy`](Self::copy)) yields an independent cursor with its
/// own position, flags, and mirror state; the immutable weight tables are
/// shared.
///
/// # Examples
///
/// ```
/// use tessera_core::{DenseGrid, NdAccess};
/// use tessera_oob::ExtendedAccess;
///
/// let grid = DenseGrid::from_shape_fn(&[5], |pos| pos[0] as f64)?;
/// let mut access = ExtendedAccess::mirror_exp_windowing(&grid, &[0.5])?;
///
/// access.set_position(&[2]);
/// assert_eq!(access.get(), 2.0);
///
/// // Past the edge, values come from the mirrored, windowed extension.
/// access.set_position(&[7]);
/// assert!(access.is_out_of_bounds());
/// assert!(access.get() < 3.0);
/// # Ok::<(), tessera_core::TilingError>(())
/// ```
pub struct ExtendedAccess<'a, S: NdSource>
where
    S::Elem: Float,
{
    source: &'a S,
    position: Pos,
    dim_out: SmallVec<[bool; 6]>,
    num_out: usize,
    strategy: BoundaryExtension<'a, S>,
}

impl<'a, S: NdSource> ExtendedAccess<'a, S>
where
    S::Elem: Float,
{
    /// Wrap `source` with a mirrored, exponentially windowed extension.
    ///
    /// The access starts at the source interval's lower corner.
    ///
    /// # Errors
    ///
    /// Propagates window construction errors: rank mismatch or fade
    /// fractions outside `(0, 1]`.
    pub fn mirror_exp_windowing(source: &'a S, fade: &[f64]) -> Result<Self> {
        let strategy =
            BoundaryExtension::MirrorExpWindowing(MirrorExpWindowing::new(source, fade)?);
        let n = source.num_dimensions();
        Ok(Self {
            source,
            position: source.interval().min_slice().iter().copied().collect(),
            dim_out: SmallVec::from_elem(false, n),
            num_out: 0,
            strategy,
        })
    }

    /// The wrapped source.
    pub fn source(&self) -> &'a S {
        self.source
    }

    /// Whether the current position lies outside the source's interval.
    pub fn is_out_of_bounds(&self) -> bool {
        self.num_out > 0
    }

    /// An independent access at the same position.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    fn update_flag(&mut self, d: usize) {
        let interval = self.source.interval();
        let out = self.position[d] < interval.min(d) || self.position[d] > interval.max(d);
        if out != self.dim_out[d] {
            self.dim_out[d] = out;
            if out {
                self.num_out += 1;
            } else {
                self.num_out -= 1;
            }
        }
    }
}

impl<'a, S: NdSource> Clone for ExtendedAccess<'a, S>
where
    S::Elem: Float,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            position: self.position.clone(),
            dim_out: self.dim_out.clone(),
            num_out: self.num_out,
            strategy: self.strategy.clone(),
        }
    }
}

impl<'a, S: NdSource> std::fmt::Debug for ExtendedAccess<'a, S>
where
    S::Elem: Float + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtendedAccess")
            .field("position", &self.position)
            .field("out_of_bounds", &self.is_out_of_bounds())
            .field("strategy", &self.strategy)
            .finish()
    }
}

impl<'a, S: NdSource> NdAccess for ExtendedAccess<'a, S>
where
    S::Elem: Float,
{
    type Elem = S::Elem;

    fn num_dimensions(&self) -> usize {
        self.position.len()
    }

    fn position(&self) -> &[i64] {
        &self.position
    }

    fn set_position(&mut self, position: &[i64]) {
        debug_assert_eq!(position.len(), self.position.len());
        self.position.copy_from_slice(position);
        for d in 0..self.position.len() {
            self.update_flag(d);
        }
        if self.num_out > 0 {
            self.strategy.on_enter_outside(&self.position);
        }
    }

    fn fwd(&mut self, d: usize) {
        self.position[d] += 1;
        let was_out = self.num_out > 0;
        self.update_flag(d);
        if self.num_out > 0 {
            if was_out {
                self.strategy.on_step(d, true);
            } else {
                self.strategy.on_enter_outside(&self.position);
            }
        }
    }

    fn bck(&mut self, d: usize) {
        self.position[d] -= 1;
        let was_out = self.num_out > 0;
        self.update_flag(d);
        if self.num_out > 0 {
            if was_out {
                self.strategy.on_step(d, false);
            } else {
                self.strategy.on_enter_outside(&self.position);
            }
        }
    }

    fn move_by(&mut self, steps: i64, d: usize) {
        if steps == 0 {
            return;
        }
        self.position[d] += steps;
        let was_out = self.num_out > 0;
        self.update_flag(d);
        if self.num_out > 0 {
            if was_out {
                self.strategy.on_jump(steps, d, &self.position);
            } else {
                self.strategy.on_enter_outside(&self.position);
            }
        }
    }

    fn get(&self) -> S::Elem {
        if self.num_out > 0 {
            self.strategy.value()
        } else {
            self.source
                .at(&self.position)
                .expect("in-bounds position samples the source")
        }
    }
}
