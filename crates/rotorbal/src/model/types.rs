//! Basic planar types.
//!
//! - `Unbalance`: magnitude/angle pair with derived Cartesian form.
//! - `DiscId`, `Disc`: labelled adjustable contributions.
//! - `UnbalanceSet`: one shaft plus ordered discs, read-only after `build`.

use std::fmt;

use nalgebra::{Vector2, Vector3};

/// Planar unbalance vector in polar form (angle in radians, any real value).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unbalance {
    pub magnitude: f64,
    pub angle: f64,
}

impl Unbalance {
    #[inline]
    pub fn new(magnitude: f64, angle: f64) -> Self {
        Self { magnitude, angle }
    }

    /// Cartesian form `(m cos a, m sin a)` in the balancing plane.
    #[inline]
    pub fn planar(&self) -> Vector2<f64> {
        let (s, c) = self.angle.sin_cos();
        Vector2::new(self.magnitude * c, self.magnitude * s)
    }

    /// Planar form embedded with `z = 0` for 3D quiver tooling.
    #[inline]
    pub fn cartesian(&self) -> Vector3<f64> {
        let p = self.planar();
        Vector3::new(p.x, p.y, 0.0)
    }

    /// New vector at `angle + theta`; magnitude unchanged.
    #[inline]
    pub fn rotated_by(&self, theta: f64) -> Self {
        Self {
            magnitude: self.magnitude,
            angle: self.angle + theta,
        }
    }
}

/// Disc identifier as supplied by the data source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DiscId {
    Num(i64),
    Name(String),
}

impl From<i64> for DiscId {
    fn from(v: i64) -> Self {
        DiscId::Num(v)
    }
}

impl From<i32> for DiscId {
    fn from(v: i32) -> Self {
        DiscId::Num(v.into())
    }
}

impl From<&str> for DiscId {
    fn from(v: &str) -> Self {
        DiscId::Name(v.to_string())
    }
}

impl From<String> for DiscId {
    fn from(v: String) -> Self {
        DiscId::Name(v)
    }
}

impl fmt::Display for DiscId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscId::Num(n) => write!(f, "{n}"),
            DiscId::Name(s) => f.write_str(s),
        }
    }
}

/// Adjustable contribution; `unbalance.angle` is the installed (base) angle.
#[derive(Clone, Debug, PartialEq)]
pub struct Disc {
    pub id: DiscId,
    pub unbalance: Unbalance,
}

/// Shaft plus ordered discs. Only `model::build` and `rotation::apply`
/// construct values, so the id/magnitude invariants always hold.
#[derive(Clone, Debug, PartialEq)]
pub struct UnbalanceSet {
    pub(crate) shaft: Unbalance,
    pub(crate) discs: Vec<Disc>,
}

impl UnbalanceSet {
    #[inline]
    pub fn shaft(&self) -> Unbalance {
        self.shaft
    }

    #[inline]
    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    /// Number of discs (= required angle vector length).
    #[inline]
    pub fn len(&self) -> usize {
        self.discs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.discs.is_empty()
    }

    /// True when every disc has zero magnitude (objective is flat).
    pub fn discs_all_zero(&self) -> bool {
        self.discs.iter().all(|d| d.unbalance.magnitude == 0.0)
    }

    /// Shaft first, then discs in order.
    pub fn vectors(&self) -> impl Iterator<Item = Unbalance> + '_ {
        std::iter::once(self.shaft).chain(self.discs.iter().map(|d| d.unbalance))
    }
}
