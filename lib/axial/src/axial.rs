use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

use serde::{Deserialize, Serialize};

pub const DIRECTIONS: [Axial; 6] = [
    Axial { q: -1, r: 0 }, // west
    Axial { q: -1, r: 1 }, // south-west
    Axial { q: 0, r: 1 },  // south-east
    Axial { q: 1, r: 0 },  // east
    Axial { q: 1, r: -1 }, // north-east
    Axial { q: 0, r: -1 }, // north-west
];

/// Axial hex coordinate. The third cube axis `s = -q-r` is derived on
/// demand, never stored.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Axial {
    pub q: i16,
    pub r: i16,
}

impl Axial {
    pub const ZERO: Axial = Axial { q: 0, r: 0 };

    pub fn new(q: i16, r: i16) -> Self {
        Self { q, r }
    }

    pub fn s(&self) -> i16 {
        -self.q - self.r
    }

    pub fn distance(&self, other: &Axial) -> i16 {
        *[
            (self.q - other.q).abs(),
            (self.r - other.r).abs(),
            (self.s() - other.s()).abs(),
        ].iter().max().unwrap()
    }

    pub fn is_adjacent(&self, other: &Axial) -> bool {
        self.distance(other) == 1
    }

    pub fn neighbors(&self) -> [Axial; 6] {
        DIRECTIONS.map(|dir| *self + dir)
    }

    /// Packed scalar key, injective over the full coordinate range.
    pub fn key(&self) -> u32 {
        ((self.q as u16 as u32) << 16) | self.r as u16 as u32
    }

    /// Collapse a delta onto one of the six unit directions. The axis with
    /// strictly greater magnitude wins a pure axial step. Equal magnitudes
    /// with opposite signs take the diagonal step, itself a unit direction.
    /// Equal magnitudes with the same sign lie on the third cube axis,
    /// between two unit directions; the tie resolves onto the q axis so the
    /// result is always a single-hex step. Zero stays zero.
    pub fn unit(&self) -> Axial {
        if self.q.abs() > self.r.abs() {
            Axial { q: self.q.signum(), r: 0 }
        } else if self.r.abs() > self.q.abs() {
            Axial { q: 0, r: self.r.signum() }
        } else if self.q.signum() == -self.r.signum() {
            Axial { q: self.q.signum(), r: self.r.signum() }
        } else {
            Axial { q: self.q.signum(), r: 0 }
        }
    }
}

impl fmt::Display for Axial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.q, self.r)
    }
}

impl Add<Axial> for Axial {
    type Output = Axial;
    fn add(self, rhs: Axial) -> Self::Output {
        Axial { q: self.q + rhs.q, r: self.r + rhs.r }
    }
}

impl Sub<Axial> for Axial {
    type Output = Axial;
    fn sub(self, rhs: Axial) -> Self::Output {
        Axial { q: self.q - rhs.q, r: self.r - rhs.r }
    }
}

impl Mul<i16> for Axial {
    type Output = Axial;
    fn mul(self, rhs: i16) -> Self::Output {
        Axial { q: self.q * rhs, r: self.r * rhs }
    }
}

impl Neg for Axial {
    type Output = Axial;
    fn neg(self) -> Self::Output {
        Axial { q: -self.q, r: -self.r }
    }
}

/// Round fractional axial coordinates to the nearest hex center.
pub fn round(q0: f64, r0: f64) -> Axial {
    let s0 = -q0 - r0;
    let mut q = q0.round();
    let mut r = r0.round();
    let s = s0.round();

    let q_diff = (q - q0).abs();
    let r_diff = (r - r0).abs();
    let s_diff = (s - s0).abs();

    if q_diff > r_diff && q_diff > s_diff {
        q = -r - s;
    } else if r_diff > s_diff {
        r = -q - s;
    }

    Axial { q: q as i16, r: r as i16 }
}
