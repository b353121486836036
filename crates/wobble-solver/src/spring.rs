//! Spring network: damped springs along the welded triangle edges.
//!
//! Springs only ever reference canonical indices. Two triangles that share
//! an edge, including across a welded seam, contribute one spring between
//! them.

use std::collections::HashMap;

use glam::Vec3;
use wobble_types::constants::{DEFAULT_DAMPING, DEFAULT_STIFFNESS, ZERO_LENGTH_EPSILON};

/// Order-independent identity of a spring: `lo < hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpringKey {
    pub lo: usize,
    pub hi: usize,
}

impl SpringKey {
    /// Builds the key for the edge `a`–`b`. `None` for a self edge.
    #[inline]
    pub fn new(a: usize, b: usize) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { lo: a, hi: b }),
            std::cmp::Ordering::Greater => Some(Self { lo: b, hi: a }),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// A linear spring-damper between two canonical points.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    a: usize,
    b: usize,
    rest_length: f32,
    /// Force per unit of extension beyond rest length.
    pub stiffness: f32,
    /// Force per unit of closing speed along the spring axis.
    pub damping: f32,
}

impl Spring {
    /// Creates a spring whose rest length is the current distance between
    /// `positions[key.lo]` and `positions[key.hi]`.
    pub fn from_positions(key: SpringKey, positions: &[Vec3], stiffness: f32, damping: f32) -> Self {
        Self {
            a: key.lo,
            b: key.hi,
            rest_length: positions[key.lo].distance(positions[key.hi]),
            stiffness,
            damping,
        }
    }

    /// Lower canonical index.
    #[inline]
    pub fn a(&self) -> usize {
        self.a
    }

    /// Higher canonical index.
    #[inline]
    pub fn b(&self) -> usize {
        self.b
    }

    #[inline]
    pub fn key(&self) -> SpringKey {
        SpringKey { lo: self.a, hi: self.b }
    }

    #[inline]
    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    /// Force on endpoint `a`; endpoint `b` receives the negation.
    ///
    /// `F = dir * ((|d| - rest) * stiffness + dot(vb - va, dir) * damping)`
    /// with `d = pb - pa`. A stretched spring yields `F` pointing from `a`
    /// towards `b`, pulling the endpoints together.
    #[inline]
    pub fn force(&self, pa: Vec3, pb: Vec3, va: Vec3, vb: Vec3) -> Vec3 {
        spring_force(pa, pb, va, vb, self.rest_length, self.stiffness, self.damping)
    }

    /// Elastic energy stored at the given positions.
    pub fn potential_energy(&self, pa: Vec3, pb: Vec3) -> f32 {
        let stretch = pa.distance(pb) - self.rest_length;
        0.5 * self.stiffness * stretch * stretch
    }
}

/// Damped-elastic force along `pb - pa`, projected onto the spring axis.
///
/// Coincident endpoints have no axis and produce zero force.
pub fn spring_force(
    pa: Vec3,
    pb: Vec3,
    va: Vec3,
    vb: Vec3,
    rest_length: f32,
    stiffness: f32,
    damping: f32,
) -> Vec3 {
    let d = pb - pa;
    let length = d.length();
    if length <= ZERO_LENGTH_EPSILON {
        return Vec3::ZERO;
    }
    let dir = d / length;
    let compression = length - rest_length;
    let rel_vel = vb - va;
    dir * (compression * stiffness + rel_vel.dot(dir) * damping)
}

/// The deduplicated set of springs built from a triangle list.
///
/// Membership is fixed at construction. Iteration follows first insertion.
#[derive(Debug, Clone, Default)]
pub struct SpringNetwork {
    springs: Vec<Spring>,
    lookup: HashMap<SpringKey, usize>,
    skipped_degenerate: usize,
}

impl SpringNetwork {
    /// Builds one spring per distinct edge of the canonicalized triangles,
    /// using the default coefficients.
    pub fn build(triangles: &[[usize; 3]], positions: &[Vec3]) -> Self {
        Self::build_with(triangles, positions, DEFAULT_STIFFNESS, DEFAULT_DAMPING)
    }

    /// Builds the network with explicit global coefficients.
    ///
    /// Edges whose endpoints collapsed onto one canonical point are skipped.
    pub fn build_with(
        triangles: &[[usize; 3]],
        positions: &[Vec3],
        stiffness: f32,
        damping: f32,
    ) -> Self {
        let mut network = Self {
            springs: Vec::with_capacity(triangles.len() * 3 / 2),
            lookup: HashMap::with_capacity(triangles.len() * 3 / 2),
            skipped_degenerate: 0,
        };

        for &[a, b, c] in triangles {
            for (u, v) in [(a, b), (b, c), (c, a)] {
                let Some(key) = SpringKey::new(u, v) else {
                    network.skipped_degenerate += 1;
                    continue;
                };
                if network.lookup.contains_key(&key) {
                    continue;
                }
                network.lookup.insert(key, network.springs.len());
                network
                    .springs
                    .push(Spring::from_positions(key, positions, stiffness, damping));
            }
        }

        if network.skipped_degenerate > 0 {
            tracing::debug!(
                skipped = network.skipped_degenerate,
                "skipped degenerate triangle edges"
            );
        }

        network
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.springs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.springs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Spring> {
        self.springs.iter()
    }

    pub fn as_slice(&self) -> &[Spring] {
        &self.springs
    }

    /// Spring between `a` and `b`, in either order.
    pub fn get(&self, a: usize, b: usize) -> Option<&Spring> {
        let key = SpringKey::new(a, b)?;
        self.lookup.get(&key).map(|&i| &self.springs[i])
    }

    /// Mutable access for per-spring tuning. Rest length stays read-only.
    pub fn spring_mut(&mut self, a: usize, b: usize) -> Option<&mut Spring> {
        let key = SpringKey::new(a, b)?;
        let i = *self.lookup.get(&key)?;
        Some(&mut self.springs[i])
    }

    /// Retunes every spring.
    pub fn set_coefficients(&mut self, stiffness: f32, damping: f32) {
        for spring in &mut self.springs {
            spring.stiffness = stiffness;
            spring.damping = damping;
        }
    }

    /// Number of triangle edges dropped because both ends welded together.
    pub fn skipped_degenerate(&self) -> usize {
        self.skipped_degenerate
    }
}

impl<'a> IntoIterator for &'a SpringNetwork {
    type Item = &'a Spring;
    type IntoIter = std::slice::Iter<'a, Spring>;

    fn into_iter(self) -> Self::IntoIter {
        self.springs.iter()
    }
}
