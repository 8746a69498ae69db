use std::fmt;

use once_cell::unsync::OnceCell;

use crate::prelude::*;

/// Parameters of a single random draw.
///
/// No validation is done: inverted or equal uniform bounds and zero or
/// negative spread all give a (possibly degenerate) value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    UniformFloat { low: f64, high: f64 },
    UniformInt { low: i64, high: i64 },
    NormalFloat { mean: f64, st_dev: f64 },
    NormalInt { mean: f64, st_dev: f64 },
}

impl Distribution {
    /// Take one sample from the current thread's [`RandomSource`].
    pub fn sample(&self) -> f64 {
        let raw = match *self {
            Distribution::UniformFloat { low, high } => uniform(low, high),
            Distribution::UniformInt { low, high } => uniform(low as f64, high as f64),
            Distribution::NormalFloat { mean, st_dev }
            | Distribution::NormalInt { mean, st_dev } => normal(mean, st_dev),
        };
        let value = if self.is_discrete() { raw.trunc() } else { raw };
        tracing::trace!(distribution = %self, value, "sampled");
        value
    }

    pub fn is_discrete(&self) -> bool {
        matches!(
            self,
            Distribution::UniformInt { .. } | Distribution::NormalInt { .. }
        )
    }
}

#[inline]
fn uniform(low: f64, high: f64) -> f64 {
    low + (high - low) * RandomSource::unit()
}

#[inline]
fn normal(mean: f64, st_dev: f64) -> f64 {
    mean + st_dev * RandomSource::standard_normal()
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distribution::UniformFloat { low, high } => {
                write!(f, "UniformFloat(low={}, high={})", low, high)
            }
            Distribution::UniformInt { low, high } => {
                write!(f, "UniformInt(low={}, high={})", low, high)
            }
            Distribution::NormalFloat { mean, st_dev } => {
                write!(f, "NormalFloat(mean={}, st_dev={})", mean, st_dev)
            }
            Distribution::NormalInt { mean, st_dev } => {
                write!(f, "NormalInt(mean={}, st_dev={})", mean, st_dev)
            }
        }
    }
}

/* ═══════════════════════  LEAF: DistributionLeaf  ═════════════════════ */

/// A leaf holding one draw of its distribution.
///
/// Sampling happens in [`DistributionLeaf::new`], not on first use, so every
/// holder of the node sees the same value from the moment it exists.
#[derive(Debug)]
pub struct DistributionLeaf {
    distribution: Distribution,
    value: OnceCell<f64>,
}

impl DistributionLeaf {
    pub fn new(distribution: Distribution) -> Self {
        let leaf = Self {
            distribution,
            value: OnceCell::new(),
        };
        leaf.value();
        leaf
    }

    #[inline]
    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    #[inline]
    pub fn cached(&self) -> Option<f64> {
        self.value.get().copied()
    }

    pub fn value(&self) -> f64 {
        *self.value.get_or_init(|| self.distribution.sample())
    }
}

/* ════════════════  PUBLIC CONSTRUCTORS (free fns)  ══════════════════ */

#[inline]
pub fn uniform_float(low: f64, high: f64) -> Node {
    Node::distribution(Distribution::UniformFloat { low, high })
}
#[inline]
pub fn uniform_int(low: i64, high: i64) -> Node {
    Node::distribution(Distribution::UniformInt { low, high })
}
#[inline]
pub fn normal_float(mean: f64, st_dev: f64) -> Node {
    Node::distribution(Distribution::NormalFloat { mean, st_dev })
}
#[inline]
pub fn normal_int(mean: f64, st_dev: f64) -> Node {
    Node::distribution(Distribution::NormalInt { mean, st_dev })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampled_at_construction() {
        let before = RandomSource::draws();
        let d = uniform_float(0.0, 1.0);
        assert_eq!(RandomSource::draws(), before + 1);
        assert!(d.cached().is_some());
    }

    #[test]
    fn test_single_sample() {
        let d = normal_float(10.0, 3.0);
        let after_construction = RandomSource::draws();
        let first = d.resolve().unwrap();
        for _ in 0..10 {
            assert_eq!(d.resolve().unwrap(), first);
        }
        assert_eq!(RandomSource::draws(), after_construction);
    }

    #[test]
    fn test_degenerate_uniform_int() {
        let d = uniform_int(0, 0);
        assert_eq!(d.resolve().unwrap(), 0.0);
        assert_eq!(d.resolve().unwrap(), 0.0);
    }

    #[test]
    fn test_zero_spread_normal() {
        assert_eq!(normal_float(0.0, 0.0).resolve().unwrap(), 0.0);
        assert_eq!(normal_int(4.7, 0.0).resolve().unwrap(), 4.0);
        assert_eq!(normal_int(-4.7, 0.0).resolve().unwrap(), -4.0);
    }

    #[test]
    fn test_negative_spread_mirrors_draw() {
        RandomSource::seed(11);
        let first = normal_float(5.0, 2.0).resolve().unwrap();
        RandomSource::seed(11);
        let mirrored = normal_float(5.0, -2.0).resolve().unwrap();
        assert!((mirrored - (10.0 - first)).abs() < 1e-12);
    }

    #[test]
    fn test_ranges() {
        RandomSource::seed(42);
        for _ in 0..200 {
            let u = uniform_float(10.0, 20.0).resolve().unwrap();
            assert!((10.0..20.0).contains(&u));
            let i = uniform_int(-3, 3).resolve().unwrap();
            assert_eq!(i, i.trunc());
            assert!((-3.0..3.0).contains(&i));
        }
    }

    #[test]
    fn test_inverted_bounds_are_permitted() {
        let u = uniform_float(5.0, 1.0).resolve().unwrap();
        assert!(u > 1.0 && u <= 5.0);
    }

    #[test]
    fn test_seeded_leaves_repeat() {
        RandomSource::seed(3);
        let a = (uniform_float(0.0, 1.0), normal_int(0.0, 50.0));
        RandomSource::seed(3);
        let b = (uniform_float(0.0, 1.0), normal_int(0.0, 50.0));
        assert_eq!(a.0.resolve().unwrap(), b.0.resolve().unwrap());
        assert_eq!(a.1.resolve().unwrap(), b.1.resolve().unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            uniform_float(10.0, 20.5).to_string(),
            "UniformFloat(low=10, high=20.5)"
        );
        assert_eq!(uniform_int(0, 3).to_string(), "UniformInt(low=0, high=3)");
        assert!(Distribution::NormalInt { mean: 0.0, st_dev: 1.0 }.is_discrete());
    }
}
