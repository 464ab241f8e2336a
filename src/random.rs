//! Random colour generation.
//!
//! The core of this module is [`random_opaque`], which draws from a
//! caller-supplied generator so tests can substitute a seeded source.
//! [`ColourGenerator`] owns a seeded generator for repeated draws, and
//! [`random_colour`] is the one-shot convenience on top of it.

use rand::{
    distributions::{Distribution, Standard},
    rngs::{OsRng, StdRng},
    Rng, SeedableRng,
};

use crate::colour::Colour;

use kv_log_macro as log;
use std::fmt;

#[derive(Debug)]
pub enum RandomError {
    /// The platform random source could not be read
    SourceUnavailable(rand::Error),
}

impl fmt::Display for RandomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomError::SourceUnavailable(err) => {
                write!(f, "Random source unavailable: {}", err)
            }
        }
    }
}

impl std::error::Error for RandomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RandomError::SourceUnavailable(err) => Some(err),
        }
    }
}

impl From<rand::Error> for RandomError {
    fn from(err: rand::Error) -> Self {
        RandomError::SourceUnavailable(err)
    }
}

pub type Result<T> = std::result::Result<T, RandomError>;

/// Draws three independent samples, each uniform over [0.0, 1.0), for the
/// red, green and blue channels. Alpha is always exactly 1.0.
///
/// Advances only the generator it is handed; there is no process-wide
/// random state in this crate.
pub fn random_opaque<R: Rng + ?Sized>(rng: &mut R) -> Colour {
    Colour::opaque(rng.gen(), rng.gen(), rng.gen())
}

impl Distribution<Colour> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Colour {
        random_opaque(rng)
    }
}

/// A seedable source of random colours.
///
/// Each instance owns its generator and advances independently. The type is
/// `Send` but not `Sync`: to draw colours from several threads, give each
/// thread its own generator rather than sharing one.
#[derive(Debug)]
pub struct ColourGenerator {
    rng: StdRng,
}

impl ColourGenerator {
    /// Seeds a generator from the operating system entropy source.
    ///
    /// Fails with [`RandomError::SourceUnavailable`] when the entropy
    /// source cannot be read.
    pub fn from_entropy() -> Result<ColourGenerator> {
        let rng = StdRng::from_rng(OsRng).map_err(|err| {
            log::error!("Random source unavailable", {
                error: format!("{}", err).as_str()
            });
            RandomError::SourceUnavailable(err)
        })?;

        Ok(ColourGenerator { rng })
    }

    /// A deterministic generator: the same seed yields the same sequence
    /// of colours.
    pub fn from_seed(seed: u64) -> ColourGenerator {
        ColourGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_colour(&mut self) -> Colour {
        random_opaque(&mut self.rng)
    }
}

/// One opaque random colour from a freshly seeded generator.
///
/// Fails only when the platform random source cannot be read. Callers
/// styling UI elements typically fall back to a fixed colour instead of
/// leaving the element unstyled:
///
/// ```
/// use swatch::{random_colour, Colour};
///
/// let colour = random_colour().unwrap_or(Colour::MID_GREY);
/// assert!(colour.is_opaque());
/// ```
///
/// For repeated draws, seed a [`ColourGenerator`] once and reuse it.
pub fn random_colour() -> Result<Colour> {
    let mut generator = ColourGenerator::from_entropy()?;
    Ok(generator.next_colour())
}
