use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::Rng;

use crate::error::{IsingError, Result};

/// How a freshly built lattice is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialState {
    /// Each site independently −1 or +1 with equal probability.
    Random,
    /// Every site +1, for watching magnetization decay from full order.
    Uniform,
}

impl TryFrom<&str> for InitialState {
    type Error = IsingError;
    fn try_from(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "random" => Ok(Self::Random),
            "u" | "uniform" => Ok(Self::Uniform),
            _ => Err(IsingError::InvalidArgument(format!(
                "unknown initial state '{s}', expected 'r' (random) or 'u' (uniform)"
            ))),
        }
    }
}

impl FromStr for InitialState {
    type Err = IsingError;
    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s)
    }
}

impl fmt::Display for InitialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Uniform => write!(f, "uniform"),
        }
    }
}

/// Periodic `size × size` square lattice of Ising spins at a fixed temperature.
///
/// Spins are stored row-major: site `(row, col)` lives at `row * size + col`.
/// Every entry is exactly −1 or +1. The only way to change a spin after
/// construction is the Metropolis step, which flips one site at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    size: usize,
    temperature: f64,
    spins: Vec<i8>,
}

impl Lattice {
    /// Build a lattice in the requested initial state.
    ///
    /// `Random` draws one value per site from `rng` in row-major order;
    /// `Uniform` consumes no randomness. Fails with
    /// [`IsingError::InvalidArgument`] for `size == 0` or a temperature that is
    /// not finite and strictly positive.
    pub fn build<R: Rng + ?Sized>(
        mode: InitialState,
        size: usize,
        temperature: f64,
        rng: &mut R,
    ) -> Result<Self> {
        check_params(size, temperature)?;
        let n_spins = size * size;

        let spins = match mode {
            InitialState::Random => (0..n_spins)
                .map(|_| if rng.gen::<f64>() < 0.5 { -1 } else { 1 })
                .collect(),
            InitialState::Uniform => vec![1i8; n_spins],
        };

        debug!("built {mode} lattice: size={size} temperature={temperature}");
        Ok(Self {
            size,
            temperature,
            spins,
        })
    }

    /// Parse `token` as an [`InitialState`] and build from it.
    ///
    /// An unrecognized token fails before anything is allocated.
    pub fn build_from_token<R: Rng + ?Sized>(
        token: &str,
        size: usize,
        temperature: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let mode = InitialState::try_from(token)?;
        Self::build(mode, size, temperature, rng)
    }

    /// Rebuild a lattice from a row-major spin array, e.g. a saved snapshot.
    pub fn from_spins(size: usize, temperature: f64, spins: Vec<i8>) -> Result<Self> {
        check_params(size, temperature)?;
        if spins.len() != size * size {
            return Err(IsingError::InvalidArgument(format!(
                "expected {} spins for a {size}x{size} lattice, got {}",
                size * size,
                spins.len()
            )));
        }
        if let Some(pos) = spins.iter().position(|&s| s != 1 && s != -1) {
            return Err(IsingError::InvalidArgument(format!(
                "spin at index {pos} is {}, expected -1 or +1",
                spins[pos]
            )));
        }
        Ok(Self {
            size,
            temperature,
            spins,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Total number of sites, `size²`.
    pub fn n_spins(&self) -> usize {
        self.spins.len()
    }

    /// Read-only view of all spins in row-major order.
    pub fn spins(&self) -> &[i8] {
        &self.spins
    }

    #[inline]
    pub fn spin(&self, row: usize, col: usize) -> i8 {
        self.spins[row * self.size + col]
    }

    /// Owned copy of the spin array, safe to hand to a renderer while the
    /// lattice keeps evolving.
    pub fn snapshot(&self) -> Vec<i8> {
        self.spins.clone()
    }

    #[inline]
    pub(crate) fn flip(&mut self, row: usize, col: usize) {
        let i = row * self.size + col;
        self.spins[i] = -self.spins[i];
    }
}

fn check_params(size: usize, temperature: f64) -> Result<()> {
    if size == 0 {
        return Err(IsingError::InvalidArgument(
            "lattice size must be >= 1".to_string(),
        ));
    }
    if size > isize::MAX as usize / size {
        return Err(IsingError::InvalidArgument(format!(
            "lattice size {size} is too large"
        )));
    }
    if !temperature.is_finite() || temperature <= 0.0 {
        return Err(IsingError::InvalidArgument(format!(
            "temperature must be finite and > 0, got {temperature}"
        )));
    }
    Ok(())
}
