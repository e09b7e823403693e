//! Single-spin-flip Metropolis Monte Carlo for the 2D Ising model on a
//! periodic square lattice (J = 1, h = 0, k_B = 1).
//!
//! A run builds a [`Lattice`], calls [`step`] once per epoch, and measures the
//! final configuration with [`internal_energy`], [`heat_capacity`] and
//! [`magnetization`]. [`simulation::run`] packages that loop for drivers.

pub mod config;
pub mod error;
pub mod geometry;
pub mod mcmc;
pub mod simulation;
pub mod spins;
pub mod statistics;

pub use config::RunConfig;
pub use error::{IsingError, Result};
pub use geometry::wrap;
pub use mcmc::step;
pub use simulation::{run, Snapshot};
pub use spins::{local_energy, InitialState, Lattice};
pub use statistics::{heat_capacity, internal_energy, magnetization, Observables, RunSummary};
