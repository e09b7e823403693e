use crate::spins::Lattice;

use super::observables::{fluctuation, internal_energy, magnetization};

/// Observables of one spin configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observables {
    /// |⟨s⟩| — absolute mean spin per site.
    pub magnetization: f64,
    /// ⟨e⟩ — mean site energy.
    pub energy: f64,
    /// ⟨e²⟩.
    pub energy2: f64,
    /// ⟨e²⟩ − ⟨e⟩², without temperature normalization.
    pub heat_capacity: f64,
}

impl Observables {
    /// Scan the lattice once for energies and once for magnetization.
    pub fn measure(lattice: &Lattice) -> Self {
        let (energy, energy2) = internal_energy(lattice);
        Self {
            magnetization: magnetization(lattice),
            energy,
            energy2,
            heat_capacity: fluctuation(energy, energy2),
        }
    }
}

/// Outcome of a completed [`run`](crate::simulation::run).
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Epochs executed, one trial flip each.
    pub epochs: usize,
    /// Trial flips that were accepted.
    pub accepted: usize,
    /// Snapshots handed to the frame observer.
    pub frames: usize,
    /// Observables of the final configuration.
    pub observables: Observables,
}

impl RunSummary {
    pub fn acceptance_rate(&self) -> f64 {
        if self.epochs == 0 {
            return 0.0;
        }
        self.accepted as f64 / self.epochs as f64
    }
}
