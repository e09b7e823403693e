pub mod observables;
pub mod results;

pub use observables::{heat_capacity, internal_energy, magnetization};
pub use results::{Observables, RunSummary};
