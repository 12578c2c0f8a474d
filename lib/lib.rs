//! Brute-force simulation of small registers of qubits by direct update of
//! their full complex amplitude vectors.
//!
//! No restriction is placed on the gates applied: any unitary on any ordered
//! subset of qubits is accepted by [`VecSim::apply_unitary`], and the standard
//! Clifford gates are available by name through the [`gate`] catalog. The
//! price is *O*(2<sup>*N*</sup>) memory and time per gate, so this is mostly
//! useful as ground truth when checking faster, more specialized simulators.

pub mod error;
pub mod gate;
pub mod pauli;
pub mod vecsim;

pub use error::{ VecSimError, VecSimResult };
pub use gate::Gate;
pub use pauli::{ Pauli, PauliBits, PauliString };
pub use vecsim::VecSim;
