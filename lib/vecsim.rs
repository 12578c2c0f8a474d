//! *N*-qubit pure states as dense vectors of 2<sup>*N*</sup> complex
//! amplitudes.
//!
//! Bit *q* of an amplitude's index is the Z-basis value of qubit *q*, so the
//! state ∣q<sub>0</sub> q<sub>1</sub> ...⟩ lives at index
//! Σ<sub>*q*</sub> q<sub>*q*</sub> 2<sup>*q*</sup>. Gates act by direct
//! update of the amplitudes they touch; memory and runtime both scale as
//! *O*(2<sup>*N*</sup>), so this is only meant for small registers, e.g. as a
//! reference against which faster simulators can be checked.
//!
//! Amplitudes are single precision and the state is never renormalized:
//! applying a non-unitary matrix silently produces a non-physical state.
//!
//! # Example
//! ```
//! use vector_sim::{ gate::Gate, vecsim::VecSim };
//!
//! fn main() -> vector_sim::error::VecSimResult<()> {
//!     // initialize a new state to ∣000⟩
//!     let mut sim = VecSim::new(3);
//!
//!     // generate a Bell state on qubits 0, 1
//!     sim.apply_named1("H", 0)?
//!         .apply_gate(Gate::CX(0, 1))?;
//!
//!     println!("{}", sim);
//!     // (+0.707+0.000i)∣000⟩ + (+0.707+0.000i)∣110⟩
//!     Ok(())
//! }
//! ```

use std::fmt;
use itertools::Itertools;
use nalgebra as na;
use num_complex::Complex32 as C32;
use tracing::{ debug, trace };
use crate::{
    error::VecSimResult,
    gate::{ self, Gate },
    pauli::PauliBits,
};

/// Multiply a square matrix into a vector, returning the product.
///
/// The matrix must have as many columns as the vector has entries.
pub fn mat_vec_mul(matrix: &na::DMatrix<C32>, vector: &na::DVector<C32>)
    -> na::DVector<C32>
{
    debug_assert_eq!(matrix.ncols(), vector.len());
    matrix * vector
}

// mask[j] is the global index offset of local index j, where bit b of j maps
// to bit qubits[b] of the global index
fn index_masks(qubits: &[usize]) -> Vec<usize> {
    (0..1_usize << qubits.len())
        .map(|j| {
            qubits.iter().enumerate()
                .filter(|(b, _)| j & (1_usize << b) != 0)
                .fold(0, |m, (_, q)| m | (1_usize << q))
        })
        .collect()
}

/// A pure state of a register of qubits, stored as its full amplitude vector.
#[derive(Clone, Debug, PartialEq)]
pub struct VecSim {
    n: usize,
    state: Vec<C32>,
}

impl VecSim {
    /// Create a new state of `n` qubits initialized to ∣0...0⟩.
    ///
    /// Allocates 2<sup>`n`</sup> amplitudes; choosing a sensible `n` is up to
    /// the caller.
    pub fn new(n: usize) -> Self {
        let mut state = vec![C32::new(0.0, 0.0); 1 << n];
        state[0] = C32::new(1.0, 0.0);
        debug!(num_qubits = n, "initialized state vector");
        Self { n, state }
    }

    /// Return the number of qubits.
    pub fn num_qubits(&self) -> usize { self.n }

    /// Return the amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &[C32] { &self.state }

    /// Return the amplitude of a single basis state, if it exists.
    pub fn amplitude(&self, idx: usize) -> Option<C32> {
        self.state.get(idx).copied()
    }

    /// Unwrap `self` into its amplitudes.
    pub fn into_amplitudes(self) -> Vec<C32> { self.state }

    /// Return the squared norm of the state, Σ |a|².
    pub fn norm_sqr(&self) -> f32 {
        self.state.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Multiply every amplitude by -1.
    pub fn negate(&mut self) -> &mut Self {
        self.state.iter_mut().for_each(|a| { *a = -*a; });
        self
    }

    /// Apply a unitary to an ordered set of qubits.
    ///
    /// `matrix` must be 2<sup>*k*</sup> × 2<sup>*k*</sup> for *k* =
    /// `qubits.len()`, with bit *b* of its local row/column index referring to
    /// qubit `qubits[b]`. Qubit indices must be distinct.
    ///
    /// *Panics* if the matrix has the wrong dimension or any qubit index is
    /// out of range.
    pub fn apply_unitary(&mut self, matrix: &na::DMatrix<C32>, qubits: &[usize])
        -> &mut Self
    {
        assert!(
            qubits.iter().all(|&q| q < self.n),
            "qubits {:?} out of range for {} qubit(s)", qubits, self.n,
        );
        let masks = index_masks(qubits);
        let n = masks.len();
        assert!(
            matrix.nrows() == n && matrix.ncols() == n,
            "{}x{} matrix cannot act on {} qubit(s)",
            matrix.nrows(), matrix.ncols(), qubits.len(),
        );
        let full = masks[n - 1];
        assert!(full < self.state.len(), "mask {:#b} exceeds state size", full);
        trace!(?qubits, groups = self.state.len() >> qubits.len(), "apply unitary");

        let mut input: na::DVector<C32> = na::DVector::zeros(n);
        for base in (0..self.state.len()).filter(|b| b & full == 0) {
            input.iter_mut().zip(&masks)
                .for_each(|(a, m)| { *a = self.state[base | m]; });
            let output = mat_vec_mul(matrix, &input);
            masks.iter().zip(output.iter())
                .for_each(|(m, a)| { self.state[base | m] = *a; });
        }
        self
    }

    /// Apply a named single-qubit gate from the [catalog][gate::unitary].
    pub fn apply_named1(&mut self, name: &str, k: usize)
        -> VecSimResult<&mut Self>
    {
        let u = gate::unitary(name)?;
        Ok(self.apply_unitary(u, &[k]))
    }

    /// Apply a named two-qubit gate from the [catalog][gate::unitary].
    ///
    /// `a` corresponds to the least significant bit of the gate's local
    /// index, e.g. the control of `CNOT`.
    pub fn apply_named2(&mut self, name: &str, a: usize, b: usize)
        -> VecSimResult<&mut Self>
    {
        let u = gate::unitary(name)?;
        Ok(self.apply_unitary(u, &[a, b]))
    }

    /// Perform the action of a gate.
    pub fn apply_gate(&mut self, gate: Gate) -> VecSimResult<&mut Self> {
        match gate.qubits() {
            (a, None) => self.apply_named1(gate.name(), a),
            (a, Some(b)) => self.apply_named2(gate.name(), a, b),
        }
    }

    /// Perform a series of gates.
    pub fn apply_circuit<'a, I>(&mut self, gates: I) -> VecSimResult<&mut Self>
    where I: IntoIterator<Item = &'a Gate>
    {
        gates.into_iter().copied()
            .try_for_each(|g| self.apply_gate(g).map(|_| ()))?;
        Ok(self)
    }

    /// Apply a Pauli string to the qubits starting at `offset`.
    ///
    /// A negative sign flips the sign of every amplitude. Each position is
    /// then decoded from its flags as described in [`crate::pauli`].
    pub fn apply_pauli<P>(&mut self, op: &P, offset: usize)
        -> VecSimResult<&mut Self>
    where P: PauliBits + ?Sized
    {
        if op.sign() { self.negate(); }
        for k in 0..op.len() {
            let q = offset + k;
            match (op.x_bit(k), op.y_bit(k)) {
                (true, true) => { self.apply_named1("Z", q)?; },
                (true, false) => { self.apply_named1("X", q)?; },
                (false, true) => { self.apply_named1("Y", q)?; },
                (false, false) => { },
            }
        }
        Ok(self)
    }

    /// Return `true` if `self` and `other` have the same size and all
    /// amplitudes agree to within `tol`.
    pub fn approx_eq(&self, other: &Self, tol: f32) -> bool {
        self.state.len() == other.state.len()
            && self.state.iter().zip(&other.state)
                .all(|(a, b)| (a - b).norm() <= tol)
    }

    /// Like [`Self::approx_eq`], but ignoring a global phase.
    ///
    /// The phase is fixed by the largest-magnitude amplitude of `self`.
    pub fn approx_eq_up_to_phase(&self, other: &Self, tol: f32) -> bool {
        if self.state.len() != other.state.len() { return false; }
        let Some((pivot, a)) =
            self.state.iter().copied().enumerate()
            .max_by(|(_, a), (_, b)| a.norm_sqr().total_cmp(&b.norm_sqr()))
            else { return true; };
        let b = other.state[pivot];
        if a.norm() <= tol || b.norm() <= tol {
            return self.approx_eq(other, tol);
        }
        let ratio = b / a;
        let phase = ratio / ratio.norm();
        self.state.iter().zip(&other.state)
            .all(|(a, b)| (a * phase - b).norm() <= tol)
    }
}

impl fmt::Display for VecSim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const CUTOFF: f32 = 1e-6;
        let terms =
            self.state.iter().enumerate()
            .filter(|(_, a)| a.norm() > CUTOFF)
            .map(|(idx, a)| {
                let bits: String =
                    (0..self.n)
                    .map(|q| if idx >> q & 1 == 1 { '1' } else { '0' })
                    .collect();
                // `+ 0.0` turns -0.0 into +0.0
                format!("({:+.3}{:+.3}i)∣{}⟩", a.re + 0.0, a.im + 0.0, bits)
            })
            .join(" + ");
        if terms.is_empty() { write!(f, "0") } else { write!(f, "{}", terms) }
    }
}
