//! The fixed catalog of standard one- and two-qubit unitaries.
//!
//! Matrices are stored under their canonical names and built once, on first
//! access, into a read-only table shared by every [`VecSim`][crate::vecsim::VecSim].
//! For an operand list `[q0, q1]`, bit 0 of a matrix's local row/column index
//! corresponds to `q0`, so e.g. `CNOT` treats its first operand as the control.
//!
//! The typed [`Gate`] description pairs a catalog entry with its operands.

use std::{ f32::consts::FRAC_1_SQRT_2, fmt };
use itertools::Itertools;
use nalgebra as na;
use num_complex::Complex32 as C32;
use once_cell::sync::Lazy;
use rand::Rng;
use rustc_hash::FxHashMap;
use tracing::debug;
use crate::error::{ VecSimError, VecSimResult };

// build a dense matrix from its rows
fn mat<const D: usize>(rows: [[C32; D]; D]) -> na::DMatrix<C32> {
    na::DMatrix::from_fn(D, D, |r, c| rows[r][c])
}

static GATE_UNITARIES: Lazy<FxHashMap<&'static str, na::DMatrix<C32>>> =
    Lazy::new(|| {
        let c = C32::new;
        let s = FRAC_1_SQRT_2;
        let o = c(0.0, 0.0);
        let l = c(1.0, 0.0);
        let i = c(0.0, 1.0);

        let h = mat([[c(s, 0.0), c( s, 0.0)],
                     [c(s, 0.0), c(-s, 0.0)]]);
        let sqrt_x = mat([[c(0.5,  0.5), c(0.5, -0.5)],
                          [c(0.5, -0.5), c(0.5,  0.5)]]);
        let sqrt_y = mat([[c(0.5, 0.5), c(-0.5, -0.5)],
                          [c(0.5, 0.5), c( 0.5,  0.5)]]);
        let sqrt_z = mat([[l, o], [o, i]]);

        let mut gates: FxHashMap<&'static str, na::DMatrix<C32>> =
            FxHashMap::default();
        gates.insert("I", na::DMatrix::identity(2, 2));

        // Paulis
        gates.insert("X", mat([[o, l], [l, o]]));
        gates.insert("Y", mat([[o, -i], [i, o]]));
        gates.insert("Z", mat([[l, o], [o, -l]]));

        // axis exchanges
        gates.insert("H_XY", mat([[o, c(s, -s)], [c(s, s), o]]));
        gates.insert("H_XZ", h.clone());
        gates.insert("H_YZ", mat([[c(s, 0.0), c(0.0, -s)],
                                  [c(0.0, s), c(-s, 0.0)]]));
        gates.insert("H", h);

        // quarter turns
        gates.insert("SQRT_X_DAG", sqrt_x.adjoint());
        gates.insert("SQRT_X", sqrt_x);
        gates.insert("SQRT_Y_DAG", sqrt_y.adjoint());
        gates.insert("SQRT_Y", sqrt_y);
        gates.insert("SQRT_Z_DAG", sqrt_z.adjoint());
        gates.insert("S_DAG", sqrt_z.adjoint());
        gates.insert("S", sqrt_z.clone());
        gates.insert("SQRT_Z", sqrt_z);

        // two-qubit
        gates.insert("CNOT", mat([[l, o, o, o],
                                  [o, o, o, l],
                                  [o, o, l, o],
                                  [o, l, o, o]]));
        gates.insert("CZ", mat([[l, o, o,  o],
                                [o, l, o,  o],
                                [o, o, l,  o],
                                [o, o, o, -l]]));
        gates.insert("SWAP", mat([[l, o, o, o],
                                  [o, o, l, o],
                                  [o, l, o, o],
                                  [o, o, o, l]]));

        debug!(entries = gates.len(), "built gate catalog");
        gates
    });

/// Look up the unitary matrix for a named gate.
pub fn unitary(name: &str) -> VecSimResult<&'static na::DMatrix<C32>> {
    Lazy::force(&GATE_UNITARIES)
        .get(name)
        .ok_or_else(|| VecSimError::GateNotFound(name.to_string()))
}

/// Iterate over all names in the catalog, in lexicographic order.
pub fn names() -> impl Iterator<Item = &'static str> {
    Lazy::force(&GATE_UNITARIES).keys().copied().sorted()
}

/// Description of a single catalog gate acting on specific qubits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Identity
    I(usize),
    /// π rotation about X
    X(usize),
    /// π rotation about Y
    Y(usize),
    /// π rotation about Z
    Z(usize),
    /// Hadamard (exchanges the X and Z axes)
    H(usize),
    /// Exchanges the X and Y axes
    HXY(usize),
    /// Exchanges the X and Z axes; identical to `H`
    HXZ(usize),
    /// Exchanges the Y and Z axes
    HYZ(usize),
    /// π/2 rotation about X
    SqrtX(usize),
    /// -π/2 rotation about X
    SqrtXDag(usize),
    /// π/2 rotation about Y
    SqrtY(usize),
    /// -π/2 rotation about Y
    SqrtYDag(usize),
    /// π/2 rotation about Z
    S(usize),
    /// -π/2 rotation about Z
    SDag(usize),
    /// Z-controlled π rotation about X.
    ///
    /// The first qubit index is the control.
    CX(usize, usize),
    /// Z-controlled π rotation about Z.
    CZ(usize, usize),
    /// Swap
    Swap(usize, usize),
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.qubits() {
            (a, None) => write!(f, "{} {}", self.name(), a),
            (a, Some(b)) => write!(f, "{} {} {}", self.name(), a, b),
        }
    }
}

impl Gate {
    /// Return the catalog name of the gate's unitary.
    pub fn name(&self) -> &'static str {
        match self {
            Self::I(..) => "I",
            Self::X(..) => "X",
            Self::Y(..) => "Y",
            Self::Z(..) => "Z",
            Self::H(..) => "H",
            Self::HXY(..) => "H_XY",
            Self::HXZ(..) => "H_XZ",
            Self::HYZ(..) => "H_YZ",
            Self::SqrtX(..) => "SQRT_X",
            Self::SqrtXDag(..) => "SQRT_X_DAG",
            Self::SqrtY(..) => "SQRT_Y",
            Self::SqrtYDag(..) => "SQRT_Y_DAG",
            Self::S(..) => "S",
            Self::SDag(..) => "S_DAG",
            Self::CX(..) => "CNOT",
            Self::CZ(..) => "CZ",
            Self::Swap(..) => "SWAP",
        }
    }

    /// Return the gate's operands, with the second index present only for
    /// two-qubit gates.
    pub fn qubits(&self) -> (usize, Option<usize>) {
        match *self {
            Self::I(k) | Self::X(k) | Self::Y(k) | Self::Z(k)
            | Self::H(k) | Self::HXY(k) | Self::HXZ(k) | Self::HYZ(k)
            | Self::SqrtX(k) | Self::SqrtXDag(k)
            | Self::SqrtY(k) | Self::SqrtYDag(k)
            | Self::S(k) | Self::SDag(k)
                => (k, None),
            Self::CX(a, b) | Self::CZ(a, b) | Self::Swap(a, b)
                => (a, Some(b)),
        }
    }

    /// Return `true` if `self` acts on two qubits.
    pub fn is_two_qubit(&self) -> bool { self.qubits().1.is_some() }

    /// Return the gate undoing `self` on the same operands.
    pub fn inverse(self) -> Self {
        match self {
            Self::SqrtX(k) => Self::SqrtXDag(k),
            Self::SqrtXDag(k) => Self::SqrtX(k),
            Self::SqrtY(k) => Self::SqrtYDag(k),
            Self::SqrtYDag(k) => Self::SqrtY(k),
            Self::S(k) => Self::SDag(k),
            Self::SDag(k) => Self::S(k),
            g => g,
        }
    }

    /// Sample a random single-qubit gate (`H`, `X`, `Y`, `Z`, or `S`) for a
    /// given qubit index.
    pub fn sample_single<R>(idx: usize, rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        match rng.gen_range(0..5_usize) {
            0 => Self::H(idx),
            1 => Self::X(idx),
            2 => Self::Y(idx),
            3 => Self::Z(idx),
            4 => Self::S(idx),
            _ => unreachable!(),
        }
    }
}
