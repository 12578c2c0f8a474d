//! Pauli operators as seen by the simulator.
//!
//! [`VecSim::apply_pauli`][crate::vecsim::VecSim::apply_pauli] does not care
//! how a Pauli string is stored, only that it can answer the queries in
//! [`PauliBits`]. Each qubit position carries two flags, an "x bit" and a "y
//! bit", encoded so that
//! - neither set ↔ *I*
//! - x bit only ↔ *X*
//! - y bit only ↔ *Y*
//! - both set ↔ *Z*
//!
//! [`PauliString`] is a plain owned implementation of this encoding.

use std::{ fmt, str::FromStr };
use crate::error::VecSimError;

/// Read-only, bit-encoded view of a signed *N*-qubit Pauli string.
pub trait PauliBits {
    /// Return `true` if the operator carries an overall factor of -1.
    fn sign(&self) -> bool;

    /// Return the number of qubit positions covered.
    fn len(&self) -> usize;

    /// Return `true` if no qubit positions are covered.
    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Return the x bit at position `k`.
    fn x_bit(&self, k: usize) -> bool;

    /// Return the y bit at position `k`.
    fn y_bit(&self, k: usize) -> bool;
}

/// A single-qubit Pauli operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pauli {
    /// Identity
    I,
    /// σ<sub>*x*</sub>
    X,
    /// σ<sub>*y*</sub>
    Y,
    /// σ<sub>*z*</sub>
    Z,
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::I => write!(f, "{}", if f.alternate() { "." } else { "_" }),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl Pauli {
    /// Decode from an (x bit, y bit) pair.
    pub fn from_bits(x: bool, y: bool) -> Self {
        match (x, y) {
            (false, false) => Self::I,
            (true, false) => Self::X,
            (false, true) => Self::Y,
            (true, true) => Self::Z,
        }
    }

    /// Encode as an (x bit, y bit) pair.
    pub fn to_bits(self) -> (bool, bool) {
        match self {
            Self::I => (false, false),
            Self::X => (true, false),
            Self::Y => (false, true),
            Self::Z => (true, true),
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            'I' | '_' | '.' => Some(Self::I),
            'X' => Some(Self::X),
            'Y' => Some(Self::Y),
            'Z' => Some(Self::Z),
            _ => None,
        }
    }
}

/// A tensor product of single-qubit Paulis with an overall sign.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct PauliString {
    /// `true` for an overall factor of -1.
    pub sign: bool,
    /// One operator per qubit, starting from the lowest index.
    pub ops: Vec<Pauli>,
}

impl PauliString {
    /// Create a positive identity string over `n` qubits.
    pub fn identity(n: usize) -> Self {
        Self { sign: false, ops: vec![Pauli::I; n] }
    }

    /// Create a string from a sign and a sequence of operators.
    pub fn new<I>(sign: bool, ops: I) -> Self
    where I: IntoIterator<Item = Pauli>
    {
        Self { sign, ops: ops.into_iter().collect() }
    }

    /// Return the number of non-identity operators.
    pub fn weight(&self) -> usize {
        self.ops.iter().filter(|p| **p != Pauli::I).count()
    }
}

impl PauliBits for PauliString {
    fn sign(&self) -> bool { self.sign }

    fn len(&self) -> usize { self.ops.len() }

    fn x_bit(&self, k: usize) -> bool { self.ops[k].to_bits().0 }

    fn y_bit(&self, k: usize) -> bool { self.ops[k].to_bits().1 }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.sign { '-' } else { '+' })?;
        self.ops.iter()
            .try_for_each(|p| fmt::Display::fmt(p, f))
    }
}

impl FromStr for PauliString {
    type Err = VecSimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, body) =
            if let Some(rest) = s.strip_prefix('-') {
                (true, rest)
            } else {
                (false, s.strip_prefix('+').unwrap_or(s))
            };
        let skip = s.chars().count() - body.chars().count();
        let ops: Vec<Pauli> =
            body.chars().enumerate()
            .map(|(k, ch)| {
                Pauli::from_char(ch)
                    .ok_or_else(|| VecSimError::PauliParse {
                        string: s.to_string(),
                        ch,
                        pos: skip + k,
                    })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { sign, ops })
    }
}
