//! Property-based checks of the state-vector simulator against identities of
//! the catalog gates.

use proptest::prelude::*;
use vector_sim::{ Gate, Pauli, PauliString, VecSim };

const N: usize = 4;
const EPS: f32 = 1e-4;

const SINGLE: [fn(usize) -> Gate; 13] = [
    Gate::I, Gate::X, Gate::Y, Gate::Z, Gate::H, Gate::HXY, Gate::HYZ,
    Gate::SqrtX, Gate::SqrtXDag, Gate::SqrtY, Gate::SqrtYDag,
    Gate::S, Gate::SDag,
];

const DOUBLE: [fn(usize, usize) -> Gate; 3] = [Gate::CX, Gate::CZ, Gate::Swap];

fn arb_gate(n: usize) -> impl Strategy<Value = Gate> {
    prop_oneof![
        3 => (0..n, 0..SINGLE.len())
            .prop_map(|(q, k)| SINGLE[k](q)),
        1 => (0..n, 0..n, 0..DOUBLE.len())
            .prop_filter("distinct operands", |(a, b, _)| a != b)
            .prop_map(|(a, b, k)| DOUBLE[k](a, b)),
    ]
}

fn arb_pauli(n: usize) -> impl Strategy<Value = PauliString> {
    let op = prop_oneof![
        Just(Pauli::I), Just(Pauli::X), Just(Pauli::Y), Just(Pauli::Z),
    ];
    (any::<bool>(), prop::collection::vec(op, 0..=n))
        .prop_map(|(sign, ops)| PauliString { sign, ops })
}

fn run(gates: &[Gate]) -> VecSim {
    let mut sim = VecSim::new(N);
    sim.apply_circuit(gates).unwrap();
    sim
}

proptest! {
    #[test]
    fn circuits_preserve_norm(gates in prop::collection::vec(arb_gate(N), 0..40)) {
        let sim = run(&gates);
        prop_assert!((sim.norm_sqr() - 1.0).abs() < EPS);
    }

    #[test]
    fn inverse_circuit_restores_initial_state(
        gates in prop::collection::vec(arb_gate(N), 0..40)
    ) {
        let mut sim = run(&gates);
        let undo: Vec<Gate> = gates.iter().rev().map(|g| g.inverse()).collect();
        sim.apply_circuit(&undo).unwrap();
        prop_assert!(sim.approx_eq(&VecSim::new(N), EPS));
    }

    #[test]
    fn pauli_strings_square_to_identity(
        gates in prop::collection::vec(arb_gate(N), 0..20),
        pauli in arb_pauli(N),
    ) {
        let init = run(&gates);
        let offset = N - pauli.ops.len();
        let mut sim = init.clone();
        sim.apply_pauli(&pauli, offset).unwrap();
        sim.apply_pauli(&pauli, offset).unwrap();
        prop_assert!(sim.approx_eq(&init, EPS));
    }

    #[test]
    fn pauli_matches_gate_sequence(
        gates in prop::collection::vec(arb_gate(N), 0..20),
        pauli in arb_pauli(N),
    ) {
        let init = run(&gates);
        let mut sim = init.clone();
        sim.apply_pauli(&pauli, 0).unwrap();

        let mut expected = init;
        if pauli.sign { expected.negate(); }
        for (q, op) in pauli.ops.iter().enumerate() {
            match op {
                Pauli::I => { },
                Pauli::X => { expected.apply_gate(Gate::X(q)).unwrap(); },
                Pauli::Y => { expected.apply_gate(Gate::Y(q)).unwrap(); },
                Pauli::Z => { expected.apply_gate(Gate::Z(q)).unwrap(); },
            }
        }
        prop_assert_eq!(sim, expected);
    }
}
