//! End-to-end signaling tests: emitter → boundary → caller.

use pretty_assertions::assert_eq;
use rstest::rstest;

use fault_core::boundary::RUNTIME_CLASS;
use fault_core::{Boundary, ErrorKind, Fault, FaultEmitter, Operation, Probe};

#[rstest]
#[case(Operation::Op0, ErrorKind::Error0)]
#[case(Operation::Op1, ErrorKind::Error1)]
#[case(Operation::Op2, ErrorKind::Error2)]
#[case(Operation::Op3, ErrorKind::Error3)]
fn operation_always_signals_its_kind(#[case] operation: Operation, #[case] kind: ErrorKind) {
    let emitter = FaultEmitter::new();
    for _ in 0..3 {
        assert_eq!(emitter.invoke(operation), Err(Fault::of(kind)));
    }
}

#[rstest]
#[case(Operation::Op0, ErrorKind::Error0)]
#[case(Operation::Op1, ErrorKind::Error1)]
#[case(Operation::Op2, ErrorKind::Error2)]
#[case(Operation::Op3, ErrorKind::Error3)]
fn kind_survives_the_boundary(#[case] operation: Operation, #[case] kind: ErrorKind) {
    let signal = Boundary::new()
        .invoke(&FaultEmitter::new(), operation)
        .expect("crossing should succeed");
    assert_eq!(signal.kind, kind);
    assert_eq!(signal.code, kind.code());
    assert_eq!(signal.class, kind.class_name());
}

#[test]
fn repeated_op0_is_idempotent_failure() {
    let boundary = Boundary::new();
    let emitter = FaultEmitter::new();
    let first = boundary.invoke(&emitter, Operation::Op0).unwrap();
    let second = boundary.invoke(&emitter, Operation::Op0).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.kind, ErrorKind::Error0);
}

#[test]
fn op1_is_distinct_from_op0() {
    let boundary = Boundary::new();
    let emitter = FaultEmitter::new();
    let zero = boundary.invoke(&emitter, Operation::Op0).unwrap();
    let one = boundary.invoke(&emitter, Operation::Op1).unwrap();
    assert_eq!(one.kind, ErrorKind::Error1);
    assert_ne!(zero.discriminant(), one.discriminant());
}

#[test]
fn op0_then_op2_keep_order_and_kind() {
    let report = Probe::default().run(&[Operation::Op0, Operation::Op2], 1);
    assert!(report.passed);
    let kinds: Vec<ErrorKind> = report
        .observations
        .iter()
        .map(|observation| observation.signal.kind)
        .collect();
    assert_eq!(kinds, vec![ErrorKind::Error0, ErrorKind::Error2]);
}

#[test]
fn all_kinds_are_pairwise_distinguishable() {
    let boundary = Boundary::new();
    let emitter = FaultEmitter::new();
    let signals: Vec<_> = Operation::ALL
        .into_iter()
        .map(|operation| boundary.invoke(&emitter, operation).unwrap())
        .collect();
    for (index, left) in signals.iter().enumerate() {
        for right in &signals[index + 1..] {
            assert_ne!(left.discriminant(), right.discriminant());
            assert_ne!(left.class, right.class);
        }
    }
}

#[test]
fn runtime_surface_still_distinguishes_kinds() {
    let boundary = Boundary::with_runtime_kinds(&[ErrorKind::Error2, ErrorKind::Error3]);
    let report = Probe::new(boundary).run(&Operation::ALL, 2);
    assert!(report.passed, "violations: {:?}", report.violations);

    let op2 = &report.observations[2].signal;
    let op3 = &report.observations[3].signal;
    assert_eq!(op2.class, RUNTIME_CLASS);
    assert_eq!(op3.class, RUNTIME_CLASS);
    assert_ne!(op2.discriminant(), op3.discriminant());
}

#[test]
fn invocations_leave_no_observable_state() {
    let emitter = FaultEmitter::new();
    let before = emitter;
    for operation in Operation::ALL {
        let _ = emitter.invoke(operation);
    }
    assert_eq!(emitter, before);
}

#[test]
fn parallel_probe_matches_sequential_probe() {
    let probe = Probe::default();
    let sequential = probe.run(&Operation::ALL, 16);
    let parallel = probe.run_parallel(&Operation::ALL, 16);
    assert!(parallel.passed);
    assert_eq!(parallel, sequential);
}

#[test]
fn tampered_envelope_never_passes_as_another_kind() {
    let boundary = Boundary::new();
    let signal = boundary.invoke(&FaultEmitter::new(), Operation::Op1).unwrap();
    let payload = boundary
        .encode(&signal)
        .unwrap()
        .replace("\"error1\"", "\"error0\"");
    assert!(boundary.decode(&payload).is_err());
}
