//! Caller-side probe for the fault emitter.
//!
//! The probe invokes operations through a [`Boundary`], records what came
//! out the far side, and checks three properties over the recorded
//! observations:
//!
//! - each operation signaled the kind its static mapping names;
//! - repeated invocations of one operation produced identical signals;
//! - no two operations produced the same discriminant.

use std::collections::BTreeMap;

use rayon::prelude::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::boundary::{Boundary, Signal};
use crate::emitter::FaultEmitter;
use crate::kinds::{ErrorKind, Operation};

/// One invocation as the caller observed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Observation {
    pub sequence: u32,
    pub operation: Operation,
    pub signal: Signal,
}

/// A broken guarantee found by the probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Error)]
#[serde(tag = "violation", rename_all = "snake_case")]
pub enum Violation {
    #[error("{operation} signaled {observed}, expected {expected} (sequence {sequence})")]
    WrongKind {
        sequence: u32,
        operation: Operation,
        expected: ErrorKind,
        observed: ErrorKind,
    },

    #[error("{operation} changed its signal at sequence {sequence}")]
    NonDeterministic {
        sequence: u32,
        operation: Operation,
        first: Signal,
        later: Signal,
    },

    #[error("{left} and {right} both surfaced as {kind}")]
    Conflated {
        left: Operation,
        right: Operation,
        kind: ErrorKind,
    },

    #[error("{operation} could not be decoded at sequence {sequence}: {reason}")]
    Undecodable {
        sequence: u32,
        operation: Operation,
        reason: String,
    },
}

/// Outcome of a probe run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProbeReport {
    pub observations: Vec<Observation>,
    pub violations: Vec<Violation>,
    pub passed: bool,
}

impl ProbeReport {
    /// Check recorded observations and fold in violations found earlier
    /// (decode failures).
    #[must_use]
    pub fn evaluate(observations: Vec<Observation>, mut violations: Vec<Violation>) -> Self {
        let mut first_seen: BTreeMap<Operation, &Signal> = BTreeMap::new();

        for observation in &observations {
            let expected = observation.operation.signals();
            if observation.signal.kind != expected {
                violations.push(Violation::WrongKind {
                    sequence: observation.sequence,
                    operation: observation.operation,
                    expected,
                    observed: observation.signal.kind,
                });
            }

            match first_seen.get(&observation.operation) {
                Some(first) if **first != observation.signal => {
                    violations.push(Violation::NonDeterministic {
                        sequence: observation.sequence,
                        operation: observation.operation,
                        first: (*first).clone(),
                        later: observation.signal.clone(),
                    });
                }
                Some(_) => {}
                None => {
                    first_seen.insert(observation.operation, &observation.signal);
                }
            }
        }

        let firsts: Vec<(Operation, &Signal)> = first_seen.into_iter().collect();
        for (index, (left, left_signal)) in firsts.iter().enumerate() {
            for (right, right_signal) in &firsts[index + 1..] {
                if left_signal.discriminant() == right_signal.discriminant() {
                    violations.push(Violation::Conflated {
                        left: *left,
                        right: *right,
                        kind: left_signal.kind,
                    });
                }
            }
        }

        for violation in &violations {
            tracing::warn!(%violation, "probe violation");
        }

        let passed = violations.is_empty();
        Self {
            observations,
            violations,
            passed,
        }
    }
}

/// Largest accepted round count for one run.
pub const MAX_REPEAT: u32 = 10_000;

/// Invokes emitter operations through a boundary and evaluates the results.
#[derive(Debug, Clone, Copy, Default)]
pub struct Probe {
    boundary: Boundary,
    emitter: FaultEmitter,
}

impl Probe {
    #[must_use]
    pub const fn new(boundary: Boundary) -> Self {
        Self {
            boundary,
            emitter: FaultEmitter::new(),
        }
    }

    #[must_use]
    pub const fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    /// Invoke `operations` for `repeat` rounds, one after another.
    ///
    /// `repeat` is capped at [`MAX_REPEAT`].
    #[must_use]
    pub fn run(&self, operations: &[Operation], repeat: u32) -> ProbeReport {
        let schedule = Self::schedule(operations, repeat);
        tracing::debug!(invocations = schedule.len(), "probe run");
        let results = schedule
            .into_iter()
            .map(|(sequence, operation)| self.observe(sequence, operation))
            .collect();
        Self::report(results)
    }

    /// Same as [`Probe::run`], with invocations spread over the rayon pool.
    ///
    /// Observations keep their sequence order.
    #[must_use]
    pub fn run_parallel(&self, operations: &[Operation], repeat: u32) -> ProbeReport {
        let schedule = Self::schedule(operations, repeat);
        tracing::debug!(invocations = schedule.len(), "parallel probe run");
        let results = schedule
            .into_par_iter()
            .map(|(sequence, operation)| self.observe(sequence, operation))
            .collect();
        Self::report(results)
    }

    /// Round-robin order: every operation once per round.
    fn schedule(operations: &[Operation], repeat: u32) -> Vec<(u32, Operation)> {
        (0..repeat.min(MAX_REPEAT))
            .flat_map(|_| operations.iter().copied())
            .zip(0u32..)
            .map(|(operation, sequence)| (sequence, operation))
            .collect()
    }

    fn observe(&self, sequence: u32, operation: Operation) -> Result<Observation, Violation> {
        let signal = self.boundary.cross(operation, self.emitter.invoke(operation));
        let payload = self
            .boundary
            .encode(&signal)
            .map_err(|error| Violation::Undecodable {
                sequence,
                operation,
                reason: error.to_string(),
            })?;
        self.receive(sequence, operation, &payload)
    }

    /// Accept one encoded envelope from the far side of the boundary.
    ///
    /// Only envelope structure is checked here. Whether the kind matches the
    /// operation is judged by [`ProbeReport::evaluate`].
    fn receive(
        &self,
        sequence: u32,
        operation: Operation,
        payload: &str,
    ) -> Result<Observation, Violation> {
        match self.boundary.parse(payload) {
            Ok(signal) => {
                tracing::debug!(
                    sequence,
                    %operation,
                    kind = %signal.kind,
                    class = %signal.class,
                    "observed fault"
                );
                Ok(Observation {
                    sequence,
                    operation,
                    signal,
                })
            }
            Err(error) => Err(Violation::Undecodable {
                sequence,
                operation,
                reason: error.to_string(),
            }),
        }
    }

    fn report(results: Vec<Result<Observation, Violation>>) -> ProbeReport {
        let mut observations = Vec::with_capacity(results.len());
        let mut violations = Vec::new();
        for result in results {
            match result {
                Ok(observation) => observations.push(observation),
                Err(violation) => violations.push(violation),
            }
        }
        ProbeReport::evaluate(observations, violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::SurfaceStyle;
    use pretty_assertions::assert_eq;

    fn observation(sequence: u32, operation: Operation, kind: ErrorKind) -> Observation {
        Observation {
            sequence,
            operation,
            signal: Signal::new(operation, kind, SurfaceStyle::Typed),
        }
    }

    #[test]
    fn schedule_is_round_robin() {
        let schedule = Probe::schedule(&[Operation::Op0, Operation::Op2], 2);
        assert_eq!(
            schedule,
            vec![
                (0, Operation::Op0),
                (1, Operation::Op2),
                (2, Operation::Op0),
                (3, Operation::Op2),
            ]
        );
    }

    #[test]
    fn zero_repeat_runs_nothing_and_passes() {
        let report = Probe::default().run(&Operation::ALL, 0);
        assert!(report.observations.is_empty());
        assert!(report.passed);
    }

    #[test]
    fn evaluate_flags_wrong_kind() {
        let report = ProbeReport::evaluate(
            vec![observation(0, Operation::Op1, ErrorKind::Error3)],
            Vec::new(),
        );
        assert!(!report.passed);
        assert!(matches!(
            report.violations[0],
            Violation::WrongKind {
                operation: Operation::Op1,
                expected: ErrorKind::Error1,
                observed: ErrorKind::Error3,
                ..
            }
        ));
    }

    #[test]
    fn schedule_stops_at_max_repeat() {
        let schedule = Probe::schedule(&[Operation::Op1], u32::MAX);
        assert_eq!(schedule.len(), MAX_REPEAT as usize);
    }

    #[test]
    fn misrouted_envelope_is_reported_as_wrong_kind() {
        let probe = Probe::default();
        let misrouted = Signal::new(Operation::Op1, ErrorKind::Error3, SurfaceStyle::Typed);
        let payload = probe.boundary().encode(&misrouted).unwrap();

        let received = vec![
            probe.observe(0, Operation::Op1),
            probe.receive(1, Operation::Op1, &payload),
        ];
        let report = Probe::report(received);

        assert!(!report.passed);
        assert_eq!(report.observations.len(), 2);
        assert!(report.violations.iter().any(|v| matches!(
            v,
            Violation::WrongKind {
                sequence: 1,
                operation: Operation::Op1,
                expected: ErrorKind::Error1,
                observed: ErrorKind::Error3,
            }
        )));
        assert!(
            !report
                .violations
                .iter()
                .any(|v| matches!(v, Violation::Undecodable { .. }))
        );
    }

    #[test]
    fn malformed_envelope_is_undecodable() {
        let probe = Probe::default();
        let result = probe.receive(0, Operation::Op2, "{\"operation\":\"op2\"}");
        assert!(matches!(
            result,
            Err(Violation::Undecodable {
                operation: Operation::Op2,
                ..
            })
        ));
    }

    #[test]
    fn evaluate_flags_changed_signal() {
        let mut later = observation(1, Operation::Op0, ErrorKind::Error0);
        later.signal.message = "something else".to_string();
        let report = ProbeReport::evaluate(
            vec![observation(0, Operation::Op0, ErrorKind::Error0), later],
            Vec::new(),
        );
        assert_eq!(report.violations.len(), 1);
        assert!(matches!(
            report.violations[0],
            Violation::NonDeterministic { sequence: 1, .. }
        ));
    }

    #[test]
    fn evaluate_flags_conflated_operations() {
        let report = ProbeReport::evaluate(
            vec![
                observation(0, Operation::Op0, ErrorKind::Error0),
                observation(1, Operation::Op1, ErrorKind::Error0),
            ],
            Vec::new(),
        );
        assert!(report.violations.iter().any(|v| matches!(
            v,
            Violation::Conflated {
                left: Operation::Op0,
                right: Operation::Op1,
                kind: ErrorKind::Error0,
            }
        )));
    }

    #[test]
    fn earlier_violations_fail_the_report() {
        let report = ProbeReport::evaluate(
            Vec::new(),
            vec![Violation::Undecodable {
                sequence: 0,
                operation: Operation::Op2,
                reason: "bad envelope".to_string(),
            }],
        );
        assert!(!report.passed);
    }
}
