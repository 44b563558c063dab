//! Properties of quota computation and slice binding

use gradesplit::plan::{compute_quotas, AssignmentPlanner};
use gradesplit::roster::GraderRegistry;
use gradesplit::submission::SubmissionList;
use proptest::prelude::*;

fn normalized_weights(raw: &[u32]) -> Vec<f64> {
    let total: f64 = raw.iter().map(|&w| w as f64).sum();
    raw.iter().map(|&w| w as f64 / total).collect()
}

fn registry(raw: &[u32]) -> GraderRegistry {
    let mut registry = GraderRegistry::new();
    for (i, weight) in raw.iter().enumerate() {
        registry.add(&format!("grader{:02}", i), *weight as f64).unwrap();
    }
    registry.normalize().unwrap();
    registry
}

/// Quotas always sum to N and stay within one unit above the floor
#[test]
fn test_quota_conservation_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prop::collection::vec(1u32..100, 1..12), 0usize..500),
            |(raw, total)| {
                let weights = normalized_weights(&raw);
                let quotas = compute_quotas(&weights, total).unwrap();

                prop_assert_eq!(quotas.iter().sum::<usize>(), total);
                for (quota, weight) in quotas.iter().zip(&weights) {
                    let floor = (total as f64 * weight).floor() as usize;
                    prop_assert!(*quota >= floor);
                    prop_assert!(*quota <= floor + 1);
                }
                Ok(())
            },
        )
        .unwrap();
}

/// Same identifier and roster give the same plan; slices partition the list
#[test]
fn test_plan_determinism_and_partition_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                prop::collection::vec(1u32..20, 1..8),
                0usize..120,
                "[A-Za-z0-9 _-]{1,16}",
            ),
            |(raw, total, identifier)| {
                let planner = AssignmentPlanner::default();
                let a = planner.plan(&identifier, registry(&raw), total).unwrap();
                let b = planner.plan(&identifier, registry(&raw), total).unwrap();
                prop_assert_eq!(&a, &b);
                prop_assert_eq!(a.total(), total);

                let list = SubmissionList::new((0..total).map(|i| format!("s{:04}", i)));
                let assignments = a.bind(&list).unwrap();
                let flattened: Vec<&str> = assignments
                    .iter()
                    .flat_map(|x| x.submissions.iter().map(|s| s.id()))
                    .collect();
                let expected: Vec<&str> = list.iter().map(|s| s.id()).collect();
                prop_assert_eq!(flattened, expected);
                Ok(())
            },
        )
        .unwrap();
}
