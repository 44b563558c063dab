//! Property-based tests for quota conservation and plan determinism

mod quotas;
