//! Quota arithmetic: floor shares plus first-r remainder units.

use crate::error::PlanError;

/// Integer quotas for `total` items split across `weights` (in order).
///
/// Each position gets `floor(total * weight)`. The `r` units the floors leave
/// over go one each to the first `r` positions. The result always sums to
/// `total`, or the call fails with [`PlanError::QuotaMismatch`].
pub fn compute_quotas(weights: &[f64], total: usize) -> Result<Vec<usize>, PlanError> {
    if total == 0 {
        return Ok(vec![0; weights.len()]);
    }
    if weights.is_empty() {
        return Err(PlanError::NoGraders { submissions: total });
    }

    let mut quotas: Vec<usize> = weights
        .iter()
        .map(|w| (total as f64 * w.max(0.0)).floor() as usize)
        .collect();

    let assigned: usize = quotas.iter().sum();
    let remainder = total
        .checked_sub(assigned)
        .ok_or(PlanError::QuotaMismatch {
            expected: total,
            assigned,
        })?;

    for quota in quotas.iter_mut().take(remainder) {
        *quota += 1;
    }

    let assigned: usize = quotas.iter().sum();
    if assigned != total {
        return Err(PlanError::QuotaMismatch {
            expected: total,
            assigned,
        });
    }
    Ok(quotas)
}
