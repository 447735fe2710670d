use std::cmp::Ordering;

use tracing::trace;

/// Largest-remainder (Hamilton) apportionment of `target` units over `weights`.
///
/// Each weight receives the floor of its exact proportional share; the units
/// left over go one at a time to the largest fractional remainders, ties
/// broken by position. Non-finite and non-positive weights count as zero.
///
/// Returns all zeros when no weight is positive; otherwise the result sums to
/// exactly `target`.
pub fn apportion(weights: &[f64], target: u32) -> Vec<u32> {
    let weights: Vec<f64> = weights
        .iter()
        .map(|&w| if w.is_finite() && w > 0.0 { w } else { 0.0 })
        .collect();

    // Rescale so that very large inputs cannot overflow the sum
    let max = weights.iter().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0; weights.len()];
    }
    let scaled: Vec<f64> = weights.iter().map(|w| w / max).collect();
    let total: f64 = scaled.iter().sum();

    let mut units = Vec::with_capacity(scaled.len());
    let mut remainders = Vec::with_capacity(scaled.len());
    for &weight in &scaled {
        let exact = weight / total * f64::from(target);
        let floor = exact.floor();
        units.push(floor as u32);
        remainders.push(exact - floor);
    }

    // Only weighted positions may receive adjustment units
    let mut order: Vec<usize> = (0..scaled.len()).filter(|&i| scaled[i] > 0.0).collect();
    order.sort_by(|&a, &b| match remainders[b].total_cmp(&remainders[a]) {
        Ordering::Equal => a.cmp(&b),
        other => other,
    });

    let assigned: u64 = units.iter().map(|&u| u64::from(u)).sum();
    let target = u64::from(target);

    if assigned < target {
        let shortfall = (target - assigned) as usize;
        for &i in order.iter().cycle().take(shortfall) {
            units[i] += 1;
        }
    } else if assigned > target {
        let mut excess = assigned - target;
        while excess > 0 {
            match order.iter().rev().find(|&&i| units[i] > 0) {
                Some(&i) => {
                    units[i] -= 1;
                    excess -= 1;
                }
                None => break,
            }
        }
    }

    trace!(?weights, ?units, "apportioned");
    units
}
