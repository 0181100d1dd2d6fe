use anyhow::{bail, Result};
use chrono::{Datelike, Local};
use rand::Rng;
use tracing::warn;

use crate::model::monthly::MonthlyCount;

pub const DEFAULT_WINDOW_MONTHS: usize = 6;

/// Synthesize a trailing-month breakdown of `total` ending at the current
/// calendar month. The backend only exposes the grand total and the verified
/// count for the current month, so every other slot is an estimate: an even
/// split of the remainder with a small random perturbation, adjusted at the
/// end so the series still sums to `total`. The current month is never
/// touched by the synthesis.
pub fn generate_monthly_distribution(
    total: u64,
    current_month_count: u64,
    months: usize,
) -> Result<Vec<MonthlyCount>> {
    let current_month = Local::now().month();
    distribute(
        total,
        current_month_count,
        months,
        current_month,
        &mut rand::thread_rng(),
    )
}

/// Core of `generate_monthly_distribution` with the clock and the random
/// source injected, so callers (and tests) can pin both.
///
/// The returned series is ordered oldest to newest, which is also ascending
/// calendar order within the window: a window spanning the year boundary
/// (e.g. Nov..Apr) stays in recency order rather than raw month-number order.
pub fn distribute<R: Rng>(
    total: u64,
    current_month_count: u64,
    months: usize,
    current_month: u32,
    rng: &mut R,
) -> Result<Vec<MonthlyCount>> {
    if months == 0 {
        bail!("window must cover at least one month");
    }
    if !(1..=12).contains(&current_month) {
        bail!("current month must be 1-12, got {}", current_month);
    }
    if months == 1 {
        return Ok(vec![MonthlyCount::new(current_month, current_month_count)]);
    }

    if current_month_count > total {
        warn!(
            current_month_count,
            total, "current month exceeds the running total, estimating other months as empty"
        );
    }

    let remaining = total.saturating_sub(current_month_count);
    let slots = (months - 1) as u64;
    let base = remaining / slots;
    let remainder = (remaining % slots) as usize;

    // The current month is always the last slot; everything before it is an
    // estimated slot. The leftover `remainder` units go one apiece to the
    // first estimated slots.
    let mut series = Vec::with_capacity(months);
    for i in 0..months {
        let month = month_back(current_month, (months - 1 - i) as u32);
        let count = if i == months - 1 {
            current_month_count
        } else {
            let mut count = perturbed(base, rng);
            if i < remainder {
                count += 1;
            }
            count
        };
        series.push(MonthlyCount::new(month, count));
    }

    // Perturbation and flooring drift the sum; push the difference back into
    // the estimated slots (never the current month), draining each slot to
    // zero at most. A surplus fits entirely in the first slot; a deficit is
    // always absorbable because the drift came out of these same slots.
    // Widened so counters near u64::MAX cannot wrap the difference.
    let actual: u128 = series.iter().map(|entry| u128::from(entry.count)).sum();
    let mut diff = i128::from(total) - actual as i128;
    for entry in series.iter_mut().take(months - 1) {
        if diff == 0 {
            break;
        }
        if diff > 0 {
            // A surplus never lifts a slot past the total, so this fits.
            entry.count += diff as u64;
            diff = 0;
        } else {
            let deficit = u64::try_from(-diff).unwrap_or(u64::MAX);
            let take = entry.count.min(deficit);
            entry.count -= take;
            diff += i128::from(take);
        }
    }

    Ok(series)
}

/// Calendar month `steps` months before `month`, wrapping past January.
fn month_back(month: u32, steps: u32) -> u32 {
    (month + 11 * steps - 1) % 12 + 1
}

/// `base` plus a uniform perturbation of up to a fifth of `base` in either
/// direction, floored at zero.
fn perturbed<R: Rng>(base: u64, rng: &mut R) -> u64 {
    let spread = base / 5;
    if spread == 0 {
        return base;
    }
    // Uniform over [base - spread, base + spread], kept in unsigned math so
    // a base near u64::MAX cannot wrap.
    let delta = rng.gen_range(0..=spread * 2);
    (base - spread).saturating_add(delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_sum_and_length_invariants() {
        let totals = [0u64, 1, 5, 17, 100, 1234, 98765];
        let windows = [2usize, 3, 6, 12];
        for (seed, &total) in totals.iter().enumerate() {
            for &months in &windows {
                for current in [0, total / 3, total] {
                    let series =
                        distribute(total, current, months, 8, &mut rng(seed as u64)).unwrap();
                    let sum: u64 = series.iter().map(|entry| entry.count).sum();
                    assert_eq!(sum, total, "total={} current={} months={}", total, current, months);
                    assert_eq!(series.len(), months);
                }
            }
        }
    }

    #[test]
    fn test_current_month_is_never_perturbed() {
        for seed in 0..20 {
            let series = distribute(1000, 137, 6, 3, &mut rng(seed)).unwrap();
            let current = series.last().unwrap();
            assert_eq!(current.month, 3);
            assert_eq!(current.count, 137);
        }
    }

    #[test]
    fn test_window_wraps_year_boundary_in_recency_order() {
        let series = distribute(60, 10, 6, 2, &mut rng(1)).unwrap();
        let months: Vec<u32> = series.iter().map(|entry| entry.month).collect();
        assert_eq!(months, vec![9, 10, 11, 12, 1, 2]);
    }

    #[test]
    fn test_current_month_holds_entire_total() {
        let series = distribute(100, 100, 6, 7, &mut rng(4)).unwrap();
        assert_eq!(series.len(), 6);
        for entry in &series[..5] {
            assert_eq!(entry.count, 0);
        }
        assert_eq!(series[5].count, 100);
    }

    #[test]
    fn test_zero_total_yields_all_zero_series() {
        let series = distribute(0, 0, 6, 11, &mut rng(9)).unwrap();
        assert_eq!(series.len(), 6);
        assert!(series.iter().all(|entry| entry.count == 0));
    }

    #[test]
    fn test_single_month_window_is_just_the_current_month() {
        let series = distribute(50, 12, 1, 5, &mut rng(2)).unwrap();
        assert_eq!(series, vec![MonthlyCount::new(5, 12)]);
    }

    #[test]
    fn test_empty_window_is_rejected() {
        assert!(distribute(10, 5, 0, 5, &mut rng(0)).is_err());
    }

    #[test]
    fn test_out_of_range_current_month_is_rejected() {
        assert!(distribute(10, 5, 6, 0, &mut rng(0)).is_err());
        assert!(distribute(10, 5, 6, 13, &mut rng(0)).is_err());
    }

    #[test]
    fn test_current_month_above_total_clamps_other_months_to_zero() {
        // Documented policy: keep the verified value, estimate nothing else.
        let series = distribute(10, 25, 6, 6, &mut rng(7)).unwrap();
        for entry in &series[..5] {
            assert_eq!(entry.count, 0);
        }
        assert_eq!(series[5].count, 25);
    }

    #[test]
    fn test_generate_uses_a_six_month_default_window() {
        let series = generate_monthly_distribution(240, 40, DEFAULT_WINDOW_MONTHS).unwrap();
        assert_eq!(series.len(), 6);
        let sum: u64 = series.iter().map(|entry| entry.count).sum();
        assert_eq!(sum, 240);
        assert_eq!(series.last().unwrap().count, 40);
    }

    #[test]
    fn test_counters_near_u64_max_do_not_wrap() {
        for seed in 0..10 {
            let series = distribute(u64::MAX, 0, 6, 5, &mut rng(seed)).unwrap();
            let sum: u128 = series.iter().map(|entry| u128::from(entry.count)).sum();
            assert_eq!(sum, u128::from(u64::MAX));
            assert_eq!(series.last().unwrap().count, 0);

            let series = distribute(u64::MAX, u64::MAX - 3, 2, 5, &mut rng(seed)).unwrap();
            let sum: u128 = series.iter().map(|entry| u128::from(entry.count)).sum();
            assert_eq!(sum, u128::from(u64::MAX));
            assert_eq!(series.last().unwrap().count, u64::MAX - 3);
        }
    }

    #[test]
    fn test_month_back_wraps() {
        assert_eq!(month_back(3, 0), 3);
        assert_eq!(month_back(3, 2), 1);
        assert_eq!(month_back(3, 3), 12);
        assert_eq!(month_back(1, 12), 1);
    }
}
