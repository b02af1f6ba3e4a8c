use anyhow::Result;
use stowage_core::{Instance, Solution};

/// Naive recursion with no memoization: the same recurrence and tie-break as
/// the memoized solver, re-derived from scratch at every state. O(2^n), kept
/// deliberately unmemoized as a ground-truth baseline for cross-checking the
/// other exact solvers on small inputs.
pub fn solve(instance: &Instance) -> Result<Solution> {
    let (total_profit, mut taken) = best_from(instance, 0, instance.capacity);

    taken.reverse();
    let selection = taken
        .into_iter()
        .map(|i| instance.items[i].clone())
        .collect();

    Ok(Solution {
        total_profit,
        selection,
    })
}

fn best_from(instance: &Instance, i: usize, remaining: u32) -> (u32, Vec<usize>) {
    if i == instance.num_items() || remaining == 0 {
        return (0, Vec::new());
    }

    let mut best = best_from(instance, i + 1, remaining);

    let item = &instance.items[i];
    if item.weight <= remaining {
        let (take_profit, mut take_taken) = best_from(instance, i + 1, remaining - item.weight);
        let take_profit = take_profit + item.profit;
        if take_profit > best.0 {
            take_taken.push(i);
            best = (take_profit, take_taken);
        }
    }

    best
}
