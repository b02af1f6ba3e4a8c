use ahash::AHashMap;
use anyhow::Result;
use stowage_core::{Instance, Solution};

/// Top-down recursion over (item index, remaining capacity), memoized so
/// each reachable state is computed once. The memo table is owned by the
/// call, never shared between calls, so solves stay reentrant.
pub fn solve(instance: &Instance) -> Result<Solution> {
    let mut memo: AHashMap<(usize, u32), (u32, Vec<usize>)> = AHashMap::new();
    let (total_profit, mut taken) = best_from(instance, 0, instance.capacity, &mut memo);

    // Indices accumulate deepest-first; reverse once for ascending order.
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

fn best_from(
    instance: &Instance,
    i: usize,
    remaining: u32,
    memo: &mut AHashMap<(usize, u32), (u32, Vec<usize>)>,
) -> (u32, Vec<usize>) {
    if i == instance.num_items() || remaining == 0 {
        return (0, Vec::new());
    }
    if let Some(hit) = memo.get(&(i, remaining)) {
        return hit.clone();
    }

    let mut best = best_from(instance, i + 1, remaining, memo);

    // Taking must strictly beat skipping, so ties favor the skip branch.
    let item = &instance.items[i];
    if item.weight <= remaining {
        let (take_profit, mut take_taken) = best_from(instance, i + 1, remaining - item.weight, memo);
        let take_profit = take_profit + item.profit;
        if take_profit > best.0 {
            take_taken.push(i);
            best = (take_profit, take_taken);
        }
    }

    memo.insert((i, remaining), best.clone());
    best
}
