use anyhow::Result;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use stowage_core::{Instance, Solution};

/// One undecided branch of the search tree. Nodes are pure values: created
/// on expansion, never mutated afterwards, so the frontier is free to
/// reorder them.
#[derive(Debug, Clone)]
struct Node {
    bound: f64,
    profit: u32,
    weight: u32,
    /// Index into the ratio-sorted order, not the original item order.
    level: usize,
    /// Original item indices, in the order they were taken.
    taken: Vec<usize>,
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bound
            .partial_cmp(&other.bound)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Node {}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.bound == other.bound
    }
}

/// A ratio-sorted item as (original index, weight, profit, ratio).
type SortedItem = (usize, u32, u32, f64);

/// Fractional-relaxation upper bound on the profit reachable from a partial
/// state. Whole items are added from `level` while they fit; the first item
/// that does not fit contributes `ratio * remaining`. Admissible: never
/// below the true best completion.
pub fn fractional_bound(
    sorted: &[SortedItem],
    level: usize,
    profit: u32,
    weight: u32,
    capacity: u32,
) -> f64 {
    if weight >= capacity {
        return profit as f64;
    }
    let mut bound = profit as f64;
    let mut remaining = capacity - weight;
    for &(_, item_weight, item_profit, ratio) in &sorted[level..] {
        if remaining == 0 {
            break;
        }
        if item_weight <= remaining {
            remaining -= item_weight;
            bound += item_profit as f64;
        } else {
            bound += ratio * remaining as f64;
            remaining = 0;
        }
    }
    bound
}

/// Best-first branch and bound. The frontier is a max-heap keyed on the
/// fractional bound; a popped node whose bound cannot beat the incumbent is
/// discarded along with its whole subtree. Runs to frontier exhaustion, so
/// the incumbent is the true optimum. Equal bounds pop in heap order, which
/// tends to favor the most recently pushed branch.
pub fn solve(instance: &Instance) -> Result<Solution> {
    let n = instance.num_items();
    let capacity = instance.capacity;

    // Sort once by ratio descending; stable, so equal ratios keep input
    // order. Levels index this order while `taken` records original indices.
    let mut sorted: Vec<SortedItem> = instance
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| (i, item.weight, item.profit, item.ratio()))
        .collect();
    sorted.sort_by(|a, b| b.3.partial_cmp(&a.3).unwrap_or(Ordering::Equal));

    let mut frontier = BinaryHeap::new();
    frontier.push(Node {
        bound: fractional_bound(&sorted, 0, 0, 0, capacity),
        profit: 0,
        weight: 0,
        level: 0,
        taken: Vec::new(),
    });

    let mut best_profit = 0u32;
    let mut best_taken: Vec<usize> = Vec::new();

    while let Some(node) = frontier.pop() {
        if node.bound <= best_profit as f64 {
            continue;
        }
        if node.level >= n {
            continue;
        }
        let (original_index, item_weight, item_profit, _) = sorted[node.level];

        // Take branch, only when the item still fits.
        if node.weight + item_weight <= capacity {
            let profit = node.profit + item_profit;
            let weight = node.weight + item_weight;
            let mut taken = node.taken.clone();
            taken.push(original_index);
            if profit > best_profit {
                best_profit = profit;
                best_taken = taken.clone();
            }
            let bound = fractional_bound(&sorted, node.level + 1, profit, weight, capacity);
            if bound > best_profit as f64 {
                frontier.push(Node {
                    bound,
                    profit,
                    weight,
                    level: node.level + 1,
                    taken,
                });
            }
        }

        // Skip branch.
        let bound = fractional_bound(&sorted, node.level + 1, node.profit, node.weight, capacity);
        if bound > best_profit as f64 {
            frontier.push(Node {
                bound,
                profit: node.profit,
                weight: node.weight,
                level: node.level + 1,
                taken: node.taken,
            });
        }
    }

    // Map the winning path back to items; the order is the order taken,
    // i.e. ratio-descending among the selected items.
    let selection = best_taken
        .into_iter()
        .map(|i| instance.items[i].clone())
        .collect();

    Ok(Solution {
        total_profit: best_profit,
        selection,
    })
}
