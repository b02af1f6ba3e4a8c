use anyhow::Result;
use std::cmp::Ordering;
use stowage_core::{Instance, Solution};

/// Greedy by profit-to-weight ratio. Fast and feasible but carries no
/// optimality guarantee. The selection is returned in acceptance order
/// (ratio-descending), not input order; callers rely on this for loading
/// order displays.
pub fn solve(instance: &Instance) -> Result<Solution> {
    // Stable sort: equal ratios keep their original relative order.
    let mut order: Vec<usize> = (0..instance.num_items()).collect();
    order.sort_by(|&a, &b| {
        instance.items[b]
            .ratio()
            .partial_cmp(&instance.items[a].ratio())
            .unwrap_or(Ordering::Equal)
    });

    let mut remaining = instance.capacity;
    let mut total_profit = 0;
    let mut selection = Vec::new();
    for &i in &order {
        let item = &instance.items[i];
        if item.weight <= remaining {
            remaining -= item.weight;
            total_profit += item.profit;
            selection.push(item.clone());
        }
    }

    Ok(Solution {
        total_profit,
        selection,
    })
}
