use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub mod json;

/// A single piece of cargo. Identity is positional within an [`Instance`];
/// the name is a display label only and is never used for deduplication.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub weight: u32,
    pub profit: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: u32, profit: u32) -> Self {
        Self {
            name: name.into(),
            weight,
            profit,
        }
    }

    /// Profit per unit of weight. Zero-weight items get ratio 0.0 so they are
    /// never prioritized purely for being free.
    pub fn ratio(&self) -> f64 {
        if self.weight == 0 {
            0.0
        } else {
            self.profit as f64 / self.weight as f64
        }
    }
}

/// One solve request: an ordered item list and a capacity bound.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Instance {
    pub items: Vec<Item>,
    pub capacity: u32,
}

impl Instance {
    pub fn new(items: Vec<Item>, capacity: u32) -> Self {
        Self { items, capacity }
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Generates a deterministic random instance. Weights are in [1, 50],
    /// profits in [1, 100], and the capacity is `budget_percent` percent of
    /// the total weight.
    pub fn generate(seed: &[u8; 32], num_items: usize, budget_percent: u32) -> Self {
        let mut rng = SmallRng::from_seed(seed.clone());
        let items: Vec<Item> = (0..num_items)
            .map(|i| {
                Item::new(
                    format!("item_{}", i),
                    rng.gen_range(1..=50),
                    rng.gen_range(1..=100),
                )
            })
            .collect();
        let total_weight: u32 = items.iter().map(|item| item.weight).sum();
        // Oversized budgets saturate instead of wrapping through the cast.
        let capacity = (budget_percent as u64 * total_weight as u64 / 100).min(u32::MAX as u64);
        Self {
            items,
            capacity: capacity as u32,
        }
    }

    /// Checks that a solution is feasible for this instance: every selected
    /// item maps to a distinct instance position with the same fields, the
    /// total weight fits the capacity, and the claimed profit matches the
    /// selection.
    pub fn verify_solution(&self, solution: &Solution) -> Result<()> {
        let mut used = vec![false; self.items.len()];
        for selected in &solution.selection {
            let position = self
                .items
                .iter()
                .enumerate()
                .find(|&(i, item)| !used[i] && item == selected)
                .map(|(i, _)| i)
                .ok_or_else(|| {
                    anyhow!(
                        "Selected item '{}' does not match any unused instance item",
                        selected.name
                    )
                })?;
            used[position] = true;
        }

        let total_weight: u32 = solution.selection.iter().map(|item| item.weight).sum();
        if total_weight > self.capacity {
            return Err(anyhow!(
                "Total weight ({}) exceeded capacity ({})",
                total_weight,
                self.capacity
            ));
        }

        let total_profit: u32 = solution.selection.iter().map(|item| item.profit).sum();
        if total_profit != solution.total_profit {
            return Err(anyhow!(
                "Claimed profit ({}) does not match selection profit ({})",
                solution.total_profit,
                total_profit
            ));
        }

        Ok(())
    }
}

/// The result of one solve call. The order of `selection` is strategy
/// defined: index-ascending for the exact recursive/tabulated solvers,
/// acceptance order (ratio-descending) for greedy and branch-and-bound.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub total_profit: u32,
    pub selection: Vec<Item>,
}

impl Solution {
    pub fn empty() -> Self {
        Self {
            total_profit: 0,
            selection: Vec::new(),
        }
    }

    pub fn from_selection(selection: Vec<Item>) -> Self {
        let total_profit = selection.iter().map(|item| item.profit).sum();
        Self {
            total_profit,
            selection,
        }
    }

    pub fn total_weight(&self) -> u32 {
        self.selection.iter().map(|item| item.weight).sum()
    }
}
