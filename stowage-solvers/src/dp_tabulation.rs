use anyhow::Result;
use ndarray::Array2;
use stowage_core::{Instance, Solution};

/// Bottom-up dynamic programming over the full (n+1) x (capacity+1) table.
/// `dp[[i, c]]` is the best profit using the first `i` items with capacity
/// `c`. The full table is kept so the selection can be reconstructed by
/// backtracking; O(n * capacity) time and space.
pub fn solve(instance: &Instance) -> Result<Solution> {
    let n = instance.num_items();
    let capacity = instance.capacity as usize;

    let mut dp = Array2::<u32>::zeros((n + 1, capacity + 1));
    for i in 1..=n {
        let item = &instance.items[i - 1];
        let weight = item.weight as usize;
        for c in 0..=capacity {
            dp[[i, c]] = if weight <= c {
                dp[[i - 1, c]].max(item.profit + dp[[i - 1, c - weight]])
            } else {
                dp[[i - 1, c]]
            };
        }
    }

    // Backtrack: a row change at (i, c) means item i-1 was taken.
    let mut selection = Vec::new();
    let mut c = capacity;
    for i in (1..=n).rev() {
        if dp[[i, c]] != dp[[i - 1, c]] {
            let item = &instance.items[i - 1];
            selection.push(item.clone());
            c -= item.weight as usize;
        }
    }
    selection.reverse();

    Ok(Solution {
        total_profit: dp[[n, capacity]],
        selection,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_core::Item;

    #[test]
    fn test_small_optimum() {
        let instance = Instance::new(
            vec![
                Item::new("A", 2, 3),
                Item::new("B", 3, 4),
                Item::new("C", 4, 5),
                Item::new("D", 5, 6),
            ],
            5,
        );
        let solution = solve(&instance).unwrap();
        assert_eq!(solution.total_profit, 7);
        assert_eq!(
            solution.selection,
            vec![Item::new("A", 2, 3), Item::new("B", 3, 4)]
        );
        assert_eq!(solution.total_weight(), 5);
    }

    #[test]
    fn test_selection_is_index_ascending() {
        let instance = Instance::new(
            vec![
                Item::new("low", 5, 1),
                Item::new("high", 4, 9),
                Item::new("mid", 3, 4),
            ],
            7,
        );
        let solution = solve(&instance).unwrap();
        assert_eq!(solution.total_profit, 13);
        assert_eq!(
            solution.selection,
            vec![Item::new("high", 4, 9), Item::new("mid", 3, 4)]
        );
    }

    #[test]
    fn test_tie_takes_first_item() {
        // Equal items: the backtrack sees no row change for B, so A wins.
        let instance = Instance::new(vec![Item::new("A", 1, 1), Item::new("B", 1, 1)], 1);
        let solution = solve(&instance).unwrap();
        assert_eq!(solution.total_profit, 1);
        assert_eq!(solution.selection, vec![Item::new("A", 1, 1)]);
    }

    #[test]
    fn test_zero_capacity() {
        let instance = Instance::new(vec![Item::new("A", 1, 10)], 0);
        let solution = solve(&instance).unwrap();
        assert_eq!(solution.total_profit, 0);
        assert!(solution.selection.is_empty());
    }
}
