use anyhow::Result;
use stowage_core::{Instance, Solution};

pub mod branch_and_bound;
pub mod dp_tabulation;
pub mod greedy_ratio;
pub mod memo_topdown;
pub mod pure_recursion;

/// The five solving strategies. All but `GreedyRatio` are guaranteed to
/// return the true optimum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    DpTabulation,
    GreedyRatio,
    MemoTopDown,
    PureRecursion,
    BranchAndBound,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::DpTabulation,
        Strategy::GreedyRatio,
        Strategy::MemoTopDown,
        Strategy::PureRecursion,
        Strategy::BranchAndBound,
    ];

    /// Maps a strategy identifier to a strategy. Unrecognized identifiers
    /// fall back to DP tabulation.
    pub fn from_id(id: &str) -> Self {
        match id {
            "greedy" => Strategy::GreedyRatio,
            "memo" => Strategy::MemoTopDown,
            "pure" => Strategy::PureRecursion,
            "bnb" => Strategy::BranchAndBound,
            _ => Strategy::DpTabulation,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Strategy::DpTabulation => "dp",
            Strategy::GreedyRatio => "greedy",
            Strategy::MemoTopDown => "memo",
            Strategy::PureRecursion => "pure",
            Strategy::BranchAndBound => "bnb",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Strategy::DpTabulation => "DP Tabulation",
            Strategy::GreedyRatio => "Greedy (ratio)",
            Strategy::MemoTopDown => "Memoization (Top-Down DP)",
            Strategy::PureRecursion => "Pure Recursion",
            Strategy::BranchAndBound => "Branch & Bound",
        }
    }
}

/// Dispatches one solve call. Stateless: every call owns its working state,
/// so concurrent calls with different instances cannot interfere.
pub fn solve(strategy: Strategy, instance: &Instance) -> Result<Solution> {
    match strategy {
        Strategy::DpTabulation => dp_tabulation::solve(instance),
        Strategy::GreedyRatio => greedy_ratio::solve(instance),
        Strategy::MemoTopDown => memo_topdown::solve(instance),
        Strategy::PureRecursion => pure_recursion::solve(instance),
        Strategy::BranchAndBound => branch_and_bound::solve(instance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_core::Item;

    fn exact_strategies() -> [Strategy; 4] {
        [
            Strategy::DpTabulation,
            Strategy::MemoTopDown,
            Strategy::PureRecursion,
            Strategy::BranchAndBound,
        ]
    }

    #[test]
    fn test_strategy_id_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::from_id(strategy.id()), strategy);
        }
    }

    #[test]
    fn test_unrecognized_id_falls_back_to_dp() {
        assert_eq!(Strategy::from_id("simplex"), Strategy::DpTabulation);
        assert_eq!(Strategy::from_id(""), Strategy::DpTabulation);
    }

    #[test]
    fn test_empty_instance_all_strategies() {
        let instance = Instance::new(vec![], 10);
        for strategy in Strategy::ALL {
            let solution = solve(strategy, &instance).unwrap();
            assert_eq!(solution.total_profit, 0);
            assert!(solution.selection.is_empty());
        }
    }

    #[test]
    fn test_item_too_heavy_all_strategies() {
        let instance = Instance::new(vec![Item::new("X", 10, 10)], 5);
        for strategy in Strategy::ALL {
            let solution = solve(strategy, &instance).unwrap();
            assert_eq!(solution.total_profit, 0);
            assert!(solution.selection.is_empty());
        }
    }

    #[test]
    fn test_exact_solvers_agree_on_random_instances() {
        for seed_byte in 0..8u8 {
            let instance = Instance::generate(&[seed_byte; 32], 12, 50);
            let reference = solve(Strategy::DpTabulation, &instance).unwrap();
            for strategy in exact_strategies() {
                let solution = solve(strategy, &instance).unwrap();
                assert_eq!(
                    solution.total_profit, reference.total_profit,
                    "strategy {} disagrees on seed {}",
                    strategy.id(),
                    seed_byte
                );
                instance.verify_solution(&solution).unwrap();
            }
        }
    }

    #[test]
    fn test_greedy_never_beats_the_optimum() {
        for seed_byte in 0..8u8 {
            let instance = Instance::generate(&[seed_byte; 32], 14, 40);
            let optimum = solve(Strategy::DpTabulation, &instance).unwrap();
            let greedy = solve(Strategy::GreedyRatio, &instance).unwrap();
            assert!(greedy.total_profit <= optimum.total_profit);
            instance.verify_solution(&greedy).unwrap();
        }
    }

    #[test]
    fn test_capacity_monotonicity() {
        let instance = Instance::generate(&[21u8; 32], 12, 30);
        for strategy in exact_strategies() {
            let mut previous = 0;
            for capacity in (instance.capacity..instance.capacity + 50).step_by(10) {
                let widened = Instance::new(instance.items.clone(), capacity);
                let solution = solve(strategy, &widened).unwrap();
                assert!(solution.total_profit >= previous);
                previous = solution.total_profit;
            }
        }
    }

    #[test]
    fn test_idempotence() {
        let instance = Instance::generate(&[3u8; 32], 10, 50);
        for strategy in Strategy::ALL {
            let first = solve(strategy, &instance).unwrap();
            let second = solve(strategy, &instance).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_greedy_suboptimality_example() {
        // Ratios 6, 5, 4: greedy takes A and B (profit 160) and has no room
        // for C, while the optimum is B and C (profit 220).
        let instance = Instance::new(
            vec![
                Item::new("A", 10, 60),
                Item::new("B", 20, 100),
                Item::new("C", 30, 120),
            ],
            50,
        );
        let greedy = solve(Strategy::GreedyRatio, &instance).unwrap();
        assert_eq!(greedy.total_profit, 160);
        assert_eq!(
            greedy.selection,
            vec![Item::new("A", 10, 60), Item::new("B", 20, 100)]
        );
        for strategy in exact_strategies() {
            let solution = solve(strategy, &instance).unwrap();
            assert_eq!(solution.total_profit, 220);
            assert_eq!(solution.total_weight(), 50);
        }
    }
}
