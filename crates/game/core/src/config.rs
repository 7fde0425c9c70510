/// Combat configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Maximum number of cells a unit may walk in a single move action.
    pub move_budget: u32,

    /// Upper bound on nodes expanded by a single path search.
    /// Searches that exceed it report the goal as unreachable.
    pub max_path_expansions: u32,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// Status effects a single unit can carry at once.
    pub const MAX_STATUS_EFFECTS: usize = 8;

    /// Largest `range` or `aoe` an attack may declare.
    pub const MAX_ATTACK_REACH: u32 = 64;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MOVE_BUDGET: u32 = 5;
    pub const DEFAULT_MAX_PATH_EXPANSIONS: u32 = 4096;

    pub fn new() -> Self {
        Self {
            move_budget: Self::DEFAULT_MOVE_BUDGET,
            max_path_expansions: Self::DEFAULT_MAX_PATH_EXPANSIONS,
        }
    }

    pub fn with_move_budget(mut self, move_budget: u32) -> Self {
        self.move_budget = move_budget;
        self
    }

    pub fn with_max_path_expansions(mut self, max_path_expansions: u32) -> Self {
        self.max_path_expansions = max_path_expansions;
        self
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
