//! Cycle types and their relaxation-effort policies.
//!
//! A cycle here is a named effort level: how many outer iterations the solver
//! may run and how many Gauss-Seidel sweeps it spends between two residual
//! checks. The V/W names are borrowed from multigrid nomenclature, but there
//! is no grid hierarchy behind them; the W cycle simply relaxes harder.
//!
//! | Cycle | max outer iterations | sweeps per phase | extra phase |
//! |-------|----------------------|------------------|-------------|
//! | V     | 60                   | 2                | no          |
//! | W     | 120                  | 4                | yes         |

use std::fmt;
use std::str::FromStr;

use crate::error::RelaxError;

/// Effort configuration selected by a [`CycleType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclePolicy {
    /// Upper bound on outer iterations (residual checks).
    pub max_iterations: usize,
    /// Sweeps run before each residual check, and again in the extra phase.
    pub smoothing_sweeps: usize,
    /// Run another block of `smoothing_sweeps` after every non-converged check.
    pub extra_phase: bool,
}

pub const V_POLICY: CyclePolicy = CyclePolicy {
    max_iterations: 60,
    smoothing_sweeps: 2,
    extra_phase: false,
};

pub const W_POLICY: CyclePolicy = CyclePolicy {
    max_iterations: 120,
    smoothing_sweeps: 4,
    extra_phase: true,
};

/// Relaxation-effort selector for one solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CycleType {
    /// Light effort: 60 iterations, 2 sweeps per check.
    #[default]
    V,
    /// Heavy effort: 120 iterations, 4 sweeps per check plus an extra block.
    W,
}

impl CycleType {
    /// Look up the effort policy for this cycle.
    pub const fn policy(self) -> CyclePolicy {
        match self {
            CycleType::V => V_POLICY,
            CycleType::W => W_POLICY,
        }
    }

    /// Total sweeps spent in one non-converged outer iteration.
    pub const fn sweeps_per_iteration(self) -> usize {
        let p = self.policy();
        if p.extra_phase {
            2 * p.smoothing_sweeps
        } else {
            p.smoothing_sweeps
        }
    }
}

impl fmt::Display for CycleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleType::V => f.write_str("V"),
            CycleType::W => f.write_str("W"),
        }
    }
}

impl FromStr for CycleType {
    type Err = RelaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v" | "v-cycle" | "vcycle" => Ok(CycleType::V),
            "w" | "w-cycle" | "wcycle" => Ok(CycleType::W),
            _ => Err(RelaxError::UnknownCycle(s.to_string())),
        }
    }
}
