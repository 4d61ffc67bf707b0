//! # High-level simplex logic
//!
//! The iterate-to-optimality loop. The details of this logic are hidden away mostly in the
//! `Tableau` type.
use log::debug;

use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
use crate::algorithm::simplex::tableau::{is_in_basic_feasible_solution_state, Tableau};
use crate::data::number_types::rational::Rational;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - The tableau describes a basic feasible solution: the caller placed an identity sub-matrix
///   over the basic columns and all right-hand sides are nonnegative.
/// - The problem is bounded and non-degenerate. On degenerate problems, rules without cycle
///   protection (such as `MostNegative`) may not terminate.
///
/// Violations of the first requirement are not detected in release builds; the loop then produces
/// wrong values rather than an error.
///
/// # Arguments
///
/// * `tableau`: Tableau in basic feasible solution state. Mutated in place, one pivot per
///   iteration, and left in its terminal state on return.
///
/// # Return value
///
/// An `OptimizationResult` with the terminal objective value, or the determination that the
/// problem is unbounded.
pub fn primal<PR: PivotRule>(tableau: &mut Tableau) -> OptimizationResult {
    let mut rule = PR::new();
    let mut iteration = 0_u64;
    loop {
        debug_assert!(is_in_basic_feasible_solution_state(tableau));

        match rule.select_pivot_column(tableau) {
            Some(column) => match tableau.select_pivot_row(column) {
                Some(row) => {
                    debug!("iteration {}: pivoting on column {}, row {}", iteration, column, row);
                    tableau.bring_into_basis(column, row);
                    iteration += 1;
                }
                None => break OptimizationResult::Unbounded,
            },
            None => {
                debug!("optimal after {} iterations at {}", iteration, tableau.objective_value());
                break OptimizationResult::FiniteOptimum(tableau.objective_value().clone());
            }
        }
    }
}

/// After iteration ends, either an optimum is found or the problem is determined to be unbounded.
///
/// The value inside `FiniteOptimum` is relative to the minimize convention of the stored
/// objective row; `StandardForm::solution` adjusts it back to the original direction.
#[allow(missing_docs)]
#[derive(Debug, Eq, PartialEq)]
pub enum OptimizationResult {
    FiniteOptimum(Rational),
    Unbounded,
}
