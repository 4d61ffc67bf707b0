//! End-to-end runs through the public interface: state a problem, assemble the tableau, iterate
//! to termination, read the solution back out.
use simplexact::algorithm::simplex::logic::{primal, OptimizationResult};
use simplexact::algorithm::simplex::strategy::pivot_rule::{FirstProfitable, MostNegative};
use simplexact::algorithm::simplex::tableau::is_in_basic_feasible_solution_state;
use simplexact::data::linear_program::elements::Objective;
use simplexact::data::linear_program::standard_form::StandardForm;
use simplexact::R;

#[test]
fn maximization() {
    let program = StandardForm::new(
        Objective::Maximize,
        vec![2, 3, 4],
        vec![vec![3, 2, 1], vec![2, 5, 3]],
        vec![10, 15],
    )
    .unwrap();
    let mut tableau = program.tableau();

    let result = primal::<MostNegative>(&mut tableau);
    assert_eq!(result, OptimizationResult::FiniteOptimum(R!(20)));
    assert!(is_in_basic_feasible_solution_state(&tableau));

    // Terminal tableau: no improving column remains
    for column in 0..tableau.nr_columns() {
        assert!(!tableau.relative_cost(column).is_negative());
    }
    // Feasibility held throughout: every right-hand side is still nonnegative
    for row in 0..tableau.nr_rows() {
        assert!(!tableau.constraint_value(row).is_negative());
    }

    let solution = program.solution(&tableau);
    assert_eq!(solution.objective_value(), &R!(20));
    assert_eq!(solution.variable_values(), &[R!(0), R!(0), R!(5)]);
}

#[test]
fn maximization_with_fractional_optimum() {
    let program = StandardForm::new(
        Objective::Maximize,
        vec![5, 4],
        vec![vec![6, 4], vec![1, 2]],
        vec![24, 6],
    )
    .unwrap();
    let mut tableau = program.tableau();

    let result = primal::<MostNegative>(&mut tableau);
    assert_eq!(result, OptimizationResult::FiniteOptimum(R!(21)));

    let solution = program.solution(&tableau);
    assert_eq!(solution.objective_value(), &R!(21));
    assert_eq!(solution.variable_values(), &[R!(3), R!(3, 2)]);
}

#[test]
fn minimization() {
    // Minimize -2x - 3y, the mirror image of maximizing 2x + 3y: optimum -10 at (2, 2)
    let program = StandardForm::new(
        Objective::Minimize,
        vec![-2, -3],
        vec![vec![1, 1], vec![0, 1]],
        vec![4, 2],
    )
    .unwrap();
    let mut tableau = program.tableau();

    let result = primal::<MostNegative>(&mut tableau);
    assert_eq!(result, OptimizationResult::FiniteOptimum(R!(10)));

    let solution = program.solution(&tableau);
    assert_eq!(solution.objective_value(), &R!(-10));
    assert_eq!(solution.variable_values(), &[R!(2), R!(2)]);
}

#[test]
fn pivot_rules_agree_on_the_optimum() {
    let program = StandardForm::new(
        Objective::Maximize,
        vec![2, 3, 4],
        vec![vec![3, 2, 1], vec![2, 5, 3]],
        vec![10, 15],
    )
    .unwrap();

    let mut most_negative = program.tableau();
    let mut first_profitable = program.tableau();

    assert_eq!(
        primal::<MostNegative>(&mut most_negative),
        primal::<FirstProfitable>(&mut first_profitable),
    );
}

#[test]
fn unbounded() {
    // x1 can grow without bound: no constraint has a positive coefficient for it
    let program = StandardForm::new(Objective::Maximize, vec![1, 0], vec![vec![0, 1]], vec![1])
        .unwrap();
    let mut tableau = program.tableau();

    assert_eq!(primal::<MostNegative>(&mut tableau), OptimizationResult::Unbounded);
}

#[test]
fn degenerate_tie_is_resolved_towards_the_first_row() {
    // Both rows bind x1 at the same ratio; the first one encountered leaves the basis
    let program = StandardForm::new(
        Objective::Maximize,
        vec![1],
        vec![vec![1], vec![1]],
        vec![3, 3],
    )
    .unwrap();
    let mut tableau = program.tableau();

    assert_eq!(tableau.select_pivot_row(0), Some(0));

    let result = primal::<MostNegative>(&mut tableau);
    assert_eq!(result, OptimizationResult::FiniteOptimum(R!(3)));
    assert!(tableau.is_in_basis(0));
    // The second row kept its slack basic, at level zero
    assert!(tableau.is_in_basis(2));
    assert_eq!(tableau.constraint_value(1), &R!(0));
}
