//! # Standard form problems
//!
//! A problem statement in standard form: optimize a linear objective over nonnegative variables,
//! subject to `<=` constraints that are turned into equalities by one slack variable each. This
//! is the boundary between a human-readable problem description and the tableau the algorithm
//! iterates on.
use std::fmt;
use std::fmt::Display;

use num_traits::Zero;

use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::linear_program::elements::{BuildError, Objective};
use crate::data::number_types::rational::Rational;

/// A linear program in standard form.
///
/// Coefficients are plain signed integers; they become exact rationals with denominator one
/// during tableau assembly.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StandardForm {
    direction: Objective,
    /// Objective coefficient per structural variable.
    cost: Vec<i64>,
    /// Constraint coefficients over the structural variables, one row per constraint.
    rows: Vec<Vec<i64>>,
    /// Right-hand side per constraint row.
    rhs: Vec<i64>,
}

impl StandardForm {
    /// Create a new instance after checking the shape of the problem.
    ///
    /// # Arguments
    ///
    /// * `direction`: Whether the objective should be maximized or minimized.
    /// * `cost`: Objective coefficient per structural variable.
    /// * `rows`: Constraint coefficients, one row per `<=` constraint, each as long as `cost`.
    /// * `rhs`: Right-hand side per constraint row.
    ///
    /// # Errors
    ///
    /// When the problem is empty or the dimensions of the arguments don't agree.
    pub fn new(
        direction: Objective,
        cost: Vec<i64>,
        rows: Vec<Vec<i64>>,
        rhs: Vec<i64>,
    ) -> Result<Self, BuildError> {
        if cost.is_empty() || rows.is_empty() {
            return Err(BuildError::Empty);
        }
        for (row, coefficients) in rows.iter().enumerate() {
            if coefficients.len() != cost.len() {
                return Err(BuildError::RowLength {
                    row,
                    expected: cost.len(),
                    found: coefficients.len(),
                });
            }
        }
        if rhs.len() != rows.len() {
            return Err(BuildError::RhsLength {
                expected: rows.len(),
                found: rhs.len(),
            });
        }

        Ok(Self {
            direction,
            cost,
            rows,
            rhs,
        })
    }

    /// The number of structural variables.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// The number of constraints, which is also the number of slack variables.
    pub fn nr_constraints(&self) -> usize {
        self.rows.len()
    }

    /// Direction of optimization of the original problem statement.
    pub fn direction(&self) -> Objective {
        self.direction
    }

    /// Assemble the tableau for this problem.
    ///
    /// The objective row is stored in the minimize convention (a maximization objective is
    /// negated), the slack columns receive an identity block and form the initial basis, and both
    /// trailing slots start at zero. The result is a basic feasible solution as long as the
    /// right-hand sides are nonnegative, which is the algorithm's precondition.
    pub fn tableau(&self) -> Tableau {
        let nr_variables = self.nr_variables();
        let nr_constraints = self.nr_constraints();
        let nr_columns = nr_variables + nr_constraints;

        let mut objective = DenseVector::constant(Rational::zero(), nr_columns + 1);
        for (column, &cost) in self.cost.iter().enumerate() {
            objective[column] = match self.direction {
                Objective::Maximize => Rational::from(-cost),
                Objective::Minimize => Rational::from(cost),
            };
        }

        let constraints = self
            .rows
            .iter()
            .enumerate()
            .map(|(row, coefficients)| {
                let mut values = DenseVector::constant(Rational::zero(), nr_columns);
                for (column, &coefficient) in coefficients.iter().enumerate() {
                    values[column] = Rational::from(coefficient);
                }
                values[nr_variables + row] = Rational::from(1);
                values
            })
            .collect();

        let mut rhs = DenseVector::constant(Rational::zero(), nr_constraints + 1);
        for (row, &value) in self.rhs.iter().enumerate() {
            rhs[row] = Rational::from(value);
        }

        Tableau::new_with_basis(
            objective,
            constraints,
            rhs,
            (nr_variables..nr_columns).collect(),
        )
    }

    /// Read the solution out of a terminal tableau.
    ///
    /// The running objective value in the tableau is relative to the minimize convention; it is
    /// adjusted back to the direction of the original problem statement here.
    pub fn solution(&self, tableau: &Tableau) -> Solution {
        debug_assert_eq!(tableau.nr_columns(), self.nr_variables() + self.nr_constraints());

        let objective_value = match self.direction {
            Objective::Maximize => tableau.objective_value().clone(),
            Objective::Minimize => -tableau.objective_value(),
        };
        let mut values = tableau.basic_solution();
        values.truncate(self.nr_variables());

        Solution::new(objective_value, values)
    }
}

/// Represents a solution to a linear program: the objective value and the values of the
/// structural variables that attain it.
///
/// This struct would typically be used to print the optimal solution for the user; slack values
/// are not part of it.
#[derive(Debug, Eq, PartialEq)]
pub struct Solution {
    objective_value: Rational,
    variable_values: Vec<Rational>,
}

impl Solution {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(objective_value: Rational, variable_values: Vec<Rational>) -> Self {
        Self {
            objective_value,
            variable_values,
        }
    }

    /// Value of the objective function for this solution.
    pub fn objective_value(&self) -> &Rational {
        &self.objective_value
    }

    /// Value per structural variable, in the order of the problem statement.
    pub fn variable_values(&self) -> &[Rational] {
        &self.variable_values
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "objective: {}", self.objective_value)?;
        for (variable, value) in self.variable_values.iter().enumerate() {
            writeln!(f, "x{} = {}", variable + 1, value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use num_traits::{One, Zero};

    use crate::data::linear_program::elements::{BuildError, Objective};
    use crate::data::linear_program::standard_form::StandardForm;
    use crate::data::number_types::rational::Rational;
    use crate::R;

    #[test]
    fn shape_validation() {
        assert_eq!(
            StandardForm::new(Objective::Maximize, vec![], vec![], vec![]),
            Err(BuildError::Empty),
        );
        assert_eq!(
            StandardForm::new(Objective::Maximize, vec![1, 2], vec![vec![1]], vec![1]),
            Err(BuildError::RowLength {
                row: 0,
                expected: 2,
                found: 1,
            }),
        );
        assert_eq!(
            StandardForm::new(Objective::Maximize, vec![1, 2], vec![vec![1, 1]], vec![1, 4]),
            Err(BuildError::RhsLength {
                expected: 1,
                found: 2,
            }),
        );
    }

    #[test]
    fn tableau_assembly() {
        let program = StandardForm::new(
            Objective::Maximize,
            vec![2, 3],
            vec![vec![1, 1], vec![1, 3]],
            vec![4, 6],
        )
        .unwrap();
        let tableau = program.tableau();

        assert_eq!(tableau.nr_rows(), 2);
        assert_eq!(tableau.nr_columns(), 4);
        // Maximization costs are negated into the minimize convention
        assert_eq!(tableau.relative_cost(0), &R!(-2));
        assert_eq!(tableau.relative_cost(1), &R!(-3));
        // Identity block over the slack columns
        for row in 0..2 {
            for slack in 0..2 {
                let expected = if slack == row {
                    Rational::one()
                } else {
                    Rational::zero()
                };
                assert_eq!(tableau.constraint_coefficient(row, 2 + slack), &expected);
            }
        }
        assert_eq!(tableau.constraint_value(0), &R!(4));
        assert_eq!(tableau.objective_value(), &Rational::zero());
    }

    #[test]
    fn minimization_sign() {
        let program = StandardForm::new(
            Objective::Minimize,
            vec![-1],
            vec![vec![1]],
            vec![3],
        )
        .unwrap();
        let mut tableau = program.tableau();

        // Stored as-is: the negative cost marks the improving column
        assert_eq!(tableau.relative_cost(0), &R!(-1));

        tableau.bring_into_basis(0, 0);
        let solution = program.solution(&tableau);
        assert_eq!(solution.objective_value(), &R!(-3));
        assert_eq!(solution.variable_values(), &[R!(3)]);
    }
}
