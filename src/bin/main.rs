use std::process::exit;

use clap::{Parser, ValueEnum};

use simplexact::algorithm::simplex::logic::OptimizationResult;
use simplexact::algorithm::simplex::strategy::pivot_rule::{
    FirstProfitable, MostNegative, PivotRule,
};
use simplexact::algorithm::simplex::tableau::Tableau;
use simplexact::data::linear_program::elements::Objective;
use simplexact::data::linear_program::standard_form::StandardForm;

/// An exact linear program solver written in rust.
///
/// Solves a built-in demonstration problem: maximize `2x1 + 3x2 + 4x3` subject to
/// `3x1 + 2x2 + x3 <= 10` and `2x1 + 5x2 + 3x3 <= 15`.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// Rule used to select the column entering the basis.
    #[arg(long, value_enum, default_value_t = Rule::MostNegative)]
    rule: Rule,
    /// Print the tableau before every pivot and once more after termination.
    #[arg(long)]
    show_tableaus: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Rule {
    MostNegative,
    FirstProfitable,
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();

    let program = StandardForm::new(
        Objective::Maximize,
        vec![2, 3, 4],
        vec![vec![3, 2, 1], vec![2, 5, 3]],
        vec![10, 15],
    )
    .expect("demonstration problem is well formed");

    let mut tableau = program.tableau();
    let result = match opts.rule {
        Rule::MostNegative => run::<MostNegative>(&mut tableau, opts.show_tableaus),
        Rule::FirstProfitable => run::<FirstProfitable>(&mut tableau, opts.show_tableaus),
    };

    match result {
        OptimizationResult::FiniteOptimum(_) => {
            println!("Solution computed:");
            println!("{}", program.solution(&tableau));
        }
        OptimizationResult::Unbounded => {
            println!("Problem is unbounded.");
            exit(1);
        }
    }
}

/// The iteration loop of `logic::primal`, unrolled here so the tableau can be rendered between
/// pivots; the engine itself stays free of console concerns.
fn run<PR: PivotRule>(tableau: &mut Tableau, show_tableaus: bool) -> OptimizationResult {
    let mut rule = PR::new();
    loop {
        if show_tableaus {
            println!("{}", tableau);
        }

        match rule.select_pivot_column(tableau) {
            Some(column) => match tableau.select_pivot_row(column) {
                Some(row) => tableau.bring_into_basis(column, row),
                None => break OptimizationResult::Unbounded,
            },
            None => break OptimizationResult::FiniteOptimum(tableau.objective_value().clone()),
        }
    }
}
