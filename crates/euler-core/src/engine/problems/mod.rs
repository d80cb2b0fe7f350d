//! Problem solutions grouped by the shared library they lean on.

pub(crate) mod divisors;
pub(crate) mod fractions;
pub(crate) mod geometry;
pub(crate) mod paths;
pub(crate) mod primes;
pub(crate) mod sequences;
pub(crate) mod sudoku;
pub(crate) mod totients;
pub(crate) mod triples;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::engine::context::ProblemContext;
    use crate::engine::problem::{Answer, Problem};
    use crate::engine::progress::ProgressReporter;
    use std::path::Path;

    pub fn context_with(problem: &Problem, overrides: &[(&'static str, i64)]) -> ProblemContext {
        let mut values: Vec<(&'static str, i64)> = problem
            .parameters
            .iter()
            .map(|p| (p.name, p.default))
            .collect();
        for &(name, value) in overrides {
            match values.iter_mut().find(|(n, _)| *n == name) {
                Some(slot) => slot.1 = value,
                None => values.push((name, value)),
            }
        }
        ProblemContext::with_values(problem.id, &values)
    }

    pub fn solve_with(problem: &Problem, overrides: &[(&'static str, i64)]) -> Answer {
        (problem.solve)(&context_with(problem, overrides), &ProgressReporter::new())
            .expect("problem should solve")
    }

    pub fn solve_default(problem: &Problem) -> Answer {
        solve_with(problem, &[])
    }

    pub fn solve_fixture(problem: &Problem, dir: &Path, content: &str) -> Answer {
        let path = dir.join(problem.fixture.expect("problem reads a fixture"));
        std::fs::write(&path, content).unwrap();
        let ctx = context_with(problem, &[]).with_fixture(path);
        (problem.solve)(&ctx, &ProgressReporter::new()).expect("problem should solve")
    }
}
