use crate::core::io::sudoku::SudokuFile;
use crate::core::sudoku::Solver;
use crate::engine::context::ProblemContext;
use crate::engine::error::EngineError;
use crate::engine::problem::{Answer, Problem};
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::debug;

pub(crate) const P096: Problem = Problem {
    id: 96,
    title: "Su Doku",
    fixture: Some("p096_sudoku.txt"),
    parameters: &[],
    solve: sum_of_corner_numbers,
};

/// Solves every puzzle in the fixture and sums the three-digit numbers in their
/// top-left corners.
fn sum_of_corner_numbers(
    ctx: &ProblemContext,
    reporter: &ProgressReporter,
) -> Result<Answer, EngineError> {
    let puzzles = ctx.read_fixture::<SudokuFile>()?;
    let solver = Solver::new();

    reporter.report(Progress::TaskStart {
        total_steps: puzzles.len() as u64,
    });
    let mut sum = 0u64;
    let mut branched = 0usize;
    for puzzle in &puzzles {
        let (solution, stats) = solver.solve_with_stats(&puzzle.board);
        let solution =
            solution.ok_or_else(|| ctx.no_solution(format!("{} has no solution", puzzle.label)))?;
        debug!(
            "{}: {} givens, {} propagations, {} guesses",
            puzzle.label,
            puzzle.board.givens(),
            stats.propagations,
            stats.guesses
        );
        if stats.guesses > 0 {
            branched += 1;
        }
        sum += solution.top_left_number() as u64;
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::Message(format!(
        "Solved {} grids, {} by propagation alone",
        puzzles.len(),
        puzzles.len() - branched
    )));

    Ok(Answer::from(sum))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::problems::test_support::{context_with, solve_fixture};
    use std::sync::Mutex;

    const TWO_GRIDS: &str = "\
Grid 01
003020600
900305001
001806400
008102900
700000008
006708200
002609500
800203009
005010300
Grid 02
200080300
060070084
030500209
000105408
000000000
402706000
301007040
720040060
004010003
";

    #[test]
    fn corner_numbers_of_solved_grids_are_summed() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            solve_fixture(&P096, dir.path(), TWO_GRIDS),
            Answer::Integer(483 + 245)
        );
    }

    #[test]
    fn solve_summary_is_reported_as_a_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p096_sudoku.txt");
        std::fs::write(&path, TWO_GRIDS).unwrap();
        let ctx = context_with(&P096, &[]).with_fixture(path);

        let messages = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
            if let Progress::Message(text) = event {
                messages.lock().unwrap().push(text);
            }
        }));
        (P096.solve)(&ctx, &reporter).unwrap();
        drop(reporter);

        let messages = messages.into_inner().unwrap();
        assert_eq!(messages, vec!["Solved 2 grids, 2 by propagation alone".to_string()]);
    }

    #[test]
    fn contradictory_grid_names_its_label() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p096_sudoku.txt");
        let broken = TWO_GRIDS.replacen("200080300", "220080300", 1);
        std::fs::write(&path, broken).unwrap();

        let ctx = context_with(&P096, &[]).with_fixture(path);
        let err = (P096.solve)(&ctx, &ProgressReporter::new()).unwrap_err();
        match err {
            EngineError::NoSolution { problem, reason } => {
                assert_eq!(problem, 96);
                assert!(reason.contains("Grid 02"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
