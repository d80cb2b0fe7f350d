use crate::core::graph::triangle::max_path_sum;
use crate::core::graph::{End, Moves, Start};
use crate::core::io::matrix::MatrixFile;
use crate::core::io::triangle::TriangleFile;
use crate::engine::context::ProblemContext;
use crate::engine::error::EngineError;
use crate::engine::problem::{Answer, Problem};
use crate::engine::progress::ProgressReporter;
use tracing::debug;

pub(crate) const P018: Problem = Problem {
    id: 18,
    title: "Maximum path sum I",
    fixture: Some("p018_triangle.txt"),
    parameters: &[],
    solve: triangle_path_sum,
};

pub(crate) const P067: Problem = Problem {
    id: 67,
    title: "Maximum path sum II",
    fixture: Some("p067_triangle.txt"),
    parameters: &[],
    solve: triangle_path_sum,
};

pub(crate) const P081: Problem = Problem {
    id: 81,
    title: "Path sum: two ways",
    fixture: Some("p081_matrix.txt"),
    parameters: &[],
    solve: two_way_path_sum,
};

pub(crate) const P082: Problem = Problem {
    id: 82,
    title: "Path sum: three ways",
    fixture: Some("p082_matrix.txt"),
    parameters: &[],
    solve: three_way_path_sum,
};

pub(crate) const P083: Problem = Problem {
    id: 83,
    title: "Path sum: four ways",
    fixture: Some("p083_matrix.txt"),
    parameters: &[],
    solve: four_way_path_sum,
};

fn triangle_path_sum(ctx: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
    let rows = ctx.read_fixture::<TriangleFile>()?;
    debug!("Triangle has {} rows", rows.len());
    Ok(Answer::from(max_path_sum(&rows)))
}

fn matrix_path_sum(
    ctx: &ProblemContext,
    moves: Moves,
    start: Start,
    end: End,
) -> Result<Answer, EngineError> {
    let grid = ctx.read_fixture::<MatrixFile>()?;
    debug!("Matrix is {}x{}, moves {:?}", grid.rows(), grid.cols(), moves);
    grid.min_path_sum(moves, start, end)
        .map(Answer::from)
        .ok_or_else(|| ctx.no_solution("no path reaches the target cells"))
}

fn two_way_path_sum(ctx: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
    matrix_path_sum(ctx, Moves::RightDown, Start::TopLeft, End::BottomRight)
}

fn three_way_path_sum(ctx: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
    matrix_path_sum(ctx, Moves::UpRightDown, Start::LeftColumn, End::RightColumn)
}

fn four_way_path_sum(ctx: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
    matrix_path_sum(ctx, Moves::FourWay, Start::TopLeft, End::BottomRight)
}
