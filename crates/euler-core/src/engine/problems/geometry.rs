use crate::core::io::coords::TriangleCoordsFile;
use crate::engine::context::ProblemContext;
use crate::engine::error::EngineError;
use crate::engine::problem::{Answer, Problem};
use crate::engine::progress::ProgressReporter;
use tracing::debug;

pub(crate) const P102: Problem = Problem {
    id: 102,
    title: "Triangle containment",
    fixture: Some("p102_triangles.txt"),
    parameters: &[],
    solve: triangles_containing_origin,
};

fn triangles_containing_origin(
    ctx: &ProblemContext,
    _: &ProgressReporter,
) -> Result<Answer, EngineError> {
    let triangles = ctx.read_fixture::<TriangleCoordsFile>()?;
    let count = triangles.iter().filter(|t| t.contains_origin()).count();
    debug!("{} of {} triangles contain the origin", count, triangles.len());
    Ok(Answer::from(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::problems::test_support::solve_fixture;

    #[test]
    fn only_the_first_worked_triangle_contains_the_origin() {
        let dir = tempfile::tempdir().unwrap();
        let content = "-340,495,-153,-910,835,-947\n-175,41,-421,-714,574,-645\n";
        assert_eq!(solve_fixture(&P102, dir.path(), content), Answer::Integer(1));
    }
}
