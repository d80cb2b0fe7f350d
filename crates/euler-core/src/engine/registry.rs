use super::error::EngineError;
use super::problem::Problem;
use super::problems::{
    divisors, fractions, geometry, paths, primes, sequences, sudoku, totients, triples,
};

/// Every solved problem, sorted by id.
static REGISTRY: &[Problem] = &[
    sequences::P002,
    primes::P003,
    divisors::P005,
    primes::P007,
    primes::P010,
    divisors::P012,
    sequences::P014,
    sequences::P015,
    paths::P018,
    divisors::P021,
    divisors::P023,
    primes::P027,
    primes::P035,
    primes::P037,
    triples::P039,
    sequences::P044,
    sequences::P045,
    primes::P046,
    primes::P047,
    primes::P049,
    primes::P050,
    sequences::P053,
    paths::P067,
    totients::P069,
    totients::P070,
    fractions::P071,
    totients::P072,
    fractions::P073,
    triples::P075,
    paths::P081,
    paths::P082,
    paths::P083,
    sudoku::P096,
    geometry::P102,
];

pub fn registry() -> &'static [Problem] {
    REGISTRY
}

pub fn find(id: u32) -> Result<&'static Problem, EngineError> {
    REGISTRY
        .binary_search_by_key(&id, |p| p.id)
        .map(|index| &REGISTRY[index])
        .map_err(|_| EngineError::UnknownProblem(id))
}
