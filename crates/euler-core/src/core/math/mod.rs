pub mod arith;
pub mod combinatorics;
pub mod farey;
pub mod primes;
pub mod sequences;
pub mod triples;
