use super::board::{Board, CELLS, SIZE};

const ALL_CANDIDATES: u16 = 0b11_1111_1110;

/// Counters collected during one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Digits placed by naked or hidden singles.
    pub propagations: u64,
    /// Branches tried by the backtracking search.
    pub guesses: u64,
}

#[derive(Debug, Clone)]
struct SearchState {
    cells: [u8; CELLS],
    candidates: [u16; CELLS],
}

/// Propagate-then-branch Sudoku solver.
///
/// Every assignment removes the digit from the candidates of its 20 peers. After the
/// givens are placed, naked singles and hidden singles are applied until nothing
/// changes; if cells remain open, the one with the fewest candidates is branched on.
#[derive(Debug, Clone)]
pub struct Solver {
    units: Vec<[usize; SIZE]>,
    peers: Vec<Vec<usize>>,
}

impl Solver {
    pub fn new() -> Self {
        let mut units: Vec<[usize; SIZE]> = Vec::with_capacity(3 * SIZE);
        for r in 0..SIZE {
            units.push(std::array::from_fn(|c| r * SIZE + c));
        }
        for c in 0..SIZE {
            units.push(std::array::from_fn(|r| r * SIZE + c));
        }
        for b in 0..SIZE {
            let (br, bc) = (b / 3 * 3, b % 3 * 3);
            units.push(std::array::from_fn(|i| (br + i / 3) * SIZE + bc + i % 3));
        }

        let peers = (0..CELLS)
            .map(|cell| {
                let mut peers: Vec<usize> = units
                    .iter()
                    .filter(|unit| unit.contains(&cell))
                    .flatten()
                    .copied()
                    .filter(|&other| other != cell)
                    .collect();
                peers.sort_unstable();
                peers.dedup();
                peers
            })
            .collect();

        Self { units, peers }
    }

    pub fn solve(&self, board: &Board) -> Option<Board> {
        self.solve_with_stats(board).0
    }

    /// Returns the first solution found, or `None` if the givens contradict each
    /// other or admit no completion.
    pub fn solve_with_stats(&self, board: &Board) -> (Option<Board>, SolveStats) {
        let mut stats = SolveStats::default();
        let solution = self
            .initial_state(board)
            .and_then(|state| self.search(state, &mut stats))
            .and_then(|state| Board::from_cells(state.cells));
        (solution, stats)
    }

    fn initial_state(&self, board: &Board) -> Option<SearchState> {
        let mut state = SearchState {
            cells: [0; CELLS],
            candidates: [ALL_CANDIDATES; CELLS],
        };
        for (cell, &digit) in board.cells().iter().enumerate() {
            if digit != 0 && !self.assign(&mut state, cell, digit) {
                return None;
            }
        }
        Some(state)
    }

    /// Places `digit` and prunes it from every peer. `false` on contradiction.
    fn assign(&self, state: &mut SearchState, cell: usize, digit: u8) -> bool {
        let bit = 1u16 << digit;
        if state.candidates[cell] & bit == 0 {
            return false;
        }
        state.cells[cell] = digit;
        state.candidates[cell] = bit;

        for &peer in &self.peers[cell] {
            if state.cells[peer] == digit {
                return false;
            }
            if state.cells[peer] == 0 {
                state.candidates[peer] &= !bit;
                if state.candidates[peer] == 0 {
                    return false;
                }
            }
        }
        true
    }

    fn propagate(&self, state: &mut SearchState, stats: &mut SolveStats) -> bool {
        loop {
            let mut changed = false;

            for cell in 0..CELLS {
                if state.cells[cell] != 0 {
                    continue;
                }
                let mask = state.candidates[cell];
                if mask.count_ones() == 1 {
                    if !self.assign(state, cell, mask.trailing_zeros() as u8) {
                        return false;
                    }
                    stats.propagations += 1;
                    changed = true;
                }
            }

            for unit in &self.units {
                for digit in 1..=SIZE as u8 {
                    match self.hidden_single(state, unit, digit) {
                        HiddenSingle::Impossible => return false,
                        HiddenSingle::At(cell) => {
                            if !self.assign(state, cell, digit) {
                                return false;
                            }
                            stats.propagations += 1;
                            changed = true;
                        }
                        HiddenSingle::None => {}
                    }
                }
            }

            if !changed {
                return true;
            }
        }
    }

    fn hidden_single(&self, state: &SearchState, unit: &[usize; SIZE], digit: u8) -> HiddenSingle {
        let bit = 1u16 << digit;
        let mut spot = None;
        let mut count = 0;
        for &cell in unit {
            if state.cells[cell] == digit {
                return HiddenSingle::None;
            }
            if state.cells[cell] == 0 && state.candidates[cell] & bit != 0 {
                count += 1;
                spot = Some(cell);
            }
        }
        match (count, spot) {
            (0, _) => HiddenSingle::Impossible,
            (1, Some(cell)) => HiddenSingle::At(cell),
            _ => HiddenSingle::None,
        }
    }

    fn search(&self, mut state: SearchState, stats: &mut SolveStats) -> Option<SearchState> {
        if !self.propagate(&mut state, stats) {
            return None;
        }

        let branch_cell = (0..CELLS)
            .filter(|&cell| state.cells[cell] == 0)
            .min_by_key(|&cell| state.candidates[cell].count_ones());
        let Some(cell) = branch_cell else {
            return Some(state);
        };

        let mut mask = state.candidates[cell];
        while mask != 0 {
            let digit = mask.trailing_zeros() as u8;
            mask &= mask - 1;
            stats.guesses += 1;

            let mut branch = state.clone();
            if self.assign(&mut branch, cell, digit) {
                if let Some(solved) = self.search(branch, stats) {
                    return Some(solved);
                }
            }
        }
        None
    }
}

enum HiddenSingle {
    None,
    At(usize),
    Impossible,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
