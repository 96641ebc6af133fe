//! Single-generation transition.
//!
//! A step runs, in order: the scheduled event, pairwise interactions (applied
//! immediately), tile modifiers and type rules (both buffered), then one
//! commit pass. Neighbor counts are read from the committed pre-step state,
//! so the result does not depend on tile iteration order.

use crate::api::PairApi;
use crate::error::SimError;
use crate::event::Event;
use crate::generation::Generation;
use crate::{moods, rules, Board};
use tracing::debug;

/// Run every mood interaction for this step and return how many of them
/// changed a cell.
///
/// Alive cells are visited in `(x, y)` order and each one acts on its alive
/// neighbors with a larger coordinate, so every unordered adjacent pair
/// interacts once with the smaller coordinate as the actor.
pub fn interaction_phase(board: &mut Board) -> Result<usize, SimError> {
    let mut interactions = 0;
    for k in 0..board.canonical_order().len() {
        let i = board.canonical_order()[k];
        if !board.cell_at(i)?.alive {
            continue;
        }
        let coord = board.tiles()[i].coord();
        for j in 0..board.tiles()[i].neighbors().len() {
            let n = board.tiles()[i].neighbors()[j];
            if board.tiles()[n].coord() < coord {
                continue;
            }
            let mut api = PairApi::on_board(board, i, n)?;
            if moods::interact(&mut api) {
                interactions += 1;
            }
        }
    }
    Ok(interactions)
}

/// Buffered life points per tile: post-interaction value plus the tile
/// modifier for alive cells.
pub fn modifier_phase(board: &Board) -> Result<Vec<i32>, SimError> {
    (0..board.tiles().len())
        .map(|i| {
            let cell = board.cell_at(i)?;
            Ok(cell
                .life_points
                .saturating_add(board.tiles()[i].energy_for(cell)))
        })
        .collect()
}

/// Evaluate type rules against pre-step aliveness and settle energy into
/// `energy`. Returns next aliveness per tile.
///
/// Respawn resets energy to 0, death costs 1, survival earns 1, all clamped
/// to the `i32` range. A cell the
/// rule keeps alive still dies when its energy ends up negative.
pub fn evolution_phase(board: &mut Board, energy: &mut [i32]) -> Result<Vec<bool>, SimError> {
    let counts: Vec<u8> = (0..board.tiles().len())
        .map(|i| board.alive_neighbors(i))
        .collect();

    let mut next = Vec::with_capacity(counts.len());
    for (i, &count) in counts.iter().enumerate() {
        let cell = board.cell_at_mut(i)?;
        let was_alive = cell.alive;
        let mut will_live = rules::evolve(cell, count);

        match (was_alive, will_live) {
            (false, true) => energy[i] = 0,
            (true, false) => energy[i] = energy[i].saturating_sub(1),
            (true, true) => energy[i] = energy[i].saturating_add(1),
            (false, false) => {}
        }
        if will_live && energy[i] < 0 {
            will_live = false;
        }
        next.push(will_live);
    }
    Ok(next)
}

/// Write the buffers back to every cell. Empowerment lasts one step.
pub fn commit(board: &mut Board, alive: &[bool], energy: &[i32]) {
    for ((cell, &next_alive), &life_points) in board.cells_mut().zip(alive).zip(energy) {
        cell.alive = next_alive;
        cell.life_points = life_points;
        cell.empowered = false;
    }
}

/// Evolve `board` from `current` and return the next generation.
///
/// A scheduled `event` is unrolled on every cell first and recorded on
/// `current`. A tile without a cell aborts before anything is mutated.
pub fn advance(
    board: &mut Board,
    current: &mut Generation,
    event: Option<Event>,
) -> Result<Generation, SimError> {
    board.check_cells()?;

    if let Some(event) = event {
        event.apply(board);
        current.record_event(event);
    }

    let interactions = interaction_phase(board)?;
    let mut energy = modifier_phase(board)?;
    let alive = evolution_phase(board, &mut energy)?;
    commit(board, &alive, &energy);

    let next = Generation::capture(current.step() + 1, board);
    debug!(
        step = next.step(),
        alive = next.alive_count(),
        interactions,
        event = ?event,
        "step committed"
    );
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{CellType, Mood};
    use crate::coord::Coord;
    use proptest::prelude::*;

    fn board_with(width: usize, height: usize, alive: &[(i32, i32)]) -> Board {
        let mut board = Board::new(width, height);
        for &(x, y) in alive {
            board.cell_mut(Coord::new(x, y)).unwrap().alive = true;
        }
        board
    }

    fn lp(board: &Board, x: i32, y: i32) -> i32 {
        board.cell(Coord::new(x, y)).unwrap().life_points
    }

    fn is_alive(board: &Board, x: i32, y: i32) -> bool {
        board.cell(Coord::new(x, y)).unwrap().alive
    }

    fn step_once(board: &mut Board) -> Generation {
        let mut current = Generation::capture(0, board);
        advance(board, &mut current, None).unwrap()
    }

    #[test]
    fn energy_follows_survival_death_and_respawn() {
        // Block corner survives, lone cell dies, L-tromino corner respawns.
        let mut board = board_with(6, 6, &[(0, 0), (0, 1), (1, 0), (4, 4)]);
        board.cell_mut(Coord::new(0, 0)).unwrap().life_points = 5;
        board.cell_mut(Coord::new(4, 4)).unwrap().life_points = 5;
        board.cell_mut(Coord::new(1, 1)).unwrap().life_points = 9;

        step_once(&mut board);

        assert!(is_alive(&board, 0, 0));
        assert_eq!(lp(&board, 0, 0), 6);
        assert!(!is_alive(&board, 4, 4));
        assert_eq!(lp(&board, 4, 4), 4);
        assert!(is_alive(&board, 1, 1));
        assert_eq!(lp(&board, 1, 1), 0);
    }

    #[test]
    fn dead_cell_energy_is_untouched() {
        let mut board = board_with(4, 4, &[]);
        board.cell_mut(Coord::new(2, 2)).unwrap().life_points = -3;
        board.configure_tile(Coord::new(2, 2), 5).unwrap();
        step_once(&mut board);
        assert_eq!(lp(&board, 2, 2), -3);
        assert!(!is_alive(&board, 2, 2));
    }

    #[test]
    fn modifier_applies_to_alive_cells_before_rules() {
        let mut board = board_with(4, 4, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        board.configure_tile(Coord::new(0, 0), 3).unwrap();
        step_once(&mut board);
        assert_eq!(lp(&board, 0, 0), 4);
        assert_eq!(lp(&board, 1, 1), 1);
    }

    #[test]
    fn extreme_modifiers_clamp_instead_of_overflowing() {
        let mut board = board_with(4, 4, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        board.configure_tile(Coord::new(0, 0), i32::MAX).unwrap();
        board.configure_tile(Coord::new(1, 1), i32::MIN).unwrap();
        step_once(&mut board);
        assert!(is_alive(&board, 0, 0));
        assert_eq!(lp(&board, 0, 0), i32::MAX);
        assert!(!is_alive(&board, 1, 1));
        assert_eq!(lp(&board, 1, 1), i32::MIN + 1);

        step_once(&mut board);
        assert_eq!(lp(&board, 0, 0), i32::MAX);
    }

    #[test]
    fn negative_energy_forces_death() {
        // A block: every cell has 3 neighbors and the rule says survive.
        let mut board = board_with(4, 4, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        board.configure_tile(Coord::new(1, 1), -3).unwrap();
        step_once(&mut board);
        assert!(!is_alive(&board, 1, 1));
        assert_eq!(lp(&board, 1, 1), -2);
        assert!(is_alive(&board, 0, 0));
    }

    #[test]
    fn neighbor_counts_come_from_pre_step_state() {
        // Blinker: row-order updates would break this if commit were eager.
        let mut board = board_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let next = step_once(&mut board);
        assert_eq!(
            next.alive_coords().into_iter().collect::<Vec<_>>(),
            vec![Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)]
        );
    }

    #[test]
    fn smaller_coordinate_acts() {
        // (0,0) naive with -1 refuses to act on (1,0) healer; had the healer
        // acted, the naive cell would have been healed.
        let mut board = board_with(2, 1, &[(0, 0), (1, 0)]);
        board.cell_mut(Coord::new(0, 0)).unwrap().life_points = -1;
        board.cell_mut(Coord::new(1, 0)).unwrap().mood = Mood::Healer;
        assert_eq!(interaction_phase(&mut board).unwrap(), 0);
        assert_eq!(lp(&board, 0, 0), -1);
    }

    #[test]
    fn each_pair_interacts_once() {
        // Vampire in the middle of a 3x3 of naive cells: 8 bites, one each.
        let coords: Vec<(i32, i32)> = (0..3).flat_map(|x| (0..3).map(move |y| (x, y))).collect();
        let mut board = board_with(3, 3, &coords);
        board.cell_mut(Coord::new(1, 1)).unwrap().mood = Mood::Vampire;
        assert_eq!(interaction_phase(&mut board).unwrap(), 8);
        // Naive cells before (1,1) walk into the vampire, the vampire bites
        // the ones after it. Both transfer one point the same way.
        assert_eq!(lp(&board, 1, 1), 8);
        for (x, y) in coords {
            if (x, y) != (1, 1) {
                assert_eq!(lp(&board, x, y), -1);
                assert!(board.cell(Coord::new(x, y)).unwrap().turning_from_naive());
            }
        }
    }

    #[test]
    fn missing_cell_aborts_without_mutation() {
        let mut board = board_with(3, 3, &[(0, 0), (0, 1), (1, 0)]);
        board.tiles[8].cell = None;
        let before: Vec<_> = board.cells().cloned().collect();
        let mut current = Generation::capture(0, &board);
        let result = advance(&mut board, &mut current, Some(crate::event::Event::Bloom));
        assert!(matches!(result, Err(SimError::MissingCell(c)) if c == Coord::new(2, 2)));
        assert_eq!(board.cells().cloned().collect::<Vec<_>>(), before);
        assert_eq!(current.event(), None);
    }

    #[test]
    fn event_is_recorded_and_empowerment_expires() {
        let mut board = board_with(3, 3, &[(0, 0)]);
        let mut current = Generation::capture(0, &board);
        let next = advance(&mut board, &mut current, Some(crate::event::Event::BloodMoon)).unwrap();
        assert_eq!(current.event(), Some(crate::event::Event::BloodMoon));
        assert_eq!(next.event(), None);
        assert_eq!(next.step(), 1);
        assert!(board.cells().all(|c| !c.empowered));
    }

    #[test]
    fn highlander_outlives_basic_in_isolation() {
        let mut board = board_with(5, 5, &[(0, 0), (4, 4)]);
        board.cell_mut(Coord::new(4, 4)).unwrap().cell_type = CellType::Highlander;
        step_once(&mut board);
        assert!(!is_alive(&board, 0, 0));
        assert!(is_alive(&board, 4, 4));
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        proptest::collection::vec((any::<bool>(), 0u8..3, 0u8..4, -2i32..4), 36).prop_map(|seeds| {
            let mut board = Board::new(6, 6);
            for (cell, (alive, mood, cell_type, life_points)) in board.cells_mut().zip(seeds) {
                cell.alive = alive;
                cell.mood = Mood::from_code(mood).unwrap();
                cell.cell_type = CellType::from_code(cell_type).unwrap();
                cell.life_points = life_points;
            }
            board
        })
    }

    proptest! {
        #[test]
        fn prop_interactions_are_deterministic(board in arb_board()) {
            let mut a = board.clone();
            let mut b = board;
            interaction_phase(&mut a).unwrap();
            interaction_phase(&mut b).unwrap();
            let lp_a: Vec<i32> = a.cells().map(|c| c.life_points).collect();
            let lp_b: Vec<i32> = b.cells().map(|c| c.life_points).collect();
            prop_assert_eq!(lp_a, lp_b);
        }
    }

    proptest! {
        #[test]
        fn prop_no_alive_cell_has_negative_energy(board in arb_board()) {
            let mut board = board;
            step_once(&mut board);
            for cell in board.cells() {
                prop_assert!(!(cell.alive && cell.life_points < 0));
            }
        }
    }

    proptest! {
        #[test]
        fn prop_pending_flags_are_consumed(board in arb_board()) {
            let mut board = board;
            step_once(&mut board);
            for cell in board.cells() {
                prop_assert!(!cell.turning_from_naive());
                prop_assert!(!cell.turning_from_healer());
            }
        }
    }
}
