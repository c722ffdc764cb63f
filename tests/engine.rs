use flowsolve::board::{CellType, Dir, Pos};
use flowsolve::reader::parse_puzzle;

const CLASSIC: &str = "RB...\n.Y...\n.GO..\n.GOYB\n....R\n";

#[test]
fn moves_out_of_bounds_or_into_occupied_cells_are_illegal() {
    let (info, state) = parse_puzzle(CLASSIC, "classic").unwrap();
    // R starts in the corner: up and left leave the board, right is B.
    assert!(!state.can_move(&info, 0, Dir::Up));
    assert!(!state.can_move(&info, 0, Dir::Left));
    assert!(!state.can_move(&info, 0, Dir::Right));
    assert!(state.can_move(&info, 0, Dir::Down));
}

#[test]
fn out_of_range_and_completed_colors_cannot_move() {
    let (info, state) = parse_puzzle(CLASSIC, "classic").unwrap();
    assert!(!state.can_move(&info, info.num_colors, Dir::Down));
    // G's endpoints touch, so it is closed from the start.
    assert!(state.is_completed(3));
    for dir in Dir::ALL {
        assert!(!state.can_move(&info, 3, dir));
    }
}

#[test]
fn a_path_may_not_touch_its_own_tail() {
    let (info, mut state) = parse_puzzle("A...\n....\n....\n...A\n", "selftouch").unwrap();
    state.make_move(&info, 0, Dir::Right);
    state.make_move(&info, 0, Dir::Down);
    // Turning left would put the new segment next to the A origin.
    assert!(state.cell(Pos::new(0, 1)).is_free());
    assert!(!state.can_move(&info, 0, Dir::Left));
    assert!(state.can_move(&info, 0, Dir::Down));
    assert!(state.can_move(&info, 0, Dir::Right));
}

#[test]
fn reaching_the_goal_closes_the_color() {
    let (info, mut state) = parse_puzzle("A.A\n...\n...\n", "onemove").unwrap();
    assert!(!state.is_completed(0));
    assert_eq!(state.num_free, 7);

    state.make_move(&info, 0, Dir::Right);

    assert!(state.is_completed(0));
    assert_eq!(state.head_pos[0], Pos::new(1, 0));
    assert_eq!(state.num_free, 6);
    let goal = state.cell(info.goal_pos[0]);
    assert_eq!(goal.ty(), CellType::Goal);
    assert_eq!(goal.dir(), Dir::Right);
}

#[test]
fn free_cell_bookkeeping_matches_the_grid() {
    let (info, mut state) = parse_puzzle(CLASSIC, "classic").unwrap();
    for dir in [Dir::Down, Dir::Down, Dir::Down] {
        state.make_move(&info, 0, dir);
    }

    let mut non_free = 0;
    for y in 0..info.size as i32 {
        for x in 0..info.size as i32 {
            if !state.is_free(&info, x, y) {
                non_free += 1;
            }
        }
    }
    assert_eq!(state.num_free as usize + non_free, info.size * info.size);
}

#[test]
fn free_around_counts_in_bounds_free_neighbors() {
    let (info, state) = parse_puzzle(CLASSIC, "classic").unwrap();
    // R in the corner: only (0,1) is free.
    assert_eq!(state.free_around(&info, Pos::new(0, 0)), 1);
    // Y at (1,1): (0,1) and (2,1) are free.
    assert_eq!(state.free_around(&info, Pos::new(1, 1)), 2);
    // Bottom edge below one of O's endpoints.
    assert_eq!(state.free_around(&info, Pos::new(2, 4)), 2);
}

#[test]
fn last_moved_color_keeps_the_turn_until_it_closes() {
    let (info, mut state) = parse_puzzle(CLASSIC, "classic").unwrap();
    state.make_move(&info, 1, Dir::Right);
    assert_eq!(state.next_color(&info, true), Some(1));
    assert_eq!(state.next_color(&info, false), Some(1));
}

#[test]
fn most_constrained_head_is_selected_with_static_tiebreak() {
    let (info, mut state) = parse_puzzle(CLASSIC, "classic").unwrap();
    // Finish R; B and Y then tie at one free neighbor each, so the
    // earlier color in static order wins.
    for dir in [Dir::Down, Dir::Down, Dir::Down, Dir::Down, Dir::Right, Dir::Right, Dir::Right] {
        state.make_move(&info, 0, dir);
    }
    assert!(state.is_completed(0));
    assert_eq!(state.free_around(&info, state.head_pos[1]), 1);
    assert_eq!(state.free_around(&info, state.head_pos[2]), 1);
    assert_eq!(state.next_color(&info, true), Some(1));
}

#[test]
fn no_color_is_offered_once_all_are_closed() {
    let (info, state) = parse_puzzle("AA.\n...\n...\n", "closed").unwrap();
    assert!(state.is_completed(0));
    assert_eq!(state.next_color(&info, true), None);
    assert_eq!(state.next_color(&info, false), None);
}

#[test]
fn solved_requires_full_coverage_and_all_colors_closed() {
    // All colors closed but cells free: not solved.
    let (info, state) = parse_puzzle("AA.\n...\n...\n", "covered").unwrap();
    assert!(state.is_completed(0));
    assert!(!state.is_solved(&info));
}
