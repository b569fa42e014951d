use golboard::{pos, Board, BoardError, Pattern, Topology};
use rand::{rngs::StdRng, SeedableRng};

const SPACESHIP: &str = "--XX-\n-XXXX\nXX-XX\n-XX--";
const BLOCK: &str = "----\n-XX-\n-XX-\n----";
const TOAD_1: &str = "------\n------\n--XXX-\n-XXX--\n------\n------";
const TOAD_2: &str = "------\n---X--\n-X--X-\n-X--X-\n--X---\n------";

fn toroidal(width: usize, height: usize, cell_size: usize) -> Board {
    Board::seeded(width, height, cell_size, Topology::Toroidal, 1).unwrap()
}

fn blank(columns: usize, rows: usize) -> String {
    vec!["-".repeat(columns); rows].join("\n")
}

#[test]
fn spaceship_dies_out_on_small_torus() {
    for cell_size in [1, 2] {
        let mut board = toroidal(5 * cell_size, 4 * cell_size, cell_size);
        assert_eq!(board.width(), 5 * cell_size);
        assert_eq!(board.height(), 4 * cell_size);
        assert_eq!(board.columns(), 5);
        assert_eq!(board.rows(), 4);
        assert_eq!(board.render(), blank(5, 4));

        board.reset(SPACESHIP).unwrap();
        assert_eq!(board.render(), SPACESHIP);

        board.advance();
        assert_eq!(board.render(), "X---X\n-----\n-----\n-----");

        for _ in 0..3 {
            board.advance();
            assert_eq!(board.render(), blank(5, 4));
        }
    }
}

#[test]
fn glider_gun_first_generation() {
    let mut board = toroidal(36, 9, 1);
    let gun = Pattern::named("glider-gun").unwrap();
    board.place(&gun).unwrap();
    assert_eq!(board.render(), gun.to_string());

    board.advance();
    assert_eq!(
        board.render(),
        "-----------------------X-X----------\n\
         ---------------------X---X----------\n\
         -------------X-------X--------------\n\
         ------------XXXX----X----X--------XX\n\
         -----------XX-X-X----X------------X-\n\
         -X--------XXX-X--X---X---X----------\n\
         XX---------XX-X-X------X-X----------\n\
         ------------XXXX--------------------\n\
         -------------X----------------------"
    );
}

#[test]
fn toad_oscillates_without_drift() {
    let mut board = toroidal(6, 6, 1);
    board.reset(TOAD_1).unwrap();
    assert_eq!(board.render(), TOAD_1);

    for _ in 0..10_000 {
        board.advance();
        assert_eq!(board.render(), TOAD_2);
        board.advance();
        assert_eq!(board.render(), TOAD_1);
    }
}

#[test]
fn block_is_still_life() {
    for topology in [Topology::Toroidal, Topology::Bounded] {
        let mut board = Board::with_topology(4, 4, 1, topology).unwrap();
        board.reset(BLOCK).unwrap();
        for _ in 0..10_000 {
            board.advance();
            assert_eq!(board.render(), BLOCK);
        }
    }
}

#[test]
fn blinker_on_bounded_edge_loses_wrapped_support() {
    // a vertical blinker on the left edge: on a torus the right column
    // counts as adjacent, on a bounded board it does not exist.
    let pattern = "X--\nX--\nX--";

    let mut bounded = Board::with_topology(3, 3, 1, Topology::Bounded).unwrap();
    bounded.reset(pattern).unwrap();
    bounded.advance();
    assert_eq!(bounded.render(), "---\nXX-\n---");

    let mut torus = toroidal(3, 3, 1);
    torus.reset(pattern).unwrap();
    torus.advance();
    assert_eq!(torus.render(), "XXX\nXXX\nXXX");
}

#[test]
fn render_round_trips_full_patterns() {
    for pattern in [SPACESHIP, "X-X-X\n-X-X-\nXXXXX\n-----"] {
        let mut board = toroidal(5, 4, 1);
        board.reset(pattern).unwrap();
        assert_eq!(board.render(), pattern);
        assert_eq!(board.to_string(), pattern);
    }
}

#[test]
fn reset_centers_smaller_patterns() {
    let mut board = toroidal(7, 5, 1);
    board.reset("XX\nXX").unwrap();
    // x offset (7 - 2) / 2 = 2, y offset (5 - 2) / 2 = 1
    assert_eq!(
        board.render(),
        "-------\n--XX---\n--XX---\n-------\n-------"
    );
}

#[test]
fn reset_keeps_cells_outside_the_pattern() {
    let mut board = toroidal(5, 5, 1);
    board.reset("XXXXX\nXXXXX\nXXXXX\nXXXXX\nXXXXX").unwrap();
    board.reset("---\n---\n---").unwrap();
    assert_eq!(
        board.render(),
        "XXXXX\nX---X\nX---X\nX---X\nXXXXX"
    );

    board.clear();
    assert_eq!(board.render(), blank(5, 5));
    assert_eq!(board.population(), 0);
}

#[test]
fn reset_rejects_patterns_larger_than_board() {
    let mut board = toroidal(4, 4, 1);
    board.reset(BLOCK).unwrap();
    assert_eq!(
        board.reset("XXXXX"),
        Err(BoardError::OutOfBounds {
            pattern_width: 5,
            pattern_height: 1,
            columns: 4,
            rows: 4
        })
    );
    assert!(board.reset("X\nX\nX\nX\nX").is_err());
    assert_eq!(board.render(), BLOCK);
}

#[test]
fn reset_rejects_ragged_patterns_without_writing() {
    let mut board = toroidal(5, 4, 1);
    assert_eq!(
        board.reset("XXX\nX\nXXX"),
        Err(BoardError::Format {
            line: 2,
            expected: 3,
            found: 1
        })
    );
    assert_eq!(board.population(), 0);
}

#[test]
fn invalid_dimensions() {
    let invalid = |width, height, cell_size| {
        Board::new(width, height, cell_size).unwrap_err()
            == BoardError::InvalidDimensions {
                width,
                height,
                cell_size,
            }
    };
    assert!(invalid(10, 10, 0));
    assert!(invalid(0, 10, 1));
    assert!(invalid(10, 3, 4));
}

#[test]
fn dimensions_truncate() {
    for (width, height, cell_size) in [(10, 8, 2), (11, 9, 2), (7, 7, 3), (1, 1, 1), (100, 3, 3)] {
        let board = Board::new(width, height, cell_size).unwrap();
        assert_eq!(board.columns(), width / cell_size);
        assert_eq!(board.rows(), height / cell_size);
        assert_eq!(board.width(), board.columns() * cell_size);
        assert_eq!(board.height(), board.rows() * cell_size);
        assert_eq!(board.cell_size(), cell_size);
    }
}

#[test]
fn neighbor_counts() {
    let torus = toroidal(5, 4, 1);
    for y in 0..4 {
        for x in 0..5 {
            assert_eq!(torus.neighbor_count(pos!(x, y)), Some(8));
        }
    }

    let bounded = Board::with_topology(5, 4, 1, Topology::Bounded).unwrap();
    for y in 0..4 {
        for x in 0..5 {
            let on_x_edge = x == 0 || x == 4;
            let on_y_edge = y == 0 || y == 3;
            let expected = match (on_x_edge, on_y_edge) {
                (true, true) => 3,
                (true, false) | (false, true) => 5,
                (false, false) => 8,
            };
            assert_eq!(bounded.neighbor_count(pos!(x, y)), Some(expected));
        }
    }
    assert_eq!(bounded.neighbor_count(pos!(5, 0)), None);
}

#[test]
fn advance_is_deterministic() {
    let mut a = Board::seeded(32, 24, 1, Topology::Toroidal, 99).unwrap();
    a.randomize(0.4).unwrap();
    let mut b = toroidal(32, 24, 1);
    b.reset(&a.render()).unwrap();

    for _ in 0..50 {
        a.advance();
        b.advance();
        assert_eq!(a.render(), b.render());
        assert_eq!(a.fingerprint(), b.fingerprint());
    }
}

#[test]
fn randomize_uses_injected_source() {
    let mut a = Board::with_rng(20, 20, 1, Topology::Toroidal, StdRng::seed_from_u64(5)).unwrap();
    let mut b = Board::seeded(20, 20, 1, Topology::Toroidal, 5).unwrap();
    a.randomize(0.5).unwrap();
    b.randomize(0.5).unwrap();
    assert_eq!(a.render(), b.render());

    // the source is not reseeded between calls
    let first = a.render();
    a.randomize(0.5).unwrap();
    assert_ne!(a.render(), first);
}

#[test]
fn randomize_density_bounds() {
    let mut board = toroidal(10, 10, 1);
    board.randomize(0.0).unwrap();
    assert_eq!(board.population(), 0);
    board.randomize(1.0).unwrap();
    assert_eq!(board.population(), 100);

    assert_eq!(board.randomize(1.5), Err(BoardError::InvalidDensity(1.5)));
    assert!(board.randomize(-0.1).is_err());
    assert!(board.randomize(f64::NAN).is_err());
    assert_eq!(board.population(), 100);
}
