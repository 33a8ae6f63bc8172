//! Validates option bitsets, entropy selection, collapse fallback, and
//! constraint propagation

use rand::SeedableRng;
use rand::rngs::StdRng;
use wavegrid::algorithm::bitset::TileSet;
use wavegrid::algorithm::collapse::collapse_cell;
use wavegrid::algorithm::propagation::{propagate_all, recompute_options};
use wavegrid::algorithm::selection::{minimum_entropy_candidates, select_cell};
use wavegrid::spatial::{Direction, Grid, TileCatalog, TileDef};

/// Two tiles: A (index 0) permits {A, B} in every direction, B (index 1)
/// permits only {A} in every direction
fn ab_catalog() -> TileCatalog {
    let all = || TileSet::from_indices([0, 1], 2);
    let only_a = || TileSet::from_indices([0], 2);

    let tiles = vec![
        TileDef::new("a", [255, 0, 0, 255], [all(), all(), all(), all()]),
        TileDef::new(
            "b",
            [0, 0, 255, 255],
            [only_a(), only_a(), only_a(), only_a()],
        ),
    ];

    let Ok(catalog) = TileCatalog::new(tiles) else {
        unreachable!("catalog construction should succeed");
    };
    catalog
}

#[test]
fn test_bitset_operations() {
    let mut set1 = TileSet::new(10);
    set1.insert(0);
    set1.insert(3);
    set1.insert(5);

    let mut set2 = TileSet::new(10);
    set2.insert(3);
    set2.insert(5);
    set2.insert(7);

    let intersection = set1.intersection(&set2);
    assert_eq!(intersection.to_vec(), vec![3, 5]);
    assert!(!intersection.is_empty());
    assert_eq!(intersection.len(), 2);

    set1.union_with(&set2);
    assert_eq!(set1.to_vec(), vec![0, 3, 5, 7]);
    assert!(intersection.is_subset(&set1));
}

#[test]
fn test_bitset_full_and_sole() {
    let full = TileSet::full(4);
    assert_eq!(full.len(), 4);
    assert_eq!(full.capacity(), 4);
    assert_eq!(full.nth(2), Some(2));
    assert_eq!(full.sole(), None);

    let single = TileSet::from_indices([3], 4);
    assert_eq!(single.sole(), Some(3));

    let empty = TileSet::new(4);
    assert!(empty.is_empty());
    assert_eq!(empty.sole(), None);
    assert_eq!(empty.nth(0), None);
}

#[test]
fn test_bitset_out_of_range_ignored() {
    let mut set = TileSet::new(3);
    set.insert(9);
    assert!(set.is_empty());
    assert!(!set.contains(9));
}

#[test]
fn test_minimum_entropy_candidates() {
    let catalog = ab_catalog();
    let mut grid = Grid::new(2, &catalog);

    // All four cells start at full entropy and tie
    assert_eq!(minimum_entropy_candidates(&grid), vec![0, 1, 2, 3]);

    // Shrinking one cell's options makes it the sole candidate
    if let Some(cell) = grid.cell_mut(2) {
        cell.set_options(TileSet::from_indices([0], 2));
    }
    assert_eq!(minimum_entropy_candidates(&grid), vec![2]);

    // Collapsed cells leave the candidate pool entirely
    if let Some(cell) = grid.cell_mut(2) {
        cell.collapse_to(0, 2);
    }
    assert_eq!(minimum_entropy_candidates(&grid), vec![0, 1, 3]);
}

#[test]
fn test_select_cell_stays_within_candidates() {
    let catalog = ab_catalog();
    let mut grid = Grid::new(2, &catalog);

    if let Some(cell) = grid.cell_mut(1) {
        cell.set_options(TileSet::from_indices([1], 2));
    }

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..16 {
        assert_eq!(select_cell(&grid, &mut rng), Some(1));
    }
}

#[test]
fn test_select_cell_none_when_fully_collapsed() {
    let catalog = ab_catalog();
    let mut grid = Grid::new(1, &catalog);

    if let Some(cell) = grid.cell_mut(0) {
        cell.collapse_to(0, 2);
    }

    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(select_cell(&grid, &mut rng), None);
}

#[test]
fn test_collapse_picks_from_options() {
    let catalog = ab_catalog();
    let mut grid = Grid::new(1, &catalog);
    let mut rng = StdRng::seed_from_u64(99);

    let Some(cell) = grid.cell_mut(0) else {
        unreachable!("cell 0 exists");
    };
    let outcome = collapse_cell(cell, 0, 2, &mut rng);

    assert!(!outcome.fallback_used);
    assert!(outcome.tile < 2);
    assert!(cell.is_collapsed());
    assert_eq!(cell.tile(), Some(outcome.tile));
    assert_eq!(cell.options().len(), 1);
}

#[test]
fn test_collapse_empty_options_uses_backup() {
    let catalog = ab_catalog();
    let mut grid = Grid::new(1, &catalog);
    let mut rng = StdRng::seed_from_u64(99);

    let Some(cell) = grid.cell_mut(0) else {
        unreachable!("cell 0 exists");
    };
    cell.set_options(TileSet::new(2));
    let outcome = collapse_cell(cell, 1, 2, &mut rng);

    assert!(outcome.fallback_used);
    assert_eq!(outcome.tile, 1);
    assert_eq!(cell.tile(), Some(1));
    assert!(!cell.options().is_empty());
}

#[test]
fn test_recompute_uses_opposite_direction_lookup() {
    // Tile 0 permits only tile 1 below itself and only tile 1 to its right;
    // the up and left relations stay unrestricted.
    let full = || TileSet::from_indices([0, 1], 2);
    let only_one = || TileSet::from_indices([1], 2);

    let tiles = vec![
        TileDef::new("anchor", [0, 0, 0, 255], [full(), only_one(), full(), only_one()]),
        TileDef::new("free", [255, 255, 255, 255], [full(), full(), full(), full()]),
    ];
    let Ok(catalog) = TileCatalog::new(tiles) else {
        unreachable!("catalog construction should succeed");
    };

    let mut grid = Grid::new(2, &catalog);
    if let Some(cell) = grid.cell_mut(grid.index_of(0, 0)) {
        cell.collapse_to(0, 2);
    }

    // The cell below the anchor is constrained through the anchor's down set
    let below = recompute_options(&grid, &catalog, grid.index_of(0, 1));
    assert_eq!(below.to_vec(), vec![1]);

    // The cell to the anchor's right is constrained through its right set
    let right = recompute_options(&grid, &catalog, grid.index_of(1, 0));
    assert_eq!(right.to_vec(), vec![1]);

    // The diagonal cell shares no edge with the anchor and stays unconstrained
    let diagonal = recompute_options(&grid, &catalog, grid.index_of(1, 1));
    assert_eq!(diagonal.to_vec(), vec![0, 1]);
}

#[test]
fn test_propagation_only_removes_options() {
    let catalog = ab_catalog();
    let mut grid = Grid::new(3, &catalog);

    if let Some(cell) = grid.cell_mut(grid.index_of(1, 1)) {
        cell.collapse_to(1, 2);
    }

    let before: Vec<TileSet> = grid.cells().iter().map(|c| c.options().clone()).collect();
    propagate_all(&mut grid, &catalog);

    for (index, previous) in before.iter().enumerate() {
        let Some(cell) = grid.cell(index) else {
            unreachable!("cell index in range");
        };
        assert!(
            cell.options().is_subset(previous),
            "options grew at cell {index}"
        );
        assert!(!cell.options().is_empty());
    }

    // Cells sharing an edge with the collapsed B may only hold A
    for direction in Direction::ALL {
        let Some(neighbor) = grid.neighbor(grid.index_of(1, 1), direction) else {
            unreachable!("center cell has all four neighbors");
        };
        let Some(cell) = grid.cell(neighbor) else {
            unreachable!("neighbor index in range");
        };
        assert_eq!(cell.options().to_vec(), vec![0]);
    }
}

#[test]
fn test_propagation_preserves_collapsed_cells() {
    let catalog = ab_catalog();
    let mut grid = Grid::new(2, &catalog);

    if let Some(cell) = grid.cell_mut(0) {
        cell.collapse_to(1, 2);
    }

    propagate_all(&mut grid, &catalog);

    let Some(cell) = grid.cell(0) else {
        unreachable!("cell 0 exists");
    };
    assert!(cell.is_collapsed());
    assert_eq!(cell.tile(), Some(1));
}

#[test]
fn test_propagation_idempotent_on_stable_grid() {
    let catalog = ab_catalog();
    let mut grid = Grid::new(3, &catalog);

    if let Some(cell) = grid.cell_mut(grid.index_of(0, 0)) {
        cell.collapse_to(1, 2);
    }

    propagate_all(&mut grid, &catalog);
    let stable: Vec<TileSet> = grid.cells().iter().map(|c| c.options().clone()).collect();

    propagate_all(&mut grid, &catalog);
    let repeated: Vec<TileSet> = grid.cells().iter().map(|c| c.options().clone()).collect();

    assert_eq!(stable, repeated);
}

#[test]
fn test_grid_neighbors_respect_boundaries() {
    let catalog = ab_catalog();
    let grid = Grid::new(3, &catalog);

    let corner = grid.index_of(0, 0);
    assert_eq!(grid.neighbor(corner, Direction::Up), None);
    assert_eq!(grid.neighbor(corner, Direction::Left), None);
    assert_eq!(grid.neighbor(corner, Direction::Down), Some(grid.index_of(0, 1)));
    assert_eq!(grid.neighbor(corner, Direction::Right), Some(grid.index_of(1, 0)));

    let center = grid.index_of(1, 1);
    assert_eq!(grid.neighbor(center, Direction::Up), Some(grid.index_of(1, 0)));
    assert_eq!(grid.neighbor(center, Direction::Down), Some(grid.index_of(1, 2)));
}

#[test]
fn test_direction_opposites() {
    assert_eq!(Direction::Up.opposite(), Direction::Down);
    assert_eq!(Direction::Down.opposite(), Direction::Up);
    assert_eq!(Direction::Left.opposite(), Direction::Right);
    assert_eq!(Direction::Right.opposite(), Direction::Left);
}
