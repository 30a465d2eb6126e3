//! Shape catalogue tests

use std::collections::HashSet;

use block_blast::core::shapes::{sample, MAX_SHAPE_DIM};
use block_blast::core::{BlockGenerator, Shape, SimpleRng, CATALOGUE};

#[test]
fn test_catalogue_size_and_bounds() {
    assert_eq!(CATALOGUE.len(), 34);
    for shape in CATALOGUE {
        assert!(shape.width() >= 1 && shape.width() <= MAX_SHAPE_DIM);
        assert!(shape.height() >= 1 && shape.height() <= MAX_SHAPE_DIM);
        assert!(shape.cell_count() as u8 <= shape.width() * shape.height());
    }
}

#[test]
fn test_catalogue_is_closed_under_rotation() {
    // Rotated variants are stored as distinct entries; the 2x3 slab is the
    // only shape offered in a single orientation.
    let all: HashSet<Shape> = CATALOGUE.iter().copied().collect();
    let missing: Vec<Shape> = CATALOGUE
        .iter()
        .map(|s| s.rotate_cw())
        .filter(|r| !all.contains(r))
        .collect();
    assert_eq!(missing, vec![Shape::parse(&["##", "##", "##"])]);
}

#[test]
fn test_catalogue_cell_counts() {
    let mut by_count = [0usize; 10];
    for shape in CATALOGUE {
        by_count[shape.cell_count() as usize] += 1;
    }
    assert_eq!(by_count[1], 1);
    assert_eq!(by_count[2], 2);
    assert_eq!(by_count[3], 6);
    assert_eq!(by_count[4], 19);
    assert_eq!(by_count[5], 5);
    assert_eq!(by_count[6], 1);
}

#[test]
fn test_cells_stay_inside_bounding_box() {
    for shape in CATALOGUE {
        for (dx, dy) in shape.cells() {
            assert!(dx >= 0 && (dx as u8) < shape.width());
            assert!(dy >= 0 && (dy as u8) < shape.height());
        }
        assert_eq!(shape.cells().count() as u32, shape.cell_count());
    }
}

#[test]
fn test_rotation_swaps_dimensions() {
    let bar = Shape::parse(&["####"]);
    let upright = bar.rotate_cw();
    assert_eq!((upright.width(), upright.height()), (1, 4));
    assert_eq!(upright, Shape::parse(&["#", "#", "#", "#"]));
    assert_eq!(bar.rotate_ccw(), upright);
}

#[test]
fn test_sampling_covers_catalogue() {
    let mut rng = SimpleRng::new(31337);
    let mut seen = HashSet::new();
    for _ in 0..5000 {
        seen.insert(sample(&mut rng));
    }
    assert_eq!(seen.len(), CATALOGUE.len());
}

#[test]
fn test_generator_colors_in_palette() {
    let mut generator = BlockGenerator::new(SimpleRng::new(8), 4);
    for _ in 0..500 {
        let block = generator.next_block();
        assert!((1..=4).contains(&block.color()));
        assert!(!block.used());
        assert!(CATALOGUE.contains(block.shape()));
    }
}
