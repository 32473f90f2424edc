//! Food placement.

use rand::Rng;

use super::state::Position;

/// Place `count` food items uniformly at random on a `width` x `height` grid.
///
/// Uses rejection sampling: a cell is redrawn while it is in `occupied` or
/// already holds food from this batch. The count is capped at the number of
/// free cells, so a full board yields an empty batch instead of looping.
pub fn spawn_food<R: Rng + ?Sized>(
    rng: &mut R,
    width: usize,
    height: usize,
    occupied: &[Position],
    count: usize,
) -> Vec<Position> {
    let in_grid = |p: &&Position| {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < width && (p.y as usize) < height
    };
    let mut taken: Vec<Position> = occupied.iter().filter(in_grid).copied().collect();
    taken.sort_unstable_by_key(|p| (p.x, p.y));
    taken.dedup();

    let free = (width * height).saturating_sub(taken.len());
    let count = count.min(free);

    let mut batch = Vec::with_capacity(count);
    while batch.len() < count {
        let pos = Position::new(
            rng.gen_range(0..width) as i32,
            rng.gen_range(0..height) as i32,
        );
        if !occupied.contains(&pos) && !batch.contains(&pos) {
            batch.push(pos);
        }
    }
    batch
}
