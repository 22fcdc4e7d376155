use crate::util::RandomGenerator;
use crate::{FOOD_PLACEMENT_ATTEMPTS, Position, Snake};

/// Pick a cell strictly inside the outer border ring that no segment of
/// `snake` occupies.
///
/// Candidates are drawn uniformly until a free one turns up. After
/// `FOOD_PLACEMENT_ATTEMPTS` misses every free interior cell is listed and
/// one of them is chosen, so a nearly full board still terminates. Returns
/// `None` only when the whole interior is covered.
pub fn place_food<R: RandomGenerator>(rng: &mut R, snake: &Snake, grid_cells: u16) -> Option<Position> {
    if grid_cells < 3 {
        return None;
    }
    let span = (grid_cells - 2) as u32;

    for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
        let candidate = Position {
            x: (rng.next_below(span) + 1) as i16,
            y: (rng.next_below(span) + 1) as i16,
        };
        if !snake.contains_point(&candidate) {
            return Some(candidate);
        }
    }

    let free = free_interior_cells(snake, grid_cells);
    if free.is_empty() {
        log::warn!("No free cell left for food on a {}x{} grid", grid_cells, grid_cells);
        return None;
    }
    let pick = rng.next_below(free.len() as u32) as usize;
    Some(free[pick])
}

fn free_interior_cells(snake: &Snake, grid_cells: u16) -> Vec<Position> {
    let last = grid_cells as i16 - 1;
    let mut cells = Vec::new();
    for y in 1..last {
        for x in 1..last {
            let cell = Position { x, y };
            if !snake.contains_point(&cell) {
                cells.push(cell);
            }
        }
    }
    cells
}

pub fn is_interior(position: &Position, grid_cells: u16) -> bool {
    let last = grid_cells as i16 - 1;
    position.x >= 1 && position.x < last && position.y >= 1 && position.y < last
}
