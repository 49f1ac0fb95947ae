use rand::Rng;

use crate::config::POWER_UP_SPAWN_CHANCE;
use crate::effects::EffectKind;
use crate::grid::{Cell, GridSize};
use crate::snake::Snake;

/// A collectible that grants a timed effect when the head reaches it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PowerUp {
    pub cell: Cell,
    pub kind: EffectKind,
}

/// Picks a food cell not covered by the snake or the active power-up.
///
/// Returns `None` once the board is full.
#[must_use]
pub fn spawn_food<R: Rng + ?Sized>(
    rng: &mut R,
    grid: GridSize,
    snake: &Snake,
    power_up: Option<PowerUp>,
) -> Option<Cell> {
    let blocked = power_up.map(|power_up| power_up.cell);
    free_cell(rng, grid, snake, blocked)
}

/// Places a power-up of a random kind away from the snake and the food.
#[must_use]
pub fn spawn_power_up<R: Rng + ?Sized>(
    rng: &mut R,
    grid: GridSize,
    snake: &Snake,
    food: Cell,
) -> Option<PowerUp> {
    let cell = free_cell(rng, grid, snake, Some(food))?;
    let kind = if rng.gen_bool(0.5) {
        EffectKind::Slow
    } else {
        EffectKind::Ghost
    };
    Some(PowerUp { cell, kind })
}

/// Rolls the once-per-food chance of spawning a power-up.
#[must_use]
pub fn roll_power_up<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(POWER_UP_SPAWN_CHANCE)
}

/// Samples uniformly among cells free of the snake and `blocked`.
///
/// Enumerating the free cells gives the same distribution as resampling
/// until a hit, but terminates on a crowded board.
fn free_cell<R: Rng + ?Sized>(
    rng: &mut R,
    grid: GridSize,
    snake: &Snake,
    blocked: Option<Cell>,
) -> Option<Cell> {
    let mut candidates = Vec::with_capacity(grid.total_cells().saturating_sub(snake.len()));
    candidates.extend(
        grid.cells().filter(|cell| !snake.occupies(*cell) && Some(*cell) != blocked),
    );

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::effects::EffectKind;
    use crate::grid::{Cell, GridSize};
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::{PowerUp, spawn_food, spawn_power_up};

    fn row_snake() -> Snake {
        Snake::from_segments(
            vec![Cell::new(2, 0), Cell::new(1, 0), Cell::new(0, 0)],
            Direction::Right,
        )
    }

    #[test]
    fn food_never_overlaps_snake_or_power_up() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = row_snake();
        let power_up = PowerUp {
            cell: Cell::new(3, 0),
            kind: EffectKind::Slow,
        };

        for _ in 0..200 {
            let food = spawn_food(&mut rng, GridSize::square(4), &snake, Some(power_up))
                .expect("board has free cells");
            assert!(!snake.occupies(food));
            assert_ne!(food, power_up.cell);
        }
    }

    #[test]
    fn power_up_never_overlaps_snake_or_food() {
        let mut rng = StdRng::seed_from_u64(11);
        let snake = row_snake();
        let food = Cell::new(1, 1);
        let mut seen_slow = false;
        let mut seen_ghost = false;

        for _ in 0..200 {
            let power_up = spawn_power_up(&mut rng, GridSize::square(4), &snake, food)
                .expect("board has free cells");
            assert!(!snake.occupies(power_up.cell));
            assert_ne!(power_up.cell, food);
            match power_up.kind {
                EffectKind::Slow => seen_slow = true,
                EffectKind::Ghost => seen_ghost = true,
            }
        }

        assert!(seen_slow && seen_ghost);
    }

    #[test]
    fn full_board_yields_no_food() {
        let mut rng = StdRng::seed_from_u64(3);
        let snake = Snake::from_segments(
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(0, 1),
            ],
            Direction::Up,
        );

        assert_eq!(spawn_food(&mut rng, GridSize::square(2), &snake, None), None);
    }

    #[test]
    fn last_free_cell_is_found() {
        let mut rng = StdRng::seed_from_u64(5);
        let snake = Snake::from_segments(
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)],
            Direction::Up,
        );

        assert_eq!(
            spawn_food(&mut rng, GridSize::square(2), &snake, None),
            Some(Cell::new(0, 1))
        );
    }
}
