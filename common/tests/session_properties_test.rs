use anyhow::Result;
use common::{
    Direction, GameConfig, GameEngine, GameEvent, MemoryHighScore, PseudoRandom, RandomGenerator,
    is_interior,
};

const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

fn random_direction(rng: &mut PseudoRandom) -> Direction {
    DIRECTIONS[rng.next_below(4) as usize]
}

#[test]
fn invariants_hold_over_random_play() -> Result<()> {
    for seed in 1..=20u64 {
        let mut engine = GameEngine::new(GameConfig::default(), MemoryHighScore::default(), seed);
        let mut input = PseudoRandom::new(seed * 31);
        engine.start(None);

        let mut eaten_this_life = 0usize;
        let mut last_score = 0;
        let mut previous_direction = None;

        for _ in 0..2000 {
            if engine.state().is_game_over() {
                break;
            }
            engine.request_direction(random_direction(&mut input));
            let events = engine.tick();

            for event in &events {
                match event {
                    GameEvent::FoodEaten { .. } => eaten_this_life += 1,
                    GameEvent::LifeLost { .. } => {
                        eaten_this_life = 0;
                        previous_direction = None;
                    }
                    _ => {}
                }
            }

            let state = engine.state();
            if state.is_game_over() {
                break;
            }

            assert_eq!(state.snake.len(), 1 + eaten_this_life, "seed {}", seed);
            assert!(state.score >= last_score, "score went down on seed {}", seed);
            last_score = state.score;

            if let Some(food) = state.food {
                assert!(is_interior(&food, 20), "food on border at {:?}", food);
                assert!(!state.snake.contains_point(&food), "food under snake at {:?}", food);
            }

            if let (Some(prev), Some(now)) = (previous_direction, state.direction) {
                assert!(!now.is_opposite(prev), "reversed from {:?} to {:?}", prev, now);
            }
            if state.direction.is_some() {
                previous_direction = state.direction;
            }
        }
    }
    Ok(())
}

#[test]
fn running_into_the_wall_burns_every_life() -> Result<()> {
    let mut engine = GameEngine::new(GameConfig::default(), MemoryHighScore::new(0), 5);
    engine.start(None);

    let mut life_losses = 0;
    let mut game_over = None;
    // Ten cells to the top wall from the start cell, plus the fatal step
    for _ in 0..3 {
        engine.request_direction(Direction::Up);
        for _ in 0..11 {
            for event in engine.tick() {
                match event {
                    GameEvent::LifeLost { .. } => life_losses += 1,
                    GameEvent::GameOver { score, new_record, .. } => game_over = Some((score, new_record)),
                    _ => {}
                }
            }
        }
    }

    assert_eq!(life_losses, 3);
    let (score, new_record) = game_over.expect("game should be over");
    assert_eq!(score, engine.state().score);
    assert_eq!(new_record, score > 0);
    assert!(engine.state().is_game_over());
    assert!(!engine.is_running());
    Ok(())
}

#[test]
fn start_after_game_over_begins_fresh() -> Result<()> {
    let mut engine = GameEngine::new(GameConfig::default(), MemoryHighScore::default(), 9);
    engine.start(Some(1));
    engine.request_direction(Direction::Left);
    for _ in 0..11 {
        engine.tick();
    }
    assert!(engine.state().is_game_over());

    engine.start(None);
    let state = engine.state();
    assert!(state.is_playing());
    assert_eq!(state.score, 0);
    assert_eq!(state.lives, 3);
    assert_eq!(state.snake.len(), 1);
    Ok(())
}
