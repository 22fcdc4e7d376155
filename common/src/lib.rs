mod cart;
mod constants;
mod food;
mod game_engine;
mod game_state;
mod high_score;
mod scheduler;
mod skin;
mod snake;

pub mod api;
pub mod render;
pub mod util;

pub use cart::*;
pub use constants::*;
pub use food::{is_interior, place_food};
pub use game_engine::*;
pub use game_state::*;
pub use high_score::*;
pub use scheduler::*;
pub use skin::*;
pub use snake::*;
pub use util::{PseudoRandom, RandomGenerator};
