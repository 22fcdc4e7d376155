/// Default tick interval in milliseconds for the game loop
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Side length of one grid cell in pixels
pub const CELL_SIZE: u32 = 20;

/// Number of cells along each side of the square grid
pub const GRID_CELLS: u16 = 20;

/// Side length of the drawing surface in pixels
pub const GRID_SIZE: u32 = CELL_SIZE * GRID_CELLS as u32;

/// Lives granted by `start` before bonus lives are folded in
pub const STARTING_LIVES: u32 = 3;

/// Price of one extra life in the store
pub const EXTRA_LIFE_PRICE: u32 = 50;

/// Catalog id of the extra life consumable
pub const EXTRA_LIFE_ITEM_ID: &str = "extra_life";

/// Rejected food draws before falling back to a free-cell listing
pub const FOOD_PLACEMENT_ATTEMPTS: u32 = 64;
