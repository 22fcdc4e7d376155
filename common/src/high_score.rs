use anyhow::Result;

/// Persistent storage for the best score ever reached.
pub trait HighScoreStore {
    /// Stored high score, 0 when nothing was stored yet.
    fn load(&self) -> u32;

    fn save(&mut self, score: u32) -> Result<()>;
}

impl<T: HighScoreStore + ?Sized> HighScoreStore for Box<T> {
    fn load(&self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, score: u32) -> Result<()> {
        (**self).save(score)
    }
}

/// Keeps the high score in memory and counts writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScore {
    score: u32,
    writes: u32,
}

impl MemoryHighScore {
    pub fn new(score: u32) -> Self {
        MemoryHighScore { score, writes: 0 }
    }

    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load(&self) -> u32 {
        self.score
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.score = score;
        self.writes += 1;
        Ok(())
    }
}
