//! Score counter. Only ever goes up.

#[derive(Debug, Default)]
pub struct Score {
    value: u32,
}

impl Score {
    pub fn new() -> Self {
        Score::default()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn increment(&mut self) {
        self.value += 1;
    }
}
