pub const SKILL_ROTATION_INTERVAL_MS: u64 = 2000;
pub const NAME_REVEAL_DELAY_MS: f64 = 500.0;

/// Cycles an index through `len` labels, one step per timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    len: usize,
    index: usize,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_after_k_ticks() {
        let labels = ["JavaScript", "Python", "Docker"];
        let mut rotation = Rotation::new(labels.len());
        for k in 1..=10 {
            rotation.advance();
            assert_eq!(rotation.index(), k % labels.len());
        }
        assert_eq!(rotation.current(&labels), Some(&"Python"));
    }

    #[test]
    fn test_empty_rotation_stays_put() {
        let mut rotation = Rotation::new(0);
        assert_eq!(rotation.advance(), 0);
        assert_eq!(rotation.current::<&str>(&[]), None);
    }
}
