use crate::LevenshteinEngine;

/// Step-by-step configuration of a [`LevenshteinEngine`].
pub struct LevenshteinBuilder<'a, T> {
    a: &'a [T],
    b: &'a [T],
    max_distance: Option<usize>,
}

impl<'a, T: PartialEq> LevenshteinBuilder<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self {
            a,
            b,
            max_distance: None,
        }
    }
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = Some(max_distance);
        self
    }
    pub fn build(self) -> LevenshteinEngine<'a, T> {
        let engine = LevenshteinEngine::new(self.a, self.b);
        match self.max_distance {
            Some(k) => engine.with_max_distance(k),
            None => engine,
        }
    }
}
