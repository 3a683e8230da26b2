use std::collections::HashMap;

struct Candidate<T> {
    period_end: String,
    value: T,
}

/// Keeps the most recent value per key while streaming over unsorted rows.
///
/// A stored value is replaced only when an incoming `period_end` is strictly
/// greater; ISO dates order correctly as plain strings. Keys come back in
/// first-seen order.
pub struct LatestByKey<T> {
    index: HashMap<String, usize>,
    candidates: Vec<Candidate<T>>,
}

impl<T> LatestByKey<T> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            candidates: Vec::new(),
        }
    }

    pub fn offer(&mut self, key: &str, period_end: &str, value: T) -> bool {
        self.offer_with(key, period_end, || value)
    }

    /// Like [`offer`](Self::offer), but only builds the value when it is kept.
    pub fn offer_with<F>(&mut self, key: &str, period_end: &str, make: F) -> bool
    where
        F: FnOnce() -> T,
    {
        match self.index.get(key) {
            Some(&slot) => {
                let current = &mut self.candidates[slot];
                if period_end <= current.period_end.as_str() {
                    return false;
                }
                current.period_end = period_end.to_string();
                current.value = make();
            }
            None => {
                self.index.insert(key.to_string(), self.candidates.len());
                self.candidates.push(Candidate {
                    period_end: period_end.to_string(),
                    value: make(),
                });
            }
        }
        true
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn into_values(self) -> Vec<T> {
        self.candidates
            .into_iter()
            .map(|candidate| candidate.value)
            .collect()
    }

}

impl<T> Default for LatestByKey<T> {
    fn default() -> Self {
        Self::new()
    }
}
