//! Mock implementation with essentially the same API as [`SeqTree`], but backed by a vector
//!
//! [`SeqTree`]: crate::SeqTree

/// A mock, inefficient implementation of the [`SeqTree`](crate::SeqTree) interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mock<T> {
    values: Vec<T>,
}

impl<T> Mock<T> {
    pub fn new() -> Self {
        Mock { values: Vec::new() }
    }

    pub fn from_vec(values: Vec<T>) -> Self {
        Mock { values }
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.values.get(idx)
    }

    pub fn set(&mut self, idx: usize, value: T) -> Option<T> {
        self.values
            .get_mut(idx)
            .map(|slot| std::mem::replace(slot, value))
    }

    pub fn insert_at(&mut self, idx: usize, value: T) {
        if idx > self.values.len() {
            panic!("index out of bounds");
        }

        self.values.insert(idx, value);
    }

    pub fn delete_at(&mut self, idx: usize) -> Option<T> {
        match idx < self.values.len() {
            true => Some(self.values.remove(idx)),
            false => None,
        }
    }

    pub fn push_front(&mut self, value: T) {
        self.values.insert(0, value);
    }

    pub fn push_back(&mut self, value: T) {
        self.values.push(value);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.delete_at(0)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.values.pop()
    }

    pub fn roll(&mut self, depth: usize, count: isize) {
        if depth == 0 || depth > self.values.len() {
            return;
        }

        let count = count.rem_euclid(depth as isize) as usize;
        let n = self.values.len();
        self.values[n - depth..].rotate_right(count);
    }

    pub fn split_off(&mut self, at: usize) -> Self {
        if at > self.values.len() {
            panic!("index out of bounds");
        }

        Mock {
            values: self.values.split_off(at),
        }
    }

    pub fn append(&mut self, other: &mut Self) {
        self.values.append(&mut other.values);
    }
}

impl<T> Default for Mock<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Mock;

    #[test]
    fn roll_matches_description() {
        let mut mock = Mock::from_vec((0..8).collect::<Vec<u32>>());
        mock.roll(5, 2);
        assert_eq!(mock.values(), [0, 1, 2, 6, 7, 3, 4, 5]);
        mock.roll(5, -2);
        assert_eq!(mock.values(), [0, 1, 2, 3, 4, 5, 6, 7]);
        mock.roll(9, 1);
        assert_eq!(mock.values(), [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn out_of_bounds_insert_panics() {
        assert!(std::panic::catch_unwind(|| {
            let mut mock: Mock<u32> = Mock::new();
            mock.insert_at(1, 0);
        })
        .is_err());
    }
}
