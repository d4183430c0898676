//! Tabu list.

/// Every solution a tabu search has adopted, in order.
///
/// The list is unbounded and membership uses value equality, so a
/// solution that was ever current can never become current again within
/// the same run. There is no aspiration criterion.
#[derive(Debug, Clone)]
pub struct TabuList<S> {
    visited: Vec<S>,
}

impl<S: PartialEq> TabuList<S> {
    pub fn new() -> Self {
        Self {
            visited: Vec::new(),
        }
    }

    pub fn contains(&self, solution: &S) -> bool {
        self.visited.contains(solution)
    }

    /// Appends an adopted solution.
    pub fn push(&mut self, solution: S) {
        self.visited.push(solution);
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Visited solutions, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.visited.iter()
    }
}

impl<S: PartialEq> Default for TabuList<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_by_value() {
        let mut list = TabuList::new();
        assert!(list.is_empty());

        list.push(vec![1, 2, 3]);
        list.push(vec![3, 2, 1]);

        assert!(list.contains(&vec![1, 2, 3]));
        assert!(!list.contains(&vec![2, 1, 3]));
        assert_eq!(list.len(), 2);
        assert_eq!(list.iter().next(), Some(&vec![1, 2, 3]));
    }
}
