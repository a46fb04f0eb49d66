use crate::step::Step;
use serde::{Deserialize, Serialize};
use std::collections::vec_deque::{self, VecDeque};
use std::iter::Enumerate;

/// Ordered sequence of steps; position is the only carrier of render order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Steps {
    steps: VecDeque<Step>,
}

impl Steps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a step at the end
    pub fn append(&mut self, step: Step) {
        self.steps.push_back(step);
    }

    /// Add a step at the front, ahead of everything added so far
    pub fn prepend(&mut self, step: Step) {
        self.steps.push_front(step);
    }

    /// Iterate the steps in order together with their 0-based position
    pub fn iter(&self) -> Enumerate<vec_deque::Iter<'_, Step>> {
        self.steps.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.front()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.back()
    }
}

impl<'a> IntoIterator for &'a Steps {
    type Item = &'a Step;
    type IntoIter = vec_deque::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl FromIterator<Step> for Steps {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl Extend<Step> for Steps {
    fn extend<I: IntoIterator<Item = Step>>(&mut self, iter: I) {
        self.steps.extend(iter);
    }
}
