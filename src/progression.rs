//! Integer ranges and stepped progressions.

use std::{fmt, iter::FusedIterator};

use derive_more::{Display, Error};

/// 等差数列
///
/// `last` is always an element the progression actually reaches, unless the
/// progression is empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IntProgression {
    first: i32,
    last: i32,
    step: i32,
}

impl IntProgression {
    /// `first..last` (inclusive)
    pub fn range_to(first: i32, last: i32) -> Self {
        Self::from_closed_range(first, last, 1)
    }

    /// `first downTo last`
    pub fn down_to(first: i32, last: i32) -> Self {
        Self::from_closed_range(first, last, -1)
    }

    /// Keeps the direction and sets the absolute step to `step`.
    pub fn step(self, step: i32) -> Result<Self, ProgressionError> {
        if step <= 0 {
            return Err(ProgressionError::NonPositiveStep { step });
        }
        let step = if self.step > 0 { step } else { -step };
        Ok(Self::from_closed_range(self.first, self.last, step))
    }

    fn from_closed_range(first: i32, last: i32, step: i32) -> Self {
        Self {
            first,
            last: last_element(first, last, step),
            step,
        }
    }

    pub fn first(&self) -> i32 {
        self.first
    }

    pub fn last(&self) -> i32 {
        self.last
    }

    pub fn step_size(&self) -> i32 {
        self.step
    }

    pub fn is_empty(&self) -> bool {
        if self.step > 0 {
            self.first > self.last
        } else {
            self.first < self.last
        }
    }

    pub fn contains(&self, value: i32) -> bool {
        if self.is_empty() {
            return false;
        }
        let (low, high) = if self.step > 0 {
            (self.first, self.last)
        } else {
            (self.last, self.first)
        };
        if value < low || value > high {
            return false;
        }
        (i64::from(value) - i64::from(self.first)) % i64::from(self.step) == 0
    }

    pub fn iter(&self) -> IntProgressionIter {
        IntProgressionIter {
            next: (!self.is_empty()).then_some(self.first),
            last: self.last,
            step: self.step,
        }
    }
}

fn last_element(first: i32, last: i32, step: i32) -> i32 {
    let (first, last, step) = (i64::from(first), i64::from(last), i64::from(step));
    let reached = if step > 0 {
        if first >= last {
            last
        } else {
            last - (last - first).rem_euclid(step)
        }
    } else if first <= last {
        last
    } else {
        last + (first - last).rem_euclid(-step)
    };
    // `reached` lies between `first` and `last`, both of which fit in i32
    reached as i32
}

impl fmt::Display for IntProgression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.step {
            1 => write!(f, "{}..{}", self.first, self.last),
            s if s > 0 => write!(f, "{}..{} step {}", self.first, self.last, s),
            s => write!(
                f,
                "{} downTo {} step {}",
                self.first,
                self.last,
                -i64::from(s)
            ),
        }
    }
}

impl IntoIterator for IntProgression {
    type Item = i32;
    type IntoIter = IntProgressionIter;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &IntProgression {
    type Item = i32;
    type IntoIter = IntProgressionIter;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
pub struct IntProgressionIter {
    next: Option<i32>,
    last: i32,
    step: i32,
}

impl Iterator for IntProgressionIter {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current == self.last {
            None
        } else {
            current.checked_add(self.step)
        };
        Some(current)
    }
}

impl FusedIterator for IntProgressionIter {}

#[derive(Error, Display, Debug, PartialEq, Eq)]
pub enum ProgressionError {
    #[display(fmt = "Step must be positive, was {}", step)]
    NonPositiveStep { step: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_to() {
        let range = IntProgression::range_to(1, 5);
        assert_eq!(range.to_string(), "1..5");
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_down_to_step() {
        let progression = IntProgression::down_to(7, 1).step(2).unwrap();
        assert_eq!(progression.iter().collect::<Vec<_>>(), vec![7, 5, 3, 1]);
        assert_eq!(progression.to_string(), "7 downTo 1 step 2");
    }

    #[test]
    fn test_step_normalizes_last() {
        let progression = IntProgression::range_to(1, 10).step(4).unwrap();
        assert_eq!(progression.last(), 9);
        assert_eq!(progression.to_string(), "1..9 step 4");
        assert_eq!(progression.into_iter().collect::<Vec<_>>(), vec![1, 5, 9]);

        let progression = IntProgression::down_to(10, 1).step(4).unwrap();
        assert_eq!(progression.last(), 2);
        assert_eq!(progression.step_size(), -4);
    }

    #[test]
    fn test_non_positive_step() {
        assert_eq!(
            IntProgression::range_to(1, 5).step(0),
            Err(ProgressionError::NonPositiveStep { step: 0 })
        );
        assert!(IntProgression::down_to(5, 1).step(-1).is_err());
    }

    #[test]
    fn test_empty() {
        let range = IntProgression::range_to(5, 1);
        assert!(range.is_empty());
        assert_eq!(range.iter().next(), None);
        assert!(IntProgression::down_to(1, 5).is_empty());
        assert!(!IntProgression::range_to(3, 3).is_empty());
    }

    #[test]
    fn test_contains() {
        let progression = IntProgression::down_to(7, 1).step(2).unwrap();
        assert!(progression.contains(5));
        assert!(!progression.contains(4));
        assert!(!progression.contains(9));
        assert!(!IntProgression::range_to(5, 1).contains(3));
    }

    #[test]
    fn test_iter_near_bounds() {
        let range = IntProgression::range_to(i32::MAX - 2, i32::MAX);
        assert_eq!(range.iter().count(), 3);
        let progression = IntProgression::down_to(i32::MIN + 4, i32::MIN)
            .step(3)
            .unwrap();
        assert_eq!(
            progression.iter().collect::<Vec<_>>(),
            vec![i32::MIN + 4, i32::MIN + 1]
        );
    }
}
