//! Player sides

use std::ops::{Index, IndexMut};

/// One of the two players in a singles battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    P1,
    P2,
}

impl Side {
    /// Both sides, player 1 first
    pub const BOTH: [Side; 2] = [Side::P1, Side::P2];

    /// The other side
    pub fn opponent(self) -> Side {
        match self {
            Side::P1 => Side::P2,
            Side::P2 => Side::P1,
        }
    }

    /// Array index for this side
    pub fn index(self) -> usize {
        match self {
            Side::P1 => 0,
            Side::P2 => 1,
        }
    }
}

/// A value kept per side, indexable by [`Side`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerSide<T>(pub [T; 2]);

impl<T> PerSide<T> {
    pub fn new(p1: T, p2: T) -> Self {
        Self([p1, p2])
    }

    /// Build by calling `f` for each side
    pub fn from_fn(mut f: impl FnMut(Side) -> T) -> Self {
        Self([f(Side::P1), f(Side::P2)])
    }

    pub fn p1(&self) -> &T {
        &self.0[0]
    }

    pub fn p2(&self) -> &T {
        &self.0[1]
    }
}

impl<T> Index<Side> for PerSide<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        &self.0[side.index()]
    }
}

impl<T> IndexMut<Side> for PerSide<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        &mut self.0[side.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::P1.opponent(), Side::P2);
        assert_eq!(Side::P2.opponent(), Side::P1);
    }

    #[test]
    fn test_index() {
        assert_eq!(Side::P1.index(), 0);
        assert_eq!(Side::P2.index(), 1);
    }

    #[test]
    fn test_per_side_indexing() {
        let mut counts = PerSide::new(0u32, 0u32);
        counts[Side::P2] += 3;
        assert_eq!(*counts.p1(), 0);
        assert_eq!(counts[Side::P2], 3);

        let labels = PerSide::from_fn(|side| side.opponent().index());
        assert_eq!(labels.0, [1, 0]);
    }
}
