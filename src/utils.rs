use std::ops::{Add, Sub};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        $crate::Pos { x: $x, y: $y }
    };
}

impl Pos {
    /// wraps the position onto a torus of the given size.
    pub fn wrap(self, columns: usize, rows: usize) -> Self {
        pos!(
            self.x.rem_euclid(columns as i32),
            self.y.rem_euclid(rows as i32)
        )
    }

    pub fn is_within(self, columns: usize, rows: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < columns && (self.y as usize) < rows
    }
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        pos!(self.x - rhs.x, self.y - rhs.y)
    }
}

#[test]
fn test_wrap() {
    assert_eq!(pos!(-1, -1).wrap(5, 4), pos!(4, 3));
    assert_eq!(pos!(5, 4).wrap(5, 4), pos!(0, 0));
    assert_eq!(pos!(2, 1).wrap(5, 4), pos!(2, 1));
}

#[test]
fn test_is_within() {
    assert!(pos!(0, 0).is_within(1, 1));
    assert!(!pos!(-1, 0).is_within(3, 3));
    assert!(!pos!(3, 0).is_within(3, 3));
    assert!(!pos!(0, 3).is_within(3, 3));
}
