//! Direction of travel when searching for or adding business days.

/// Which way to move along the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Towards later dates.
    #[default]
    Forward,
    /// Towards earlier dates.
    Backward,
}

impl Direction {
    /// Direction implied by the sign of `n`. Zero moves forward.
    pub fn from_sign(n: i64) -> Self {
        if n < 0 {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    /// One calendar day in this direction: `1` or `-1`.
    pub fn step(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// Return `true` for [`Direction::Forward`].
    pub fn is_forward(self) -> bool {
        self == Direction::Forward
    }
}

impl From<bool> for Direction {
    /// `true` is forward, `false` is backward.
    fn from(forward: bool) -> Self {
        if forward {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Direction::Forward => "Forward",
            Direction::Backward => "Backward",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_selects_direction() {
        assert_eq!(Direction::from_sign(3), Direction::Forward);
        assert_eq!(Direction::from_sign(0), Direction::Forward);
        assert_eq!(Direction::from_sign(-3), Direction::Backward);
        assert_eq!(Direction::Backward.step(), -1);
        assert_eq!(Direction::from(false), Direction::Backward);
    }
}
