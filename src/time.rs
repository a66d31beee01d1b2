/// Virtual time for the propagation engine.
///
/// A logical timestamp with no dependency on `std::time`. The clock only
/// moves when the driver applies an event; nothing observes wall-clock time.
///
/// Delivery arithmetic saturates at [`VirtualTime::MAX`]. Node deliveries
/// count the current clock twice, so a feedback loop roughly doubles the
/// clock on every hop; once it reaches the ceiling, later deliveries all
/// land on `MAX` and keep their push order.

/// A logical tick in simulation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualTime(u64);

impl VirtualTime {
    /// The zero-point of simulation time.
    pub const ZERO: VirtualTime = VirtualTime(0);

    /// The ceiling every delivery time is clamped to.
    pub const MAX: VirtualTime = VirtualTime(u64::MAX);

    #[inline]
    pub fn new(ticks: u64) -> Self {
        VirtualTime(ticks)
    }

    #[inline]
    pub fn ticks(self) -> u64 {
        self.0
    }

    /// `self + delay`, clamped to [`VirtualTime::MAX`].
    #[inline]
    pub fn saturating_plus(self, delay: u64) -> VirtualTime {
        VirtualTime(self.0.saturating_add(delay))
    }

    /// Returns `true` once the clock has hit the ceiling.
    #[inline]
    pub fn is_saturated(self) -> bool {
        self == Self::MAX
    }
}

impl std::fmt::Display for VirtualTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T={}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(VirtualTime::ZERO.ticks(), 0);
        assert_eq!(VirtualTime::default(), VirtualTime::ZERO);
        assert!(!VirtualTime::ZERO.is_saturated());
    }

    #[test]
    fn test_ordering() {
        assert!(VirtualTime::new(10) < VirtualTime::new(20));
        assert!(VirtualTime::new(u64::MAX - 1) < VirtualTime::MAX);
    }

    #[test]
    fn test_saturating_plus() {
        assert_eq!(VirtualTime::new(100).saturating_plus(50), VirtualTime::new(150));
        assert_eq!(VirtualTime::new(7).saturating_plus(0), VirtualTime::new(7));
    }

    #[test]
    fn test_saturating_plus_clamps_at_max() {
        let near = VirtualTime::new(u64::MAX - 2);
        assert_eq!(near.saturating_plus(3), VirtualTime::MAX);
        assert!(near.saturating_plus(3).is_saturated());
        assert_eq!(VirtualTime::MAX.saturating_plus(u64::MAX), VirtualTime::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", VirtualTime::new(42)), "T=42");
    }
}
