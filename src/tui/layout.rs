/// Width breakpoints for the search view.
///
/// Narrow terminals drop the image column; wide ones give the flyout more room.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 80 cols
    Compact,
    /// 80-139 cols
    Normal,
    /// 140+ cols
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=79 => Breakpoint::Compact,
            80..=139 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    pub fn shows_images(&self) -> bool {
        *self >= Breakpoint::Normal
    }

    /// Width of the filter flyout
    pub fn flyout_width(&self) -> u16 {
        match self {
            Breakpoint::Compact => 34,
            Breakpoint::Normal => 40,
            Breakpoint::Wide => 48,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(79), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(80), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(139), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(140), Breakpoint::Wide);
    }

    #[test]
    fn images_hidden_when_compact() {
        assert!(!Breakpoint::Compact.shows_images());
        assert!(Breakpoint::Normal.shows_images());
    }
}
