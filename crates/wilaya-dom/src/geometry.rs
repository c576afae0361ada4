//! Geometry APIs
//!
//! DOMRect and the options accepted by `scrollIntoView`.

/// DOMRect - rectangle geometry
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DOMRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DOMRect {
    /// Create empty rect
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with dimensions
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Top edge (same as y)
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// `behavior` member of ScrollIntoViewOptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Instant,
    Smooth,
}

/// `block` member of ScrollIntoViewOptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollLogicalPosition {
    #[default]
    Start,
    Center,
    End,
    Nearest,
}

/// ScrollIntoViewOptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollIntoViewOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollLogicalPosition,
}

impl ScrollIntoViewOptions {
    /// `{ behavior: 'smooth', block: 'start' }`
    pub fn smooth_start() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            block: ScrollLogicalPosition::Start,
        }
    }

    /// Vertical scroll offset that brings `target` into a viewport of
    /// `viewport_height` currently scrolled to `current`
    pub fn resolve(&self, target: &DOMRect, viewport_height: f64, current: f64) -> f64 {
        let y = match self.block {
            ScrollLogicalPosition::Start => target.top(),
            ScrollLogicalPosition::Center => target.top() + target.height / 2.0 - viewport_height / 2.0,
            ScrollLogicalPosition::End => target.bottom() - viewport_height,
            ScrollLogicalPosition::Nearest => {
                if target.top() < current {
                    target.top()
                } else if target.bottom() > current + viewport_height {
                    target.bottom() - viewport_height
                } else {
                    current
                }
            }
        };
        y.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_start() {
        let rect = DOMRect::from_xywh(0.0, 1200.0, 800.0, 300.0);
        let opts = ScrollIntoViewOptions::smooth_start();
        assert_eq!(opts.resolve(&rect, 768.0, 0.0), 1200.0);
    }

    #[test]
    fn test_resolve_clamps_to_zero() {
        let rect = DOMRect::from_xywh(0.0, 10.0, 800.0, 20.0);
        let opts = ScrollIntoViewOptions {
            behavior: ScrollBehavior::Auto,
            block: ScrollLogicalPosition::End,
        };
        assert_eq!(opts.resolve(&rect, 768.0, 0.0), 0.0);
    }

    #[test]
    fn test_resolve_nearest_keeps_visible() {
        let rect = DOMRect::from_xywh(0.0, 100.0, 800.0, 50.0);
        let opts = ScrollIntoViewOptions {
            behavior: ScrollBehavior::Auto,
            block: ScrollLogicalPosition::Nearest,
        };
        assert_eq!(opts.resolve(&rect, 768.0, 50.0), 50.0);
    }
}
