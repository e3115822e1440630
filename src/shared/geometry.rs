//! Geometry Module
//!
//! Rectangles in root-window coordinates, as reported by RandR CRTCs and
//! GetGeometry replies.

use x11rb::protocol::randr::GetCrtcInfoReply;
use x11rb::protocol::xproto::GetGeometryReply;

/// Rectangle geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Geometry {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// A CRTC with no size is switched off.
    pub fn is_active(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Point containment with inclusive bounds on every edge, so a point
    /// on the right or bottom edge still belongs to this rectangle.
    pub fn contains_inclusive(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(clamp_extent(self.width))
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(clamp_extent(self.height))
    }

    /// Origin of a window of `width` pinned to the top-right corner.
    ///
    /// Saturates instead of wrapping for widths past `i32::MAX`.
    pub fn top_right_origin(&self, width: u32) -> (i32, i32) {
        (self.right().saturating_sub(clamp_extent(width)), self.y)
    }
}

fn clamp_extent(extent: u32) -> i32 {
    i32::try_from(extent).unwrap_or(i32::MAX)
}

impl From<GetCrtcInfoReply> for Geometry {
    fn from(reply: GetCrtcInfoReply) -> Self {
        Self::new(
            reply.x as i32,
            reply.y as i32,
            reply.width as u32,
            reply.height as u32,
        )
    }
}

impl From<GetGeometryReply> for Geometry {
    fn from(reply: GetGeometryReply) -> Self {
        Self::new(
            reply.x as i32,
            reply.y as i32,
            reply.width as u32,
            reply.height as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sized_is_inactive() {
        assert!(!Geometry::new(0, 0, 0, 1080).is_active());
        assert!(!Geometry::new(0, 0, 1920, 0).is_active());
        assert!(Geometry::new(0, 0, 1920, 1080).is_active());
    }

    #[test]
    fn test_contains_is_inclusive_on_all_edges() {
        let mon = Geometry::new(1920, 0, 1280, 1024);
        assert!(mon.contains_inclusive(1920, 0));
        assert!(mon.contains_inclusive(3200, 1024));
        assert!(mon.contains_inclusive(3200, 0));
        assert!(mon.contains_inclusive(1920, 1024));
        assert!(!mon.contains_inclusive(1919, 10));
        assert!(!mon.contains_inclusive(3201, 10));
        assert!(!mon.contains_inclusive(2000, -1));
        assert!(!mon.contains_inclusive(2000, 1025));
    }

    #[test]
    fn test_top_right_origin() {
        let mon = Geometry::new(0, 0, 1920, 1080);
        assert_eq!(mon.top_right_origin(320), (1600, 0));

        let offset = Geometry::new(1920, 120, 2560, 1440);
        assert_eq!(offset.top_right_origin(800), (3680, 120));
    }

    #[test]
    fn test_huge_width_saturates() {
        let mon = Geometry::new(0, 0, 1920, 1080);
        assert_eq!(mon.top_right_origin(u32::MAX), (1920 - i32::MAX, 0));
        assert_eq!(mon.top_right_origin(i32::MAX as u32 + 1), (1920 - i32::MAX, 0));

        let far = Geometry::new(-100, 0, u32::MAX, 10);
        assert_eq!(far.right(), i32::MAX - 100);
        assert_eq!(far.top_right_origin(u32::MAX), (-100, 0));
        assert!(far.contains_inclusive(i32::MAX - 100, 5));
    }
}
