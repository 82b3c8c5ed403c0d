use crate::config::ViewportConfig;
use glam::{Mat4, Vec2};

/// Margin-scrolling viewport.
///
/// The view stays put while the target is inside the inner box `margin`
/// pixels from each edge, and shifts by exactly the overshoot otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportCamera {
    /// World x of the view's left edge
    pub left: f32,
    /// World y of the view's bottom edge
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl ViewportCamera {
    pub fn new(config: &ViewportConfig) -> Self {
        Self {
            left: 0.0,
            bottom: 0.0,
            width: config.width,
            height: config.height,
            margin: config.margin,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Jump so `target` sits in the middle of the view
    pub fn center_on(&mut self, target: Vec2) {
        self.left = target.x - self.width / 2.0;
        self.bottom = target.y - self.height / 2.0;
    }

    /// Scroll to keep `target` inside the margins. Returns true if the view moved.
    pub fn follow(&mut self, target: Vec2) -> bool {
        let mut changed = false;

        let left_bound = self.left + self.margin;
        if target.x < left_bound {
            self.left -= left_bound - target.x;
            changed = true;
        }

        let right_bound = self.left + self.width - self.margin;
        if target.x > right_bound {
            self.left += target.x - right_bound;
            changed = true;
        }

        let top_bound = self.bottom + self.height - self.margin;
        if target.y > top_bound {
            self.bottom += target.y - top_bound;
            changed = true;
        }

        let bottom_bound = self.bottom + self.margin;
        if target.y < bottom_bound {
            self.bottom -= bottom_bound - target.y;
            changed = true;
        }

        changed
    }

    /// `(left, right, bottom, top)` in world pixels
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        (
            self.left,
            self.left + self.width,
            self.bottom,
            self.bottom + self.height,
        )
    }

    /// Inclusive `(min_col, max_col, min_row, max_row)` of cells at least
    /// partly on screen, padded by one
    pub fn visible_cells(&self, tile_size: i32) -> (i32, i32, i32, i32) {
        let ts = tile_size as f32;
        let (left, right, bottom, top) = self.bounds();
        (
            (left / ts).floor() as i32 - 1,
            (right / ts).ceil() as i32 + 1,
            (bottom / ts).floor() as i32 - 1,
            (top / ts).ceil() as i32 + 1,
        )
    }

    /// Window pixel (origin top-left, y down) to world pixel
    pub fn screen_to_world(&self, screen_x: f32, screen_y: f32) -> Vec2 {
        Vec2::new(self.left + screen_x, self.bottom + self.height - screen_y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        let (left, right, bottom, top) = self.bounds();
        Mat4::orthographic_rh(left, right, bottom, top, -1.0, 1.0)
    }
}
