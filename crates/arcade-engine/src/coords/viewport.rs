/// Size of a drawable surface (or of the container hosting it) in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Width over height. Zero for a degenerate size.
    #[inline]
    pub fn aspect_ratio(self) -> f64 {
        if self.height == 0 {
            return 0.0;
        }
        self.width as f64 / self.height as f64
    }

    /// Largest size with `aspect_ratio` that fits inside `self`.
    ///
    /// Full height is tried first; if that overflows the width the surface
    /// spans the full width instead. Fractional pixels are floored. `None` (or
    /// a non-positive ratio) keeps the whole container.
    pub fn fit(self, aspect_ratio: Option<f64>) -> SurfaceSize {
        let Some(ratio) = aspect_ratio.filter(|r| r.is_finite() && *r > 0.0) else {
            return self;
        };

        let container_w = self.width as f64;
        let container_h = self.height as f64;

        let full_height_w = container_h * ratio;
        if full_height_w > container_w {
            let full_width_h = container_w / ratio;
            SurfaceSize::new(self.width, full_width_h.floor() as u32)
        } else {
            SurfaceSize::new(full_height_w.floor() as u32, self.height)
        }
    }

    /// Horizontal offset that centres `inner` inside `self`.
    #[inline]
    pub fn margin_left(self, inner: SurfaceSize) -> f64 {
        (self.width as f64 - inner.width as f64) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_without_ratio_keeps_container() {
        let c = SurfaceSize::new(800, 600);
        assert_eq!(c.fit(None), c);
    }

    #[test]
    fn fit_wide_ratio_spans_full_width() {
        // 800x600 container, 2:1 game -> 800x400
        let c = SurfaceSize::new(800, 600);
        assert_eq!(c.fit(Some(2.0)), SurfaceSize::new(800, 400));
    }

    #[test]
    fn fit_tall_ratio_spans_full_height() {
        // 800x600 container, 1:1 game -> 600x600
        let c = SurfaceSize::new(800, 600);
        assert_eq!(c.fit(Some(1.0)), SurfaceSize::new(600, 600));
    }

    #[test]
    fn fit_floors_fractional_pixels() {
        let c = SurfaceSize::new(1000, 700);
        // 700 * 0.75 = 525
        assert_eq!(c.fit(Some(0.75)), SurfaceSize::new(525, 700));
        // 1000 / 1.7 = 588.2..
        assert_eq!(c.fit(Some(1.7)), SurfaceSize::new(1000, 588));
    }

    #[test]
    fn fit_ignores_non_positive_ratio() {
        let c = SurfaceSize::new(320, 240);
        assert_eq!(c.fit(Some(0.0)), c);
        assert_eq!(c.fit(Some(-1.0)), c);
    }

    #[test]
    fn margin_left_centres_surface() {
        let c = SurfaceSize::new(800, 600);
        assert_eq!(c.margin_left(SurfaceSize::new(600, 600)), 100.0);
    }

    #[test]
    fn aspect_ratio_of_degenerate_size_is_zero() {
        assert_eq!(SurfaceSize::new(10, 0).aspect_ratio(), 0.0);
        assert!(!SurfaceSize::new(10, 0).is_valid());
    }
}
