use log::debug;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub id: String,
    pub order: usize,
}

impl Slide {
    pub fn from_ids<I, S>(ids: I) -> Vec<Slide>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ids.into_iter()
            .enumerate()
            .map(|(order, id)| Slide {
                id: id.into(),
                order,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportClass {
    Compact,
    #[default]
    Wide,
}

impl ViewportClass {
    pub fn from_is_compact(is_compact: bool) -> Self {
        if is_compact {
            Self::Compact
        } else {
            Self::Wide
        }
    }
}

/// Smallest index whose threshold is at or above `progress`, or the last index on overshoot.
pub fn select(progress: f64, thresholds: &[f64]) -> usize {
    thresholds
        .iter()
        .position(|t| progress <= *t)
        .unwrap_or(thresholds.len().saturating_sub(1))
}

/// `top` is the region's bounding-box top, negative once scrolled past its start.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    if !(top.is_finite() && height.is_finite() && viewport_height.is_finite()) {
        return 0.0;
    }
    let range = height - viewport_height;
    if range <= 0.0 {
        return if top < 0.0 { 1.0 } else { 0.0 };
    }
    (-top / range).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub struct SlideSelector {
    thresholds: Vec<f64>,
    active: usize,
}

impl SlideSelector {
    pub fn new(slide_count: usize) -> Result<Self, ConfigError> {
        if slide_count == 0 {
            return Err(ConfigError::EmptySlides);
        }
        let thresholds = (0..slide_count)
            .map(|i| (i + 1) as f64 / slide_count as f64)
            .collect();
        Ok(Self {
            thresholds,
            active: 0,
        })
    }

    pub fn for_slides(slides: &[Slide]) -> Result<Self, ConfigError> {
        Self::new(slides.len())
    }

    pub fn slide_count(&self) -> usize {
        self.thresholds.len()
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Returns the new index only when the progress moved into another slide.
    pub fn on_scroll_progress(&mut self, progress: f64) -> Option<usize> {
        let next = select(progress, &self.thresholds);
        if next == self.active {
            return None;
        }
        debug!("active slide {} -> {} at progress {progress:.3}", self.active, next);
        self.active = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_slides_rejected() {
        assert_eq!(SlideSelector::new(0).unwrap_err(), ConfigError::EmptySlides);
        assert!(SlideSelector::for_slides(&[]).is_err());
    }

    #[test]
    fn test_thresholds() {
        let selector = SlideSelector::new(4).unwrap();
        assert_eq!(selector.thresholds(), &[0.25, 0.5, 0.75, 1.0]);
        assert_eq!(selector.slide_count(), 4);
        assert_eq!(selector.active_index(), 0);
    }

    #[test]
    fn test_index_always_in_range() {
        for count in 1..=12 {
            let mut selector = SlideSelector::new(count).unwrap();
            for step in 0..=1000 {
                let progress = step as f64 / 1000.0;
                selector.on_scroll_progress(progress);
                assert!(selector.active_index() < count, "count {count} progress {progress}");
            }
        }
    }

    #[test]
    fn test_every_exact_threshold_selects_its_own_slide() {
        for n in 1..=50 {
            let selector = SlideSelector::new(n).unwrap();
            for (i, &t) in selector.thresholds().iter().enumerate() {
                assert_eq!(select(t, selector.thresholds()), i, "n={n} at {t}");
                if i + 1 < n {
                    assert_eq!(select(t + 1e-9, selector.thresholds()), i + 1, "n={n} past {t}");
                }
            }
            assert_eq!(select(1.2, selector.thresholds()), n - 1);
        }
    }

    #[test]
    fn test_boundary_selects_earlier_slide() {
        let mut selector = SlideSelector::new(3).unwrap();
        selector.on_scroll_progress(1.0 / 3.0);
        assert_eq!(selector.active_index(), 0);

        selector.on_scroll_progress(1.0 / 3.0 + 1e-9);
        assert_eq!(selector.active_index(), 1);

        selector.on_scroll_progress(2.0 / 3.0);
        assert_eq!(selector.active_index(), 1);

        selector.on_scroll_progress(1.0);
        assert_eq!(selector.active_index(), 2);
    }

    #[test]
    fn test_overshoot_selects_last() {
        let mut selector = SlideSelector::new(3).unwrap();
        assert_eq!(selector.on_scroll_progress(1.2), Some(2));
        assert_eq!(selector.active_index(), 2);
        assert_eq!(select(f64::NAN, selector.thresholds()), 2);
    }

    #[test]
    fn test_negative_progress_selects_first() {
        let mut selector = SlideSelector::new(3).unwrap();
        selector.on_scroll_progress(0.9);
        assert_eq!(selector.on_scroll_progress(-0.1), Some(0));
    }

    #[test]
    fn test_monotonic_progress_never_jumps_back() {
        let mut selector = SlideSelector::new(7).unwrap();
        let mut last = 0;
        for step in 0..=10_000 {
            selector.on_scroll_progress(step as f64 / 10_000.0);
            let current = selector.active_index();
            assert!(current >= last);
            assert!(current - last <= 1);
            last = current;
        }
        assert_eq!(last, 6);
    }

    #[test]
    fn test_notifies_only_on_change() {
        let mut selector = SlideSelector::new(3).unwrap();
        assert_eq!(selector.on_scroll_progress(0.1), None);
        assert_eq!(selector.on_scroll_progress(0.2), None);
        assert_eq!(selector.on_scroll_progress(0.5), Some(1));
        assert_eq!(selector.on_scroll_progress(0.5), None);
        assert_eq!(selector.on_scroll_progress(0.6), None);
        assert_eq!(selector.on_scroll_progress(0.1), Some(0));
        assert_eq!(selector.active_index(), 0);
    }

    #[test]
    fn test_single_slide() {
        let mut selector = SlideSelector::new(1).unwrap();
        for progress in [0.0, 0.5, 1.0, 1.5] {
            assert_eq!(selector.on_scroll_progress(progress), None);
            assert_eq!(selector.active_index(), 0);
        }
    }

    #[test]
    fn test_slides_from_ids() {
        let slides = Slide::from_ids(["nk studio", "Gamily", "Hungry Tiger"]);
        assert_eq!(slides.len(), 3);
        assert_eq!(slides[2].id, "Hungry Tiger");
        assert_eq!(slides[2].order, 2);
        let selector = SlideSelector::for_slides(&slides).unwrap();
        assert_eq!(selector.slide_count(), 3);
    }

    #[test]
    fn test_scroll_progress() {
        // 300px region in a 100px viewport scrolls over 200px
        assert_eq!(scroll_progress(50.0, 300.0, 100.0), 0.0);
        assert_eq!(scroll_progress(0.0, 300.0, 100.0), 0.0);
        assert_eq!(scroll_progress(-100.0, 300.0, 100.0), 0.5);
        assert_eq!(scroll_progress(-200.0, 300.0, 100.0), 1.0);
        assert_eq!(scroll_progress(-400.0, 300.0, 100.0), 1.0);

        assert_eq!(scroll_progress(10.0, 80.0, 100.0), 0.0);
        assert_eq!(scroll_progress(-10.0, 80.0, 100.0), 1.0);
        assert_eq!(scroll_progress(f64::NAN, 300.0, 100.0), 0.0);
    }

    #[test]
    fn test_viewport_class() {
        assert_eq!(ViewportClass::from_is_compact(true), ViewportClass::Compact);
        assert_eq!(ViewportClass::from_is_compact(false), ViewportClass::Wide);
        assert_eq!(ViewportClass::default(), ViewportClass::Wide);
    }
}
