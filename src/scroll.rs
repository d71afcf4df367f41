//! Scroll-linked choreography: hero parallax and the return-to-top button.

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;

/// Scroll offsets at which a container starts and finishes passing through
/// the viewport ("start start" to "end end").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBounds {
    pub start: f64,
    pub end: f64,
}

impl ScrollBounds {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Bounds for an element laid out at `offset_top` with `offset_height`,
    /// seen through a viewport `viewport_height` tall.
    pub fn for_container(offset_top: f64, offset_height: f64, viewport_height: f64) -> Self {
        Self::new(offset_top, offset_top + offset_height - viewport_height)
    }

    /// Progress through the container, always in [0, 1].
    pub fn progress(&self, scroll: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            // Container no taller than the viewport: it is either not reached or done.
            return if scroll > self.start { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / span).clamp(0.0, 1.0)
    }
}

pub fn parallax_offset(progress: f64) -> f64 {
    lerp(0.0, config::PARALLAX_MAX_OFFSET, progress)
}

pub fn show_return_to_top(window_scroll_y: f64) -> bool {
    window_scroll_y > config::RETURN_TO_TOP_THRESHOLD
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub progress: f64,
    pub parallax_offset: f64,
    pub show_return_to_top: bool,
}

impl ScrollState {
    pub fn compute(bounds: ScrollBounds, window_scroll_y: f64) -> Self {
        let progress = bounds.progress(window_scroll_y);
        Self {
            progress,
            parallax_offset: parallax_offset(progress),
            show_return_to_top: show_return_to_top(window_scroll_y),
        }
    }
}

/// Reads the live scroll position and container layout.
pub fn measure(container: &NodeRef) -> Option<ScrollState> {
    let window = web_sys::window()?;
    let element = container.cast::<HtmlElement>()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;

    let bounds = ScrollBounds::for_container(
        element.offset_top() as f64,
        element.offset_height() as f64,
        viewport_height,
    );
    Some(ScrollState::compute(bounds, scroll_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_and_monotonic() {
        let bounds = ScrollBounds::new(100.0, 1100.0);
        assert_eq!(bounds.progress(0.0), 0.0);
        assert_eq!(bounds.progress(100.0), 0.0);
        assert_eq!(bounds.progress(600.0), 0.5);
        assert_eq!(bounds.progress(1100.0), 1.0);
        assert_eq!(bounds.progress(5000.0), 1.0);

        let mut last = 0.0;
        for step in 0..=300 {
            let p = bounds.progress(step as f64 * 5.0);
            assert!(p >= last);
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
    }

    #[test]
    fn container_shorter_than_viewport() {
        let bounds = ScrollBounds::for_container(0.0, 500.0, 800.0);
        assert_eq!(bounds.progress(0.0), 0.0);
        assert_eq!(bounds.progress(10.0), 1.0);
    }

    #[test]
    fn parallax_drifts_up_to_forty_pixels() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(0.5), -20.0);
        assert_eq!(parallax_offset(1.0), -40.0);
    }

    #[test]
    fn return_to_top_flips_exactly_past_300() {
        let mut shown = Vec::new();
        for y in 0..=301 {
            shown.push(show_return_to_top(y as f64));
        }
        assert!(shown[..=300].iter().all(|s| !s));
        assert!(shown[301]);

        // no hysteresis on the way back down
        for y in [301.0, 300.0, 300.5, 299.0, 1200.0, 0.0] {
            assert_eq!(show_return_to_top(y), y > 300.0);
        }
    }

    #[test]
    fn state_combines_both_values() {
        let bounds = ScrollBounds::for_container(0.0, 2000.0, 1000.0);
        let state = ScrollState::compute(bounds, 250.0);
        assert_eq!(state.progress, 0.25);
        assert_eq!(state.parallax_offset, -10.0);
        assert!(!state.show_return_to_top);

        let state = ScrollState::compute(bounds, 4000.0);
        assert_eq!(state.progress, 1.0);
        assert!(state.show_return_to_top);
    }
}
