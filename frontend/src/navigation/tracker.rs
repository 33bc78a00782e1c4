use crate::config::ScrollConfig;
use crate::navigation::section::SectionId;

/// Vertical extent of a rendered section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub start: f64,
    pub length: f64,
}

impl Region {
    pub fn new(start: f64, length: f64) -> Self {
        Self { start, length }
    }

    pub fn contains(&self, position: f64) -> bool {
        position >= self.start && position < self.start + self.length
    }
}

/// Looks up where a section is currently laid out.
///
/// Returns `None` when the section is not rendered.
pub trait RegionGeometry {
    fn region(&self, section: SectionId) -> Option<Region>;
}

impl<G: RegionGeometry + ?Sized> RegionGeometry for &G {
    fn region(&self, section: SectionId) -> Option<Region> {
        (**self).region(section)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub active_section: SectionId,
    pub is_scrolled: bool,
}

/// First section, in visual order, whose region contains `position`.
pub fn detect_active_section<G: RegionGeometry>(geometry: &G, position: f64) -> Option<SectionId> {
    SectionId::ALL.into_iter().find(|&section| {
        geometry
            .region(section)
            .is_some_and(|region| region.contains(position))
    })
}

/// Derives [`ScrollState`] from successive scroll offsets.
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    config: ScrollConfig,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            state: ScrollState::default(),
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Recomputes the state for a new scroll offset. Returns true if it changed.
    pub fn on_scroll<G: RegionGeometry>(&mut self, offset: f64, geometry: &G) -> bool {
        let previous = self.state;

        let position = offset + self.config.lookahead;
        if let Some(section) = detect_active_section(geometry, position) {
            self.state.active_section = section;
        }
        self.state.is_scrolled = offset > self.config.scrolled_threshold;

        self.state != previous
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Geometry backed by a fixed table.
    #[derive(Default)]
    pub(crate) struct FixedGeometry(pub HashMap<SectionId, Region>);

    impl FixedGeometry {
        /// Sections stacked back to back, each `height` tall, starting at 0.
        pub(crate) fn stacked(height: f64) -> Self {
            let regions = SectionId::ALL
                .into_iter()
                .enumerate()
                .map(|(i, section)| (section, Region::new(i as f64 * height, height)))
                .collect();
            Self(regions)
        }

        pub(crate) fn with(mut self, section: SectionId, region: Region) -> Self {
            self.0.insert(section, region);
            self
        }

        pub(crate) fn without(mut self, section: SectionId) -> Self {
            self.0.remove(&section);
            self
        }
    }

    impl RegionGeometry for FixedGeometry {
        fn region(&self, section: SectionId) -> Option<Region> {
            self.0.get(&section).copied()
        }
    }

    #[test]
    fn region_is_half_open() {
        let region = Region::new(100.0, 50.0);
        assert!(!region.contains(99.9));
        assert!(region.contains(100.0));
        assert!(region.contains(149.9));
        assert!(!region.contains(150.0));
    }

    #[test]
    fn starts_at_hero_unscrolled() {
        let tracker = ScrollTracker::new(ScrollConfig::default());
        assert_eq!(
            tracker.state(),
            ScrollState {
                active_section: SectionId::Hero,
                is_scrolled: false,
            }
        );
    }

    #[test]
    fn top_of_page_is_hero() {
        let geometry = FixedGeometry::stacked(800.0);
        let mut tracker = ScrollTracker::new(ScrollConfig::default());

        tracker.on_scroll(0.0, &geometry);

        assert_eq!(tracker.state().active_section, SectionId::Hero);
        assert!(!tracker.state().is_scrolled);
    }

    #[test]
    fn every_offset_inside_a_section_selects_it() {
        let geometry = FixedGeometry::stacked(800.0);
        let mut tracker = ScrollTracker::new(ScrollConfig::default());

        for (i, section) in SectionId::ALL.into_iter().enumerate() {
            let start = i as f64 * 800.0;
            // lookahead shifts each range up by 100
            for offset in [start - 100.0, start, start + 350.0, start + 699.0] {
                if offset < 0.0 {
                    continue;
                }
                tracker.on_scroll(offset, &geometry);
                assert_eq!(tracker.state().active_section, section, "offset {}", offset);
            }
        }
    }

    #[test]
    fn lookahead_activates_next_section_early() {
        let geometry = FixedGeometry::stacked(800.0);
        let mut tracker = ScrollTracker::new(ScrollConfig::default());

        tracker.on_scroll(699.0, &geometry);
        assert_eq!(tracker.state().active_section, SectionId::Hero);

        tracker.on_scroll(700.0, &geometry);
        assert_eq!(tracker.state().active_section, SectionId::About);
    }

    #[test]
    fn scrolled_threshold_is_exclusive() {
        let geometry = FixedGeometry::stacked(800.0);
        let mut tracker = ScrollTracker::new(ScrollConfig::default());

        tracker.on_scroll(50.0, &geometry);
        assert!(!tracker.state().is_scrolled);

        tracker.on_scroll(51.0, &geometry);
        assert!(tracker.state().is_scrolled);

        tracker.on_scroll(10.0, &geometry);
        assert!(!tracker.state().is_scrolled);
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let geometry = FixedGeometry::stacked(800.0);
        let mut tracker = ScrollTracker::new(ScrollConfig::default());

        tracker.on_scroll(1700.0, &geometry);
        assert_eq!(tracker.state().active_section, SectionId::Services);

        // past the end of the last section
        tracker.on_scroll(10_000.0, &geometry);
        assert_eq!(tracker.state().active_section, SectionId::Services);
        assert!(tracker.state().is_scrolled);
    }

    #[test]
    fn missing_regions_are_skipped() {
        let geometry = FixedGeometry::stacked(800.0).without(SectionId::About);
        let mut tracker = ScrollTracker::new(ScrollConfig::default());

        tracker.on_scroll(2400.0, &geometry);
        assert_eq!(tracker.state().active_section, SectionId::Process);

        tracker.on_scroll(800.0, &geometry);
        assert_eq!(tracker.state().active_section, SectionId::Process);
    }

    #[test]
    fn empty_geometry_only_updates_scrolled_flag() {
        let geometry = FixedGeometry::default();
        let mut tracker = ScrollTracker::new(ScrollConfig::default());

        assert!(tracker.on_scroll(500.0, &geometry));
        assert_eq!(tracker.state().active_section, SectionId::Hero);
        assert!(tracker.state().is_scrolled);
    }

    #[test]
    fn earlier_section_wins_overlap() {
        let geometry = FixedGeometry::stacked(800.0)
            .with(SectionId::Services, Region::new(1600.0, 1600.0))
            .with(SectionId::Process, Region::new(2000.0, 800.0));
        let mut tracker = ScrollTracker::new(ScrollConfig::default());

        tracker.on_scroll(2100.0, &geometry);
        assert_eq!(tracker.state().active_section, SectionId::Services);
    }

    #[test]
    fn reports_changes_only() {
        let geometry = FixedGeometry::stacked(800.0);
        let mut tracker = ScrollTracker::new(ScrollConfig::default());

        assert!(!tracker.on_scroll(0.0, &geometry));
        assert!(!tracker.on_scroll(20.0, &geometry));
        assert!(tracker.on_scroll(60.0, &geometry));
        assert!(!tracker.on_scroll(80.0, &geometry));
        assert!(tracker.on_scroll(900.0, &geometry));
    }

    #[test]
    fn honors_custom_config() {
        let geometry = FixedGeometry::stacked(800.0);
        let mut tracker = ScrollTracker::new(ScrollConfig {
            lookahead: 0.0,
            scrolled_threshold: 200.0,
        });

        tracker.on_scroll(790.0, &geometry);
        assert_eq!(tracker.state().active_section, SectionId::Hero);
        assert!(tracker.state().is_scrolled);

        tracker.on_scroll(800.0, &geometry);
        assert_eq!(tracker.state().active_section, SectionId::About);

        tracker.on_scroll(150.0, &geometry);
        assert!(!tracker.state().is_scrolled);
    }
}
