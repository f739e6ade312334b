use tracing::debug;

use crate::constants::LIVE_REGION_ID;
use crate::host::{LiveRegionHost, LiveRegionSpec, Politeness, RegionId};

/// Text announced when slide `current` (zero-based) of `count` becomes active.
pub fn announcement(current: usize, count: usize) -> String {
    format!("Slide {} of {}", current + 1, count)
}

/// Best-effort "Slide i of N" notifications through a single live region.
///
/// The region is created on the first notification and reused afterwards. Host
/// failures are logged and dropped.
#[derive(Debug, Default)]
pub struct Announcer {
    region: Option<RegionId>,
}

impl Announcer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self) -> Option<RegionId> {
        self.region
    }

    pub fn notify<L: LiveRegionHost + ?Sized>(
        &mut self,
        host: &mut L,
        current: usize,
        count: usize,
    ) {
        let region = match self.region {
            Some(region) => region,
            None => {
                let spec = LiveRegionSpec {
                    id: LIVE_REGION_ID,
                    politeness: Politeness::Polite,
                    atomic: true,
                };
                match host.create_live_region(&spec) {
                    Ok(region) => *self.region.insert(region),
                    Err(e) => {
                        debug!(error = %e, "no live region, announcement skipped");
                        return;
                    }
                }
            }
        };

        if let Err(e) = host.set_live_text(region, &announcement(current, count)) {
            debug!(error = %e, "announcement dropped");
        }
    }

    /// Removes the live region from the host, if one was created.
    pub fn release<L: LiveRegionHost + ?Sized>(&mut self, host: &mut L) {
        if let Some(region) = self.region.take() {
            host.remove_live_region(region);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HostError;

    #[derive(Default)]
    struct RecordingRegions {
        created: u64,
        texts: Vec<String>,
        removed: Vec<RegionId>,
        unavailable: bool,
    }

    impl LiveRegionHost for RecordingRegions {
        fn create_live_region(&mut self, spec: &LiveRegionSpec<'_>) -> Result<RegionId, HostError> {
            if self.unavailable {
                return Err(HostError::LiveRegionUnavailable(spec.id.to_string()));
            }
            self.created += 1;
            Ok(RegionId::new(self.created))
        }

        fn set_live_text(&mut self, _region: RegionId, text: &str) -> Result<(), HostError> {
            self.texts.push(text.to_string());
            Ok(())
        }

        fn remove_live_region(&mut self, region: RegionId) {
            self.removed.push(region);
        }
    }

    #[test]
    fn announcement_is_one_based() {
        assert_eq!(announcement(0, 3), "Slide 1 of 3");
        assert_eq!(announcement(2, 3), "Slide 3 of 3");
    }

    #[test]
    fn region_is_created_once_and_reused() {
        let mut host = RecordingRegions::default();
        let mut announcer = Announcer::new();

        announcer.notify(&mut host, 1, 3);
        announcer.notify(&mut host, 2, 3);

        assert_eq!(host.created, 1);
        assert_eq!(host.texts, ["Slide 2 of 3", "Slide 3 of 3"]);
    }

    #[test]
    fn missing_region_is_swallowed() {
        let mut host = RecordingRegions {
            unavailable: true,
            ..Default::default()
        };
        let mut announcer = Announcer::new();

        announcer.notify(&mut host, 1, 3);

        assert!(host.texts.is_empty());
        assert!(announcer.region().is_none());
    }

    #[test]
    fn release_removes_region_once() {
        let mut host = RecordingRegions::default();
        let mut announcer = Announcer::new();
        announcer.notify(&mut host, 1, 2);

        announcer.release(&mut host);
        announcer.release(&mut host);

        assert_eq!(host.removed, [RegionId::new(1)]);
    }
}
