use std::cell::Cell;
use std::rc::Rc;

use crate::config::TriggerTiming;
use crate::schedule::{CoalescingScheduler, TimerHost};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdjustTask {
    Resize,
    SectionSettle,
}

/// Why the first pass waits for the window `load` event instead of the
/// page's readiness library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLoadFallback {
    NoBody,
    NoLibrary,
    LibraryFailed,
}

impl PageLoadFallback {
    pub fn message(self) -> &'static str {
        match self {
            PageLoadFallback::NoBody => "document body missing; using window load event",
            PageLoadFallback::NoLibrary => "imagesLoaded unavailable; using window load event",
            PageLoadFallback::LibraryFailed => "imagesLoaded call failed; using window load event",
        }
    }
}

/// Where the initial trigger comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadinessSource {
    ImagesLoaded,
    PageLoad(PageLoadFallback),
}

pub fn readiness_source(has_body: bool, has_library: bool) -> ReadinessSource {
    match (has_body, has_library) {
        (false, _) => ReadinessSource::PageLoad(PageLoadFallback::NoBody),
        (true, false) => ReadinessSource::PageLoad(PageLoadFallback::NoLibrary),
        (true, true) => ReadinessSource::ImagesLoaded,
    }
}

/// A class change observed on a switchable section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionChange {
    pub was_active: bool,
    pub is_active: bool,
    pub has_gallery: bool,
}

impl SectionChange {
    pub fn enters_view(&self) -> bool {
        self.is_active && !self.was_active
    }
}

/// Funnels the three re-measure triggers into one idempotent pass.
pub struct AdjustTriggers<H: TimerHost> {
    scheduler: CoalescingScheduler<AdjustTask, H>,
    timing: TriggerTiming,
    pass: Rc<dyn Fn()>,
    settled: Cell<bool>,
}

impl<H> AdjustTriggers<H>
where
    H: TimerHost,
    H::Handle: 'static,
{
    pub fn new(host: H, timing: TriggerTiming, pass: Rc<dyn Fn()>) -> Self {
        Self {
            scheduler: CoalescingScheduler::new(host),
            timing,
            pass,
            settled: Cell::new(false),
        }
    }

    /// Runs the pass once all images are settled. Later calls are ignored.
    pub fn images_settled(&self) -> bool {
        if self.settled.replace(true) {
            return false;
        }
        (self.pass)();
        true
    }

    pub fn window_resized(&self) {
        self.scheduler.schedule(
            AdjustTask::Resize,
            self.timing.resize_debounce_ms,
            Rc::clone(&self.pass),
        );
    }

    /// Schedules a pass after the settle delay when a section holding a
    /// gallery becomes active. Returns whether a pass was scheduled.
    pub fn section_changed(&self, change: SectionChange) -> bool {
        if !change.enters_view() || !change.has_gallery {
            return false;
        }
        self.scheduler.schedule(
            AdjustTask::SectionSettle,
            self.timing.settle_delay_ms,
            Rc::clone(&self.pass),
        );
        true
    }

    pub fn is_pending(&self, task: AdjustTask) -> bool {
        self.scheduler.is_pending(task)
    }

    pub fn cancel_all(&self) {
        self.scheduler.cancel(AdjustTask::Resize);
        self.scheduler.cancel(AdjustTask::SectionSettle);
    }
}
