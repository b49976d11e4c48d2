pub mod carousel;
pub mod classes;
pub mod config;
pub mod layout;
pub mod schedule;
pub mod shutter;
pub mod swipe;
pub mod triggers;

pub use carousel::Carousel;
pub use config::{Selectors, SiteConfig, TriggerTiming, UiTiming};
pub use layout::{group_rows, plan_row_heights, HeightAssignment, ImageBox, Row, RowParams};
pub use schedule::{CoalescingScheduler, TimerHost};
pub use shutter::{Shutter, ShutterPhase, ShutterStep};
pub use swipe::{SwipeDirection, SwipeTracker};
pub use triggers::{
    readiness_source, AdjustTask, AdjustTriggers, PageLoadFallback, ReadinessSource, SectionChange,
};
