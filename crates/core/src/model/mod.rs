mod schedule;
mod segment;
mod wheel;

pub use schedule::{DateRange, ScheduleConfig, SpecialDates, TimeSlot, TimeSlots, WeekDays};
pub use segment::Segment;
pub use wheel::Wheel;
