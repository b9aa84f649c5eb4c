pub mod model;
pub mod prize;
pub mod schedule;
pub mod validation;

pub use prize::rotation::{
    calculate_final_rotation, final_rotation_with_layout, segment_angle, segment_at_pointer,
    RotationError, SegmentLayout,
};
pub use prize::selector::{draw_with_rng, select_winning_segment, CandidatePool, Draw};
pub use schedule::evaluator::is_active;
pub use schedule::selection::select_active_wheel;
pub use schedule::timezone::{localize, LocalMoment};
pub use validation::{validate_schedule, validate_segments, validate_wheel, ValidationError};
