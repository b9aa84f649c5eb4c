//! Campaign scheduling: per-wheel eligibility plus selection among the
//! wheels competing for a storefront slot.

pub mod evaluator;
pub mod selection;
pub mod timezone;
