//! Controller layer: UI events, reducer-like state transitions, and submission orchestration.

pub mod events;
pub mod orchestration;
pub mod reducer;
