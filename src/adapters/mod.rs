//! Port implementations.
//!
//! `live` talks to the real world, `recording` wraps a live adapter and
//! captures its exchanges into a cassette, `replaying` serves a cassette back.

pub mod live;
pub mod recording;
pub mod replaying;
