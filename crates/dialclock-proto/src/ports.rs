//! Port definitions for dialclock adapters.
//!
//! This module exposes the audio contract used by the GUI to request a tick
//! without linking directly against an audio backend.

pub mod sound;
