// HackTyper - core/mod.rs
//
// Core playback logic layer.
// Dependencies: standard library, rand, util layer.
// Must NOT depend on: app, platform, or any I/O beyond source loading.

pub mod pool;
pub mod script;
