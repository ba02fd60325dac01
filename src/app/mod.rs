// HackTyper - app/mod.rs
//
// Application layer: the typewriter printer and show orchestration.
// Dependencies: core layer, platform::term for screen clearing.

pub mod show;
pub mod typewriter;
