//! Virion
//!
//! The interactive shell of a virus-engineering simulation game, built with
//! winit, wgpu, and egui. The game controller is a pure state machine: it
//! consumes one pointer snapshot per frame and emits a declarative draw
//! list, so everything interesting is testable without a window.

/// Application shell - windowing, rendering, and input collection
pub mod app;

/// Build-time information (git SHA, branch, timestamp, etc.)
pub mod build_info;

/// Interactive core - views, hit testing, gestures, and the draw list
pub mod game;

/// Health check system for startup and CI validation
pub mod health;

/// Domain model - viruses, blocks, industries, and the world clock
pub mod sim;
