//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `classtrack_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe to validate core crate wiring independently from any UI
    // embedding.
    println!("classtrack_core ping={}", classtrack_core::ping());
    println!("classtrack_core version={}", classtrack_core::core_version());
}
