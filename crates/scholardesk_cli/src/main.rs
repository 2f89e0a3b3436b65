//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `scholardesk_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe to validate core crate wiring independently from any
    // rendering runtime.
    println!("scholardesk_core ping={}", scholardesk_core::ping());
    println!("scholardesk_core version={}", scholardesk_core::core_version());
}
