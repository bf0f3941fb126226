//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `nexus_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use nexus_core::{quick_actions, Region};

fn main() {
    println!("nexus_core ping={}", nexus_core::ping());
    println!("nexus_core version={}", nexus_core::core_version());
    for region in Region::ALL {
        println!(
            "nexus_core default_order.{}={}",
            region.as_str(),
            region.default_order().join(",")
        );
    }
    let actions = quick_actions()
        .iter()
        .map(|action| action.icon)
        .collect::<Vec<_>>();
    println!("nexus_core quick_actions={}", actions.join(","));
}
