//! Top-level facade crate for vmcd.
//!
//! Re-exports the protocol core and the gateway library so users can depend
//! on a single crate.

pub mod core {
    pub use vmcd_core::*;
}

pub mod gateway {
    pub use vmcd_gateway::*;
}
