//! slotdav calendar gateway - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `slotdav_test::` paths.

pub mod component {
    pub use slotdav_core::types;

    pub mod store {
        pub use slotdav_store::*;
    }

    pub mod service {
        pub use slotdav_service::*;
    }

    // Re-export config from both core and app
    pub mod config {
        pub use slotdav_app::config::ConfigHandler;
        pub use slotdav_core::config::*;
    }
}

// Re-export top-level modules for convenience
pub mod app {
    pub use slotdav_app::*;

    pub mod api {
        pub use slotdav_app::app::api::*;
    }
}

pub use slotdav_rfc as rfc;
