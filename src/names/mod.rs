//! Graph naming subsystem.
//!
//! # Data Flow
//! ```text
//! raw argv
//!     → args.rs (split `key:=value` arguments by kind)
//!     → remap.rs (RemapTable, immutable once built)
//!     → identity.rs (NodeIdentity from name literal or `__name` override)
//!     → resolve.rs (validate names, resolve against namespace, apply remaps)
//! ```
//!
//! # Design Decisions
//! - Remap entries are stored exactly as written; resolution happens on lookup
//! - Malformed middleware arguments are errors, never silently dropped
//! - Names are validated with the same rules for argv and config

pub mod args;
pub mod identity;
pub mod remap;
pub mod resolve;

pub use args::{strip_ros_args, NodeArgs, PrivateParams};
pub use identity::NodeIdentity;
pub use remap::RemapTable;
pub use resolve::NameResolver;
