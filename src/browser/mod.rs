//! The privileged/page execution boundary.
//!
//! The process plays the privileged side: it can find the active tab, ask for
//! a script to run inside a tab's isolated page context, and open new
//! top-level windows. Values cross the boundary serialized, never by
//! reference.

pub mod cdp;
pub mod host;

pub use cdp::CdpHost;
pub use host::{BrowserHost, TabHandle, WindowBounds};
