//! Fixed tuning values for the UI layer.
//!
//! Server settings (address, site root, reload port) come from `[package.metadata.leptos]`
//! in Cargo.toml through `leptos::config::get_configuration`; nothing here is read at runtime.

/// Vertical scroll offset (px) past which the navigation bar switches to its solid background.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// How long the contact form pretends to be sending a message.
pub const SUBMIT_DELAY_MS: u64 = 2_000;

/// Lifetime of a toast notification before it dismisses itself.
pub const TOAST_DURATION_MS: u64 = 4_000;

/// Minimum trimmed length of a contact message.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Root margin handed to the intersection observer of scroll-reveal blocks.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Root margin for the observer shared by the items of a staggered list.
pub const STAGGER_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Distance (px) a hidden block is offset before it is revealed.
pub const REVEAL_OFFSET_PX: i32 = 30;

/// Default reveal transition length in seconds.
pub const REVEAL_DURATION_S: f64 = 0.35;

/// Delay step between consecutive items of a staggered list, in seconds.
pub const STAGGER_STEP_S: f64 = 0.1;

/// Transition length of each item in a staggered list, in seconds.
pub const STAGGER_DURATION_S: f64 = 0.6;

/// Number of technologies shown on a project card before collapsing into "+N more".
pub const TECH_PREVIEW_LEN: usize = 3;

/// Year the binary was built, exported by build.rs.
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

/// RFC 3339 timestamp of the build, exported by build.rs.
pub const BUILD_TIME: &str = env!("BUILD_TIME");
