/// Id of the element the widget mounts into.
pub const MOUNT_ELEMENT_ID: &str = "root";

/// Property of `window` the host injects its globals under.
pub const HOST_GLOBAL: &str = "openai";

/// Shown in place of a missing or empty name.
pub const FALLBACK_NAME: &str = "friend";

/// Fired on `window` when the host swaps in a new tool output (`live-updates` only).
pub const HOST_UPDATE_EVENT: &str = "openai-tool-output-update";
