//! Exit codes (BSD sysexits.h compatible where one applies)

/// Mansion could not be built
pub const BUILD_FAILED: i32 = 1;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;
