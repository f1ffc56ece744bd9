pub mod placeholders {
    /// Full label for a role with no user record.
    pub const NOT_ASSIGNED: &str = "not assigned";

    /// Full label for a user record without a username.
    pub const UNKNOWN_USER: &str = "unknown user";

    /// Short label for a role with no user record.
    pub const NOT_AVAILABLE: &str = "N/A";

    /// Short label for a user record without a username.
    pub const UNKNOWN: &str = "unknown";

    pub const NO_INITIALS: &str = "??";
}

pub mod timestamps {
    /// Day/month/year followed by hour and minute.
    pub const DEFAULT_PATTERN: &str = "%d/%m/%Y %H:%M";

    /// Largest accepted display offset, in minutes either side of UTC.
    pub const MAX_UTC_OFFSET_MINUTES: i32 = 23 * 60 + 59;
}
