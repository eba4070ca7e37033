/// Utilization percentage at which a budget is flagged as warning
pub const UTILIZATION_WARNING_THRESHOLD: u32 = 75;

/// Utilization percentage at which a budget is flagged as critical
pub const UTILIZATION_CRITICAL_THRESHOLD: u32 = 90;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Default number of entries returned by the recent-activity feed
pub const DEFAULT_RECENT_ACTIVITY_LIMIT: usize = 10;

/// Actor recorded on activity entries while the app runs single-user
pub const DEFAULT_ACTIVITY_ACTOR: &str = "john.doe@agency.com";
