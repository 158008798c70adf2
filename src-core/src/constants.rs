/// Hard cap on the number of rows returned by list queries.
pub const LIST_QUERY_CAP: i64 = 1000;

/// Number of investments included in the dashboard recent list.
pub const RECENT_INVESTMENTS_LIMIT: i64 = 5;

/// Number of investors included in the dashboard top list.
pub const TOP_INVESTORS_LIMIT: i64 = 5;
