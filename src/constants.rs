pub const DEFAULT_TAB_WIDTH: usize = 8;
pub const CHECKER_NAME: &str = "mipsy";
pub const CHECKER_FLAG: &str = "--check";
pub const CONFIG_NAME: &str = "config.json";
pub const CONFIRM_ANSWER: &str = "y";
