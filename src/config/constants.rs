pub const SKIP_HIDDEN: bool = false;
pub const FOLLOW_LINKS: bool = false;
