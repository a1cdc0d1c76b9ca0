// Default parser limits
pub const DEFAULT_MAX_DEPTH: usize = 256;
pub const DEFAULT_MAX_TOKENS: usize = 4096;
