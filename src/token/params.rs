use {super::*, once_cell::sync::Lazy};

pub const BRC20_PROTOCOL_LITERAL: &str = "brc-20";
pub const SRC20_PROTOCOL_LITERAL: &str = "src-20";
pub const MAX_DECIMAL_WIDTH: u8 = 18;
pub const BRC20_TICK_BYTE_COUNTS: [usize; 2] = [4, 5];
pub const SRC20_MAX_TICK_CHARS: usize = 5;

pub static MAXIMUM_SUPPLY: Lazy<Num> = Lazy::new(|| Num::from(u64::MAX));

/// Content types a token inscription may carry its JSON under.
pub fn is_token_content_type(content_type: &str) -> bool {
  content_type == "text/plain"
    || content_type == "application/json"
    || content_type.starts_with("text/plain;")
}
