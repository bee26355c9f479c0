mod classify;
mod commands;
mod preprocessor;
mod types;

pub use classify::classify;
pub use commands::{
    call_arguments, is_control_open, leading_literal_end, parse_command, CommandForm,
    CONTROL_KEYWORDS,
};
pub use preprocessor::{is_blank, normalize_line};
pub use types::{ClassifiedLine, LineKind};
