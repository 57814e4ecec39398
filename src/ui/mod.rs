pub mod markup;
mod output;

pub use markup::{classify_line, render, render_line, LineKind};
pub use output::{
    display_error, display_header, display_instruction, display_result, display_tool_list,
    display_verbose,
};
