use super::markup::render;
use crate::tools::ToolDescriptor;
use colored::*;

fn accent(tool: &ToolDescriptor) -> Color {
    Color::from(tool.accent)
}

fn rule() -> String {
    "─".repeat(60)
}

/// Print the tool catalogue, one tool per line.
pub fn display_tool_list(tools: &[ToolDescriptor]) {
    for tool in tools {
        println!(
            "{} {:<14} {}",
            tool.icon,
            tool.id.key().color(accent(tool)).bold(),
            tool.name.bold()
        );
        println!("   {:<14} {}", "", tool.description.dimmed());
    }
}

pub fn display_header(tool: &ToolDescriptor) {
    println!(
        "{}",
        format!("{} {}", tool.icon, tool.name).color(accent(tool)).bold()
    );
    println!("{}", rule().dimmed());
}

/// Print generated text. `plain` writes it exactly as received.
pub fn display_result(tool: &ToolDescriptor, text: &str, plain: bool) {
    if plain {
        println!("{}", text);
        return;
    }

    display_header(tool);
    println!("{}", render(text.trim_end(), accent(tool)));
    println!("{}", rule().dimmed());
}

pub fn display_instruction(text: &str) {
    println!("{}", text);
}

pub fn display_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message.red());
}

pub fn display_verbose(message: &str) {
    eprintln!("{}", format!("[creator] {}", message).dimmed());
}
