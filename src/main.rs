use clap::Parser;
use creatorai::api::OpenRouterClient;
use creatorai::cli::{Args, Command};
use creatorai::config::Config;
use creatorai::error::Result;
use creatorai::ui::{display_error, display_instruction, display_result, display_tool_list, display_verbose};
use creatorai::{tools, Dispatcher};
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        display_error(&e.to_string());
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    if let Command::List = args.command {
        display_tool_list(tools::all());
        return Ok(());
    }

    if let Some(instruction) = args.dry_run_instruction()? {
        display_instruction(&instruction);
        return Ok(());
    }

    let input = match args.command.tool_input()? {
        Some(input) => input,
        None => return Ok(()),
    };
    let tool = tools::find(input.tool_id());

    let config = Config::from_env_and_args(&args)?;

    if config.verbose {
        display_verbose(&format!("Tool: {} ({})", tool.name, tool.id));
        display_verbose(&format!("Using model: {}", config.model));
    }

    let client = OpenRouterClient::from_config(&config)?;
    let dispatcher = Dispatcher::new(client);
    let text = dispatcher.dispatch(&input).await?;

    display_result(tool, &text, config.plain);
    Ok(())
}
