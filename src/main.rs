use ai_code_analyzer::logger;
use ai_code_analyzer::structs::cli::Cli;
use ai_code_analyzer::workers::command_runner::CommandRunner;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let mut runner = CommandRunner::new(cli.config);
    if let Err(e) = runner.run_command(cli.command).await {
        if let Some(suggestion) = e.suggestion() {
            log::info!("💡 {}", suggestion);
        }
        return Err(e.into());
    }

    Ok(())
}
