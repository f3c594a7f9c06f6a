use clap::Parser;
use polyrun::commands::{Commands, ConfigArgs, RunArgs};

#[derive(Parser)]
#[command(name = "polyrun")]
#[command(about = "Translate any source text to JavaScript with a language model and run it", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Log debug output from polyrun to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    config: ConfigArgs,

    #[command(flatten)]
    run: RunArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

const INTERRUPTED_EXIT_CODE: i32 = 130;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    polyrun_utils::tracing::init(cli.verbose).map_err(|e| eyre::eyre!(e))?;

    let command = cli.command.unwrap_or(Commands::Run(cli.run));

    // On Ctrl-C the command future is dropped here, which kills the child and
    // removes its workspace before the process exits
    let outcome = tokio::select! {
        result = command.execute(&cli.config) => Some(result),
        _ = tokio::signal::ctrl_c() => None,
    };

    match outcome {
        Some(Ok(())) => Ok(()),
        Some(Err(e)) => match e.exit_code() {
            Some(code) => {
                eprintln!("polyrun: {e}");
                std::process::exit(code);
            }
            None => Err(e.into()),
        },
        None => {
            eprintln!("polyrun: interrupted");
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
    }
}
