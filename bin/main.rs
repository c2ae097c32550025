mod cmd;
use clap::{Parser, Subcommand};

use blockview::misc::utils::init_logs;
use cmd::block::BlockArgs;
#[cfg(feature = "tui")]
use cmd::tui::TuiArgs;
use eyre::Result;

#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "blockview: terminal block browser for Bitcoin-compatible nodes"
)]
pub struct BVArgs {
    #[command(subcommand)]
    pub cmd: BVSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BVSubcommand {
    #[cfg(feature = "tui")]
    #[command(about = "Browse blocks interactively", alias = "t")]
    Tui(TuiArgs),
    #[command(about = "Print block info", alias = "b")]
    Block(BlockArgs),
}

#[tokio::main]
async fn main() {
    match execute().await {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

type BV = BVSubcommand;

async fn execute() -> Result<()> {
    let args = BVArgs::parse();

    match args.cmd {
        #[cfg(feature = "tui")]
        BV::Tui(args) => {
            init_logs(Some(&blockview::misc::shared_init::log_file_path()?))?;
            args.run().await?;
        }
        BV::Block(args) => {
            init_logs(None)?;
            args.run().await?;
        }
    }

    Ok(())
}
