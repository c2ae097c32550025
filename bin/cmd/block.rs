use blockview::misc::config::Config;
use blockview::misc::rpc::RpcClient;
use blockview::misc::shared_init::{ConnOpts, OutputFormat, RpcOpts};
use blockview::misc::utils::{
    SEPARATOR, format_block_time, format_difficulty, format_height, format_size, format_version,
};
use blockview::models::{block::Block, json::block_json::BlockJson};
use colored::Colorize;
use eyre::Result;
use tracing::info;

#[derive(Debug, clap::Parser)]
pub struct BlockArgs {
    height: u64,

    #[arg(
        long,
        help = "Output format ('text', 'json')",
        default_value = "text"
    )]
    pub format: OutputFormat,

    #[command(flatten)]
    conn_opts: ConnOpts,
}

impl BlockArgs {
    pub async fn run(&self) -> Result<()> {
        let config = Config::load()?;
        let opts = RpcOpts::resolve(&self.conn_opts, &config);
        info!(height = self.height, rpc_url = %opts.rpc_url, "fetching block");

        let client = RpcClient::new(opts)?;
        let block = client.block_at(self.height).await?;

        match self.format {
            OutputFormat::Text => print_block(&block),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&BlockJson::from(&block))?);
            }
        }

        Ok(())
    }
}

fn print_block(block: &Block) {
    println!("{} {}", "height:".bold(), format_height(Some(block.height)).green());
    println!("{} {}", "hash:".bold(), block.hash);
    println!("{} {}", "root:".bold(), block.merkle_root);
    println!(
        "{}    {}    {}    {}",
        format_size(block.size),
        format_difficulty(block.difficulty),
        format_block_time(block.time),
        format_version(block.version).dimmed()
    );
    println!("{SEPARATOR}");
    println!(
        "{}",
        format!(
            "Transactions: {} ({} bytes/tx)",
            block.tx_count(),
            block.bytes_per_tx()
        )
        .yellow()
        .bold()
    );
    for tx in &block.tx {
        println!("  {tx}");
    }
}
