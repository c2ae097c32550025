mod app;
mod data;
mod screen;
mod views;
use app::App;
use blockview::misc::{
    config::Config,
    shared_init::{ConnOpts, RpcOpts},
};
use eyre::Result;
use tracing::info;

#[derive(Debug, clap::Parser)]
pub struct TuiArgs {
    #[arg(long, help = "Start browsing at this height instead of the chain tip")]
    height: Option<u64>,

    #[command(flatten)]
    conn_opts: ConnOpts,
}

impl TuiArgs {
    pub async fn run(&self) -> Result<()> {
        Config::init_if_missing()?;
        let config = Config::load()?;
        let opts = RpcOpts::resolve(&self.conn_opts, &config);
        info!(rpc_url = %opts.rpc_url, start = ?self.height, "starting block browser");

        let mut terminal = ratatui::init();
        let app_result = App::new(opts, self.height, config.browser.window_rows as usize)
            .run(&mut terminal);
        ratatui::restore();
        Ok(app_result?)
    }
}
