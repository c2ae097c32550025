use std::time::Duration;

use blockview::misc::{rpc::RpcClient, shared_init::RpcOpts};
use crossbeam_channel::{Receiver, Sender};
use tokio::{runtime::Runtime, time::timeout};
use tracing::{debug, error, info};

use crate::cmd::tui::{
    app::AppEvent,
    data::{BlockRequest, DataResponse},
};

pub(crate) fn spawn_data_worker(
    data_req_rx: Receiver<BlockRequest>,
    event_tx: Sender<AppEvent>,
    opts: RpcOpts,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                error!(error = %e, "failed to start data worker runtime");
                let _ = event_tx.send(AppEvent::Data(DataResponse::Error(None, e.to_string())));
                return;
            }
        };

        let timeout_duration = opts.timeout;
        let client = match RpcClient::new(opts) {
            Ok(client) => client,
            Err(e) => {
                error!(error = %e, "failed to build rpc client");
                let _ = event_tx.send(AppEvent::Data(DataResponse::Error(None, e.to_string())));
                return;
            }
        };

        while let Ok(request) = data_req_rx.recv() {
            let tx = event_tx.clone();
            let client = client.clone();

            match request {
                BlockRequest::Height(height) => {
                    info!(height, "fetching block");
                    rt.spawn(async move {
                        let response = match timeout(timeout_duration, client.block_at(height)).await
                        {
                            Ok(Ok(block)) => {
                                debug!(height, txs = block.tx.len(), "fetched block");
                                DataResponse::Block(block)
                            }
                            Ok(Err(e)) => {
                                error!(height, error = %e, "failed to fetch block");
                                DataResponse::Error(Some(height), e.to_string())
                            }
                            Err(_) => {
                                error!(height, "block fetch timed out");
                                DataResponse::Error(Some(height), timeout_message(timeout_duration))
                            }
                        };
                        let _ = tx.send(AppEvent::Data(response));
                    });
                }

                BlockRequest::Tip => {
                    info!("fetching best block");
                    rt.spawn(async move {
                        let response = match timeout(timeout_duration, client.best_block()).await {
                            Ok(Ok(block)) => {
                                debug!(height = block.height, "fetched best block");
                                DataResponse::Tip(block)
                            }
                            Ok(Err(e)) => {
                                error!(error = %e, "failed to fetch best block");
                                DataResponse::Error(None, e.to_string())
                            }
                            Err(_) => {
                                error!("best block fetch timed out");
                                DataResponse::Error(None, timeout_message(timeout_duration))
                            }
                        };
                        let _ = tx.send(AppEvent::Data(response));
                    });
                }
            }
        }

        debug!("request channel closed, data worker exiting");
    })
}

fn timeout_message(duration: Duration) -> String {
    format!("block fetch timed out after {}ms", duration.as_millis())
}
