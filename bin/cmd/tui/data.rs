pub use blockview::Block;
pub use blockview::store::BlockRequest;

pub(crate) mod worker;

pub(crate) enum DataResponse {
    Block(Block),
    Tip(Block),
    /// Failed request, with the height it was for when there was one.
    Error(Option<u64>, String),
}
