pub mod block_json;
