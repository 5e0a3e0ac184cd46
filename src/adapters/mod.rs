pub mod fs_docs;
pub mod http_probe;
