// Analysis pipelines — orchestration of the core stages over two corpora.

pub mod phrases;
pub mod similarity;
