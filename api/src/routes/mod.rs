pub mod faiss_info;
pub mod history;
pub mod query;
pub mod stats;
