pub mod faiss_info_response;
pub mod faiss_info_route;
