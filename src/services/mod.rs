// Core services
pub mod linkage;

pub use linkage::LinkageService;
