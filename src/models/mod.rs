pub mod asset;
pub mod department;
pub mod maintenance_log;
pub mod timestamps;
pub mod user;
