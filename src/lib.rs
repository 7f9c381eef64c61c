pub mod compose;
pub mod io_struct;
pub mod provider;
pub mod server;
