pub mod app;
pub mod args;
pub mod discovery {
    pub mod aggregate;
    pub mod enumerate;
    pub mod manifest;
    pub mod resolve;
}
pub mod errors;
pub mod output;
pub mod utils {
    pub mod log_utils;
}

pub use app::run_app;
pub use args::Args;
