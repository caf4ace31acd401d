pub mod header;

pub use header::header::Header;
