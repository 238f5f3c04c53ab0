pub mod db;
pub mod images;

pub use db::DbAdapter;
pub use images::FsImageStore;
