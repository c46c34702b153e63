pub mod document;
pub mod error;
pub mod json_file;
pub mod memory;
pub mod traits;


pub use error::{Result, StoreError};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::board_store::BoardStore;
pub use traits::ledger_store::LedgerStore;
pub use traits::task_store::TaskStore;
pub use traits::user_store::UserStore;
