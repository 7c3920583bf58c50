pub mod session;
pub mod storage;

pub use session::{use_session, Session};
