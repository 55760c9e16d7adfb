pub mod create;
pub mod donate;
pub mod withdraw;
pub mod auth;
pub mod utils;

pub use create::*;
pub use donate::*;
pub use withdraw::*;
pub use auth::*;
pub use utils::*;
