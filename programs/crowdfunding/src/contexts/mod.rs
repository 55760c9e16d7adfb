pub mod create;
pub mod donate;
pub mod withdraw;

pub use create::*;
pub use donate::*;
pub use withdraw::*;
