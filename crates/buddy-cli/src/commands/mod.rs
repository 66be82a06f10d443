pub mod dispatch;
pub mod feed;
pub mod hatch;
pub mod new;
pub mod path;
pub mod release;
pub mod shared;
pub mod status;
