pub mod divider;
pub mod iss;
pub mod pipeline;
pub mod syscall;
