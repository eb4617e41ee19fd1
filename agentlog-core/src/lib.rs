pub mod cli;
pub mod conf;
pub mod health;
pub mod logging;
pub mod logs;
