pub mod support;

mod init;
mod logging;
mod misc;
mod run;
mod run_http;
