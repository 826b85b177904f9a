pub mod batch;
pub mod config;
pub mod errors;
mod runner;
pub mod seq;
pub mod window;

use crate::errors::SeqWinError;

pub fn run() -> Result<(), SeqWinError> {
    runner::run()
}
