//! Program entrypoint and message reporting.

use std::env;

use anyhow::Error;
use column_rewrite::driver;
use column_rewrite::types::Failure;

/// Every path exits with status 0, failures included; the message and the stream it goes to
/// are the only signal.
fn main() {
	env_logger::init();
	match driver::parse_args(env::args_os()).and_then(|args| driver::run(&args)) {
		Ok(outcome) => {
			if let Some(message) = outcome.message() {
				println!("{}", message);
			}
		}
		Err(err) => report(&err),
	}
}

fn report(err: &Error) {
	match err.downcast_ref::<Failure>() {
		Some(failure) => {
			log::debug!("{:#}", err);
			eprintln!("{}", failure);
		}
		None => eprintln!("{:#}", err),
	}
}
