//! Runs a lesson and copies its console records to stdout.
//!
//! The core never touches stdout itself; a different host could just as well send the
//! records to a log, a test harness or a serial port.

use std::io::{stdout, Write};
use std::process::exit;

use log::{debug, error};

use crate::console::Console;
use crate::lesson::run_lesson;

/// Large enough for every lesson's output with room to spare.
pub const OUTBOX_CAPACITY: usize = 4096;

pub fn run_to<W: Write>(name: &str, out: &mut W) -> Result<(), &'static str> {
    let mut buffer = [0; OUTBOX_CAPACITY];
    let mut console = Console::new(&mut buffer);
    run_lesson(name, &mut console)?;

    let mut records = 0;
    for (_tag, text) in console.messages() {
        out.write_all(text).map_err(|_| "unable to write to stdout")?;
        records += 1;
    }
    out.flush().map_err(|_| "unable to flush stdout")?;

    debug!("lesson {} wrote {} records", name, records);
    Ok(())
}

/// Entry point shared by the lesson binaries.
pub fn main_for(name: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let out = stdout();
    let mut out = out.lock();
    if let Err(message) = run_to(name, &mut out) {
        error!("lesson {} failed: {}", name, message);
        exit(1);
    }
}
