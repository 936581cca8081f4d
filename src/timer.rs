//! Countdown loop for a running session
//!
//! Redraws one status line per elapsed second:
//!
//! ```text
//!  /	Time Elapsed: 1 Min/s,  5 Sec/s     Percentage Done: 55%
//! ```

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

pub const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Paces the countdown, called once per iteration.
pub trait Pacer {
    fn wait(&mut self);
}

/// Sleeps one real second per tick.
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn wait(&mut self) {
        thread::sleep(Duration::from_secs(1));
    }
}

/// `" 5 Sec/s"` below a minute, `"1 Min/s,  5 Sec/s"` above.
pub fn format_elapsed(elapsed_secs: u64) -> String {
    let minutes = elapsed_secs / 60;
    if minutes == 0 {
        return format_seconds(elapsed_secs);
    }
    format!("{} Min/s, {}", minutes, format_seconds(elapsed_secs % 60))
}

fn format_seconds(secs: u64) -> String {
    if secs < 10 {
        format!(" {} Sec/s", secs)
    } else {
        format!("{} Sec/s", secs)
    }
}

/// Share of the session done once second `elapsed_secs` has ticked.
pub fn percent_done(elapsed_secs: u64, total_secs: u64) -> f64 {
    if total_secs == 0 {
        return 100.0;
    }
    (elapsed_secs + 1) as f64 * 100.0 / total_secs as f64
}

pub fn status_line(elapsed_secs: u64, total_secs: u64) -> String {
    let glyph = SPINNER[(elapsed_secs % SPINNER.len() as u64) as usize];
    format!(
        "\r {}\tTime Elapsed: {}     Percentage Done: {:.0}% ",
        glyph,
        format_elapsed(elapsed_secs),
        percent_done(elapsed_secs, total_secs)
    )
}

/// Block for `minutes`, drawing the status line to `out` once per tick.
pub fn run_countdown<W, P>(minutes: u32, out: &mut W, pacer: &mut P) -> io::Result<()>
where
    W: Write,
    P: Pacer,
{
    let total_secs = u64::from(minutes) * 60;
    if total_secs == 0 {
        return Ok(());
    }

    for elapsed in 0..total_secs {
        out.write_all(status_line(elapsed, total_secs).as_bytes())?;
        out.flush()?;
        pacer.wait();
    }
    out.write_all(b"\n\n")?;
    out.flush()
}
