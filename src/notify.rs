//! Desktop notifications for finished sessions

use std::process::Command;

use anyhow::{bail, Context, Result};

pub trait Notifier {
    fn notify(&self, title: &str, body: &str) -> Result<()>;
}

/// Shells out to the platform notifier (`notify-send` or `osascript`).
pub struct DesktopNotifier;

impl DesktopNotifier {
    fn command(title: &str, body: &str) -> Result<Command> {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("osascript");
            cmd.arg("-e").arg(format!(
                "display notification {} with title {}",
                applescript_string(body),
                applescript_string(title)
            ));
            Ok(cmd)
        } else if cfg!(unix) {
            let mut cmd = Command::new("notify-send");
            cmd.arg(title).arg(body);
            Ok(cmd)
        } else {
            bail!("desktop notifications are not supported on this platform")
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<()> {
        let mut cmd = Self::command(title, body)?;
        let program = cmd.get_program().to_string_lossy().into_owned();

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run {}", program))?;
        if !status.success() {
            bail!("{} exited with {}", program, status);
        }
        Ok(())
    }
}

/// Used with `--no-notify`.
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _title: &str, _body: &str) -> Result<()> {
        Ok(())
    }
}

pub fn completion_message(name: &str) -> String {
    format!("{} session completed!", name)
}

fn applescript_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_message() {
        assert_eq!(completion_message("deep-work"), "deep-work session completed!");
    }

    #[test]
    fn test_applescript_quoting() {
        assert_eq!(applescript_string(r#"say "hi""#), r#""say \"hi\"""#);
    }

    #[test]
    fn test_noop_notifier_succeeds() {
        assert!(NoopNotifier.notify("pomo", "done").is_ok());
    }
}
