// Pure command building functions (no I/O)

use crate::config::Opener;
use std::process::Command;

/// Escape characters `cmd.exe` treats as operators.
fn cmd_escape(uri: &str) -> String {
    let mut out = String::with_capacity(uri.len());
    for c in uri.chars() {
        if matches!(c, '&' | '|' | '<' | '>' | '^') {
            out.push('^');
        }
        out.push(c);
    }
    out
}

/// Build the command that hands `uri` to the OS.
///
/// `start` is a `cmd.exe` builtin whose first quoted argument is a window
/// title. An empty argument is quoted as `""` on Windows.
pub fn opener_command(opener: Opener, uri: &str) -> Command {
    match opener {
        Opener::Start => {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(cmd_escape(uri));
            cmd
        }
        Opener::Open | Opener::XdgOpen => {
            let mut cmd = Command::new(opener.program());
            cmd.arg(uri);
            cmd
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(cmd: &Command) -> Vec<String> {
        cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn xdg_open_passes_uri_verbatim() {
        let cmd = opener_command(Opener::XdgOpen, "steam://rungameid/1");
        assert_eq!(cmd.get_program(), "xdg-open");
        assert_eq!(args(&cmd), vec!["steam://rungameid/1"]);
    }

    #[test]
    fn open_on_macos() {
        let cmd = opener_command(Opener::Open, "steam://rungameid/1");
        assert_eq!(cmd.get_program(), "open");
    }

    #[test]
    fn start_escapes_ampersands() {
        let cmd = opener_command(Opener::Start, "com.epicgames.launcher://apps/x?action=launch&silent=true");
        assert_eq!(cmd.get_program(), "cmd");
        assert_eq!(
            args(&cmd),
            vec![
                "/C",
                "start",
                "",
                "com.epicgames.launcher://apps/x?action=launch^&silent=true"
            ]
        );
    }
}
