//! The fake hacker terminal. Every command is a canned text lookup.

/// Banner typed out when the terminal starts.
pub const BANNER: &str = "HAWIYAT TERMINAL v3.5.2\n> Type 'help' for available commands\n> Warning: All activities are monitored and logged";

/// Milliseconds per banner character.
pub const TYPE_MS: u64 = 30;

/// Cursor blink half-period.
pub const BLINK_MS: u64 = 500;

/// Prompt shown in the title bar.
pub const PROMPT: &str = "hawiyat@estin:~";

const HELP: &str = "Available commands: help, scan, exploit, status, clear, about";

const SCAN: &str = "SCANNING HAWIYAT DEFENSES...\n> Firewall: ACTIVE\n> Intrusion Detection: ACTIVE\n> Honeypots: ACTIVE\n> Vulnerability: NONE DETECTED\n\nScan complete. No entry points found. Nice try.";

const EXPLOIT: &str = "EXPLOIT ATTEMPT FAILED\n> Your pathetic attempt has been logged\n> IP address recorded\n> Counter-measures deployed\n\nDid you really think it would be that easy?";

const STATUS: &str = "HAWIYAT PLATFORM STATUS\n> System: FULLY OPERATIONAL\n> Security Level: MAXIMUM\n> Breach Attempts: 1,337\n> Successful Breaches: 0\n\nYour chances of success: ZERO";

const ABOUT: &str = "The Hawiyat Platform is the most advanced CTF infrastructure ever created. Built from scratch by the Rankiha Team, it makes conventional security measures look like child's play. Good luck breaking in - you'll need it.";

/// Canned reply for a lowercased, trimmed command. `clear` has none.
pub fn response(command: &str) -> Option<&'static str> {
    match command {
        "help" => Some(HELP),
        "scan" => Some(SCAN),
        "exploit" => Some(EXPLOIT),
        "status" => Some(STATUS),
        "about" => Some(ABOUT),
        _ => None,
    }
}

pub fn unrecognized(command: &str) -> String {
    format!("Command not recognized: '{command}'. Type 'help' for available commands.")
}

/// One log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Echo of what was typed, already prefixed with `> `.
    Echo(String),
    Output(String),
}

impl Entry {
    pub fn text(&self) -> &str {
        match self {
            Entry::Echo(text) | Entry::Output(text) => text,
        }
    }
}

/// A display line and whether it belongs to an echo.
pub type TerminalLine<'a> = (&'a str, bool);

#[derive(Debug, Clone)]
pub struct HackerTerminal {
    /// Banner characters typed so far.
    typed: usize,
    /// `clear` also wipes the banner.
    banner_cleared: bool,
    log: Vec<Entry>,
    input: String,
    cursor_visible: bool,
}

impl Default for HackerTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl HackerTerminal {
    pub fn new() -> Self {
        Self {
            typed: 0,
            banner_cleared: false,
            log: Vec::new(),
            input: String::new(),
            cursor_visible: true,
        }
    }

    /// Type one more banner character. Returns false once the banner is
    /// complete.
    pub fn type_banner(&mut self) -> bool {
        let total = BANNER.chars().count();
        if self.typed < total {
            self.typed += 1;
        }
        self.typed < total
    }

    pub fn banner(&self) -> &str {
        if self.banner_cleared {
            return "";
        }
        let end = BANNER
            .char_indices()
            .nth(self.typed)
            .map_or(BANNER.len(), |(i, _)| i);
        &BANNER[..end]
    }

    pub fn blink(&mut self) {
        self.cursor_visible = !self.cursor_visible;
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn log(&self) -> &[Entry] {
        &self.log
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn push_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Run the current input. Blank input is ignored and kept.
    pub fn submit(&mut self) {
        let command = self.input.trim().to_lowercase();
        if command.is_empty() {
            return;
        }
        tracing::debug!(%command, "terminal command");

        self.log.push(Entry::Echo(format!("> {}", self.input)));
        if command == "clear" {
            self.log.clear();
            self.banner_cleared = true;
        } else {
            let output = response(&command).map_or_else(|| unrecognized(&command), str::to_string);
            self.log.push(Entry::Output(output));
        }
        self.input.clear();
    }

    /// Banner and log split into display lines, oldest first.
    pub fn lines(&self) -> Vec<TerminalLine<'_>> {
        let banner = self.banner();
        let banner_lines = (!banner.is_empty())
            .then(|| banner.split('\n').map(|line| (line, false)))
            .into_iter()
            .flatten();
        let log_lines = self.log.iter().flat_map(|entry| {
            let echo = matches!(entry, Entry::Echo(_));
            entry.text().split('\n').map(move |line| (line, echo))
        });
        banner_lines.chain(log_lines).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(terminal: &mut HackerTerminal, input: &str) {
        for ch in input.chars() {
            terminal.push_char(ch);
        }
        terminal.submit();
    }

    #[test]
    fn test_help_appends_help_text() {
        let mut terminal = HackerTerminal::new();
        run(&mut terminal, "help");
        assert_eq!(
            terminal.log(),
            &[Entry::Echo("> help".to_string()), Entry::Output(HELP.to_string())]
        );
        assert!(terminal.input().is_empty());
    }

    #[test]
    fn test_command_is_trimmed_and_lowercased() {
        let mut terminal = HackerTerminal::new();
        run(&mut terminal, "  SCAN ");
        assert_eq!(terminal.log()[0], Entry::Echo(">   SCAN ".to_string()));
        assert_eq!(terminal.log()[1], Entry::Output(SCAN.to_string()));
    }

    #[test]
    fn test_unknown_command_names_it() {
        let mut terminal = HackerTerminal::new();
        run(&mut terminal, "sudo rm");
        let Entry::Output(output) = &terminal.log()[1] else {
            panic!("expected output");
        };
        assert!(output.contains("'sudo rm'"));
        assert_eq!(
            output,
            "Command not recognized: 'sudo rm'. Type 'help' for available commands."
        );
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut terminal = HackerTerminal::new();
        run(&mut terminal, "   ");
        assert!(terminal.log().is_empty());
        assert_eq!(terminal.input(), "   ");
    }

    #[test]
    fn test_clear_empties_log_and_banner() {
        let mut terminal = HackerTerminal::new();
        while terminal.type_banner() {}
        run(&mut terminal, "status");
        run(&mut terminal, "clear");
        assert!(terminal.log().is_empty());
        assert!(terminal.lines().is_empty());
    }

    #[test]
    fn test_banner_types_one_char_at_a_time() {
        let mut terminal = HackerTerminal::new();
        assert_eq!(terminal.banner(), "");
        terminal.type_banner();
        terminal.type_banner();
        assert_eq!(terminal.banner(), "HA");
        let mut steps = 2;
        while terminal.type_banner() {
            steps += 1;
        }
        assert_eq!(terminal.banner(), BANNER);
        assert_eq!(steps + 1, BANNER.chars().count());
    }

    #[test]
    fn test_lines_mark_echoes() {
        let mut terminal = HackerTerminal::new();
        run(&mut terminal, "exploit");
        let lines = terminal.lines();
        assert_eq!(lines[0], ("> exploit", true));
        assert_eq!(lines[1], ("EXPLOIT ATTEMPT FAILED", false));
        assert_eq!(lines.len(), 1 + EXPLOIT.split('\n').count());
    }

    #[test]
    fn test_backspace_and_blink() {
        let mut terminal = HackerTerminal::new();
        terminal.push_char('a');
        terminal.push_char('b');
        terminal.backspace();
        assert_eq!(terminal.input(), "a");
        assert!(terminal.cursor_visible());
        terminal.blink();
        assert!(!terminal.cursor_visible());
    }
}
