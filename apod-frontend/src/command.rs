/// Commands accepted by the shell prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Open (or reuse) the panel and refresh it; an optional `YYYY-MM-DD`
    /// pins the date instead of drawing a random one
    Open(Option<String>),
    Close,
    Show,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ShellCommand {
    /// Parse one input line
    ///
    /// # Examples
    /// ```
    /// use apod_frontend::command::ShellCommand;
    ///
    /// let cmd = ShellCommand::parse("open 2015-03-02");
    /// assert_eq!(cmd, ShellCommand::Open(Some("2015-03-02".to_string())));
    /// ```
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let (name, arguments) = match trimmed.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (trimmed, ""),
        };

        match name.to_lowercase().as_str() {
            "" => ShellCommand::Empty,
            "open" | "apod:open" | "refresh" => {
                if arguments.is_empty() {
                    ShellCommand::Open(None)
                } else {
                    ShellCommand::Open(Some(arguments.to_string()))
                }
            }
            "close" => ShellCommand::Close,
            "show" => ShellCommand::Show,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            _ => ShellCommand::Unknown(trimmed.to_string()),
        }
    }
}

pub const HELP: &str = "\
Commands:
  open [YYYY-MM-DD]  open the Astronomy Picture panel and fetch a random (or given) day
  show               print the panel contents
  close              close the panel
  quit               exit";
