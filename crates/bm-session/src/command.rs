//! Text commands the host forwards from its console.

use std::fmt;
use std::str::FromStr;

use crate::SessionError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    ResetSession,
    RequestRoute,
    TogglePadDisplay,
    ExportHeatmap(String),
    ClearHeatmap,
    GenerateReport,
    ShowPerformanceReport,
    ExportHistory,
    ImportHistory,
    SaveMatch,
    SaveSettings,
    LoadSettings,
    /// `config` lists settings; `config <key> <value>` changes one.
    Config(Option<(String, String)>),
    Help,
}

/// `(name, description)` for every command, in help order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help",                    "Show this help message"),
    ("reset-session",           "Reset session stats"),
    ("request-route",           "Route over boost pads from the car to the ball"),
    ("toggle-pad-display",      "Toggle boost pad markers"),
    ("export-heatmap <name>",   "Write both heatmaps to heatmaps/<name>.csv"),
    ("clear-heatmap",           "Zero both heatmaps"),
    ("generate-report",         "Summarise the session"),
    ("show-performance-report", "Print per-operation timings"),
    ("save-match",              "Append this session to the match history"),
    ("export-history",          "Write the match history averages to a file"),
    ("import-history",          "Append averages from the export file"),
    ("save-settings",           "Write the current settings to settings.csv"),
    ("load-settings",           "Apply the settings saved in settings.csv"),
    ("config [<key> <value>]",  "Show or change a setting"),
];

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::ResetSession => "reset-session",
            Command::RequestRoute => "request-route",
            Command::TogglePadDisplay => "toggle-pad-display",
            Command::ExportHeatmap(_) => "export-heatmap",
            Command::ClearHeatmap => "clear-heatmap",
            Command::GenerateReport => "generate-report",
            Command::ShowPerformanceReport => "show-performance-report",
            Command::ExportHistory => "export-history",
            Command::ImportHistory => "import-history",
            Command::SaveMatch => "save-match",
            Command::SaveSettings => "save-settings",
            Command::LoadSettings => "load-settings",
            Command::Config(_) => "config",
            Command::Help => "help",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::ExportHeatmap(name) => write!(f, "export-heatmap {name}"),
            Command::Config(Some((k, v))) => write!(f, "config {k} {v}"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Command {
    type Err = SessionError;

    /// Parse one console line.  Surplus arguments are ignored.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(SessionError::UnknownCommand(String::new()));
        };
        let cmd = match head {
            "reset-session" => Command::ResetSession,
            "request-route" => Command::RequestRoute,
            "toggle-pad-display" => Command::TogglePadDisplay,
            "export-heatmap" => match words.next() {
                Some(name) => Command::ExportHeatmap(name.to_owned()),
                None => {
                    return Err(SessionError::MissingArgument {
                        command:  "export-heatmap",
                        argument: "name",
                    });
                }
            },
            "clear-heatmap" => Command::ClearHeatmap,
            "generate-report" => Command::GenerateReport,
            "show-performance-report" => Command::ShowPerformanceReport,
            "export-history" => Command::ExportHistory,
            "import-history" => Command::ImportHistory,
            "save-match" => Command::SaveMatch,
            "save-settings" => Command::SaveSettings,
            "load-settings" => Command::LoadSettings,
            "help" => Command::Help,
            "config" => match (words.next(), words.next()) {
                (None, _) => Command::Config(None),
                (Some(key), Some(value)) => Command::Config(Some((key.to_owned(), value.to_owned()))),
                (Some(_), None) => {
                    return Err(SessionError::MissingArgument { command: "config", argument: "value" });
                }
            },
            other => return Err(SessionError::UnknownCommand(other.to_owned())),
        };
        Ok(cmd)
    }
}
