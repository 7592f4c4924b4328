// src/command/operation.rs

//! Operation tokens understood by ControlMyMonitor.

use std::fmt;
use std::str::FromStr;

/// One logical ControlMyMonitor operation.
///
/// [`Operation::token`] is the single table mapping operations to the
/// command-line switch the external tool expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SetValue,
    SetValueIfNeeded,
    ChangeValue,
    SwitchValue,
    GetValue,
    TurnOff,
    TurnOn,
    SwitchOffOn,
    SaveConfig,
    LoadConfig,
    ExportText,
    ExportTab,
    ExportComma,
    ExportHtml,
    ExportVerboseHtml,
    ExportXml,
    ExportJson,
    ExportMonitors,
}

impl Operation {
    pub const ALL: [Operation; 18] = [
        Operation::SetValue,
        Operation::SetValueIfNeeded,
        Operation::ChangeValue,
        Operation::SwitchValue,
        Operation::GetValue,
        Operation::TurnOff,
        Operation::TurnOn,
        Operation::SwitchOffOn,
        Operation::SaveConfig,
        Operation::LoadConfig,
        Operation::ExportText,
        Operation::ExportTab,
        Operation::ExportComma,
        Operation::ExportHtml,
        Operation::ExportVerboseHtml,
        Operation::ExportXml,
        Operation::ExportJson,
        Operation::ExportMonitors,
    ];

    pub const fn token(self) -> &'static str {
        match self {
            Operation::SetValue => "/SetValue",
            Operation::SetValueIfNeeded => "/SetValueIfNeeded",
            Operation::ChangeValue => "/ChangeValue",
            Operation::SwitchValue => "/SwitchValue",
            Operation::GetValue => "/GetValue",
            Operation::TurnOff => "/TurnOff",
            Operation::TurnOn => "/TurnOn",
            Operation::SwitchOffOn => "/SwitchOffOn",
            Operation::SaveConfig => "/SaveConfig",
            Operation::LoadConfig => "/LoadConfig",
            Operation::ExportText => "/stext",
            Operation::ExportTab => "/stab",
            Operation::ExportComma => "/scomma",
            Operation::ExportHtml => "/shtml",
            Operation::ExportVerboseHtml => "/sverhtml",
            Operation::ExportXml => "/sxml",
            Operation::ExportJson => "/sjson",
            Operation::ExportMonitors => "/smonitors",
        }
    }

    /// Export operations take a filename as their first argument and
    /// support content-return mode.
    pub const fn is_export(self) -> bool {
        matches!(
            self,
            Operation::ExportText
                | Operation::ExportTab
                | Operation::ExportComma
                | Operation::ExportHtml
                | Operation::ExportVerboseHtml
                | Operation::ExportXml
                | Operation::ExportJson
                | Operation::ExportMonitors
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Per-monitor export formats (everything except the monitor list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Text,
    Tab,
    Comma,
    Html,
    VerboseHtml,
    Xml,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 7] = [
        ExportFormat::Text,
        ExportFormat::Tab,
        ExportFormat::Comma,
        ExportFormat::Html,
        ExportFormat::VerboseHtml,
        ExportFormat::Xml,
        ExportFormat::Json,
    ];

    pub const fn operation(self) -> Operation {
        match self {
            ExportFormat::Text => Operation::ExportText,
            ExportFormat::Tab => Operation::ExportTab,
            ExportFormat::Comma => Operation::ExportComma,
            ExportFormat::Html => Operation::ExportHtml,
            ExportFormat::VerboseHtml => Operation::ExportVerboseHtml,
            ExportFormat::Xml => Operation::ExportXml,
            ExportFormat::Json => Operation::ExportJson,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ExportFormat::Text),
            "tab" => Ok(ExportFormat::Tab),
            "comma" => Ok(ExportFormat::Comma),
            "html" => Ok(ExportFormat::Html),
            "verbose-html" => Ok(ExportFormat::VerboseHtml),
            "xml" => Ok(ExportFormat::Xml),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!(
                "invalid export format: {other} (expected one of text, tab, comma, html, verbose-html, xml, json)"
            )),
        }
    }
}
