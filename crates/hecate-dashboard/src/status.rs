/*
[INPUT]:  Boolean status flags owned by the caller
[OUTPUT]: Status tooltip level and labelled lines
[POS]:    View model for the status tooltip
[UPDATE]: When status flags or their wording change
*/

/// Flags supplied by the owner of the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusFlags {
    pub api_reachable: bool,
    pub submitting: bool,
    pub has_error: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Healthy,
    Busy,
    Degraded,
    Offline,
}

impl StatusLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StatusLevel::Healthy => "All systems operational",
            StatusLevel::Busy => "Working…",
            StatusLevel::Degraded => "Attention needed",
            StatusLevel::Offline => "Backend unreachable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub label: &'static str,
    pub value: &'static str,
    pub ok: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTooltip {
    pub level: StatusLevel,
    pub lines: Vec<StatusLine>,
}

impl StatusTooltip {
    pub fn from_flags(flags: StatusFlags) -> Self {
        let level = if !flags.api_reachable {
            StatusLevel::Offline
        } else if flags.has_error {
            StatusLevel::Degraded
        } else if flags.submitting {
            StatusLevel::Busy
        } else {
            StatusLevel::Healthy
        };

        let lines = vec![
            StatusLine {
                label: "Task API",
                value: if flags.api_reachable { "reachable" } else { "unreachable" },
                ok: flags.api_reachable,
            },
            StatusLine {
                label: "Submission",
                value: if flags.submitting { "in progress" } else { "idle" },
                ok: true,
            },
            StatusLine {
                label: "Errors",
                value: if flags.has_error { "see status line" } else { "none" },
                ok: !flags.has_error,
            },
        ];

        Self { level, lines }
    }
}
