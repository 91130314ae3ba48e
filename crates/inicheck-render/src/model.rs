#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Info,
    Warn,
    Error,
}

impl RenderableSeverity {
    pub fn label(self) -> &'static str {
        match self {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warn => "WARN",
            RenderableSeverity::Error => "ERROR",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableLocation {
    pub path: String,
    pub line: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableIssue {
    pub severity: RenderableSeverity,
    pub key: String,
    pub message: String,
    pub expected: String,
    pub value: String,
    pub location: Option<RenderableLocation>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub file: String,
    pub file_size: u64,
    pub rules_source: String,
    pub restricted_mode: bool,
    pub settings_scanned: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub issues: Vec<RenderableIssue>,
    pub data: RenderableData,
}

impl RenderableReport {
    /// WARN and ERROR issues; INFO lines are listed but not counted.
    pub fn headline_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity != RenderableSeverity::Info)
            .count()
    }
}
