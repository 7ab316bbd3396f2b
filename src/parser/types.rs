/// One logical command stitched from one or more physical lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedCommand {
    pub fragments: Vec<String>,
    /// 1-based physical line of the opening fragment.
    pub first_line: usize,
    /// 1-based physical line of the closing fragment.
    pub last_line: usize,
}

impl CapturedCommand {
    pub fn open(fragment: &str, line_no: usize) -> Self {
        Self {
            fragments: vec![fragment.to_string()],
            first_line: line_no,
            last_line: line_no,
        }
    }

    pub fn push(&mut self, fragment: &str, line_no: usize) {
        self.fragments.push(fragment.to_string());
        self.last_line = line_no;
    }

    /// Fragments joined with a single space, markers left in place.
    pub fn joined(&self) -> String {
        self.fragments.join(" ")
    }
}

/// Scanner state. The in-progress command is owned by `Capturing`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Idle,
    Capturing(CapturedCommand),
}

/// Result of scanning one file.
#[derive(Debug, Clone, Default)]
pub struct ScanOutput {
    /// Finalized commands in the order their closing line was seen.
    pub commands: Vec<CapturedCommand>,
    /// Command still open when input ran out.
    pub unterminated: Option<CapturedCommand>,
}
