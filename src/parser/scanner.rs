use super::commands::{continues, starts_command};
use super::types::{CapturedCommand, ScanOutput, ScanState};

/// Stitches continued `ffmpeg` invocations out of a stream of lines.
#[derive(Debug, Default)]
pub struct LineScanner {
    state: ScanState,
    commands: Vec<CapturedCommand>,
    line_no: usize,
}

impl LineScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self.state, ScanState::Capturing(_))
    }

    /// Feed the next physical line.
    pub fn feed(&mut self, line: &str) {
        self.line_no += 1;
        let trimmed = line.trim();

        self.state = match std::mem::take(&mut self.state) {
            ScanState::Capturing(mut cmd) => {
                cmd.push(trimmed, self.line_no);
                self.close_or_keep(cmd, trimmed)
            }
            ScanState::Idle if starts_command(trimmed) => {
                let cmd = CapturedCommand::open(trimmed, self.line_no);
                self.close_or_keep(cmd, trimmed)
            }
            ScanState::Idle => ScanState::Idle,
        };
    }

    fn close_or_keep(&mut self, cmd: CapturedCommand, trimmed: &str) -> ScanState {
        if continues(trimmed) {
            ScanState::Capturing(cmd)
        } else {
            self.commands.push(cmd);
            ScanState::Idle
        }
    }

    /// End of input. An open command is handed back as `unterminated`.
    pub fn finish(self) -> ScanOutput {
        let unterminated = match self.state {
            ScanState::Capturing(cmd) => Some(cmd),
            ScanState::Idle => None,
        };
        ScanOutput {
            commands: self.commands,
            unterminated,
        }
    }
}

/// Full scanning pipeline
pub fn scan_lines<'a, I>(lines: I) -> ScanOutput
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scanner = LineScanner::new();
    for line in lines {
        scanner.feed(line);
    }
    scanner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(out: &ScanOutput) -> Vec<Vec<String>> {
        out.commands.iter().map(|c| c.fragments.clone()).collect()
    }

    #[test]
    fn test_continuation_joins_lines() {
        let out = scan_lines(["#!/bin/bash", "ffmpeg -i in.mp4 \\", "  -c:v libx264 out.mp4"]);
        assert_eq!(
            fragments(&out),
            vec![vec!["ffmpeg -i in.mp4 \\", "-c:v libx264 out.mp4"]]
        );
        assert_eq!(out.commands[0].first_line, 2);
        assert_eq!(out.commands[0].last_line, 3);
        assert!(out.unterminated.is_none());
    }

    #[test]
    fn test_unrelated_lines_ignored() {
        let out = scan_lines(["echo hi", "# ffmpeg -i x", "  ", "ls \\", "ffmpeg-free"]);
        // "ffmpeg-free" still matches the literal prefix.
        assert_eq!(fragments(&out), vec![vec!["ffmpeg-free"]]);
    }

    #[test]
    fn test_separate_commands_keep_order() {
        let out = scan_lines(["ffmpeg -i a.mp4 a.mkv", "echo done", "ffmpeg -i b.mp4 b.mkv"]);
        assert_eq!(
            fragments(&out),
            vec![vec!["ffmpeg -i a.mp4 a.mkv"], vec!["ffmpeg -i b.mp4 b.mkv"]]
        );
    }

    #[test]
    fn test_marker_line_inside_capture_is_appended() {
        let out = scan_lines(["ffmpeg -i a.mp4 \\", "ffmpeg -i b.mp4", "ffmpeg -i c.mp4"]);
        assert_eq!(
            fragments(&out),
            vec![
                vec!["ffmpeg -i a.mp4 \\", "ffmpeg -i b.mp4"],
                vec!["ffmpeg -i c.mp4"],
            ]
        );
    }

    #[test]
    fn test_unterminated_is_reported_not_finalized() {
        let out = scan_lines(["ffmpeg -y -i a.wav a.mp3", "ffmpeg -i in.mp4 \\"]);
        assert_eq!(fragments(&out), vec![vec!["ffmpeg -y -i a.wav a.mp3"]]);
        let open = out.unterminated.expect("open command");
        assert_eq!(open.fragments, vec!["ffmpeg -i in.mp4 \\"]);
        assert_eq!(open.first_line, 2);
    }

    #[test]
    fn test_is_capturing_tracks_state() {
        let mut scanner = LineScanner::new();
        assert!(!scanner.is_capturing());
        scanner.feed("ffmpeg -i a \\");
        assert!(scanner.is_capturing());
        scanner.feed("  -an \\");
        assert!(scanner.is_capturing());
        scanner.feed("out.mp4");
        assert!(!scanner.is_capturing());
        assert_eq!(scanner.finish().commands.len(), 1);
    }

    #[test]
    fn test_crlf_lines_are_trimmed() {
        let out = scan_lines("ffmpeg -i a \\\r\n b.mp4\r\n".lines());
        assert_eq!(fragments(&out), vec![vec!["ffmpeg -i a \\", "b.mp4"]]);
    }
}
