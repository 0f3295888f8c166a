/// Checklist marker type: `[`, exactly one character, `]`, then the rest of
/// the line. The marker character may be anything, including a newline.
pub struct Task;

impl Task {
    pub const OPEN: u8 = b'[';

    pub const PATTERN: &'static str = r"(?s)\A\[.\]([^\n]+)";
}
