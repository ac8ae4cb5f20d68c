/// Leading indentation that marks a wrapped continuation line in `PACKAGES`
const CONTINUATION_INDENT: &str = "        ";

/// RecordSplitter service for cutting a CRAN index into per-package blocks
///
/// Neither step validates anything; malformed or empty blocks are left for
/// `RecordParser` to report.
pub struct RecordSplitter;

impl RecordSplitter {
    /// Splits the index text on blank lines into one block of lines per package
    ///
    /// A trailing empty block produced by a final separator is discarded.
    pub fn split(index: &str) -> Vec<Vec<String>> {
        let index = index.replace("\r\n", "\n");
        let mut blocks: Vec<Vec<String>> = index
            .split("\n\n")
            .map(|block| block.lines().map(str::to_string).collect())
            .collect();

        if blocks
            .last()
            .is_some_and(|block| block.iter().all(|line| line.trim().is_empty()))
        {
            blocks.pop();
        }

        blocks
    }

    /// Folds continuation lines into the logical line they continue
    ///
    /// Each continuation is left-trimmed and appended to the most recent
    /// logical line with a single separating space. The result ends with
    /// exactly one empty-string sentinel, so normalizing twice is a no-op.
    /// A continuation with no preceding line is kept unchanged.
    pub fn normalize_continuations(lines: Vec<String>) -> Vec<String> {
        let mut logical: Vec<String> = Vec::with_capacity(lines.len() + 1);
        let mut parent: Option<usize> = None;

        for line in lines {
            if line.starts_with(CONTINUATION_INDENT) {
                if let Some(index) = parent {
                    logical[index].push(' ');
                    logical[index].push_str(line.trim_start());
                    continue;
                }
            } else {
                parent = Some(logical.len());
            }
            logical.push(line);
        }

        while logical.last().is_some_and(|line| line.is_empty()) {
            logical.pop();
        }
        logical.push(String::new());

        logical
    }
}
