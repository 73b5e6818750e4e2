use crate::chunker::char_len;

/// Opens a framed part, followed by ` i/N]`
pub const START_MARKER: &str = "[START PART";

/// Closes a framed part, followed by ` i/N]`
pub const END_MARKER: &str = "[END PART";

/// Appended after the end marker of the final content part
pub const COMPLETION_SUFFIX: &str = "\nALL PARTS SENT";

pub const TOTAL_PARTS_PLACEHOLDER: &str = "{totalParts}";

/// Sent ahead of the content when it spans more than one part
pub const INSTRUCTION_TEMPLATE: &str = "\
The content I want to share is too long for a single message, so I will send it in {totalParts} parts. This message is part 1.

Each following part is wrapped like this:
[START PART 2/{totalParts}]
content of part 2
[END PART 2/{totalParts}]

After each part, reply only with \"Received part X/{totalParts}\" and wait for the next one. \
Do not act on the content until I send \"ALL PARTS SENT\", then answer using all parts together.";

/// Wrap content with its positional markers
pub fn frame(index: usize, total: usize, content: &str) -> String {
    format!("{START_MARKER} {index}/{total}]\n{content}\n{END_MARKER} {index}/{total}]")
}

/// Characters the markers (and, for the last part, the suffix) add around a chunk
pub fn framing_overhead(index: usize, total: usize, last: bool) -> usize {
    let markers = char_len(&frame(index, total, ""));
    if last {
        markers + char_len(COMPLETION_SUFFIX)
    } else {
        markers
    }
}

/// Worst case over all positions: the last part, whose numbers are widest
pub fn max_overhead(total: usize) -> usize {
    framing_overhead(total, total, true)
}

pub fn instruction_text(total: usize) -> String {
    INSTRUCTION_TEMPLATE.replace(TOTAL_PARTS_PLACEHOLDER, &total.to_string())
}
