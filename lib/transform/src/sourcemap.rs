use serde::Serialize;
use span_util::Span;

const VLQ_CHARS: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Source Map revision 3 object. Mappings are hires: one segment per
/// output character, so downstream consumers never have to interpolate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceMap {
    pub version: u8,
    pub file: String,
    pub sources: Vec<String>,
    #[serde(rename = "sourcesContent")]
    pub sources_content: Vec<String>,
    pub names: Vec<String>,
    pub mappings: String,
}

impl SourceMap {
    pub fn new(file: &str, original: &str, kept: &[Span]) -> SourceMap {
        SourceMap {
            version: 3,
            file: file.to_string(),
            sources: vec![file.to_string()],
            sources_content: vec![original.to_string()],
            names: vec![],
            mappings: build_mappings(original, kept),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Walks the original once, emitting one `[out_col, source, src_line,
/// src_col]` delta segment per kept character, `;` per kept newline.
/// Columns count characters, not bytes.
fn build_mappings(original: &str, kept: &[Span]) -> String {
    let mut mappings = String::new();

    let mut span_idx = 0;
    let mut out_col: i64 = 0;
    let mut prev_out_col: i64 = 0;
    let mut src_line: i64 = 0;
    let mut src_col: i64 = 0;
    let mut prev_src_line: i64 = 0;
    let mut prev_src_col: i64 = 0;
    let mut line_has_segment = false;

    for (i, ch) in original.char_indices() {
        while span_idx < kept.len() && kept[span_idx].end <= i {
            span_idx += 1;
        }
        let in_kept = span_idx < kept.len() && kept[span_idx].start <= i;

        if !in_kept {
            if ch == '\n' {
                src_line += 1;
                src_col = 0;
            } else {
                src_col += 1;
            }
            continue;
        }

        if ch == '\n' {
            // output column deltas restart per output line, the source
            // position deltas run through the whole mappings string
            mappings.push(';');
            out_col = 0;
            prev_out_col = 0;
            line_has_segment = false;
            src_line += 1;
            src_col = 0;
            continue;
        }

        if line_has_segment {
            mappings.push(',');
        }
        encode_vlq(out_col - prev_out_col, &mut mappings);
        encode_vlq(0, &mut mappings);
        encode_vlq(src_line - prev_src_line, &mut mappings);
        encode_vlq(src_col - prev_src_col, &mut mappings);

        prev_out_col = out_col;
        prev_src_line = src_line;
        prev_src_col = src_col;
        line_has_segment = true;

        out_col += 1;
        src_col += 1;
    }

    mappings
}

/// Base64 VLQ: sign bit in the lowest position, then 5-bit groups, the
/// sixth bit flagging continuation.
fn encode_vlq(value: i64, out: &mut String) {
    let mut vlq = if value < 0 {
        (((-value) as u64) << 1) | 1
    } else {
        (value as u64) << 1
    };

    loop {
        let mut digit = (vlq & 0x1f) as usize;
        vlq >>= 5;
        if vlq > 0 {
            digit |= 0x20;
        }
        out.push(VLQ_CHARS[digit] as char);
        if vlq == 0 {
            break;
        }
    }
}
