use span_util::{merge_spans, Span};

use crate::SourceMap;

/// Rewritten source plus the map describing what was cut.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed {
    pub code: String,
    pub map: SourceMap,
}

/// Deletes the drop ranges from the source and builds the source map
/// from the kept complement.
pub fn render(source: &str, drops: Vec<Span>, filename: Option<&str>) -> Transformed {
    let merged = merge_spans(drops);

    let mut kept = Vec::new();
    let mut cursor = 0;
    for drop in &merged {
        if cursor < drop.start {
            kept.push(Span::new(cursor, drop.start));
        }
        cursor = drop.end;
    }
    if cursor < source.len() {
        kept.push(Span::new(cursor, source.len()));
    }

    let mut code = String::new();
    for span in &kept {
        code.push_str(&source[span.to_range()]);
    }

    let file = filename.unwrap_or("source.js");
    let map = SourceMap::new(file, source, &kept);

    Transformed { code, map }
}
