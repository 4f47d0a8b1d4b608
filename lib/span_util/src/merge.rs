use crate::Span;

/// Sort spans by start (ties by end) and fold every overlapping or
/// touching pair into one range.
pub fn merge_spans(mut spans: Vec<Span>) -> Vec<Span> {
    spans.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));

    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => {
                if span.end > last.end {
                    last.end = span.end;
                }
            }
            _ => merged.push(span),
        }
    }
    merged
}

#[cfg(test)]
mod test {
    use super::merge_spans;
    use crate::Span;

    fn span(start: usize, end: usize) -> Span {
        Span { start, end }
    }

    #[test]
    fn keeps_disjoint_spans() {
        assert_eq!(
            merge_spans(vec![span(0, 2), span(5, 8)]),
            vec![span(0, 2), span(5, 8)]
        );
    }

    #[test]
    fn merges_overlapping_spans() {
        assert_eq!(
            merge_spans(vec![span(0, 4), span(2, 8)]),
            vec![span(0, 8)]
        );
    }

    #[test]
    fn merges_touching_spans() {
        assert_eq!(
            merge_spans(vec![span(0, 3), span(3, 5)]),
            vec![span(0, 5)]
        );
    }

    #[test]
    fn merges_contained_spans() {
        assert_eq!(
            merge_spans(vec![span(0, 10), span(2, 4), span(4, 9)]),
            vec![span(0, 10)]
        );
    }

    #[test]
    fn sorts_before_merging() {
        assert_eq!(
            merge_spans(vec![span(6, 9), span(0, 2), span(2, 5)]),
            vec![span(0, 5), span(6, 9)]
        );
    }

    #[test]
    fn merge_of_nothing() {
        assert_eq!(merge_spans(vec![]), vec![]);
    }
}
