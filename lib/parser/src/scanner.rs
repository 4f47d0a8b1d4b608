use ast::{DirectiveKind, DirectiveLine};

/// Find every directive comment line in the source.
///
/// A directive line is, from the start of the physical line: optional
/// whitespace, `//`, optional whitespace, `#`, one of the keywords, then a
/// non word character or the end of the line. Anything else is plain text
/// and is skipped. The scanner is strictly line oriented and knows nothing
/// about the host language, so a directive shaped line inside a multi line
/// string literal is still picked up.
pub fn scan(source: &str) -> Vec<DirectiveLine> {
    let mut lines = Vec::new();
    let mut offset = 0;

    for line in source.split('\n') {
        // the span swallows the trailing newline, clamped on the last line
        let end = (offset + line.len() + 1).min(source.len());
        if let Some((kind, condition)) = match_directive(line) {
            lines.push(DirectiveLine::new(kind, condition, (offset..end).into()));
        }
        offset += line.len() + 1;
    }
    lines
}

fn match_directive(line: &str) -> Option<(DirectiveKind, &str)> {
    let rest = line.trim_start();
    let rest = rest.strip_prefix("//")?;
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('#')?;

    // keywords are ascii, so the char count is also the byte length
    let keyword_len = rest.chars().take_while(|c| c.is_ascii_alphabetic()).count();
    let kind = match &rest[..keyword_len] {
        "if" => DirectiveKind::If,
        "elseif" => DirectiveKind::ElseIf,
        "else" => DirectiveKind::Else,
        "endif" => DirectiveKind::EndIf,
        "elif" => DirectiveKind::Elif,
        _ => return None,
    };

    // whole keywords only: `#iffy` and `#else_` are plain text
    let after = &rest[keyword_len..];
    if let Some(c) = after.chars().next() {
        if is_word_char(c) {
            return None;
        }
    }

    let condition = match kind {
        DirectiveKind::If | DirectiveKind::ElseIf => after,
        _ => "",
    };
    Some((kind, condition))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod test {
    use super::scan;
    use ast::DirectiveKind;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<DirectiveKind> {
        scan(source).into_iter().map(|l| l.kind).collect()
    }

    #[test]
    fn scans_every_directive_kind() {
        let source = "// #if A\nx\n// #elseif B\ny\n// #else\nz\n// #endif\n";
        assert_eq!(
            kinds(source),
            vec![
                DirectiveKind::If,
                DirectiveKind::ElseIf,
                DirectiveKind::Else,
                DirectiveKind::EndIf
            ]
        );
    }

    #[test]
    fn captures_raw_untrimmed_condition() {
        let lines = scan("// #if  VAL > 10\n// #endif\n");
        assert_eq!(lines[0].condition, "  VAL > 10");
        assert_eq!(lines[0].condition.trim(), "VAL > 10");
    }

    #[test]
    fn condition_is_empty_for_else_and_endif() {
        let lines = scan("// #if A\n// #else ignored text\n// #endif trailing\n");
        assert_eq!(lines[1].condition, "");
        assert_eq!(lines[2].condition, "");
    }

    #[test]
    fn allows_whitespace_variants() {
        let source = "  // #if A\n//#elseif B\n//   #else\n\t// #endif\n";
        assert_eq!(
            kinds(source),
            vec![
                DirectiveKind::If,
                DirectiveKind::ElseIf,
                DirectiveKind::Else,
                DirectiveKind::EndIf
            ]
        );
    }

    #[test]
    fn requires_whole_keywords() {
        assert_eq!(kinds("// #iffy\n"), vec![]);
        assert_eq!(kinds("// #ifelse\n"), vec![]);
        assert_eq!(kinds("// #else_\n"), vec![]);
        assert_eq!(kinds("// #endif2\n"), vec![]);
        assert_eq!(kinds("// #if2\n"), vec![]);
    }

    #[test]
    fn keyword_needs_to_hug_the_hash() {
        assert_eq!(kinds("// # if A\n"), vec![]);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(kinds("// #IF A\n"), vec![]);
        assert_eq!(kinds("// #If A\n"), vec![]);
    }

    #[test]
    fn skips_plain_and_directive_like_text() {
        let source = "let s = \"// #if A\";\n/* // #endif */ x\nconst t = 1; // #if B\n";
        assert_eq!(kinds(source), vec![]);
    }

    #[test]
    fn scans_directive_shaped_lines_even_inside_strings() {
        // line oriented on purpose: the scanner has no lexical awareness
        let source = "const s = `\n// #if A\n`;\n";
        assert_eq!(kinds(source), vec![DirectiveKind::If]);
    }

    #[test]
    fn recognizes_the_retired_elif_spelling() {
        assert_eq!(kinds("// #elif A\n"), vec![DirectiveKind::Elif]);
    }

    #[test]
    fn spans_cover_whole_lines_including_newline() {
        //          0123456789...
        let source = "a\n// #if X\nbody\n// #endif\nrest\n";
        let lines = scan(source);
        assert_eq!(lines[0].span.to_range(), 2..11);
        assert_eq!(&source[lines[0].span.to_range()], "// #if X\n");
        assert_eq!(lines[1].span.to_range(), 16..26);
        assert_eq!(&source[lines[1].span.to_range()], "// #endif\n");
    }

    #[test]
    fn span_is_clamped_when_the_last_line_has_no_newline() {
        let source = "x\n// #endif";
        let lines = scan(source);
        assert_eq!(lines[0].span.to_range(), 2..source.len());
    }

    #[test]
    fn keeps_carriage_returns_in_the_condition() {
        let lines = scan("// #if A\r\n// #endif\r\n");
        assert_eq!(lines[0].kind, DirectiveKind::If);
        assert_eq!(lines[0].condition, " A\r");
        assert_eq!(lines[1].kind, DirectiveKind::EndIf);
    }

    #[test]
    fn finds_nothing_in_directive_free_source() {
        assert_eq!(scan(""), vec![]);
        assert_eq!(scan("plain\ntext\n"), vec![]);
    }
}
