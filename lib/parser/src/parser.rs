use ast::{
    BlockTree, DirectiveKind, DirectiveLine, ElseIfNode, ElseNode, EndIfNode, IfNode, NodeId,
};
use span_util::Span;

use crate::ParseError;

/// Which arm of an open block is currently being filled.
#[derive(Debug, PartialEq)]
enum Arm {
    If,
    ElseIf,
    Else,
}

/// One open block on the nesting stack.
#[derive(Debug)]
struct Frame {
    node: NodeId,
    arm: Arm,
}

/// Arena slot for a block whose `#endif` has not been seen yet.
#[derive(Debug)]
struct Draft {
    condition: String,
    span: Span,
    body: Vec<NodeId>,
    else_ifs: Vec<ElseIfNode>,
    else_branch: Option<ElseNode>,
    end_if: Option<EndIfNode>,
}

/// Builds the block tree from the scanned directive lines.
///
/// The walk keeps an explicit stack of open frames; each frame remembers
/// which arm is open so nested blocks land in the right body and misplaced
/// arms are caught where they appear.
#[derive(Debug)]
pub struct Parser {
    drafts: Vec<Draft>,
    stack: Vec<Frame>,
}

impl Parser {
    pub fn new() -> Parser {
        Parser {
            drafts: Vec::new(),
            stack: Vec::new(),
        }
    }

    pub fn parse(mut self, lines: Vec<DirectiveLine>) -> Result<BlockTree, ParseError> {
        if let Some(line) = lines.iter().find(|l| l.kind == DirectiveKind::Elif) {
            return Err(ParseError::ElifRetired(line.span));
        }
        if lines.len() == 1 {
            return Err(ParseError::LoneDirective(lines[0].kind, lines[0].span));
        }
        if let Some(first) = lines.first() {
            if first.kind != DirectiveKind::If {
                return Err(ParseError::MustStartWithIf(first.kind, first.span));
            }
        }

        for line in lines {
            match line.kind {
                DirectiveKind::If => self.open_if(line),
                DirectiveKind::ElseIf => self.attach_else_if(line)?,
                DirectiveKind::Else => self.attach_else(line)?,
                DirectiveKind::EndIf => self.close_block(line)?,
                // rejected before the walk
                DirectiveKind::Elif => return Err(ParseError::ElifRetired(line.span)),
            }
        }

        if let Some(frame) = self.stack.last() {
            return Err(ParseError::UnclosedIf(self.drafts[frame.node.0].span));
        }

        self.finish()
    }

    fn open_if(&mut self, line: DirectiveLine) {
        let id = NodeId(self.drafts.len());
        self.drafts.push(Draft {
            condition: line.condition,
            span: line.span,
            body: Vec::new(),
            else_ifs: Vec::new(),
            else_branch: None,
            end_if: None,
        });

        if let Some(frame) = self.stack.last() {
            let owner = &mut self.drafts[frame.node.0];
            match frame.arm {
                Arm::If => owner.body.push(id),
                Arm::ElseIf => {
                    if let Some(else_if) = owner.else_ifs.last_mut() {
                        else_if.body.push(id);
                    }
                }
                Arm::Else => {
                    if let Some(else_branch) = owner.else_branch.as_mut() {
                        else_branch.body.push(id);
                    }
                }
            }
        }

        self.stack.push(Frame {
            node: id,
            arm: Arm::If,
        });
    }

    fn attach_else_if(&mut self, line: DirectiveLine) -> Result<(), ParseError> {
        let frame = match self.stack.last_mut() {
            Some(frame) => frame,
            None => return Err(ParseError::UnexpectedElseIf(line.span)),
        };
        if frame.arm == Arm::Else {
            return Err(ParseError::ElseIfAfterElse(line.span));
        }

        let belong = frame.node;
        frame.arm = Arm::ElseIf;
        self.drafts[belong.0].else_ifs.push(ElseIfNode {
            condition: line.condition,
            span: line.span,
            body: Vec::new(),
            belong,
        });
        Ok(())
    }

    fn attach_else(&mut self, line: DirectiveLine) -> Result<(), ParseError> {
        let frame = match self.stack.last_mut() {
            Some(frame) => frame,
            None => return Err(ParseError::UnexpectedElse(line.span)),
        };
        if frame.arm == Arm::Else {
            return Err(ParseError::ElseAfterElse(line.span));
        }

        let belong = frame.node;
        frame.arm = Arm::Else;
        self.drafts[belong.0].else_branch = Some(ElseNode {
            span: line.span,
            body: Vec::new(),
            belong,
        });
        Ok(())
    }

    fn close_block(&mut self, line: DirectiveLine) -> Result<(), ParseError> {
        let frame = match self.stack.pop() {
            Some(frame) => frame,
            None => return Err(ParseError::UnexpectedEndIf(line.span)),
        };
        self.drafts[frame.node.0].end_if = Some(EndIfNode {
            span: line.span,
            belong: frame.node,
        });
        Ok(())
    }

    fn finish(self) -> Result<BlockTree, ParseError> {
        let mut nodes = Vec::with_capacity(self.drafts.len());
        for draft in self.drafts {
            let end_if = match draft.end_if {
                Some(end_if) => end_if,
                None => return Err(ParseError::UnclosedIf(draft.span)),
            };
            nodes.push(IfNode {
                condition: draft.condition,
                span: draft.span,
                body: draft.body,
                else_ifs: draft.else_ifs,
                else_branch: draft.else_branch,
                end_if,
            });
        }
        let roots = find_roots(&nodes);
        Ok(BlockTree::new(nodes, roots))
    }
}

/// A root is a node never referenced from any body, in arena order.
fn find_roots(nodes: &[IfNode]) -> Vec<NodeId> {
    let mut nested = vec![false; nodes.len()];
    for node in nodes {
        for id in &node.body {
            nested[id.0] = true;
        }
        for else_if in &node.else_ifs {
            for id in &else_if.body {
                nested[id.0] = true;
            }
        }
        if let Some(else_branch) = &node.else_branch {
            for id in &else_branch.body {
                nested[id.0] = true;
            }
        }
    }

    nested
        .iter()
        .enumerate()
        .filter(|(_, nested)| !**nested)
        .map(|(i, _)| NodeId(i))
        .collect()
}

#[cfg(test)]
mod test {
    use crate::ParseError;
    use ast::{BlockTree, NodeId};
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> BlockTree {
        match crate::parse(source) {
            Ok(tree) => tree,
            Err(err) => panic!("parse failed: {}", err),
        }
    }

    fn parse_err(source: &str) -> String {
        match crate::parse(source) {
            Ok(_) => panic!("expected a parse error"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn builds_a_single_block() {
        let tree = parse(
            "// #if VAL > 10\na = 1;\n// #elseif VAL > 5\na = 2;\n// #else\na = 3;\n// #endif\n",
        );

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.roots(), &[NodeId(0)]);

        let node = tree.node(NodeId(0));
        assert_eq!(node.condition, " VAL > 10");
        assert!(node.body.is_empty());
        assert_eq!(node.else_ifs.len(), 1);
        assert_eq!(node.else_ifs[0].condition.trim(), "VAL > 5");
        assert_eq!(node.else_ifs[0].belong, NodeId(0));
        assert_eq!(node.else_branch.as_ref().unwrap().belong, NodeId(0));
        assert_eq!(node.end_if.belong, NodeId(0));
    }

    #[test]
    fn builds_sibling_roots() {
        let tree = parse("// #if A\na();\n// #endif\n// #if B\nb();\n// #endif\n");

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.roots(), &[NodeId(0), NodeId(1)]);
        assert!(tree.node(NodeId(0)).end_if.span.end <= tree.node(NodeId(1)).span.start);
    }

    #[test]
    fn builds_nested_blocks() {
        let tree = parse("// #if A\n// #if B\nb();\n// #endif\n// #endif\n");

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.roots(), &[NodeId(0)]);

        let outer = tree.node(NodeId(0));
        let inner = tree.node(NodeId(1));
        assert_eq!(outer.body, vec![NodeId(1)]);
        assert!(outer.span.end <= inner.span.start);
        assert!(inner.end_if.span.end <= outer.end_if.span.start);
    }

    #[test]
    fn nests_into_the_open_arm() {
        let tree = parse(
            "// #if A\n// #if X\nx();\n// #endif\n// #elseif B\n// #if Y\ny();\n// #endif\n// #else\n// #if Z\nz();\n// #endif\n// #endif\n",
        );

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.roots(), &[NodeId(0)]);

        let root = tree.node(NodeId(0));
        assert_eq!(root.body, vec![NodeId(1)]);
        assert_eq!(root.else_ifs[0].body, vec![NodeId(2)]);
        assert_eq!(root.else_branch.as_ref().unwrap().body, vec![NodeId(3)]);

        assert_eq!(tree.node(NodeId(2)).condition.trim(), "Y");
        assert_eq!(tree.node(NodeId(3)).condition.trim(), "Z");
    }

    #[test]
    fn chains_multiple_elseifs_in_order() {
        let tree = parse(
            "// #if A\na();\n// #elseif B\nb();\n// #elseif C\nc();\n// #elseif D\nd();\n// #endif\n",
        );

        let node = tree.node(NodeId(0));
        let conditions: Vec<&str> = node.else_ifs.iter().map(|e| e.condition.trim()).collect();
        assert_eq!(conditions, vec!["B", "C", "D"]);
        for else_if in &node.else_ifs {
            assert_eq!(else_if.belong, NodeId(0));
        }
    }

    #[test]
    fn keeps_control_lines_ordered() {
        let tree = parse("// #if A\na();\n// #elseif B\nb();\n// #else\nc();\n// #endif\n");

        let node = tree.node(NodeId(0));
        let else_if = &node.else_ifs[0];
        let else_branch = node.else_branch.as_ref().unwrap();

        assert!(node.span.start < node.span.end);
        assert!(node.span.end <= else_if.span.start);
        assert!(else_if.span.end <= else_branch.span.start);
        assert!(else_branch.span.end <= node.end_if.span.start);
    }

    #[test]
    fn tracks_deep_sibling_and_nested_mix() {
        let tree = parse(
            "// #if A\n// #if B\n// #elseif C\n// #endif\n// #elseif D\n// #endif\n// #if E\n// #endif\n",
        );

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.roots(), &[NodeId(0), NodeId(2)]);

        let first = tree.node(NodeId(0));
        assert_eq!(first.body, vec![NodeId(1)]);
        assert_eq!(first.else_ifs[0].condition.trim(), "D");

        let inner = tree.node(NodeId(1));
        assert_eq!(inner.else_ifs[0].condition.trim(), "C");
        assert_eq!(inner.else_ifs[0].belong, NodeId(1));
    }

    #[test]
    fn empty_source_builds_an_empty_tree() {
        assert!(parse("").is_empty());
        assert!(parse("plain\ntext\n").is_empty());
    }

    #[test]
    fn rejects_a_lone_directive() {
        assert_eq!(
            parse_err("// #if DEBUG\n"),
            "Only one if statement found (#if), which is invalid. Ignoring it."
        );
        assert_eq!(
            parse_err("x\n// #endif\n"),
            "Only one if statement found (#endif), which is invalid. Ignoring it."
        );
    }

    #[test]
    fn rejects_blocks_not_starting_with_if() {
        assert_eq!(
            parse_err("// #elseif A\nx\n// #endif\n"),
            "Must start with #if, got #elseif."
        );
        assert_eq!(
            parse_err("// #else\nx\n// #endif\n"),
            "Must start with #if, got #else."
        );
        assert_eq!(
            parse_err("// #endif\n// #endif\n"),
            "Must start with #if, got #endif."
        );
    }

    #[test]
    fn rejects_an_orphan_elseif() {
        assert_eq!(
            parse_err("// #if A\nx\n// #endif\n// #elseif B\ny\n// #endif\n"),
            "Unexpected #elseif statement found."
        );
    }

    #[test]
    fn rejects_elseif_after_else() {
        assert_eq!(
            parse_err("// #if A\nx\n// #else\ny\n// #elseif B\nz\n// #endif\n"),
            "Unexpected #elseif statement found after #else."
        );
    }

    #[test]
    fn rejects_an_orphan_else() {
        assert_eq!(
            parse_err("// #if A\nx\n// #endif\n// #else\ny\n// #endif\n"),
            "Unexpected #else statement found."
        );
    }

    #[test]
    fn rejects_else_after_else() {
        assert_eq!(
            parse_err("// #if A\nx\n// #else\ny\n// #else\nz\n// #endif\n"),
            "Unexpected #else statement found after #else."
        );
    }

    #[test]
    fn rejects_an_orphan_endif() {
        assert_eq!(
            parse_err("// #if A\nx\n// #endif\n// #endif\n"),
            "Unexpected #endif statement found."
        );
    }

    #[test]
    fn rejects_an_unclosed_if() {
        assert_eq!(
            parse_err("// #if A\n// #if B\nx\n// #endif\n"),
            "Unclosed #if statement found."
        );
        assert_eq!(
            parse_err("// #if A\nx\n// #else\ny\n"),
            "Unclosed #if statement found."
        );
    }

    #[test]
    fn unclosed_error_points_at_the_innermost_open_if() {
        let err = match crate::parse("// #if OUTER\n// #if INNER\nx\n") {
            Err(err) => err,
            Ok(_) => panic!("expected a parse error"),
        };
        match err {
            ParseError::UnclosedIf(span) => assert_eq!(span.start, 13),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn rejects_the_retired_elif_spelling() {
        assert_eq!(
            parse_err("// #if true\nkeep();\n// #elif false\ndrop();\n// #endif\n"),
            "#elif is no longer supported"
        );
        assert_eq!(parse_err("// #elif X\n"), "#elif is no longer supported");
    }
}
