use ast::{BlockTree, IfNode, NodeId};
use evaluator::{Environment, EvalError, Evaluator};
use span_util::Span;

/// One arm of a block: its condition (`None` for `else`), the body text
/// span and the blocks nested directly inside that body.
struct Branch<'a> {
    condition: Option<&'a str>,
    body: Span,
    nested: &'a [NodeId],
}

/// Walks the tree and collects every byte range that has to go: all
/// control lines, plus the whole body of every branch that is not taken.
pub fn collect_drops(
    tree: &BlockTree,
    evaluator: &mut Evaluator,
    env: &Environment,
) -> Result<Vec<Span>, EvalError> {
    let mut drops = Vec::new();
    for id in tree.roots() {
        collect_node(tree, *id, evaluator, env, &mut drops)?;
    }
    Ok(drops)
}

fn collect_node(
    tree: &BlockTree,
    id: NodeId,
    evaluator: &mut Evaluator,
    env: &Environment,
    drops: &mut Vec<Span>,
) -> Result<(), EvalError> {
    let node = tree.node(id);

    // control lines always go
    drops.push(node.span);
    for else_if in &node.else_ifs {
        drops.push(else_if.span);
    }
    if let Some(else_branch) = &node.else_branch {
        drops.push(else_branch.span);
    }
    drops.push(node.end_if.span);

    let branches = branches_of(node);

    // first truthy branch (or the unconditional else) wins; conditions
    // after it are never evaluated
    let mut selected = None;
    for (i, branch) in branches.iter().enumerate() {
        let taken = match branch.condition {
            Some(condition) => evaluator.evaluate(condition, env)?,
            None => true,
        };
        if taken {
            selected = Some(i);
            break;
        }
    }

    for (i, branch) in branches.iter().enumerate() {
        if Some(i) == selected {
            for nested in branch.nested {
                collect_node(tree, *nested, evaluator, env, drops)?;
            }
        } else if branch.body.start < branch.body.end {
            // dropping the whole body swallows anything nested in it
            drops.push(branch.body);
        }
    }

    Ok(())
}

fn branches_of(node: &IfNode) -> Vec<Branch> {
    let mut marks: Vec<(Option<&str>, Span, &[NodeId])> = Vec::new();
    marks.push((Some(node.condition.as_str()), node.span, &node.body));
    for else_if in &node.else_ifs {
        marks.push((
            Some(else_if.condition.as_str()),
            else_if.span,
            &else_if.body,
        ));
    }
    if let Some(else_branch) = &node.else_branch {
        marks.push((None, else_branch.span, &else_branch.body));
    }

    let mut branches = Vec::with_capacity(marks.len());
    for (i, &(condition, span, nested)) in marks.iter().enumerate() {
        // a body runs from the end of its control line to the start of the next
        let next_start = match marks.get(i + 1) {
            Some((_, next, _)) => next.start,
            None => node.end_if.span.start,
        };
        branches.push(Branch {
            condition,
            body: Span::new(span.end, next_start),
            nested,
        });
    }
    branches
}
