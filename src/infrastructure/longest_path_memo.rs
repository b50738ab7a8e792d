use crate::domain::graph::{CondensationGraph, Graph};
use crate::domain::traits::LongestPathSolver;

/// Memoized longest path, evaluated in post-order with an explicit stack so
/// chain depth is bounded by heap rather than call stack.
pub struct MemoLongestPathSolver;

impl LongestPathSolver for MemoLongestPathSolver {
    fn longest_paths(&self, graph: &CondensationGraph) -> Vec<usize> {
        memo_longest_paths(graph.graph())
    }
}

const UNSET: usize = usize::MAX;

// Requires `graph` to be acyclic; a cycle makes the stack grow without bound.
fn memo_longest_paths(graph: &Graph) -> Vec<usize> {
    let n = graph.node_count();
    let mut memo = vec![UNSET; n];
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for start in 0..n {
        if memo[start] != UNSET {
            continue;
        }
        stack.push((start, 0));

        while let Some(top) = stack.last_mut() {
            let v = top.0;
            let outs = graph.neighbors(v);

            let mut pending = None;
            while top.1 < outs.len() {
                let w = outs[top.1];
                if memo[w] == UNSET {
                    pending = Some(w);
                    break;
                }
                top.1 += 1;
            }

            if let Some(w) = pending {
                stack.push((w, 0));
                continue;
            }

            memo[v] = outs.iter().map(|&w| memo[w] + 1).max().unwrap_or(0);
            stack.pop();
        }
    }

    memo
}
