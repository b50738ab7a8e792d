use crate::domain::graph::{ComponentAssignment, Graph};
use crate::domain::traits::SccDecomposer;

pub struct TarjanSccDecomposer;

impl SccDecomposer for TarjanSccDecomposer {
    fn decompose(&self, graph: &Graph) -> ComponentAssignment {
        tarjan_scc(graph)
    }
}

const UNSET: usize = usize::MAX;

/// A suspended visit: the vertex and where to resume in its neighbor list.
struct Frame {
    node: usize,
    next_child: usize,
}

struct DiscoveryState {
    discovery: Vec<usize>,
    low_link: Vec<usize>,
    on_open: Vec<bool>,
    component_of: Vec<usize>,
    open: Vec<usize>,
    time: usize,
    component_count: usize,
}

impl DiscoveryState {
    fn new(n: usize) -> Self {
        Self {
            discovery: vec![UNSET; n],
            low_link: vec![UNSET; n],
            on_open: vec![false; n],
            component_of: vec![UNSET; n],
            open: Vec::new(),
            time: 0,
            component_count: 0,
        }
    }

    fn discover(&mut self, v: usize) {
        self.discovery[v] = self.time;
        self.low_link[v] = self.time;
        self.time += 1;
        self.open.push(v);
        self.on_open[v] = true;
    }

    fn tighten(&mut self, v: usize, low: usize) {
        if low < self.low_link[v] {
            self.low_link[v] = low;
        }
    }

    fn close_component(&mut self, root: usize) {
        while let Some(x) = self.open.pop() {
            self.on_open[x] = false;
            self.component_of[x] = self.component_count;
            if x == root {
                break;
            }
        }
        self.component_count += 1;
    }
}

fn tarjan_scc(graph: &Graph) -> ComponentAssignment {
    let n = graph.node_count();
    let mut state = DiscoveryState::new(n);

    for start in 0..n {
        if state.discovery[start] != UNSET {
            continue;
        }
        visit_from(start, &graph.edges, &mut state);
    }

    ComponentAssignment::new(state.component_of, state.component_count)
}

fn visit_from(start: usize, edges: &[Vec<usize>], state: &mut DiscoveryState) {
    let mut frames = vec![Frame {
        node: start,
        next_child: 0,
    }];
    state.discover(start);

    while let Some(frame) = frames.last_mut() {
        let v = frame.node;

        let mut child = None;
        while frame.next_child < edges[v].len() {
            let w = edges[v][frame.next_child];
            frame.next_child += 1;

            if state.discovery[w] == UNSET {
                child = Some(w);
                break;
            } else if state.on_open[w] {
                let low = state.low_link[w];
                state.tighten(v, low);
            }
        }

        if let Some(w) = child {
            state.discover(w);
            frames.push(Frame {
                node: w,
                next_child: 0,
            });
            continue;
        }

        if state.low_link[v] == state.discovery[v] {
            state.close_component(v);
        }

        frames.pop();
        if let Some(parent) = frames.last() {
            let low = state.low_link[v];
            state.tighten(parent.node, low);
        }
    }
}
