use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;

use crate::capacity::Capacity;
use crate::edge::EdgeIndex;
use crate::error::Error;
use crate::flow::Flow;
use crate::graph::FlowGraph;
use crate::id::Id;

/// Nodes reached by a search, each mapped to the edge it was first reached by and the node that
/// edge was traversed from. The start node is reached but has no entry.
type Parents<'g, N> = BTreeMap<&'g N, (EdgeIndex, &'g N)>;

/// Breadth-first search over the residual graph of `flow`, level by level, visiting each node's
/// edges in incidence order. Stops as soon as `target` is reached.
fn search<'g, N: Id, C: Capacity>(
    graph: &'g FlowGraph<N, C>,
    start: &'g N,
    target: Option<&N>,
    flow: &Flow<C>,
) -> Result<(Parents<'g, N>, bool), Error> {
    let mut parents = Parents::new();
    let mut frontier = vec![start];
    let reached = |parents: &Parents<'g, N>, n: &N| n == start || parents.contains_key(n);

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for n in frontier {
            for (idx, e) in graph.incident_edges(n)? {
                let Some(dir) = e.direction_from(n) else {
                    continue;
                };
                let head = e.head(dir);
                if reached(&parents, head) || !flow.has_residual(idx, e, dir) {
                    continue;
                }

                parents.insert(head, (idx, n));
                if Some(head) == target {
                    return Ok((parents, true));
                }
                next.push(head);
            }
        }
        frontier = next;
    }

    Ok((parents, false))
}

/// Finds a shortest path from `start` to `target` in the residual graph of `flow`.
///
/// Every edge on the returned path has spare residual capacity in the direction the path uses it:
/// forward edges are not saturated and backward edges carry flow that can be cancelled. Among
/// equally short paths, the one found first in incidence order wins. Returns `Ok(None)` if the
/// target is unreachable, and an empty path if `start == target`.
pub fn augmenting_path<N: Id, C: Capacity>(
    graph: &FlowGraph<N, C>,
    start: &N,
    target: &N,
    flow: &Flow<C>,
) -> Result<Option<Vec<EdgeIndex>>, Error> {
    let start = graph
        .node_key(start)
        .ok_or_else(|| Error::node_not_found(start))?;
    if !graph.contains_node(target) {
        return Err(Error::node_not_found(target));
    }
    if start == target {
        return Ok(Some(Vec::new()));
    }

    let (parents, found) = search(graph, start, Some(target), flow)?;
    if !found {
        return Ok(None);
    }

    let mut path = Vec::new();
    let mut node = target;
    while let Some(&(idx, prev)) = parents.get(node) {
        path.push(idx);
        node = prev;
    }
    path.reverse();

    Ok(Some(path))
}

/// All nodes reachable from `start` in the residual graph of `flow`, `start` included.
pub fn reachable<'g, N: Id, C: Capacity>(
    graph: &'g FlowGraph<N, C>,
    start: &N,
    flow: &Flow<C>,
) -> Result<Vec<&'g N>, Error> {
    let start = graph
        .node_key(start)
        .ok_or_else(|| Error::node_not_found(start))?;

    let (parents, _) = search(graph, start, None, flow)?;
    let mut nodes: Vec<_> = parents.into_keys().collect();
    nodes.push(start);
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> FlowGraph<i32, i32> {
        FlowGraph::from_edges(vec![(1, 2, 4), (1, 3, 2), (2, 4, 1), (2, 3, 3), (3, 4, 6)]).unwrap()
    }

    #[test]
    fn finds_shortest_path_in_incidence_order() {
        let g = diamond();
        let flow = Flow::zero(&g);
        let path = augmenting_path(&g, &1, &4, &flow).unwrap().unwrap();
        assert_eq!(path, vec![EdgeIndex(0), EdgeIndex(2)]);
    }

    #[test]
    fn skips_saturated_edges() {
        let g = diamond();
        let mut flow = Flow::zero(&g);
        flow.set(EdgeIndex(0), 1);
        flow.set(EdgeIndex(2), 1);
        let path = augmenting_path(&g, &1, &4, &flow).unwrap().unwrap();
        assert_eq!(path, vec![EdgeIndex(1), EdgeIndex(4)]);
    }

    #[test]
    fn uses_backward_edges_with_flow() {
        let g = FlowGraph::from_edges(vec![
            (0, 1, 1u32),
            (0, 2, 1),
            (1, 2, 1),
            (1, 3, 1),
            (2, 3, 1),
        ])
        .unwrap();
        let mut flow = Flow::zero(&g);
        // one unit along 0 -> 1 -> 2 -> 3
        flow.set(EdgeIndex(0), 1);
        flow.set(EdgeIndex(2), 1);
        flow.set(EdgeIndex(4), 1);

        // 0 -> 2, then 2 -> 1 against the flow on 1 -> 2, then 1 -> 3
        let path = augmenting_path(&g, &0, &3, &flow).unwrap().unwrap();
        assert_eq!(path, vec![EdgeIndex(1), EdgeIndex(2), EdgeIndex(3)]);

        flow.set(EdgeIndex(1), 1);
        flow.set(EdgeIndex(2), 0);
        flow.set(EdgeIndex(3), 1);
        assert_eq!(augmenting_path(&g, &0, &3, &flow).unwrap(), None);
    }

    #[test]
    fn self_loops_are_never_followed() {
        let g = FlowGraph::from_edges(vec![(1, 1, 5u32), (1, 2, 5), (2, 2, 5)]).unwrap();
        let flow = Flow::zero(&g);
        let path = augmenting_path(&g, &1, &2, &flow).unwrap().unwrap();
        assert_eq!(path, vec![EdgeIndex(1)]);
    }

    #[test]
    fn start_equals_target() {
        let g = diamond();
        let flow = Flow::zero(&g);
        assert_eq!(augmenting_path(&g, &2, &2, &flow), Ok(Some(vec![])));
    }

    #[test]
    fn unknown_nodes_are_errors() {
        let g = diamond();
        let flow = Flow::zero(&g);
        assert!(matches!(
            augmenting_path(&g, &0, &4, &flow),
            Err(Error::NodeNotFound(_))
        ));
        assert!(matches!(
            augmenting_path(&g, &1, &5, &flow),
            Err(Error::NodeNotFound(_))
        ));
    }

    #[test]
    fn reachable_set() {
        let g = diamond();
        let mut flow = Flow::zero(&g);
        let mut nodes = reachable(&g, &1, &flow).unwrap();
        nodes.sort();
        assert_eq!(nodes, vec![&1, &2, &3, &4]);

        // saturate the cut {1} | {2, 3, 4}
        flow.set(EdgeIndex(0), 4);
        flow.set(EdgeIndex(1), 2);
        assert_eq!(reachable(&g, &1, &flow).unwrap(), vec![&1]);
    }
}
