use log::warn;

use crate::algorithm::PredecessorMap;
use crate::graph::VertexId;
use crate::{Error, Result};

/// Walks predecessor links from `target` back to `source` and returns the path
/// in source-to-target order.
///
/// Only meaningful when `target` was reached. Fails with
/// [`Error::BrokenPredecessorChain`] if the walk hits a vertex without a
/// predecessor, or has not reached `source` after visiting every vertex.
pub fn reconstruct<V: VertexId>(
    predecessors: &PredecessorMap<V>,
    source: V,
    target: V,
) -> Result<Vec<V>, V> {
    for vertex in [source, target] {
        if !predecessors.contains_key(&vertex) {
            return Err(Error::UnknownVertex(vertex));
        }
    }

    let broken = || {
        warn!("Predecessor chain from {:?} does not reach {:?}", target, source);
        Error::BrokenPredecessorChain { start: source, target }
    };

    // Build path in reverse order
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        if path.len() >= predecessors.len() {
            return Err(broken());
        }

        current = match predecessors.get(&current).copied().flatten() {
            Some(pred) => pred,
            None => return Err(broken()),
        };
        path.push(current);
    }

    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_reconstruct_chain() {
        let predecessors: PredecessorMap<u32> =
            HashMap::from([(0, None), (1, Some(0)), (2, Some(1)), (3, Some(2))]);

        assert_eq!(reconstruct(&predecessors, 0, 3), Ok(vec![0, 1, 2, 3]));
        assert_eq!(reconstruct(&predecessors, 0, 0), Ok(vec![0]));
    }

    #[test]
    fn test_reconstruct_unknown_vertex() {
        let predecessors: PredecessorMap<u32> = HashMap::from([(0, None)]);
        assert_eq!(reconstruct(&predecessors, 0, 5), Err(Error::UnknownVertex(5)));
    }

    #[test]
    fn test_reconstruct_missing_link() {
        let predecessors: PredecessorMap<u32> = HashMap::from([(0, None), (1, None)]);
        assert_eq!(
            reconstruct(&predecessors, 0, 1),
            Err(Error::BrokenPredecessorChain { start: 0, target: 1 })
        );
    }

    #[test]
    fn test_reconstruct_corrupted_cycle_terminates() {
        let predecessors: PredecessorMap<u32> =
            HashMap::from([(0, None), (1, Some(2)), (2, Some(1))]);
        assert_eq!(
            reconstruct(&predecessors, 0, 1),
            Err(Error::BrokenPredecessorChain { start: 0, target: 1 })
        );
    }
}
