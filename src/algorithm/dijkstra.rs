use std::fmt::{self, Debug, Display};
use std::str::FromStr;
use num_traits::Float;
use log::{debug, trace};

use crate::graph::{Graph, VertexId};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{
    AdaptablePriorityQueue, AdaptableQueue, SimplePriorityQueue, UnsortedPriorityQueue,
};
use crate::{Error, Result};

/// Priority queue used to order the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueBackend {
    /// Binary heap with identity index; decrease-key via `update_priority`
    AdaptableHeap,
    /// Unsorted list with identity index; linear-scan `pop`
    UnsortedList,
    /// Insert-only binary heap; decrease-key via duplicate insertion
    SimpleHeap,
}

impl QueueBackend {
    pub const ALL: [QueueBackend; 3] = [
        QueueBackend::AdaptableHeap,
        QueueBackend::UnsortedList,
        QueueBackend::SimpleHeap,
    ];

    /// Short name, as accepted by `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            QueueBackend::AdaptableHeap => "heap",
            QueueBackend::UnsortedList => "unsorted",
            QueueBackend::SimpleHeap => "simple",
        }
    }
}

impl Display for QueueBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QueueBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        QueueBackend::ALL
            .into_iter()
            .find(|backend| backend.name() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown queue backend: {}", s)))
    }
}

/// Dijkstra's algorithm over a configurable priority queue
///
/// All three backends return the same distances and paths for the same
/// inputs; they differ only in cost. With early stop enabled, a run given a
/// destination terminates as soon as that destination is popped.
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra {
    backend: QueueBackend,
    early_stop: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra instance using `backend`, with early stop enabled
    pub fn new(backend: QueueBackend) -> Self {
        Dijkstra {
            backend,
            early_stop: true,
        }
    }

    /// Dijkstra over [`AdaptablePriorityQueue`]
    pub fn adaptable() -> Self {
        Self::new(QueueBackend::AdaptableHeap)
    }

    /// Dijkstra over [`UnsortedPriorityQueue`]
    pub fn unsorted() -> Self {
        Self::new(QueueBackend::UnsortedList)
    }

    /// Dijkstra over [`SimplePriorityQueue`]
    pub fn simple() -> Self {
        Self::new(QueueBackend::SimpleHeap)
    }

    /// Enable or disable termination once the destination is finalized
    pub fn with_early_stop(mut self, enabled: bool) -> Self {
        self.early_stop = enabled;
        self
    }

    pub fn backend(&self) -> QueueBackend {
        self.backend
    }

    pub fn early_stop(&self) -> bool {
        self.early_stop
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::adaptable()
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        match self.backend {
            QueueBackend::AdaptableHeap => "Dijkstra (adaptable heap)",
            QueueBackend::UnsortedList => "Dijkstra (unsorted list)",
            QueueBackend::SimpleHeap => "Dijkstra (simple heap)",
        }
    }

    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: VertexId,
        destination: Option<VertexId>,
    ) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source.index()));
        }
        if let Some(destination) = destination {
            if !graph.has_vertex(destination) {
                return Err(Error::InvalidVertex(destination.index()));
            }
        }

        let stop_at = destination.filter(|_| self.early_stop);
        debug!(
            "dijkstra: backend={}, vertices={}, source={}, stop_at={:?}",
            self.backend,
            graph.vertex_count(),
            source,
            stop_at
        );

        match self.backend {
            QueueBackend::AdaptableHeap => {
                run_adaptable::<W, G, AdaptablePriorityQueue<VertexId, W>>(graph, source, stop_at)
            }
            QueueBackend::UnsortedList => {
                run_adaptable::<W, G, UnsortedPriorityQueue<VertexId, W>>(graph, source, stop_at)
            }
            QueueBackend::SimpleHeap => run_simple(graph, source, stop_at),
        }
    }
}

/// Distance and predecessor tables with the source at distance zero
fn initial_state<W, G>(graph: &G, source: VertexId) -> (Vec<W>, Vec<Option<VertexId>>)
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    let mut distances = vec![W::infinity(); n];
    distances[source.index()] = W::zero();
    (distances, vec![None; n])
}

/// Dijkstra driven by an adaptable queue: improvements call `update_priority`
fn run_adaptable<W, G, Q>(
    graph: &G,
    source: VertexId,
    stop_at: Option<VertexId>,
) -> Result<ShortestPathResult<W>>
where
    W: Float + Debug + Copy + Ord,
    G: Graph<W>,
    Q: AdaptableQueue<VertexId, W>,
{
    let (mut distances, mut predecessors) = initial_state::<W, G>(graph, source);

    let mut queue = Q::default();
    for vertex in graph.vertex_ids() {
        queue.add(vertex, distances[vertex.index()]);
    }

    let mut finalized = 0usize;
    while !queue.is_empty() {
        let (u, dist_u) = queue.pop()?;
        finalized += 1;

        if Some(u) == stop_at {
            break;
        }
        // Everything still queued is unreachable
        if dist_u.is_infinite() {
            break;
        }

        for (v, weight) in graph.incident_edges(u) {
            if !queue.contains(&v) {
                continue;
            }
            let candidate = dist_u + weight;
            if candidate < distances[v.index()] {
                trace!("relax {} -> {}: {:?}", u, v, candidate);
                distances[v.index()] = candidate;
                predecessors[v.index()] = Some(u);
                queue.update_priority(&v, candidate)?;
            }
        }
    }

    debug!("dijkstra: finalized {} vertices", finalized);
    Ok(ShortestPathResult {
        distances,
        predecessors,
        source,
    })
}

/// Dijkstra driven by the insert-only queue: improvements push a duplicate entry
fn run_simple<W, G>(graph: &G, source: VertexId, stop_at: Option<VertexId>) -> Result<ShortestPathResult<W>>
where
    W: Float + Debug + Copy + Ord,
    G: Graph<W>,
{
    let (mut distances, mut predecessors) = initial_state::<W, G>(graph, source);
    let mut finalized = vec![false; graph.vertex_count()];

    let mut queue = SimplePriorityQueue::with_capacity(graph.vertex_count());
    for vertex in graph.vertex_ids() {
        queue.add(vertex, distances[vertex.index()]);
    }

    let mut stale = 0usize;
    while !queue.is_empty() {
        let (u, dist_u) = queue.pop()?;
        if finalized[u.index()] {
            stale += 1;
            continue;
        }
        finalized[u.index()] = true;

        if Some(u) == stop_at {
            break;
        }
        if dist_u.is_infinite() {
            break;
        }

        for (v, weight) in graph.incident_edges(u) {
            if finalized[v.index()] {
                continue;
            }
            let candidate = dist_u + weight;
            if candidate < distances[v.index()] {
                trace!("relax {} -> {}: {:?}", u, v, candidate);
                distances[v.index()] = candidate;
                predecessors[v.index()] = Some(u);
                queue.add(v, candidate);
            }
        }
    }

    debug!(
        "dijkstra: finalized {} vertices, skipped {} stale entries",
        finalized.iter().filter(|&&done| done).count(),
        stale
    );
    Ok(ShortestPathResult {
        distances,
        predecessors,
        source,
    })
}
