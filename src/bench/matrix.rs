use rand::{Rng, SeedableRng, rngs::StdRng};
use tqdm::tqdm;
use tracing::{info, warn};

use crate::{
    bench::{AlgorithmResult, BenchConfig, TraversalRecord, measure},
    error::BenchError,
    generators::GraphKind,
    graph::{UndirectedGraph, VertexId},
    search::{Path, SearchAlgorithm},
    statistics::Stats,
};

/// One cell of the sweep: which generator, how many vertices, which degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    pub kind: GraphKind,
    pub vertex_count: usize,
    pub degree: usize,
}

/// Records of a sweep plus each algorithm's counters summed over all cases.
#[derive(Debug, Clone)]
pub struct SweepOutcome {
    pub records: Vec<TraversalRecord>,
    /// Totals for dfs, dls and bfs, in that order.
    pub totals: [Stats; 3],
}

/// The cartesian product `generators × vertex_counts × degrees`, minus the
/// cells a generator cannot build.
#[derive(Debug, Clone)]
pub struct TestMatrix {
    config: BenchConfig,
    cases: Vec<TestCase>,
}

impl TestMatrix {
    pub fn new(config: BenchConfig) -> Self {
        let mut cases = Vec::new();
        for &kind in &config.generators {
            for &vertex_count in &config.vertex_counts {
                for &degree in &config.degrees {
                    if degree == 0 || degree >= vertex_count {
                        warn!(%kind, vertex_count, degree, "skipping case: degree must lie in [1, vertex_count)");
                        continue;
                    }
                    cases.push(TestCase {
                        kind,
                        vertex_count,
                        degree,
                    });
                }
            }
        }
        TestMatrix { config, cases }
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Runs every case in order and collects one record per case.
    pub fn run(&self) -> Result<SweepOutcome, BenchError> {
        info!(
            cases = self.cases.len(),
            dls_limit = self.config.dls_limit,
            seed = self.config.seed,
            "starting sweep"
        );

        let mut outcome = SweepOutcome {
            records: Vec::with_capacity(self.cases.len()),
            totals: [Stats::new(); 3],
        };
        let mut collect = |index: usize, case: &TestCase| -> Result<(), BenchError> {
            let (record, stats) = self.run_case_with_stats(index, case)?;
            outcome.records.push(record);
            for (total, case_stats) in outcome.totals.iter_mut().zip(&stats) {
                *total = total.merge(case_stats);
            }
            Ok(())
        };

        if self.config.show_progress {
            for (index, case) in tqdm(self.cases.iter().enumerate()) {
                collect(index, case)?;
            }
        } else {
            for (index, case) in self.cases.iter().enumerate() {
                collect(index, case)?;
            }
        }
        Ok(outcome)
    }

    /// Builds the graph of `case` and runs DFS, DLS and BFS on it with the same
    /// endpoints. Each case gets its own RNG derived from the sweep seed, so a
    /// case reproduces regardless of which other cases run.
    pub fn run_case(&self, index: usize, case: &TestCase) -> Result<TraversalRecord, BenchError> {
        self.run_case_with_stats(index, case).map(|(record, _)| record)
    }

    fn run_case_with_stats(
        &self,
        index: usize,
        case: &TestCase,
    ) -> Result<(TraversalRecord, [Stats; 3]), BenchError> {
        let mut rng = StdRng::seed_from_u64(self.config.seed.wrapping_add(index as u64));
        let graph = case.kind.generate(case.vertex_count, case.degree, &mut rng)?;
        let (start, goal) = self.pick_endpoints(&graph, &mut rng);

        let [(dfs, dfs_stats), (dls, dls_stats), (bfs, bfs_stats)] =
            SearchAlgorithm::suite(self.config.dls_limit)
                .map(|algorithm| run_timed(algorithm, &graph, start, goal));

        let record = TraversalRecord {
            generator: case.kind,
            vertex_count: case.vertex_count,
            edges_per_vertex: case.degree,
            edge_count: graph.edge_count(),
            start,
            goal,
            dls_limit: self.config.dls_limit,
            dfs,
            dls,
            bfs,
        };
        info!(
            generator = %case.kind,
            vertex_count = case.vertex_count,
            degree = case.degree,
            start,
            goal,
            "case done"
        );
        Ok((record, [dfs_stats, dls_stats, bfs_stats]))
    }

    /// Configured endpoints win; otherwise two distinct vertices are drawn.
    fn pick_endpoints<R: Rng>(&self, graph: &UndirectedGraph, rng: &mut R) -> (VertexId, VertexId) {
        let n = graph.vertex_count();
        let start = self.config.start.unwrap_or_else(|| rng.random_range(0..n));
        let goal = self.config.goal.unwrap_or_else(|| {
            let mut goal = rng.random_range(0..n - 1);
            if goal >= start {
                goal += 1;
            }
            goal
        });
        (start, goal)
    }
}

fn run_timed(
    algorithm: SearchAlgorithm,
    graph: &UndirectedGraph,
    start: VertexId,
    goal: VertexId,
) -> (AlgorithmResult, Stats) {
    let mut stats = Stats::new();
    let (path, elapsed): (Path, _) = measure(|| algorithm.run(graph, start, goal, &mut stats));
    let duration_ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
    info!(
        %algorithm,
        duration_ns,
        path = %path,
        expanded = stats.get_expanded(),
        peak_frontier = stats.get_peak_frontier(),
        peak_retained = stats.get_peak_retained(),
        "traversal finished"
    );
    (AlgorithmResult::new(&path, duration_ns, &stats), stats)
}
