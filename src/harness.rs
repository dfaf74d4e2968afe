use crate::prelude::*;

/// One A* run in a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub method: String,
    pub cost: Option<Cost>,
    pub nodes_visited: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub runs: Vec<Run>,
}

/// Runs A* from `initial` once per labelled heuristic.
pub fn compare<P>(
    problem: &P,
    initial: &P::State,
    heuristics: &[(&str, &dyn Heuristic<P::State>)],
    limits: SearchLimits,
) -> Result<Comparison, ProblemError>
where
    P: Problem,
{
    let runs = heuristics
        .iter()
        .map(|(method, heuristic)| -> Result<Run, ProblemError> {
            let report = a_star(problem, initial.clone(), *heuristic, limits)?;
            Ok(Run {
                method: method.to_string(),
                cost: report.solution.map(|s| s.cost),
                nodes_visited: report.nodes_visited,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Comparison { runs })
}

impl core::fmt::Display for Comparison {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let rule = "-".repeat(50);
        writeln!(f, "{}", rule)?;
        writeln!(f, "{:^12}{:^18}{:^20}", "Method", "Cost", "Nodes visited")?;
        writeln!(f, "{}", rule)?;
        for run in &self.runs {
            let cost = match run.cost {
                Some(cost) => cost.to_string(),
                None => "-".to_string(),
            };
            writeln!(f, "{:^12}{:^18}{:^20}", run.method, cost, run.nodes_visited)?;
        }
        writeln!(f, "{}", rule)
    }
}
