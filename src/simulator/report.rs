//! Simulation report generation.

use serde::Serialize;
use std::collections::BTreeMap;

/// What one simulated character achieved.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStats {
    pub final_level: u32,
    pub deaths: u32,
    pub dungeons_completed: u32,
    pub deepest_dungeon: u32,
    pub fights_won: u32,
    pub final_gold: u64,
    pub actions_taken: u32,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub avg_final_level: f64,
    pub avg_deaths: f64,
    pub avg_dungeons_completed: f64,
    pub avg_fights_won: f64,
    pub avg_final_gold: f64,
    pub deepest_dungeon: u32,
    pub deepest_distribution: BTreeMap<u32, u32>,
    pub runs: Vec<RunStats>,
}

fn average(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let n = runs.len();
        let mut deepest_distribution = BTreeMap::new();
        for run in &runs {
            *deepest_distribution.entry(run.deepest_dungeon).or_insert(0) += 1;
        }

        Self {
            num_runs: n as u32,
            avg_final_level: average(runs.iter().map(|r| r.final_level as f64), n),
            avg_deaths: average(runs.iter().map(|r| r.deaths as f64), n),
            avg_dungeons_completed: average(runs.iter().map(|r| r.dungeons_completed as f64), n),
            avg_fights_won: average(runs.iter().map(|r| r.fights_won as f64), n),
            avg_final_gold: average(runs.iter().map(|r| r.final_gold as f64), n),
            deepest_dungeon: runs.iter().map(|r| r.deepest_dungeon).max().unwrap_or(0),
            deepest_distribution,
            runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Runs: {}\n\n", self.num_runs));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Level:        {:.1}\n", self.avg_final_level));
        report.push_str(&format!("  Avg Dungeons Cleared:   {:.2}\n", self.avg_dungeons_completed));
        report.push_str(&format!("  Deepest Dungeon:        {}\n", self.deepest_dungeon));
        report.push_str(&format!("  Avg Fights Won:         {:.1}\n", self.avg_fights_won));
        report.push_str(&format!("  Avg Deaths:             {:.2}\n", self.avg_deaths));
        report.push_str(&format!("  Avg Final Gold:         {:.0}\n\n", self.avg_final_gold));

        report.push_str("── DEEPEST DUNGEON REACHED ──────────────────────────────────────\n");
        for (level, count) in &self.deepest_distribution {
            let pct = if self.num_runs == 0 {
                0.0
            } else {
                *count as f64 / self.num_runs as f64 * 100.0
            };
            let bar = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Dungeon {:2}: {:>5.1}% {}\n", level, pct, bar));
        }

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(level: u32, deepest: u32, deaths: u32) -> RunStats {
        RunStats {
            final_level: level,
            deaths,
            dungeons_completed: deepest - 1,
            deepest_dungeon: deepest,
            fights_won: level * 3,
            final_gold: 100,
            actions_taken: 50,
        }
    }

    #[test]
    fn test_report_generation() {
        let report = SimReport::from_runs(vec![run(4, 2, 1), run(6, 3, 0)]);
        assert_eq!(report.num_runs, 2);
        assert!((report.avg_final_level - 5.0).abs() < 1e-9);
        assert!((report.avg_deaths - 0.5).abs() < 1e-9);
        assert_eq!(report.deepest_dungeon, 3);
        assert_eq!(report.deepest_distribution.get(&2), Some(&1));

        let text = report.to_text();
        assert!(text.contains("SIMULATION REPORT"));
        assert!(text.contains("Dungeon  3:  50.0%"));
    }

    #[test]
    fn test_empty_report_has_no_nan() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.avg_final_level, 0.0);
        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["num_runs"], 0);
    }
}
