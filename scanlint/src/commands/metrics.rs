// scanlint/src/commands/metrics.rs
//
// USE CASE: show how a metric list resolves, with the provenance of every
// implicitly added metric. Debugging aid for scan authors.

use scanlint_core::domain::{ParseLog, resolve_metrics};

pub fn execute(metrics: Vec<String>, column: Option<&str>) {
    let mut resolved = metrics;
    let mut log = ParseLog::new();

    resolve_metrics(&mut resolved, &mut log, column);

    println!("🧮 Resolved metrics: [{}]", resolved.join(", "));
    for entry in log.entries() {
        println!("   ➜ {}", entry.message);
    }
}
