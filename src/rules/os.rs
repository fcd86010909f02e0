//! Operating-system misconception rules: scheduling discipline and
//! memory-management unit sizing.

use super::{Rule, Topic};

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "fcfs-preemptive",
            Topic::OperatingSystems,
            "FCFS described as preemptive",
            "FCFS is non-preemptive; a running process keeps the CPU until it finishes or blocks",
            r"\bfcfs\b[^.;]*\bpreemptive\b",
            &[r"non[\s-]?preemptive", "not preemptive"],
        ),
        Rule::new(
            "round-robin-non-preemptive",
            Topic::OperatingSystems,
            "Round Robin described as non-preemptive",
            "Round Robin is preemptive; the scheduler reclaims the CPU at each time quantum",
            r"\bround[\s-]robin\b[^.;]*\bnon[\s-]?preemptive\b",
            &["unlike"],
        ),
        Rule::new(
            "paging-variable-size",
            Topic::OperatingSystems,
            "Paging described as using variable-size units",
            "Paging divides memory into fixed-size frames; segmentation is the variable-size scheme",
            r"\bpaging\b[^.;]*\bvariable[\s-]?size",
            &["segmentation", r"fixed[\s-]?size"],
        ),
        Rule::new(
            "segmentation-fixed-size",
            Topic::OperatingSystems,
            "Segmentation described as using fixed-size units",
            "Segmentation uses variable-size segments; paging is the fixed-size scheme",
            r"\bsegmentation\b[^.;]*\bfixed[\s-]?size",
            &["paging", "variable"],
        ),
    ]
}
