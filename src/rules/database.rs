//! Database misconception rules: normalization forms, join semantics,
//! and ACID durability.

use super::{Rule, Topic};

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "1nf-transitive",
            Topic::Database,
            "1NF credited with handling transitive dependencies",
            "1NF requires atomic values; transitive dependencies are removed by 3NF",
            r"\b1nf\b[^.;]*\btransitive\b",
            &["3nf", "does not"],
        ),
        Rule::new(
            "2nf-transitive",
            Topic::Database,
            "2NF credited with removing transitive dependencies",
            "2NF removes partial dependencies; transitive dependencies are removed by 3NF",
            r"\b2nf\b[^.;]*\b(?:removes|eliminates)\b[^.;]*\btransitive\b",
            &["3nf"],
        ),
        Rule::new(
            "inner-join-all-rows",
            Topic::Database,
            "INNER JOIN described as returning all rows",
            "INNER JOIN returns only the rows with matching values in both tables",
            r"\binner join\b[^.;]*\ball rows\b",
            &["matching"],
        ),
        Rule::new(
            "cross-join-matching-rows",
            Topic::Database,
            "CROSS JOIN described as returning matching rows",
            "CROSS JOIN returns the Cartesian product of both tables, no matching involved",
            r"\bcross join\b[^.;]*\bmatching rows\b",
            &["cartesian"],
        ),
        Rule::new(
            "durability-temporary",
            Topic::Database,
            "Durability described as temporary persistence",
            "Durability means committed changes survive permanently, including crashes",
            r"\bdurability\b[^.;]*\btemporary\b",
            &["not temporary"],
        ),
    ]
}
