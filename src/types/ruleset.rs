use std::fmt;

use super::direction::Direction;

/// Mirrored match-argument fragments produced by evaluating a filter.
///
/// Each entry is one standalone rule line for its direction; a packet matches
/// the filter if it matches any line. Order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleSet {
    #[cfg_attr(feature = "serde", serde(rename = "ul_filters"))]
    uplink: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "dl_filters"))]
    downlink: Vec<String>,
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for direction in Direction::ALL {
            writeln!(f, "{direction}:")?;
            for rule in self.rules(direction) {
                writeln!(f, "  {rule}")?;
            }
        }
        Ok(())
    }
}

impl RuleSet {
    #[must_use]
    pub fn new(uplink: Vec<String>, downlink: Vec<String>) -> Self {
        Self { uplink, downlink }
    }

    /// A rule set holding exactly one rule per direction.
    #[must_use]
    pub fn single(uplink: impl Into<String>, downlink: impl Into<String>) -> Self {
        Self::new(vec![uplink.into()], vec![downlink.into()])
    }

    #[must_use]
    pub fn uplink(&self) -> &[String] {
        &self.uplink
    }

    #[must_use]
    pub fn downlink(&self) -> &[String] {
        &self.downlink
    }

    #[must_use]
    pub fn rules(&self, direction: Direction) -> &[String] {
        match direction {
            Direction::Uplink => &self.uplink,
            Direction::Downlink => &self.downlink,
        }
    }

    #[must_use]
    pub fn len(&self, direction: Direction) -> usize {
        self.rules(direction).len()
    }

    /// Whether both directions are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.uplink.is_empty() && self.downlink.is_empty()
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.uplink, self.downlink)
    }

    /// Negate the last match fragment of every rule.
    ///
    /// The `!` goes in front of the final ` -`/` --` flag, so
    /// `-m dscp --dscp 30` becomes `-m dscp ! --dscp 30`. A rule with no
    /// earlier flag is negated as a whole: `-d 1.2.3.4` becomes `! -d 1.2.3.4`.
    #[must_use]
    pub fn negate_last(&self) -> RuleSet {
        RuleSet {
            uplink: self.uplink.iter().map(|r| negate_rule(r)).collect(),
            downlink: self.downlink.iter().map(|r| negate_rule(r)).collect(),
        }
    }

    /// Logical AND: every left rule paired with every right rule, left-major.
    #[must_use]
    pub fn conjoin(&self, other: &RuleSet) -> RuleSet {
        RuleSet {
            uplink: cross(&self.uplink, &other.uplink),
            downlink: cross(&self.downlink, &other.downlink),
        }
    }

    /// Logical OR: left rules followed by right rules.
    #[must_use]
    pub fn disjoin(&self, other: &RuleSet) -> RuleSet {
        RuleSet {
            uplink: [self.uplink.as_slice(), other.uplink.as_slice()].concat(),
            downlink: [self.downlink.as_slice(), other.downlink.as_slice()].concat(),
        }
    }
}

fn negate_rule(rule: &str) -> String {
    match rule.rfind(" -") {
        Some(at) => format!("{} !{}", &rule[..at], &rule[at..]),
        None => format!("! {rule}"),
    }
}

fn cross(left: &[String], right: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(left.len() * right.len());
    for l in left {
        for r in right {
            out.push(join_fragments(l, r));
        }
    }
    out
}

/// Join two fragments with one space, collapsing any whitespace runs.
fn join_fragments(left: &str, right: &str) -> String {
    left.split_whitespace()
        .chain(right.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}
