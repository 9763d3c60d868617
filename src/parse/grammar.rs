use winnow::ascii::multispace1;
use winnow::combinator::separated;
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::take_while;

use crate::FilterNode;

use super::ParseError;

const NOT: &str = "not";

// -- Left-hand side: whitespace-separated words ------------------------------

fn word<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| !c.is_whitespace()).parse_next(input)
}

fn left_side<'i>(input: &mut &'i str) -> ModalResult<Vec<&'i str>> {
    separated(0.., word, multispace1).parse_next(input)
}

// -- Leaf clause -------------------------------------------------------------

/// Parse one operator-free clause of the form `<field> == <value>`, negated when
/// the left side carries the word `not` anywhere.
///
/// `not` only counts as a whole word, so `notify` stays a field name. The value
/// may be empty; flag-only fields such as `proto.tcp` rely on that.
pub(crate) fn comparison(clause: &str) -> Result<FilterNode, ParseError> {
    let clause = clause.trim();
    let mut sides = clause.split("==");
    let (Some(lhs), Some(rhs), None) = (sides.next(), sides.next(), sides.next()) else {
        return Err(ParseError::MalformedComparison {
            clause: clause.to_owned(),
        });
    };

    let words = left_side
        .parse(lhs.trim())
        .map_err(|_| ParseError::MalformedComparison {
            clause: clause.to_owned(),
        })?;
    let negated = words.contains(&NOT);
    let rest: Vec<&str> = words.into_iter().filter(|w| *w != NOT).collect();

    let key = match (negated, rest.as_slice()) {
        (_, [key]) => *key,
        (true, []) => {
            return Err(ParseError::EmptyNegation {
                clause: clause.to_owned(),
            })
        }
        (false, []) => {
            return Err(ParseError::MissingField {
                clause: clause.to_owned(),
            })
        }
        (_, _) => {
            return Err(ParseError::MalformedComparison {
                clause: clause.to_owned(),
            })
        }
    };

    tracing::trace!(key, value = rhs.trim(), negated, "parsed comparison");
    let node = FilterNode::Comparison {
        key: key.to_owned(),
        value: rhs.trim().to_owned(),
    };
    Ok(if negated { !node } else { node })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field;

    #[test]
    fn parse_plain_comparison() {
        let node = comparison("srv.ip == 1.2.3.4").unwrap();
        assert_eq!(node, field("srv.ip").eq("1.2.3.4"));
    }

    #[test]
    fn parse_trims_both_sides() {
        let node = comparison("   cli.tcp.port   ==   22  ").unwrap();
        assert_eq!(node, field("cli.tcp.port").eq("22"));
    }

    #[test]
    fn parse_without_spaces() {
        let node = comparison("ip.dscp==12").unwrap();
        assert_eq!(node, field("ip.dscp").eq("12"));
    }

    #[test]
    fn parse_negated_comparison() {
        let node = comparison("not ip.dscp == 30").unwrap();
        assert_eq!(node, !field("ip.dscp").eq("30"));
    }

    #[test]
    fn parse_flag_field_with_empty_value() {
        let node = comparison("proto.udp ==").unwrap();
        assert_eq!(node, field("proto.udp").eq(""));
    }

    #[test]
    fn not_after_field_negates() {
        let node = comparison("ip.dscp not == 30").unwrap();
        assert_eq!(node, !field("ip.dscp").eq("30"));
    }

    #[test]
    fn repeated_not_negates_once() {
        let node = comparison("not srv.ip not == 1.2.3.4").unwrap();
        assert_eq!(node, !field("srv.ip").eq("1.2.3.4"));
    }

    #[test]
    fn not_with_two_field_words_is_malformed() {
        let err = comparison("not srv ip == 1.2.3.4").unwrap_err();
        assert!(matches!(err, ParseError::MalformedComparison { .. }));
    }

    #[test]
    fn not_prefix_inside_word_is_a_field_name() {
        let node = comparison("notify == 1").unwrap();
        assert_eq!(node, field("notify").eq("1"));
    }

    #[test]
    fn missing_operator_is_malformed() {
        let err = comparison("srv.ip 1.2.3.4").unwrap_err();
        assert!(matches!(err, ParseError::MalformedComparison { .. }));
    }

    #[test]
    fn double_operator_is_malformed() {
        let err = comparison("srv.ip == 1 == 2").unwrap_err();
        assert!(matches!(err, ParseError::MalformedComparison { .. }));
    }

    #[test]
    fn spaced_field_name_is_malformed() {
        let err = comparison("srv ip == 1.2.3.4").unwrap_err();
        assert!(matches!(err, ParseError::MalformedComparison { .. }));
    }

    #[test]
    fn missing_field_name() {
        let err = comparison("== 1.2.3.4").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingField {
                clause: "== 1.2.3.4".into()
            }
        );
    }

    #[test]
    fn bare_not_leaves_nothing_to_negate() {
        let err = comparison("not == 3").unwrap_err();
        assert_eq!(
            err,
            ParseError::EmptyNegation {
                clause: "not == 3".into()
            }
        );
    }
}
