use super::direction::Direction;
use super::error::EvalError;
use super::ruleset::RuleSet;
use crate::validate;

/// Placeholder substituted with the comparison value when rendering a template.
const VALUE: &str = "{value}";

/// Value constraint attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// IPv4 address, optionally with a `/0`–`/32` prefix.
    Ipv4Network,
    /// Decimal 0–65535.
    Port,
    /// Decimal 0–63.
    Dscp,
    /// The field is a flag and takes no value.
    Empty,
}

impl Validator {
    #[must_use]
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Validator::Ipv4Network => validate::is_ipv4_network(value),
            Validator::Port => validate::is_port(value),
            Validator::Dscp => validate::is_dscp(value),
            Validator::Empty => value.is_empty(),
        }
    }

    /// Human-readable description of what the validator accepts.
    #[must_use]
    pub fn expected(self) -> &'static str {
        match self {
            Validator::Ipv4Network => "an IPv4 address or IPv4/CIDR with prefix 0-32",
            Validator::Port => "a port number in 0-65535",
            Validator::Dscp => "a DSCP value in 0-63",
            Validator::Empty => "no value",
        }
    }
}

/// One entry of the field vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub validator: Validator,
    pub uplink: &'static str,
    pub downlink: &'static str,
}

const fn spec(
    key: &'static str,
    validator: Validator,
    uplink: &'static str,
    downlink: &'static str,
) -> FieldSpec {
    FieldSpec {
        key,
        validator,
        uplink,
        downlink,
    }
}

// `srv` is the remote endpoint and `cli` the local one. Uplink flows cli -> srv,
// so a srv attribute is a destination on uplink and a source on downlink.
static FIELDS: [FieldSpec; 12] = [
    spec("srv.ip", Validator::Ipv4Network, "-d {value}", "-s {value}"),
    spec("cli.ip", Validator::Ipv4Network, "-s {value}", "-d {value}"),
    spec("srv.tcp.port", Validator::Port, "-p tcp --dport {value}", "-p tcp --sport {value}"),
    spec("cli.tcp.port", Validator::Port, "-p tcp --sport {value}", "-p tcp --dport {value}"),
    spec("srv.udp.port", Validator::Port, "-p udp --dport {value}", "-p udp --sport {value}"),
    spec("cli.udp.port", Validator::Port, "-p udp --sport {value}", "-p udp --dport {value}"),
    spec("srv.icmp.port", Validator::Port, "-p icmp --dport {value}", "-p icmp --sport {value}"),
    spec("cli.icmp.port", Validator::Port, "-p icmp --sport {value}", "-p icmp --dport {value}"),
    spec("proto.icmp", Validator::Empty, "-p icmp", "-p icmp"),
    spec("proto.tcp", Validator::Empty, "-p tcp", "-p tcp"),
    spec("proto.udp", Validator::Empty, "-p udp", "-p udp"),
    spec("ip.dscp", Validator::Dscp, "-m dscp --dscp {value}", "-m dscp --dscp {value}"),
];

impl FieldSpec {
    /// Every recognized field, in a fixed order.
    #[must_use]
    pub fn all() -> &'static [FieldSpec] {
        &FIELDS
    }

    /// Case-insensitive lookup by key.
    #[must_use]
    pub fn lookup(key: &str) -> Option<&'static FieldSpec> {
        FIELDS.iter().find(|f| f.key.eq_ignore_ascii_case(key))
    }

    #[must_use]
    pub fn template(&self, direction: Direction) -> &'static str {
        match direction {
            Direction::Uplink => self.uplink,
            Direction::Downlink => self.downlink,
        }
    }

    /// Validate `value` and render one rule per direction.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::Validation`] if the value does not satisfy the
    /// field's [`Validator`].
    pub fn render(&self, value: &str) -> Result<RuleSet, EvalError> {
        if !self.validator.accepts(value) {
            return Err(EvalError::Validation {
                field: self.key.to_owned(),
                value: value.to_owned(),
                expected: self.validator.expected(),
            });
        }
        Ok(RuleSet::single(
            self.uplink.replace(VALUE, value),
            self.downlink.replace(VALUE, value),
        ))
    }
}
