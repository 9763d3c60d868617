use winnow::combinator::{opt, preceded};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::take_while;

// -- IPv4 / CIDR ------------------------------------------------------------

fn octet(input: &mut &str) -> ModalResult<u8> {
    take_while(1..=3, |c: char| c.is_ascii_digit())
        .try_map(|s: &str| s.parse::<u8>())
        .parse_next(input)
}

fn prefix_len(input: &mut &str) -> ModalResult<u8> {
    preceded(
        '/',
        take_while(1..=2, |c: char| c.is_ascii_digit())
            .verify(|s: &str| s.len() == 1 || !s.starts_with('0'))
            .try_map(|s: &str| s.parse::<u8>())
            .verify(|len: &u8| *len <= 32),
    )
    .parse_next(input)
}

fn ipv4_network(input: &mut &str) -> ModalResult<()> {
    (
        octet,
        '.',
        octet,
        '.',
        octet,
        '.',
        octet,
        opt(prefix_len),
    )
        .void()
        .parse_next(input)
}

// -- Decimal ranges ---------------------------------------------------------

fn port(input: &mut &str) -> ModalResult<u16> {
    take_while(1.., |c: char| c.is_ascii_digit())
        .try_map(|s: &str| s.parse::<u16>())
        .parse_next(input)
}

fn dscp(input: &mut &str) -> ModalResult<u8> {
    take_while(1.., |c: char| c.is_ascii_digit())
        .try_map(|s: &str| s.parse::<u8>())
        .verify(|v: &u8| *v <= 63)
        .parse_next(input)
}

// -- Entry points -----------------------------------------------------------

/// Dotted-quad IPv4 address with an optional `/0`–`/32` prefix.
pub(crate) fn is_ipv4_network(value: &str) -> bool {
    ipv4_network.parse(value).is_ok()
}

/// Decimal port number in 0–65535.
pub(crate) fn is_port(value: &str) -> bool {
    port.parse(value).is_ok()
}

/// Decimal DSCP code point in 0–63.
pub(crate) fn is_dscp(value: &str) -> bool {
    dscp.parse(value).is_ok()
}
