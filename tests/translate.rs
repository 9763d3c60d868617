use flowmatch::{translate, Direction, EvalError, FlowMatchError};

#[test]
fn srv_ip_maps_to_destination_on_uplink() {
    let rules = translate("srv.ip == 1.2.3.4").unwrap();
    assert_eq!(rules.uplink(), ["-d 1.2.3.4"]);
    assert_eq!(rules.downlink(), ["-s 1.2.3.4"]);
}

#[test]
fn cli_ip_mirrors_srv_ip() {
    let rules = translate("cli.ip == 5.6.7.8").unwrap();
    assert_eq!(rules.uplink(), ["-s 5.6.7.8"]);
    assert_eq!(rules.downlink(), ["-d 5.6.7.8"]);
}

#[test]
fn and_joins_fragments_on_one_line() {
    let rules = translate("srv.ip == 1.2.3.4 AND srv.tcp.port == 8080").unwrap();
    assert_eq!(rules.uplink(), ["-d 1.2.3.4 -p tcp --dport 8080"]);
    assert_eq!(rules.downlink(), ["-s 1.2.3.4 -p tcp --sport 8080"]);
}

#[test]
fn not_negates_only_its_fragment() {
    let rules =
        translate("cli.ip == 5.6.7.0/24 AND srv.tcp.port == 80 AND NOT ip.dscp == 30").unwrap();
    assert_eq!(
        rules.uplink(),
        ["-s 5.6.7.0/24 -p tcp --dport 80 -m dscp ! --dscp 30"]
    );
    assert_eq!(
        rules.downlink(),
        ["-d 5.6.7.0/24 -p tcp --sport 80 -m dscp ! --dscp 30"]
    );
}

#[test]
fn or_inside_and_expands_to_every_combination() {
    let rules = translate(
        "srv.ip == 1.2.3.4 OR srv.ip == 5.6.7.8 AND srv.tcp.port == 80 OR srv.tcp.port == 443",
    )
    .unwrap();
    assert_eq!(
        rules.uplink(),
        [
            "-d 1.2.3.4 -p tcp --dport 80",
            "-d 1.2.3.4 -p tcp --dport 443",
            "-d 5.6.7.8 -p tcp --dport 80",
            "-d 5.6.7.8 -p tcp --dport 443",
        ]
    );
    assert_eq!(
        rules.downlink(),
        [
            "-s 1.2.3.4 -p tcp --sport 80",
            "-s 1.2.3.4 -p tcp --sport 443",
            "-s 5.6.7.8 -p tcp --sport 80",
            "-s 5.6.7.8 -p tcp --sport 443",
        ]
    );
}

#[test]
fn out_of_range_dscp_is_rejected() {
    let err = translate("ip.dscp == 99").unwrap_err();
    assert_eq!(
        err,
        FlowMatchError::Eval(EvalError::Validation {
            field: "ip.dscp".into(),
            value: "99".into(),
            expected: "a DSCP value in 0-63",
        })
    );
}

#[test]
fn plain_or_lists_alternatives() {
    let rules = translate("cli.udp.port == 53 OR cli.tcp.port == 53").unwrap();
    assert_eq!(rules.uplink(), ["-p udp --sport 53", "-p tcp --sport 53"]);
    assert_eq!(rules.downlink(), ["-p udp --dport 53", "-p tcp --dport 53"]);
}

#[test]
fn protocol_flag_combines_with_address() {
    let rules = translate("proto.icmp == AND srv.ip == 8.8.8.8").unwrap();
    assert_eq!(rules.uplink(), ["-p icmp -d 8.8.8.8"]);
    assert_eq!(rules.downlink(), ["-p icmp -s 8.8.8.8"]);
}

#[test]
fn negated_address_is_prefixed() {
    let rules = translate("NOT srv.ip == 10.0.0.0/8").unwrap();
    assert_eq!(rules.uplink(), ["! -d 10.0.0.0/8"]);
    assert_eq!(rules.downlink(), ["! -s 10.0.0.0/8"]);
}

#[test]
fn icmp_port_fields_render() {
    let rules = translate("srv.icmp.port == 8 AND cli.icmp.port == 0").unwrap();
    assert_eq!(rules.uplink(), ["-p icmp --dport 8 -p icmp --sport 0"]);
    assert_eq!(rules.downlink(), ["-p icmp --sport 8 -p icmp --dport 0"]);
}

#[test]
fn long_and_chain_yields_single_line() {
    let rules = translate(
        "cli.ip == 192.168.1.0/24 and srv.ip == 1.1.1.1 and srv.udp.port == 53 and ip.dscp == 46",
    )
    .unwrap();
    assert_eq!(rules.len(Direction::Uplink), 1);
    assert_eq!(
        rules.uplink(),
        ["-s 192.168.1.0/24 -d 1.1.1.1 -p udp --dport 53 -m dscp --dscp 46"]
    );
    assert_eq!(
        rules.downlink(),
        ["-d 192.168.1.0/24 -s 1.1.1.1 -p udp --sport 53 -m dscp --dscp 46"]
    );
}

#[test]
fn not_after_field_name_negates_the_clause() {
    let rules = translate("srv.ip == 1.2.3.4 and ip.dscp not == 30").unwrap();
    assert_eq!(rules.uplink(), ["-d 1.2.3.4 -m dscp ! --dscp 30"]);
    assert_eq!(rules.downlink(), ["-s 1.2.3.4 -m dscp ! --dscp 30"]);
}
