use flowmatch::Translator;

fn main() {
    let translator = Translator::new();

    let expressions = [
        "srv.ip == 1.2.3.4",
        "cli.ip == 5.6.7.8",
        "srv.ip == 1.2.3.4 AND srv.tcp.port == 8080",
        "cli.ip == 5.6.7.0/24 AND srv.tcp.port == 80 AND NOT ip.dscp == 30",
        "srv.ip == 1.2.3.4 OR srv.ip == 5.6.7.8 AND srv.tcp.port == 80 OR srv.tcp.port == 443",
        "ip.dscp == 99",
    ];

    for expr in expressions {
        println!("{expr}");
        let node = match translator.parse(expr) {
            Ok(node) => node,
            Err(e) => {
                println!("error: {e}\n");
                continue;
            }
        };
        println!("tree: {node}");
        match translator.evaluate(&node) {
            Ok(rules) => println!("{rules}"),
            Err(e) => println!("error: {e}\n"),
        }
    }
}
