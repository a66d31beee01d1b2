use delaynet::{render, NetResult, NetworkBuilder, RunConfig, SourceEvent};

fn main() -> NetResult<()> {
    tracing_subscriber::fmt::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  delaynet — Traffic Light Controller");
    println!("═══════════════════════════════════════════════════════");
    println!();

    let fingerprint_1 = run_traffic_light("Run 1")?;
    let fingerprint_2 = run_traffic_light("Run 2")?;

    println!("  Verification:");
    println!("    Run 1 history hash: {:016x}", fingerprint_1);
    println!("    Run 2 history hash: {:016x}", fingerprint_2);
    if fingerprint_1 == fingerprint_2 {
        println!("    ✓ Histories are IDENTICAL — deterministic replay confirmed.");
    } else {
        println!("    ✗ MISMATCH — determinism violation detected!");
    }
    Ok(())
}

fn run_traffic_light(label: &str) -> NetResult<u64> {
    let mut net = NetworkBuilder::named("TrafficLight")
        .input("clock", 0)
        .output("light", 1)
        .constant("green", "green", |n| n.input("clock", 5).output("light", 0))
        .constant("yellow", "yellow", |n| n.input("clock", 2).output("light", 0))
        .constant("red", "red", |n| n.input("clock", 7).output("light", 0))
        .build()?;

    let report = net.execute_with(
        &RunConfig::default(),
        [SourceEvent::new("clock", 0, 0)],
        None,
    )?;

    println!(
        "  {}: {:?} after {} iterations, final clock {}",
        label, report.status, report.iterations, report.clock
    );
    println!();
    println!("State History:");
    println!("{}", render::to_markdown(net.history()));
    println!();
    println!("State Diagram:");
    println!("{}", render::to_dot(&net));
    println!();

    Ok(net.history().fingerprint())
}
