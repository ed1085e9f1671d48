use data_runtime::configs::telemetry;
use data_runtime::loader;
use session_core::runner;
use session_core::telemetry::init_telemetry;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: session-harness <scenario.json under data/>");
        std::process::exit(2);
    }
    let cfg = telemetry::load_default().unwrap_or_default();
    let _guard = init_telemetry(&cfg).expect("init telemetry");
    let scen = loader::load_scenario(&args[1]).expect("load scenario");
    let summary = runner::run_scenario(&scen);
    println!(
        "outcome={:?} score={} t={:.1}s frames={}",
        summary.outcome, summary.score, summary.seconds, summary.frames
    );
}
