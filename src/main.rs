use logistic_bifurcation::{
    Detector, ILLUSTRATIONS, PLOT_HEIGHT, PLOT_WIDTH, SweepConfig,
    render_diagram, show, sweep
};

fn main() -> logistic_bifurcation::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("logistic_bifurcation=info")
        .with_writer(std::io::stderr)
        .init();

    for illustration in &ILLUSTRATIONS {
        for line in illustration.lines() {
            println!("{line}");
        }
    }

    let config = SweepConfig::default();
    let diagram = sweep(&config, &Detector::default())?;
    let canvas = render_diagram(&diagram, config.r_min, config.r_max, PLOT_WIDTH, PLOT_HEIGHT)?;

    show(&canvas, "logistic map bifurcation (Esc to close)")
}
