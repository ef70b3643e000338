//! Render a sample chart to stdout.
//!
//! Run with: cargo run --example radar --features tracing -- classic

use radar_chart::{Categories, Chart, LabelStyle, RenderOptions, Series, SvgSurface};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let style = match std::env::args().nth(1).as_deref() {
        Some("classic") => LabelStyle::Classic,
        _ => LabelStyle::Basic,
    };

    let categories = Categories::new(["Attack", "Defence", "Speed", "Range", "Stealth", "Cost"])
        .with_style(style);
    let options = RenderOptions {
        frame: true,
        ..Default::default()
    };
    let mut chart = Chart::new(SvgSurface::new(500.0, 500.0), categories).with_options(options);

    let series = [
        ("scout", vec![3.0, 2.0, 9.0, 6.0, 8.0, 2.0], "#3366cc"),
        ("tank", vec![8.0, 9.0, 2.0, 4.0, 1.0, 7.0], "#cc3333"),
    ];
    for (name, values, colour) in series {
        let result = Series::new(name, values)
            .styled(colour, 0.4)
            .and_then(|s| chart.add_series(s).map(|_| ()));
        if let Err(e) = result {
            eprintln!("Error: {}", e);
        }
    }

    if let Err(e) = chart.render() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    match chart.into_surface().to_svg_string() {
        Ok(svg) => println!("{}", svg),
        Err(e) => eprintln!("Error: {}", e),
    }
}
