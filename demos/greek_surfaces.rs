// demos/greek_surfaces.rs
use bsm_greeks::config::{self, PlotKind};
use bsm_greeks::grid::moneyness;
use bsm_greeks::grid::{compute, GreekSurfaces, GridConfig};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let (cfg, s0, itm, otm, plot) = if args.len() > 1 {
        let params = config::read_parameters(&args[1]).expect("Readable parameter file");
        (
            params.grid_config(),
            params.s0,
            params.itm,
            params.otm,
            params.plots,
        )
    } else {
        let cfg = GridConfig {
            r: 0.05,
            ..Default::default()
        };
        (cfg, 100.0, 10.0, 10.0, PlotKind::Simple)
    };

    let surfaces = compute(&cfg).expect("Valid configuration");

    println!("Computed Greek surfaces");
    println!(
        "  spot axis: {} points in [{}, {}]",
        surfaces.stock_prices.len(),
        surfaces.stock_prices.first().unwrap(),
        surfaces.stock_prices.last().unwrap()
    );
    println!(
        "  maturity axis: {} points in [{}, {}]",
        surfaces.maturities.len(),
        surfaces.maturities.first().unwrap(),
        surfaces.maturities.last().unwrap()
    );
    println!("  greeks: {:?}", surfaces.greek_names());
    println!("  options: {:?}", surfaces.option_names());

    match plot {
        PlotKind::Moneyness => print_moneyness(&surfaces, s0, itm, otm),
        _ => print_atm_rows(&surfaces, s0),
    }
}

/// Stand-in for a 2D/3D plotting consumer: the longest-maturity column at
/// the spot level nearest s0, per (greek, option) pair
fn print_atm_rows(surfaces: &GreekSurfaces, s0: f64) {
    let spot_idx = surfaces
        .stock_prices
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (*a - s0).abs().partial_cmp(&(*b - s0).abs()).unwrap()
        })
        .map(|(i, _)| i)
        .unwrap();
    let last_mat = surfaces.maturities.len() - 1;

    println!(
        "\nValues at S = {} (longest maturity T = {}):",
        surfaces.stock_prices[spot_idx], surfaces.maturities[last_mat]
    );
    for (gi, greek) in surfaces.greeks.iter().enumerate() {
        for (oi, kind) in surfaces.options.iter().enumerate() {
            let value = surfaces.values[[gi, oi, spot_idx, last_mat]];
            println!("  {:<6} {:<4} = {:>12.6}", greek.name(), kind.name(), value);
        }
    }
}

fn print_moneyness(surfaces: &GreekSurfaces, s0: f64, itm: f64, otm: f64) {
    println!("\nMoneyness curves over the maturity axis:");
    for &greek in &surfaces.greeks {
        for &kind in &surfaces.options {
            let curves = moneyness::extract(surfaces, greek, kind, s0, itm, otm)
                .expect("Pair is part of the computed selection");
            println!(
                "  {} {} — ITM @ S={}, ATM @ S={}, OTM @ S={}",
                greek.name(),
                kind.name(),
                curves.itm_spot,
                curves.atm_spot,
                curves.otm_spot
            );
            println!("    ITM: {:?}", curves.itm);
            println!("    ATM: {:?}", curves.atm);
            println!("    OTM: {:?}", curves.otm);
        }
    }
}
