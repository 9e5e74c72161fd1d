//! # EN 1090-2 Hole Clearance Demo
//!
//! Console front end for the Table 11 clearance rules in `en1090_core`.
//!
//! By default it prints a table of random (hole type, diameter) samples,
//! the same spot-check report the original office script produced. With
//! `--diameter` it prints the full Table 11 row set for one bolt, and
//! `--hole-type` narrows that to a single free-form label lookup.

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tabled::builder::Builder;
use tabled::settings::Style;

use en1090_core::drilling::{en_ref, HoleType, Perforation};
use en1090_core::errors::CalcResult;

#[derive(Parser, Debug)]
#[command(name = "en1090", version)]
#[command(about = "Nominal bolt-hole clearances per UNE-EN 1090-2:2011 Table 11")]
struct Args {
    /// Number of random (hole type, diameter) samples
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Seed for the sample table (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Bolt or pin nominal diameter in mm; prints the clearance for every
    /// hole type instead of a random table
    #[arg(long)]
    diameter: Option<f64>,

    /// Hole type designation, matched case-insensitively; unrecognized
    /// labels fall back to long slotted holes
    #[arg(long, requires = "diameter")]
    hole_type: Option<String>,
}

fn main() {
    let args = Args::parse();

    println!("EN 1090-2 Hole Clearances ({})", en_ref::HOLING);
    println!("==================================================");
    println!("Nominal clearances per {}", en_ref::NOMINAL_CLEARANCES);
    println!();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}

fn run(args: &Args) -> CalcResult<()> {
    match (args.diameter, args.hole_type.as_deref()) {
        (Some(d_nom_mm), Some(label)) => single_lookup(d_nom_mm, label),
        (Some(d_nom_mm), None) => full_row(d_nom_mm),
        _ => random_table(args.rows, args.seed),
    }
}

/// Random sample table: `rows` draws of (hole type, whole-mm diameter).
fn random_table(rows: usize, seed: Option<u64>) -> CalcResult<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut builder = Builder::default();
    builder.push_record(["hole type", "d.nom [mm]", "clearance [mm]"]);

    for _ in 0..rows {
        let hole_type = HoleType::ALL[rng.random_range(0..HoleType::ALL.len())];
        let d_nom_mm: u32 = rng.random_range(1..=40);
        let perforation = Perforation::new(f64::from(d_nom_mm))?;

        builder.push_record([
            hole_type.label().to_string(),
            d_nom_mm.to_string(),
            format_clearance(&perforation, hole_type),
        ]);
    }

    println!("{}", builder.build().with(Style::ascii()));
    Ok(())
}

/// One row per Table 11 hole type for a single bolt diameter.
fn full_row(d_nom_mm: f64) -> CalcResult<()> {
    let perforation = Perforation::new(d_nom_mm)?;

    let mut builder = Builder::default();
    builder.push_record(["hole type", "d.nom [mm]", "clearance [mm]"]);
    for hole_type in HoleType::ALL {
        builder.push_record([
            hole_type.label().to_string(),
            format_mm(d_nom_mm),
            format_clearance(&perforation, hole_type),
        ]);
    }

    println!("{}", builder.build().with(Style::ascii()));
    Ok(())
}

/// Single lookup through the free-form label path.
fn single_lookup(d_nom_mm: f64, label: &str) -> CalcResult<()> {
    let perforation = Perforation::new(d_nom_mm)?;
    let hole_type = HoleType::from_label(label);

    let mut builder = Builder::default();
    builder.push_record(["hole type", "d.nom [mm]", "clearance [mm]"]);
    builder.push_record([
        hole_type.label().to_string(),
        format_mm(d_nom_mm),
        format_clearance(&perforation, hole_type),
    ]);

    println!("{}", builder.build().with(Style::ascii()));

    if hole_type == HoleType::LongSlotted && !label.eq_ignore_ascii_case(hole_type.label()) {
        println!();
        println!(
            "note: \"{}\" is not a Table 11 designation; long slotted holes assumed",
            label
        );
    }
    Ok(())
}

/// Step clearances print whole, the proportional long-slot value with one
/// decimal, matching the table as published.
fn format_clearance(perforation: &Perforation, hole_type: HoleType) -> String {
    match hole_type {
        HoleType::RoundNormal => perforation.round_normal_clearance().to_string(),
        HoleType::RoundOversize => perforation.round_oversize_clearance().to_string(),
        HoleType::ShortSlotted => perforation.short_slotted_clearance().to_string(),
        HoleType::LongSlotted => format!("{:.1}", perforation.long_slotted_clearance()),
    }
}

/// Whole-mm diameters print without a decimal point.
fn format_mm(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}
