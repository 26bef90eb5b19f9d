/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::process;

use clap::{Parser, ValueEnum};
use quantities::{
    dimensions, Dimension, Locale, NumberStyles, Quantity, SymbolFormat,
    SymbolStyle, Unit, UnitError,
};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Quantity converter
///
/// Parses a quantity such as "101.325 kPa" and prints it in another
/// unit or format.
struct Args {
    /// The quantity to parse.
    quantity: String,
    /// The dimension of the quantity.
    #[clap(long, short, value_enum)]
    dimension: DimensionArg,
    /// Print the quantity in this unit.
    #[clap(long, short)]
    to: Option<String>,
    /// Value format: G, R, U, F<n>, N<n> or E<n>.
    #[clap(long, short)]
    format: Option<String>,
    /// Print the quantity in the largest fitting unit.
    #[clap(long, short, conflicts_with = "to")]
    autoscale: bool,
    /// Use ASCII unit symbols ("m^2" instead of "m²").
    #[clap(long)]
    ascii: bool,
    /// Number conventions for input and output.
    #[clap(long, short, value_enum, default_value = "invariant")]
    locale: LocaleArg,
    /// Output the canonical value as JSON.
    #[clap(long, conflicts_with_all = ["to", "format", "autoscale"])]
    json: bool,
    /// Increase verbosity (logged to stderr).
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbosity: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DimensionArg {
    Length,
    Area,
    Volume,
    Time,
    Frequency,
    Speed,
    Acceleration,
    Mass,
    Force,
    Momentum,
    Torque,
    Energy,
    Power,
    Pressure,
    Density,
    AreaDensity,
    Temperature,
    LuminousFlux,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LocaleArg {
    Invariant,
    German,
    French,
}

impl From<LocaleArg> for Locale {
    fn from(val: LocaleArg) -> Self {
        match val {
            LocaleArg::Invariant => Locale::INVARIANT,
            LocaleArg::German => Locale::GERMAN,
            LocaleArg::French => Locale::FRENCH,
        }
    }
}

impl Args {
    fn init_logger(&self) {
        if let Err(e) = simplelog::TermLogger::init(
            match self.verbosity {
                0 => simplelog::LevelFilter::Warn,
                1 => simplelog::LevelFilter::Info,
                2 => simplelog::LevelFilter::Debug,
                3.. => simplelog::LevelFilter::Trace,
            },
            simplelog::ConfigBuilder::new().build(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        ) {
            eprintln!("Error: failed to initialize logging: {}", e);
            process::exit(1);
        }
    }

    fn run(&self) -> Result<String, UnitError> {
        match self.dimension {
            DimensionArg::Length => self.run_in::<dimensions::Length>(),
            DimensionArg::Area => self.run_in::<dimensions::Area>(),
            DimensionArg::Volume => self.run_in::<dimensions::Volume>(),
            DimensionArg::Time => self.run_in::<dimensions::Time>(),
            DimensionArg::Frequency => self.run_in::<dimensions::Frequency>(),
            DimensionArg::Speed => self.run_in::<dimensions::Speed>(),
            DimensionArg::Acceleration => {
                self.run_in::<dimensions::Acceleration>()
            }
            DimensionArg::Mass => self.run_in::<dimensions::Mass>(),
            DimensionArg::Force => self.run_in::<dimensions::Force>(),
            DimensionArg::Momentum => self.run_in::<dimensions::Momentum>(),
            DimensionArg::Torque => self.run_in::<dimensions::Torque>(),
            DimensionArg::Energy => self.run_in::<dimensions::Energy>(),
            DimensionArg::Power => self.run_in::<dimensions::Power>(),
            DimensionArg::Pressure => self.run_in::<dimensions::Pressure>(),
            DimensionArg::Density => self.run_in::<dimensions::Density>(),
            DimensionArg::AreaDensity => {
                self.run_in::<dimensions::AreaDensity>()
            }
            DimensionArg::Temperature => {
                self.run_in::<dimensions::Temperature>()
            }
            DimensionArg::LuminousFlux => {
                self.run_in::<dimensions::LuminousFlux>()
            }
        }
    }

    fn run_in<D: Dimension>(&self) -> Result<String, UnitError> {
        let locale = Locale::from(self.locale);
        let quantity = Quantity::<D>::parse_with(
            &self.quantity,
            &NumberStyles::default(),
            &locale,
        )?;
        log::debug!("parsed {} quantity: {:?}", D::NAME, quantity);

        if self.json {
            return serde_json::to_string(&quantity)
                .map_err(|e| UnitError::Json(e.to_string()));
        }

        let unit = match (&self.to, self.autoscale) {
            (Some(to), _) => Some(Unit::<D>::parse(to)?),
            (None, true) => Some(quantity.autoscale().1),
            (None, false) => None,
        };
        let format = match (self.format.as_deref(), unit) {
            (Some(format), Some(unit)) => format!("{} {}", format, unit),
            (None, Some(unit)) => format!("G {}", unit),
            (Some(format), None) => format.to_string(),
            (None, None) => String::new(),
        };
        let symbol = SymbolFormat {
            style: match self.ascii {
                true => SymbolStyle::Ascii,
                false => SymbolStyle::Unicode,
            },
            ..SymbolFormat::default()
        };
        Ok(quantity.format_with(&format, &symbol, &locale))
    }
}

fn main() {
    let args = Args::parse();
    args.init_logger();

    match args.run() {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
