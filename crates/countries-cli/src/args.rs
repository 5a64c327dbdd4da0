use clap::{Parser, Subcommand};

/// CLI arguments for countries-cli
#[derive(Debug, Parser)]
#[command(
    name = "countries",
    version,
    about = "Look up countries on REST Countries and print them as HTML cards"
)]
pub struct CliArgs {
    /// Give up on the whole command after this many seconds, chained lookups included (default: no limit)
    #[arg(short = 't', long = "timeout", global = true)]
    pub timeout: Option<f64>,

    /// Base URL of the REST Countries API (default: $COUNTRIES_API_URL or https://restcountries.com/v3.1)
    #[arg(long = "countries-url", global = true)]
    pub countries_url: Option<String>,

    /// Base URL of the reverse-geocoding API (default: $GEOCODE_API_URL or https://geocode.xyz)
    #[arg(long = "geocode-url", global = true)]
    pub geocode_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a country by name
    Country {
        /// Country name (e.g. finland, "united states")
        name: String,

        /// Also show the first bordering country
        #[arg(short = 'n', long = "neighbour")]
        neighbour: bool,
    },

    /// Show a country by ISO alpha-2/alpha-3 code
    Code {
        /// Code (e.g. FI, FIN)
        code: String,
    },

    /// Reverse-geocode coordinates and show the country they are in
    #[command(name = "where-am-i")]
    WhereAmI {
        /// Latitude in degrees (e.g. 52.508)
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in degrees (e.g. 13.381)
        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },

    /// Fetch several countries in parallel; fail if any lookup fails
    All {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Fetch several countries in parallel; show every success and every error
    Settled {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Fetch several countries in parallel; show whichever answers first
    Race {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Fetch several countries in parallel; show the first successful answer
    Any {
        #[arg(required = true)]
        names: Vec<String>,
    },
}
