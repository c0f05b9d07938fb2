use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "garage", bin_name = "garage", version)]
#[command(about = "Keep a catalog of your cars in named save files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List save files
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Create an empty save file
    #[command(display_order = 2)]
    New {
        /// Save file name (case-sensitive)
        name: String,
    },

    /// Delete a save file and every car in it
    #[command(alias = "rm", display_order = 3)]
    Remove {
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the cars in a save file
    #[command(display_order = 4)]
    Show {
        save_file: String,

        /// Only these cars (1-based indexes)
        cars: Vec<String>,
    },

    /// Add, delete or change the photo of cars
    #[command(subcommand, display_order = 5)]
    Car(CarCommands),

    /// Add, edit or delete car details
    #[command(subcommand, display_order = 6)]
    Detail(DetailCommands),

    /// Write every save file to a JSON document
    #[command(display_order = 7)]
    Export {
        /// Output path (defaults to the configured export filename in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace all save files with the contents of a JSON document
    #[command(display_order = 8)]
    Import { path: PathBuf },

    /// Get or set configuration values
    #[command(display_order = 9)]
    Config {
        /// Configuration key (storage-key, export-filename, import-extensions)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CarCommands {
    /// Add a car to the end of a save file
    #[command(alias = "n")]
    Add {
        save_file: String,

        /// Image file to attach as the car's photo
        #[arg(long)]
        photo: Option<PathBuf>,

        /// Car name words (joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// Delete a car (later cars move up one index)
    #[command(alias = "rm")]
    Delete {
        save_file: String,
        car: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Replace a car's photo
    Photo {
        save_file: String,
        car: String,
        image: PathBuf,
    },

    /// Write a car's photo out as an image file
    ExtractPhoto {
        save_file: String,
        car: String,

        /// Target file, or a directory to name the file after the car
        out: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum DetailCommands {
    /// Append a detail to a car
    Add {
        save_file: String,
        car: String,

        /// Detail words (joined with spaces)
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Replace a detail in place
    Edit {
        save_file: String,
        car: String,
        detail: String,

        /// New detail words (joined with spaces)
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Delete a detail (later details move up one index)
    #[command(alias = "rm")]
    Delete {
        save_file: String,
        car: String,
        detail: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
