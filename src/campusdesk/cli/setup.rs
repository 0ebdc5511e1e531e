use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "campusdesk", bin_name = "campusdesk", version)]
#[command(about = "Admin console for the campus gallery and faculty directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this data directory instead of CAMPUSDESK_HOME or the platform default
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose", help_heading = "Options")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show collection counts and quick actions
    #[command(alias = "home", display_order = 1)]
    Dashboard,

    /// Manage the image gallery
    #[command(subcommand, alias = "g", display_order = 2)]
    Gallery(GalleryCommands),

    /// Manage the faculty directory
    #[command(subcommand, alias = "f", display_order = 3)]
    Faculty(FacultyCommands),

    /// Get or set configuration
    #[command(display_order = 10)]
    Config {
        /// Configuration key (e.g., upload-delay-ms)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the store (optional utility)
    #[command(display_order = 11)]
    Init,
}

#[derive(Subcommand, Debug)]
pub enum GalleryCommands {
    /// List gallery items, newest first
    #[command(alias = "ls")]
    List,

    /// Upload an image and add it to the gallery
    #[command(alias = "n")]
    Add {
        /// Image title
        #[arg(long, default_value = "")]
        name: String,

        /// Optional description
        #[arg(long, default_value = "")]
        description: String,

        /// Path to the image file
        #[arg(long, value_name = "PATH")]
        image: Option<PathBuf>,
    },

    /// Delete a gallery item
    #[command(alias = "rm")]
    Delete {
        /// Listing index (e.g. 1) or item id
        selector: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum FacultyCommands {
    /// List faculty members, newest first
    #[command(alias = "ls")]
    List,

    /// Add a faculty member
    #[command(alias = "n")]
    Add(FacultyArgs),

    /// Remove a faculty member
    #[command(alias = "rm")]
    Delete {
        /// Listing index (e.g. 1) or member id
        selector: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List the known departments
    Departments,

    /// List the known positions
    Positions,
}

#[derive(Args, Debug, Default)]
pub struct FacultyArgs {
    /// Full name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Contact email
    #[arg(long, default_value = "")]
    pub email: String,

    /// Department (see `faculty departments`)
    #[arg(long, default_value = "")]
    pub department: String,

    /// Position (see `faculty positions`)
    #[arg(long, default_value = "")]
    pub position: String,

    #[arg(long, default_value = "")]
    pub qualification: String,

    /// Years of experience, free text
    #[arg(long, default_value = "")]
    pub experience: String,

    /// Comma-separated specializations
    #[arg(long, default_value = "")]
    pub specializations: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    /// Path to a profile photo
    #[arg(long, value_name = "PATH")]
    pub photo: Option<PathBuf>,
}
