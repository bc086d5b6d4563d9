use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List one page of employees
    List {
        /// Page number (clamped to the available pages)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Case-insensitive filter on "first last" name, applied to the page
        #[arg(long)]
        search: Option<String>,
    },

    /// Show one employee
    Show {
        /// Employee ID
        id: u64,
    },

    /// Delete an employee from the given page
    Delete {
        /// Employee ID
        id: u64,

        /// Page the employee is listed on
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Edit an employee; omitted fields keep their current value
    Edit {
        /// Employee ID
        id: u64,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },
}
