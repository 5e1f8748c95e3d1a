use clap::Parser;
use clientesapp::config::ClientesConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clientes", bin_name = "clientes", version)]
#[command(
    about = "Interactive customer registry with CPF validation",
    long_about = "Interactive customer registry.\n\nRegisters and deletes customers keyed by CPF, \
                  keeps them in a CSV file and writes a printable document for every event.\n\
                  Settings can also come from clientes.toml or CLIENTES_* environment variables."
)]
pub struct Cli {
    /// Customer data file [default: clientes.csv]
    #[arg(long, value_name = "PATH", help_heading = "Options")]
    pub data_file: Option<PathBuf>,

    /// Directory for registration and deletion documents [default: .]
    #[arg(long, value_name = "DIR", help_heading = "Options")]
    pub documents_dir: Option<PathBuf>,

    /// Log to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

impl Cli {
    /// Flags win over every other configuration source.
    pub fn apply_overrides(&self, config: &mut ClientesConfig) {
        if let Some(path) = &self.data_file {
            config.data_file = path.clone();
        }
        if let Some(dir) = &self.documents_dir {
            config.documents_dir = dir.clone();
        }
    }
}
