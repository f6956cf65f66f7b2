//! silt CLI - content-addressed object store command line interface

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use silt::ops::{hash_object, ls_tree, snapshot, SnapshotOptions, TreeStrategy};
use silt::{read_object, ObjectId, Repo};

#[derive(Parser)]
#[command(name = "silt")]
#[command(about = "content-addressed object store with git-style loose objects")]
#[command(version)]
struct Cli {
    /// repository path
    #[arg(short, long, default_value = ".")]
    repo: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// initialize a new repository
    Init {
        /// path to create repository at
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// store a file as a blob and print its id
    HashObject {
        /// file to store
        file: PathBuf,
    },

    /// show an object's content, type or size
    CatFile {
        /// object id
        object: String,

        /// print the object type instead of its content
        #[arg(short = 't', long)]
        show_type: bool,

        /// print the payload size instead of its content
        #[arg(short = 's', long)]
        show_size: bool,
    },

    /// list a tree object's entries
    LsTree {
        /// tree object id
        tree: String,

        /// print entry names only
        #[arg(long)]
        name_only: bool,
    },

    /// snapshot a directory into a tree object and print its id
    WriteTree {
        /// directory to snapshot
        #[arg(default_value = ".")]
        source: PathBuf,

        /// build nested tree objects per directory instead of one flat tree
        #[arg(long)]
        recursive: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: Cli) -> silt::Result<()> {
    match cli.command {
        Commands::Init { path } => {
            Repo::init(&path)?;
            println!("initialized silt repository at {}", path.display());
        }

        Commands::HashObject { file } => {
            let repo = Repo::open(&cli.repo)?;
            let id = hash_object(&repo, &file)?;
            println!("{}", id);
        }

        Commands::CatFile {
            object,
            show_type,
            show_size,
        } => {
            let repo = Repo::open(&cli.repo)?;
            let id = ObjectId::from_hex(&object)?;
            let (kind, payload) = read_object(&repo, &id)?;

            if show_type {
                println!("{}", kind);
            } else if show_size {
                println!("{}", payload.len());
            } else {
                io::stdout().write_all(&payload).map_err(|e| silt::Error::Io {
                    path: "stdout".into(),
                    source: e,
                })?;
            }
        }

        Commands::LsTree { tree, name_only } => {
            let repo = Repo::open(&cli.repo)?;
            let id = ObjectId::from_hex(&tree)?;
            let entries = ls_tree(&repo, &id)?;

            for entry in entries {
                if name_only {
                    println!("{}", entry.name);
                } else {
                    println!("{}", entry);
                }
            }
        }

        Commands::WriteTree { source, recursive } => {
            let repo = Repo::open(&cli.repo)?;
            let strategy = if recursive {
                TreeStrategy::Recursive
            } else {
                repo.config().strategy
            };

            let id = snapshot(&repo, &source, SnapshotOptions { strategy })?;
            println!("{}", id);
        }
    }

    Ok(())
}
