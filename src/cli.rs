use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::receiver::ServeArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Submit screenshots to an image host, or receive them")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Capture the given image files and upload them as one submission
    Submit {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Run the upload receiver service
    Serve(ServeArgs),

    /// Manage images kept in the local image store
    #[command(subcommand)]
    Store(StoreCommand),
}

#[derive(Subcommand, Debug)]
pub enum StoreCommand {
    /// Save an image file into the store and print its generated name
    Save { path: PathBuf },

    /// Write a stored image out to a file
    Load {
        filename: String,
        #[arg(long)]
        output: PathBuf,
    },

    /// Remove a stored image; missing names are ignored
    Delete { filename: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submit_with_multiple_paths() {
        let cli = Cli::try_parse_from(["screenshot-submit", "submit", "a.png", "b.png"]).unwrap();

        match cli.command {
            Command::Submit { paths } => {
                assert_eq!(paths, vec![PathBuf::from("a.png"), PathBuf::from("b.png")])
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_submit_requires_a_path() {
        assert!(Cli::try_parse_from(["screenshot-submit", "submit"]).is_err());
    }

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "screenshot-submit",
            "serve",
            "--port",
            "8080",
            "--upload-dir",
            "/srv/uploads",
        ])
        .unwrap();

        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.port, Some(8080));
                assert_eq!(args.host, None);
                assert_eq!(args.upload_dir, Some(PathBuf::from("/srv/uploads")));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_store_load_requires_output() {
        assert!(Cli::try_parse_from(["screenshot-submit", "store", "load", "x.jpg"]).is_err());

        let cli = Cli::try_parse_from([
            "screenshot-submit",
            "store",
            "load",
            "x.jpg",
            "--output",
            "out.png",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Command::Store(StoreCommand::Load { .. })
        ));
    }
}
